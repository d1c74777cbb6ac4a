//! Configuration types for the conformance driver.

use super::defaults::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_LENGTH, VERBOSE_LOG_LEVEL};
use serde::{Deserialize, Serialize};

/// Settings for a conformance run.
///
/// Only `max_length` affects the digest. Fingerprint parameters (sample size,
/// threshold, seed) are fixed and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConformanceConfig {
    /// Prefix lengths `0..max_length` are fingerprinted
    pub max_length: usize,
    /// Emit debug logs on stderr
    pub verbose: bool,
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            verbose: false,
        }
    }
}

impl ConformanceConfig {
    pub fn builder() -> ConformanceConfigBuilder {
        ConformanceConfigBuilder::default()
    }

    /// Whether this run is comparable with the published reference digest.
    #[must_use]
    pub fn is_reference_run(&self) -> bool {
        self.max_length == DEFAULT_MAX_LENGTH
    }

    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        }
    }
}

/// Builder for [`ConformanceConfig`].
#[derive(Debug, Default)]
pub struct ConformanceConfigBuilder {
    config: ConformanceConfig,
}

impl ConformanceConfigBuilder {
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    #[must_use]
    pub fn build(self) -> ConformanceConfig {
        self.config
    }
}
