//! Configuration for the conformance driver.
//!
//! ```rust
//! use imohash_oracle::config::{ConformanceConfig, Validatable};
//!
//! let config = ConformanceConfig::builder().max_length(1_000).build();
//! assert!(config.is_valid());
//! assert!(!config.is_reference_run());
//! ```

mod defaults;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_LENGTH, MAX_SUPPORTED_LENGTH, VERBOSE_LOG_LEVEL,
};
pub use types::{ConformanceConfig, ConformanceConfigBuilder};
pub use validation::{ConfigError, Validatable};
