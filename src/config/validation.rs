//! Configuration validation.

use super::defaults::MAX_SUPPORTED_LENGTH;
use super::types::ConformanceConfig;

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for ConformanceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_length > MAX_SUPPORTED_LENGTH {
            errors.push(ConfigError {
                field: "max_length".to_string(),
                message: format!(
                    "{} exceeds the supported maximum of {}",
                    self.max_length, MAX_SUPPORTED_LENGTH
                ),
            });
        }
        errors
    }
}
