//! Error types for imohash-oracle.
//!
//! Fingerprinting itself is total; errors only come from the environment
//! the driver runs in (writing output) and from invalid configuration.

use thiserror::Error;

/// Main error type for imohash-oracle operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OracleError {
    /// IO errors with context
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenient Result type for imohash-oracle operations
pub type Result<T> = std::result::Result<T, OracleError>;

impl OracleError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for OracleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{err}"),
            source: err,
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first, e.g.
/// `"writing digest: flushing stdout: broken pipe"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<OracleError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }
}

fn add_context_to_error(err: OracleError, new_ctx: &str) -> OracleError {
    match err {
        OracleError::Io { message, source } => OracleError::Io {
            message: chain_context(new_ctx, &message),
            source,
        },
        OracleError::Config(msg) => OracleError::Config(chain_context(new_ctx, &msg)),
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
