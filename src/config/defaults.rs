//! Default values for imohash-oracle configuration.

/// Number of prefixes the conformance driver fingerprints (`M`).
pub const DEFAULT_MAX_LENGTH: usize = 200_000;

/// Upper bound accepted for `max_length`.
///
/// The driver keeps the whole buffer in memory; 1 GiB is far beyond any
/// useful conformance run.
pub const MAX_SUPPORTED_LENGTH: usize = 1 << 30;

/// Log level used when `--verbose` is not given and `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log level selected by `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
