//! CLI command handlers.
//!
//! Handlers hold the logic behind `main.rs` so it can be tested without
//! spawning the binary.

mod conformance;

pub use conformance::{run_conformance, write_report};
