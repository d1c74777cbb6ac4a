//! Conformance command handler.
//!
//! Runs the driver and prints the digest as the only line on stdout.

use crate::config::{ConformanceConfig, Validatable};
use crate::conformance::{self, exit_codes, ConformanceReport};
use crate::error::{ErrorContext, OracleError};
use anyhow::Result;
use std::io::Write;

/// Run the conformance driver, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_conformance(config: ConformanceConfig) -> Result<i32> {
    check_config(&config).context("rejecting command-line options")?;

    let report = conformance::run(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&report, &mut out)?;

    Ok(exit_codes::SUCCESS)
}

/// Validate `config`, collecting every problem into one error.
fn check_config(config: &ConformanceConfig) -> crate::Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(OracleError::config(joined.join("; ")))
}

/// Write the digest line and flush.
pub fn write_report<W: Write>(report: &ConformanceReport, out: &mut W) -> crate::Result<()> {
    out.write_all(report.output_line().as_bytes())
        .context("writing digest")?;
    out.flush().context("flushing output")?;
    Ok(())
}
