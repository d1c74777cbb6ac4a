//! imohash-oracle: imohash v1.0.2 conformance driver
//!
//! Prints the SHA-256 of the fingerprints of every prefix of the reference
//! buffer as a single line of lowercase hex.

use clap::Parser;
use imohash_oracle::{
    cli, config::DEFAULT_MAX_LENGTH, conformance::exit_codes, ConformanceConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "imohash-oracle")]
#[command(version)]
#[command(about = "imohash v1.0.2 conformance driver", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Digest written
    3  Error occurred

With no arguments, prints the digest for the reference run of 200000
prefixes. Diagnostics go to stderr; stdout carries only the digest.")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Number of prefixes to fingerprint (only the default is comparable
    /// with the published reference digest)
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,
}

fn main() {
    let cli = Cli::parse();

    let config = ConformanceConfig::builder()
        .max_length(cli.max_length)
        .verbose(cli.verbose)
        .build();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level().to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let exit_code = match cli::run_conformance(config) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
