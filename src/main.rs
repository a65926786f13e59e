//! keysplit - Shamir secret sharing for data keys.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keysplit::cli::output;
use keysplit::cli::{execute, Cli};
use keysplit::core::constants::LOG_ENV;
use keysplit::error::{ConfigError, Error, ShamirError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keysplit=debug")
        } else {
            EnvFilter::new("keysplit=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Shamir(ShamirError::DuplicateShare) => {
                Some("each share may only be given once")
            }
            Error::Shamir(ShamirError::ShareLengthMismatch) => {
                Some("all shares must come from the same split")
            }
            Error::Shamir(ShamirError::PartsBelowThreshold) => {
                Some("raise --parts or lower --threshold")
            }
            Error::Config(ConfigError::InvalidValue { .. }) => Some("check .keysplit.toml"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
