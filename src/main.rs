//! ghseal - Seal and upload a GitHub Actions repository secret.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghseal::cli::output;
use ghseal::cli::{execute, Cli};
use ghseal::core::constants::{LOG_ENV, TOKEN_ENV};
use ghseal::error::{ApiError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghseal=debug")
        } else {
            EnvFilter::new("ghseal=warn")
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

    if let Err(e) = execute(cli.command) {
        let hint = match &e {
            Error::Config(ConfigError::NoToken) => {
                Some(format!("export {}=<token>, or enter one when prompted", TOKEN_ENV))
            }
            Error::Config(ConfigError::MissingField { field: "repo" }) => {
                Some("pass --repo OWNER/REPO or set repo in .ghseal.toml".to_string())
            }
            Error::Config(ConfigError::MissingField { .. }) => {
                Some("pass the secret name, or set [secret] name in .ghseal.toml".to_string())
            }
            Error::Api(ApiError::Status { status: 401, .. }) => {
                Some("check that the token is valid and not expired".to_string())
            }
            Error::Api(ApiError::Status {
                status: 403 | 404, ..
            }) => Some(
                "the token needs the 'repo' scope (or Secrets write access) on this repository"
                    .to_string(),
            ),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = hint {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
