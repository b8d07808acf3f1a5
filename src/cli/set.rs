//! Set command.
//!
//! Seals a secret value with the repository public key and uploads it.

use std::cell::Cell;

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::cipher::{self, Availability};
use crate::core::config::{Config, Overrides};
use crate::core::constants::TOKEN_ENV;
use crate::core::domain::Target;
use crate::core::github::{GitHubClient, Upsert};
use crate::core::pipeline::{self, Stage};
use crate::core::token::TokenSource;
use crate::core::validation;
use crate::error::{DependencyError, Result};

/// Create or update a secret.
pub fn execute(overrides: Overrides) -> Result<()> {
    let mut config = Config::load()?.apply(overrides);
    let settings = config.settings()?;
    let name = config.secret_name()?.to_string();
    validation::validate_name(&name)?;

    info!(repo = %settings.target, secret = %name, "setting secret");

    output::section("GitHub Actions Secret Setup");
    output::kv("repository", &settings.target);
    output::kv("secret    ", &name);
    output::rule();
    output::blank();

    require_sealing(cipher::probe(), &settings.target, &name)?;

    let source = TokenSource::detect(TOKEN_ENV);
    let open = Cell::new(false);
    let result = pipeline::publish(
        &settings,
        &name,
        source,
        &mut prompt::TerminalPrompt,
        || match config.take_secret_value() {
            Some(value) => Ok(value),
            None => prompt::secret_value(&name),
        },
        GitHubClient::new,
        |stage| match stage {
            Stage::TokenResolved => {
                output::progress("fetching repository public key");
                open.set(true);
            }
            Stage::KeyFetched => {
                output::progress_done(true);
                output::progress("encrypting secret value");
            }
            Stage::Sealed => {
                output::progress_done(true);
                output::progress(&format!("setting secret {}", name));
            }
            Stage::Published => {
                output::progress_done(true);
                open.set(false);
            }
            Stage::Start | Stage::Done => {}
        },
    );

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if open.get() {
                output::progress_done(false);
            }
            return Err(e);
        }
    };

    let verb = match report.upsert {
        Upsert::Created => "created",
        Upsert::Updated => "updated",
    };
    output::blank();
    output::success(&format!(
        "secret {} {} in {}",
        output::key(&report.name),
        verb,
        report.target
    ));
    output::blank();
    output::hint(&format!(
        "reference it in workflows as ${{{{ secrets.{} }}}}",
        report.name
    ));
    output::blank();
    output::header("Next steps:");
    output::step(
        1,
        &format!(
            "Create a 'production' environment if your workflow uses one: {}",
            output::url(&report.target.environments_settings_url())
        ),
    );
    output::step(2, "Push a change to trigger the workflow and confirm it can read the secret");

    Ok(())
}

/// Fail with the manual web-UI steps unless sealing is available.
fn require_sealing(availability: Availability, target: &Target, name: &str) -> Result<()> {
    match availability {
        Availability::Available => Ok(()),
        Availability::Unavailable(reason) => {
            output::error("sealed-box encryption is not usable on this system");
            output::blank();
            output::header("Add the secret manually via the GitHub web UI:");
            for (n, step) in manual_steps(target, name).iter().enumerate() {
                output::step(n + 1, step);
            }
            output::blank();
            Err(DependencyError::SealingUnavailable(reason).into())
        }
    }
}

fn manual_steps(target: &Target, name: &str) -> [String; 5] {
    [
        format!("Go to {}", output::url(&target.secrets_settings_url())),
        "Click 'New repository secret'".to_string(),
        format!("Name: {}", name),
        "Value: the secret value".to_string(),
        "Click 'Add secret'".to_string(),
    ]
}
