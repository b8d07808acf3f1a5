//! Command-line interface.

pub mod completions;
pub mod output;
pub mod prompt;
pub mod public_key;
pub mod set;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Overrides;

/// ghseal - Seal and upload a GitHub Actions repository secret.
#[derive(Parser)]
#[command(
    name = "ghseal",
    about = "Seal and upload a GitHub Actions repository secret",
    version,
    after_help = "The token is read from GITHUB_TOKEN, or prompted for when unset."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection flags shared by commands that talk to the API.
#[derive(Args, Debug, Default)]
pub struct RepoArgs {
    /// Target repository as OWNER/REPO
    #[arg(short, long, env = "GHSEAL_REPO", value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// REST API base URL
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl RepoArgs {
    fn into_overrides(self) -> Overrides {
        Overrides {
            repo: self.repo,
            api_url: self.api_url,
            timeout_secs: self.timeout,
            ..Default::default()
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Seal a value and create or update the repository secret
    Set {
        /// Secret name (e.g., AWS_ROLE_ARN)
        name: Option<String>,

        /// Secret value (prompted for when omitted)
        #[arg(long)]
        value: Option<String>,

        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Show the repository's secret-encryption public key
    PublicKey {
        #[command(flatten)]
        repo: RepoArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Set { name, value, repo } => {
            let overrides = Overrides {
                secret_name: name,
                secret_value: value,
                ..repo.into_overrides()
            };
            set::execute(overrides)
        }
        PublicKey { repo, json } => public_key::execute(repo.into_overrides(), json),
        Completions { shell } => completions::execute(shell),
    }
}
