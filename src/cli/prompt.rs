//! Interactive input.
//!
//! Hidden prompts on a terminal; a single stdin line when piped.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::constants::{TOKEN_ENV, TOKEN_SETTINGS_URL};
use crate::core::token::TokenPrompt;
use crate::error::Result;

/// Token prompt that prints setup instructions, then reads the token.
pub struct TerminalPrompt;

impl TokenPrompt for TerminalPrompt {
    fn ask(&mut self) -> Result<String> {
        output::warn(&format!("{} is not set", TOKEN_ENV));
        output::blank();
        output::header("A GitHub personal access token is required.");
        output::step(1, &format!("Go to {}", output::url(TOKEN_SETTINGS_URL)));
        output::step(2, "Give it a note, e.g. 'CI/CD secret setup'");
        output::step(3, "Choose an expiration");
        output::step(4, "Select the 'repo' scope");
        output::step(5, "Click 'Generate token' and copy it");
        output::blank();
        output::hint(&format!("or export {} before running ghseal", TOKEN_ENV));
        output::blank();

        let token = read_hidden("Enter your GitHub personal access token")?;
        Ok(token.as_str().to_owned())
    }
}

/// Read a secret value for `name`.
pub fn secret_value(name: &str) -> Result<Zeroizing<String>> {
    read_hidden(&format!("Value for {}", output::key(name)))
}

/// Read one hidden line on a terminal, or one plain line from piped stdin.
///
/// Empty input is returned as-is; callers decide whether it is an error.
fn read_hidden(label: &str) -> Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        let value = Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?;
        return Ok(Zeroizing::new(value));
    }

    let mut input = Zeroizing::new(String::new());
    io::stdin().lock().read_line(&mut input)?;
    let len = input.trim_end_matches(['\r', '\n']).len();
    input.truncate(len);
    Ok(input)
}
