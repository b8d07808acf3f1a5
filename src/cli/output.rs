//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: URLs, names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;
use std::io::{self, Write as IoWrite};

const RULE_WIDTH: usize = 50;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ secret AWS_ROLE_ARN created`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no token provided`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ export GITHUB_TOKEN=...`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  repository:  octo-org/octo-repo`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a numbered step.
///
/// Example: `  1. Click 'New repository secret'`
pub fn step(n: usize, msg: &str) {
    println!("  {}. {}", n, msg);
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Print raw data with no decoration (for scripting).
pub fn data(value: &str) {
    println!("{}", value);
}

/// Format a URL in cyan.
pub fn url(u: &str) -> String {
    if colors_enabled() {
        style(u).cyan().to_string()
    } else {
        u.to_string()
    }
}

/// Format a secret name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    if colors_enabled() {
        print!("{}... ", style(label).dim());
    } else {
        print!("{}... ", label);
    }
    let _ = io::stdout().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(success: bool) {
    if colors_enabled() {
        if success {
            println!("{}", style("ok").green());
        } else {
            println!("{}", style("failed").red());
        }
    } else {
        println!("{}", if success { "ok" } else { "failed" });
    }
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    header(title);
    rule();
}
