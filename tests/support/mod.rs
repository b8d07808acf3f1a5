//! Test support utilities for ghseal integration tests.
//!
//! Provides an isolated test environment and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory (where `.ghseal.toml` is
/// looked up) and home directory. Child processes use `.current_dir()`,
/// so tests can run in parallel.
pub struct Test {
    /// Working directory for the command
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with a `.ghseal.toml` in the working directory.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.dir.path().join(".ghseal.toml"), contents)
            .expect("failed to write config");
        t
    }
}
