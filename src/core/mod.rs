//! Core library components.
//!
//! This module contains the reusable logic for resolving credentials,
//! talking to the GitHub API, and sealing secret values.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod github;
pub mod pipeline;
pub mod token;
pub mod types;
pub mod validation;
