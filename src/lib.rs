//! ghseal - Seal and upload a GitHub Actions repository secret.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── set           # Seal and publish a secret
//! │   ├── public_key    # Show the repository public key
//! │   ├── prompt        # Interactive token/value input
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .ghseal.toml and flag layering
//!     ├── token         # Token source selection
//!     ├── github        # REST API client
//!     ├── cipher/       # Sealed-box encryption and capability probe
//!     ├── pipeline      # Token → key → seal → publish
//!     ├── domain/       # Target, secret record, wire types
//!     └── validation    # Secret name rules
//! ```

pub mod cli;
pub mod core;
pub mod error;
