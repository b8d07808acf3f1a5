//! Input validation for ghseal operations.
//!
//! Validates secret names and values against GitHub's rules.

use crate::core::constants::RESERVED_PREFIX;
use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// GitHub Actions secret names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the reserved `GITHUB_` prefix (any case)
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(invalid_name(name, "cannot start with a digit".to_string()));
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid_name(
                name,
                format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            ));
        }
    }

    if name.to_ascii_uppercase().starts_with(RESERVED_PREFIX) {
        return Err(invalid_name(
            name,
            format!("the {} prefix is reserved", RESERVED_PREFIX),
        ));
    }

    Ok(())
}

/// Validate a secret value.
///
/// Secret values cannot be empty.
///
/// # Errors
///
/// Returns `ValidationError` if the value is empty.
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }

    Ok(())
}

fn invalid_name(name: &str, reason: String) -> crate::error::Error {
    ValidationError::InvalidName {
        name: name.to_string(),
        reason,
    }
    .into()
}
