//! Secret record.
//!
//! The name/value pair being published. The plaintext is wiped on drop.

use zeroize::Zeroizing;

use crate::core::types::SecretName;
use crate::core::validation;
use crate::error::Result;

/// A named secret and its plaintext value.
#[derive(Clone)]
pub struct SecretRecord {
    name: SecretName,
    value: Zeroizing<String>,
}

impl SecretRecord {
    /// Create a record, validating name and value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name breaks GitHub's naming rules
    /// or the value is empty.
    pub fn new(name: &str, value: impl Into<Zeroizing<String>>) -> Result<Self> {
        let value = value.into();
        validation::validate_name(name)?;
        validation::validate_value(name, &value)?;

        Ok(Self {
            name: name.to_string(),
            value,
        })
    }

    /// Secret name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretRecord")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}
