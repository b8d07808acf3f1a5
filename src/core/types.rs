//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A GitHub Actions secret name (e.g., AWS_ROLE_ARN).
pub type SecretName = String;

/// Opaque identifier GitHub attaches to a repository public key.
pub type KeyId = String;

/// Base64-encoded X25519 public key as returned by the API.
pub type EncodedKey = String;

/// Base64-encoded sealed-box ciphertext.
pub type Ciphertext = String;
