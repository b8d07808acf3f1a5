//! Cryptographic operations.
//!
//! GitHub expects Actions secrets to be encrypted with a libsodium sealed
//! box addressed to the repository's X25519 public key. Only GitHub holds
//! the matching private key, so the caller cannot decrypt what it uploads.
//!
//! ## Backends
//!
//! - **sealed-box**: X25519 + XSalsa20-Poly1305 with an ephemeral sender key.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use crypto_box::{PublicKey, SecretKey};

use crate::error::Result;

mod probe;
mod sealed;

pub use probe::{probe, Availability};
pub use sealed::{parse_recipient, SealedBox};

/// Cryptographic backend trait.
///
/// Recipients are backend-specific; for sealed boxes they are X25519
/// public keys.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext for a recipient.
    ///
    /// # Returns
    ///
    /// Base64-encoded ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &str, recipient: &Self::Recipient) -> Result<String>;

    /// Decrypt a base64-encoded ciphertext using a private identity.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if decoding or decryption fails.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> Result<String>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// Seal `plaintext` for the base64-encoded public key returned by GitHub.
///
/// # Errors
///
/// Returns `CipherError::InvalidPublicKey` if the key is not base64 or not
/// 32 bytes, or `CipherError::EncryptionFailed` if sealing fails.
pub fn seal(encoded_key: &str, plaintext: &str) -> Result<String> {
    let recipient = parse_recipient(encoded_key)?;
    SealedBox.encrypt(plaintext, &recipient)
}

/// Open a sealed box with the recipient's private key.
///
/// This is a convenience wrapper around `SealedBox::decrypt`.
pub fn open(encrypted: &str, identity: &SecretKey) -> Result<String> {
    SealedBox.decrypt(encrypted, identity)
}

/// Base64 encoding of a public key, in the format the API returns.
pub fn encode_public_key(key: &PublicKey) -> String {
    BASE64.encode(key.as_bytes())
}
