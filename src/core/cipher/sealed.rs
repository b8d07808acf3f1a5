//! Sealed-box backend implementation.
//!
//! Produces libsodium `crypto_box_seal` compatible ciphertexts:
//! ephemeral public key (32 bytes) followed by the XSalsa20-Poly1305 box.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use crypto_box::aead::OsRng;
use crypto_box::{PublicKey, SecretKey, KEY_SIZE};
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Anonymous-sender public-key encryption using X25519 keys.
pub struct SealedBox;

impl Cipher for SealedBox {
    type Recipient = PublicKey;
    type Identity = SecretKey;

    fn name(&self) -> &'static str {
        "sealed-box"
    }

    fn encrypt(&self, plaintext: &str, recipient: &PublicKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let sealed = recipient
            .seal(&mut OsRng, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");

        Ok(BASE64.encode(sealed))
    }

    fn decrypt(&self, encrypted: &str, identity: &SecretKey) -> Result<String> {
        trace!(ciphertext_len = encrypted.len(), "opening");

        let sealed = BASE64
            .decode(encrypted.trim())
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid base64: {}", e)))?;

        let opened = identity
            .unseal(&sealed)
            .map_err(|_| CipherError::DecryptionFailed("wrong key or corrupted ciphertext".to_string()))?;

        String::from_utf8(opened)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

/// Parse a base64-encoded X25519 public key.
///
/// # Errors
///
/// Returns `CipherError::InvalidPublicKey` if the key is not valid base64
/// or does not decode to exactly 32 bytes.
pub fn parse_recipient(encoded: &str) -> Result<PublicKey> {
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| CipherError::InvalidPublicKey(format!("invalid base64: {}", e)))?;

    let bytes: [u8; KEY_SIZE] = bytes.as_slice().try_into().map_err(|_| {
        CipherError::InvalidPublicKey(format!(
            "expected {} bytes, got {}",
            KEY_SIZE,
            bytes.len()
        ))
    })?;

    Ok(PublicKey::from(bytes))
}
