//! Wire types for the Actions secrets endpoints.

use serde::{Deserialize, Serialize};

use crate::core::types::{Ciphertext, EncodedKey, KeyId};

/// Repository public key as returned by `GET .../actions/secrets/public-key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyMaterial {
    pub key_id: KeyId,
    pub key: EncodedKey,
}

/// Request body for `PUT .../actions/secrets/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedSecret {
    pub encrypted_value: Ciphertext,
    pub key_id: KeyId,
}
