//! Domain types.

mod key;
mod secret;
mod target;

pub use key::{EncryptedSecret, PublicKeyMaterial};
pub use secret::SecretRecord;
pub use target::Target;
