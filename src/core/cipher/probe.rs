//! Sealing capability probe.
//!
//! Runs a seal/open self-test with a throwaway key pair so a broken
//! primitive (for example no OS randomness) is reported up front, before
//! any token is requested or any request is sent.

use crypto_box::aead::rand_core::{CryptoRngCore, RngCore};
use crypto_box::aead::OsRng;
use crypto_box::{SecretKey, KEY_SIZE};
use tracing::debug;
use zeroize::Zeroizing;

use super::{Cipher, SealedBox};

const PROBE_MESSAGE: &str = "ghseal-probe";

/// Result of probing the sealing primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Sealing works.
    Available,
    /// Sealing is unusable, with the reason.
    Unavailable(String),
}

impl Availability {
    /// Whether sealing can be used.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Probe the sealed-box backend.
pub fn probe() -> Availability {
    self_test(&mut OsRng)
}

/// Seal and open a fixed message with a key drawn from `rng`.
///
/// Randomness is checked with `try_fill_bytes` first, since the sealing
/// primitive itself panics on RNG failure.
fn self_test<R: CryptoRngCore>(rng: &mut R) -> Availability {
    let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
    if let Err(e) = RngCore::try_fill_bytes(rng, &mut bytes[..]) {
        debug!(error = %e, "randomness unavailable");
        return Availability::Unavailable(format!("no secure randomness: {}", e));
    }
    let identity = SecretKey::from(*bytes);

    let sealed = match identity.public_key().seal(rng, PROBE_MESSAGE.as_bytes()) {
        Ok(sealed) => sealed,
        Err(e) => return Availability::Unavailable(format!("self-test seal failed: {}", e)),
    };

    match identity.unseal(&sealed) {
        Ok(opened) if opened == PROBE_MESSAGE.as_bytes() => {
            debug!(backend = SealedBox.name(), "sealing available");
            Availability::Available
        }
        Ok(_) => Availability::Unavailable("self-test returned a different plaintext".to_string()),
        Err(_) => Availability::Unavailable("self-test could not open its own box".to_string()),
    }
}
