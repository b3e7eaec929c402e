//! Asymmetric key capability.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage;

/// Algorithm family behind a key object.
///
/// Keys from different families never verify each other, so a null key
/// can always be told apart from a real one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAlgorithm {
    Null,
    Ed25519,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Null => write!(f, "null"),
            KeyAlgorithm::Ed25519 => write!(f, "ed25519"),
        }
    }
}

/// A public or private key produced by a provider.
///
/// A private key can always derive its public key; a public key can never
/// derive a private key.
pub trait AsymmetricKey: Send + Sync + fmt::Debug {
    /// Algorithm family of this key.
    fn algorithm(&self) -> KeyAlgorithm;

    /// True for private keys.
    fn is_private(&self) -> bool;

    /// The public half of this key. A public key returns a copy of itself.
    fn public_key(&self) -> Box<dyn AsymmetricKey>;

    /// Key size in bits.
    fn key_size(&self) -> usize;

    /// Encoded key material. Feeding these bytes back into the matching
    /// `load_*_from_bytes` yields an equal key.
    ///
    /// For private keys this is secret material; the caller must zeroize it.
    fn to_bytes(&self) -> Vec<u8>;

    /// Sign `message`. Fails with [`CryptoError::NotPrivate`](crate::CryptoError::NotPrivate)
    /// on a public key.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` over `message` against this key's public half.
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;

    /// True if `self` and `other` form a private/public pair.
    fn verify_key(&self, other: &dyn AsymmetricKey) -> bool {
        if self.algorithm() != other.algorithm() || self.is_private() == other.is_private() {
            return false;
        }
        self.public_key().to_bytes() == other.public_key().to_bytes()
    }

    /// Write the encoded key to `path`, replacing any existing file.
    fn save(&self, path: &Path) -> Result<()> {
        storage::write_atomic(path, &self.to_bytes())
    }
}
