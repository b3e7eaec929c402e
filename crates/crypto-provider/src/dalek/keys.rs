//! Ed25519 keys.
//!
//! Private keys encode as the 32-byte secret seed, public keys as the
//! 32-byte compressed point. Signatures are 64 bytes.

use std::fmt;

use ed25519_dalek::{
    Signature, Signer, SigningKey, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH,
};
use zeroize::Zeroize;

use crate::capability::{AsymmetricKey, KeyAlgorithm};
use crate::error::{CryptoError, Result};

/// Ed25519 key size in bits.
pub const ED25519_KEY_SIZE: usize = 256;

/// An Ed25519 private key. The signing key is zeroized on drop.
pub struct Ed25519PrivateKey {
    signing_key: SigningKey,
}

impl Ed25519PrivateKey {
    pub(crate) fn from_secret_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(bytes),
        }
    }

    /// Decode a 32-byte secret key.
    pub(crate) fn from_slice(data: &[u8]) -> Result<Self> {
        let mut bytes: [u8; SECRET_KEY_LENGTH] = data.try_into().map_err(|_| {
            CryptoError::Format(format!(
                "Ed25519 private key must be {SECRET_KEY_LENGTH} bytes, got {}",
                data.len()
            ))
        })?;
        let key = Self::from_secret_bytes(&bytes);
        bytes.zeroize();
        Ok(key)
    }
}

impl fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519PrivateKey")
            .field("public", &hex::encode(self.signing_key.verifying_key().as_bytes()))
            .finish_non_exhaustive()
    }
}

/// An Ed25519 public key.
#[derive(Clone)]
pub struct Ed25519PublicKey {
    verifying_key: VerifyingKey,
}

impl Ed25519PublicKey {
    /// Decode a 32-byte compressed public key.
    pub(crate) fn from_slice(data: &[u8]) -> Result<Self> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] = data.try_into().map_err(|_| {
            CryptoError::Format(format!(
                "Ed25519 public key must be {PUBLIC_KEY_LENGTH} bytes, got {}",
                data.len()
            ))
        })?;
        let verifying_key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| CryptoError::Format(format!("invalid Ed25519 public key: {e}")))?;
        Ok(Self { verifying_key })
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519PublicKey")
            .field("key", &hex::encode(self.verifying_key.as_bytes()))
            .finish()
    }
}

fn verify_with(verifying_key: &VerifyingKey, message: &[u8], signature: &[u8]) -> bool {
    match Signature::from_slice(signature) {
        Ok(signature) => verifying_key.verify(message, &signature).is_ok(),
        Err(_) => false,
    }
}

impl AsymmetricKey for Ed25519PrivateKey {
    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ed25519
    }

    fn is_private(&self) -> bool {
        true
    }

    fn public_key(&self) -> Box<dyn AsymmetricKey> {
        Box::new(Ed25519PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        })
    }

    fn key_size(&self) -> usize {
        ED25519_KEY_SIZE
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.signing_key.to_bytes().to_vec()
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.signing_key.sign(message).to_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        verify_with(&self.signing_key.verifying_key(), message, signature)
    }
}

impl AsymmetricKey for Ed25519PublicKey {
    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ed25519
    }

    fn is_private(&self) -> bool {
        false
    }

    fn public_key(&self) -> Box<dyn AsymmetricKey> {
        Box::new(self.clone())
    }

    fn key_size(&self) -> usize {
        ED25519_KEY_SIZE
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.verifying_key.to_bytes().to_vec()
    }

    fn sign(&self, _message: &[u8]) -> Result<Vec<u8>> {
        Err(CryptoError::NotPrivate)
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        verify_with(&self.verifying_key, message, signature)
    }
}
