//! Null keys: the key material is whatever bytes the key was built from.
//!
//! Public and private halves share the same material. A "signature" is
//! the null digest of the material and the message, so anyone holding
//! either half can produce or check it.

use std::fmt;

use zeroize::Zeroize;

use crate::capability::{AsymmetricKey, KeyAlgorithm};
use crate::error::{CryptoError, Result};
use crate::null::hash::null_digest;
use crate::null::NULL_MINIMUM_KEY_SIZE;

/// Shortest key material, in bytes, a null key accepts.
pub const NULL_MIN_MATERIAL_LEN: usize = NULL_MINIMUM_KEY_SIZE / 8;

/// A null public or private key.
#[derive(Clone)]
pub struct NullKey {
    material: Vec<u8>,
    private: bool,
}

impl NullKey {
    /// A public key over `material`. Material shorter than
    /// [`NULL_MIN_MATERIAL_LEN`] is rejected.
    pub(crate) fn public(material: Vec<u8>) -> Result<Self> {
        check_material(&material)?;
        Ok(Self {
            material,
            private: false,
        })
    }

    /// A private key over `material`. Material shorter than
    /// [`NULL_MIN_MATERIAL_LEN`] is rejected.
    pub(crate) fn private(material: Vec<u8>) -> Result<Self> {
        check_material(&material)?;
        Ok(Self {
            material,
            private: true,
        })
    }
}

fn check_material(material: &[u8]) -> Result<()> {
    if material.len() < NULL_MIN_MATERIAL_LEN {
        return Err(CryptoError::Format(format!(
            "null key material must be at least {NULL_MIN_MATERIAL_LEN} bytes, got {}",
            material.len()
        )));
    }
    Ok(())
}

impl fmt::Debug for NullKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.private {
            f.debug_struct("NullKey")
                .field("private", &true)
                .field("material", &"<redacted>")
                .finish()
        } else {
            f.debug_struct("NullKey")
                .field("private", &false)
                .field("material", &hex::encode(&self.material))
                .finish()
        }
    }
}

impl Drop for NullKey {
    fn drop(&mut self) {
        self.material.zeroize();
    }
}

impl AsymmetricKey for NullKey {
    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Null
    }

    fn is_private(&self) -> bool {
        self.private
    }

    fn public_key(&self) -> Box<dyn AsymmetricKey> {
        Box::new(NullKey {
            material: self.material.clone(),
            private: false,
        })
    }

    fn key_size(&self) -> usize {
        self.material.len() * 8
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.material.clone()
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        if !self.private {
            return Err(CryptoError::NotPrivate);
        }
        Ok(null_digest(&[self.material.as_slice(), message]))
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        null_digest(&[self.material.as_slice(), message]) == signature
    }
}
