//! Null Diffie-Hellman: the public component is the private component.
//!
//! The shared secret is the null digest of both public components in
//! sorted order, which both parties compute identically.

use zeroize::Zeroize;

use crate::capability::DiffieHellman;
use crate::error::{CryptoError, Result};
use crate::null::hash::null_digest;

pub struct NullDiffieHellman {
    component: Vec<u8>,
}

impl NullDiffieHellman {
    /// An exchange over `component`. Empty components are rejected.
    pub(crate) fn new(component: Vec<u8>) -> Result<Self> {
        if component.is_empty() {
            return Err(CryptoError::Format(
                "null Diffie-Hellman component must not be empty".into(),
            ));
        }
        Ok(Self { component })
    }
}

impl Drop for NullDiffieHellman {
    fn drop(&mut self) {
        self.component.zeroize();
    }
}

impl DiffieHellman for NullDiffieHellman {
    fn public_component(&self) -> Vec<u8> {
        self.component.clone()
    }

    fn private_component(&self) -> Vec<u8> {
        self.component.clone()
    }

    fn shared_secret(&self, remote_public: &[u8]) -> Result<Vec<u8>> {
        if remote_public.is_empty() {
            return Err(CryptoError::Format(
                "remote public component must not be empty".into(),
            ));
        }
        let own = self.component.as_slice();
        let (first, second) = if own <= remote_public {
            (own, remote_public)
        } else {
            (remote_public, own)
        };
        Ok(null_digest(&[first, second]))
    }
}
