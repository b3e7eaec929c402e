//! X25519 Diffie-Hellman.

use x25519_dalek::{PublicKey, StaticSecret};

use crate::capability::DiffieHellman;
use crate::error::{CryptoError, Result};

/// X25519 component length in bytes.
pub const X25519_COMPONENT_LEN: usize = 32;

/// An X25519 static secret and its public point. The secret is zeroized
/// on drop.
pub struct X25519DiffieHellman {
    secret: StaticSecret,
    public: PublicKey,
}

impl X25519DiffieHellman {
    pub(crate) fn from_secret_bytes(bytes: [u8; X25519_COMPONENT_LEN]) -> Self {
        let secret = StaticSecret::from(bytes);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Decode a 32-byte private component.
    pub(crate) fn from_slice(data: &[u8]) -> Result<Self> {
        let bytes: [u8; X25519_COMPONENT_LEN] = data.try_into().map_err(|_| {
            CryptoError::Format(format!(
                "X25519 private component must be {X25519_COMPONENT_LEN} bytes, got {}",
                data.len()
            ))
        })?;
        Ok(Self::from_secret_bytes(bytes))
    }
}

impl DiffieHellman for X25519DiffieHellman {
    fn public_component(&self) -> Vec<u8> {
        self.public.as_bytes().to_vec()
    }

    fn private_component(&self) -> Vec<u8> {
        self.secret.to_bytes().to_vec()
    }

    fn shared_secret(&self, remote_public: &[u8]) -> Result<Vec<u8>> {
        let bytes: [u8; X25519_COMPONENT_LEN] = remote_public.try_into().map_err(|_| {
            CryptoError::Format(format!(
                "X25519 public component must be {X25519_COMPONENT_LEN} bytes, got {}",
                remote_public.len()
            ))
        })?;
        let shared = self.secret.diffie_hellman(&PublicKey::from(bytes));
        if !shared.was_contributory() {
            return Err(CryptoError::Format(
                "remote public component is a low-order point".into(),
            ));
        }
        Ok(shared.as_bytes().to_vec())
    }
}
