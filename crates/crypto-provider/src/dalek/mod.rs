//! Dalek backend, the production provider.
//!
//! - Ed25519 keys via `ed25519-dalek`
//! - X25519 Diffie-Hellman via `x25519-dalek`
//! - SHA-256 via `sha2`
//! - seeded material via HKDF-SHA256 ([`derivation`])
//!
//! Secret material is zeroized when its owner drops it.

pub mod derivation;
pub mod dh;
pub mod hash;
pub mod keys;

pub use dh::X25519DiffieHellman;
pub use hash::Sha256Hash;
pub use keys::{Ed25519PrivateKey, Ed25519PublicKey, ED25519_KEY_SIZE};

use zeroize::Zeroize;

use crate::capability::random::entropy_bytes;
use crate::capability::{AsymmetricKey, DiffieHellman, Hash};
use crate::config::Backend;
use crate::error::Result;
use crate::library::Library;

use derivation::{derive_seed_key, ED25519_CONTEXT, X25519_CONTEXT};

const DALEK_PRIMALITY_ROUNDS: usize = 20;

/// Provider backed by the dalek curve25519 implementations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DalekLibrary;

impl DalekLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl Library for DalekLibrary {
    fn backend(&self) -> Backend {
        Backend::Dalek
    }

    fn load_public_key_from_bytes(&self, data: &[u8]) -> Result<Box<dyn AsymmetricKey>> {
        Ok(Box::new(Ed25519PublicKey::from_slice(data)?))
    }

    fn load_private_key_from_bytes(&self, data: &[u8]) -> Result<Box<dyn AsymmetricKey>> {
        Ok(Box::new(Ed25519PrivateKey::from_slice(data)?))
    }

    fn generate_private_key(&self, seed: &[u8]) -> Result<Box<dyn AsymmetricKey>> {
        let mut secret = derive_seed_key(seed, ED25519_CONTEXT)?;
        let key = Ed25519PrivateKey::from_secret_bytes(&secret);
        secret.zeroize();
        Ok(Box::new(key))
    }

    fn create_private_key(&self) -> Result<Box<dyn AsymmetricKey>> {
        let mut secret: [u8; 32] = entropy_bytes()?;
        let key = Ed25519PrivateKey::from_secret_bytes(&secret);
        secret.zeroize();
        log::debug!("dalek backend: created fresh Ed25519 key");
        Ok(Box::new(key))
    }

    fn minimum_key_size(&self) -> usize {
        ED25519_KEY_SIZE
    }

    fn hash_algorithm(&self) -> Box<dyn Hash> {
        Box::new(Sha256Hash::new())
    }

    fn primality_rounds(&self) -> usize {
        DALEK_PRIMALITY_ROUNDS
    }

    fn create_diffie_hellman(&self) -> Result<Box<dyn DiffieHellman>> {
        let mut secret: [u8; 32] = entropy_bytes()?;
        let dh = X25519DiffieHellman::from_secret_bytes(secret);
        secret.zeroize();
        log::debug!("dalek backend: created fresh X25519 exchange");
        Ok(Box::new(dh))
    }

    fn generate_diffie_hellman(&self, seed: &[u8]) -> Result<Box<dyn DiffieHellman>> {
        let mut secret = derive_seed_key(seed, X25519_CONTEXT)?;
        let dh = X25519DiffieHellman::from_secret_bytes(secret);
        secret.zeroize();
        Ok(Box::new(dh))
    }

    fn load_diffie_hellman(&self, private_component: &[u8]) -> Result<Box<dyn DiffieHellman>> {
        Ok(Box::new(X25519DiffieHellman::from_slice(private_component)?))
    }
}
