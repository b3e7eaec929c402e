//! Null backend: the reference implementation of the provider contract.
//!
//! Every capability is the cheapest thing that still honours the
//! contract's invariants:
//!
//! - keys keep their input bytes verbatim as key material, never less
//!   than 64 bits; generated keys use the seed itself, topped up with its
//!   digest when shorter than that
//! - the digest is a positional fold ([`NullHash`])
//! - Diffie-Hellman publishes its private component and agrees on a
//!   digest of both components ([`NullDiffieHellman`])
//! - primality uses a four-witness Miller-Rabin test
//!
//! Nothing here is secret or one-way. Never carry user data over a
//! channel built on this backend.

pub mod dh;
pub mod hash;
pub mod keys;

pub use dh::NullDiffieHellman;
pub use hash::NullHash;
pub use keys::{NullKey, NULL_MIN_MATERIAL_LEN};

use crate::capability::random::entropy_bytes;
use crate::capability::{AsymmetricKey, DiffieHellman, Hash};
use crate::config::Backend;
use crate::error::{CryptoError, Result};
use crate::library::Library;
use hash::null_digest;

/// Smallest key size, in bits, the null backend reports as valid.
pub const NULL_MINIMUM_KEY_SIZE: usize = 64;

/// Bytes of OS entropy behind fresh keys and exchanges.
const FRESH_MATERIAL_LEN: usize = 32;

const NULL_PRIMALITY_ROUNDS: usize = 4;

/// Provider with deterministic, insecure capability objects.
#[derive(Debug, Clone, Copy)]
pub struct NullLibrary {
    _private: (),
}

impl NullLibrary {
    pub fn new() -> Self {
        log::warn!("null crypto provider constructed: keys, hashes and exchanges are NOT secure");
        Self { _private: () }
    }
}

impl Default for NullLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn check_seed(seed: &[u8]) -> Result<()> {
    if seed.is_empty() {
        return Err(CryptoError::Format("seed must not be empty".into()));
    }
    Ok(())
}

/// Key material for `seed`. Seeds of at least [`NULL_MIN_MATERIAL_LEN`]
/// bytes are used as-is; shorter ones are followed by their null digest,
/// cut to the minimum length.
fn seed_material(seed: &[u8]) -> Vec<u8> {
    let mut material = seed.to_vec();
    if material.len() < NULL_MIN_MATERIAL_LEN {
        let missing = NULL_MIN_MATERIAL_LEN - material.len();
        let digest = null_digest(&[seed]);
        material.extend_from_slice(&digest[..missing]);
    }
    material
}

impl Library for NullLibrary {
    fn backend(&self) -> Backend {
        Backend::Null
    }

    fn load_public_key_from_bytes(&self, data: &[u8]) -> Result<Box<dyn AsymmetricKey>> {
        Ok(Box::new(NullKey::public(data.to_vec())?))
    }

    fn load_private_key_from_bytes(&self, data: &[u8]) -> Result<Box<dyn AsymmetricKey>> {
        Ok(Box::new(NullKey::private(data.to_vec())?))
    }

    fn generate_private_key(&self, seed: &[u8]) -> Result<Box<dyn AsymmetricKey>> {
        check_seed(seed)?;
        Ok(Box::new(NullKey::private(seed_material(seed))?))
    }

    fn create_private_key(&self) -> Result<Box<dyn AsymmetricKey>> {
        let material: [u8; FRESH_MATERIAL_LEN] = entropy_bytes()?;
        log::debug!("null backend: created fresh private key");
        Ok(Box::new(NullKey::private(material.to_vec())?))
    }

    fn minimum_key_size(&self) -> usize {
        NULL_MINIMUM_KEY_SIZE
    }

    fn hash_algorithm(&self) -> Box<dyn Hash> {
        Box::new(NullHash::new())
    }

    fn primality_rounds(&self) -> usize {
        NULL_PRIMALITY_ROUNDS
    }

    fn create_diffie_hellman(&self) -> Result<Box<dyn DiffieHellman>> {
        let component: [u8; FRESH_MATERIAL_LEN] = entropy_bytes()?;
        log::debug!("null backend: created fresh Diffie-Hellman exchange");
        Ok(Box::new(NullDiffieHellman::new(component.to_vec())?))
    }

    fn generate_diffie_hellman(&self, seed: &[u8]) -> Result<Box<dyn DiffieHellman>> {
        check_seed(seed)?;
        Ok(Box::new(NullDiffieHellman::new(seed.to_vec())?))
    }

    fn load_diffie_hellman(&self, private_component: &[u8]) -> Result<Box<dyn DiffieHellman>> {
        Ok(Box::new(NullDiffieHellman::new(private_component.to_vec())?))
    }
}
