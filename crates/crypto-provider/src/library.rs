//! The provider factory contract.
//!
//! [`Library`] is the single seam between protocol code and concrete
//! cryptography. Implementations are stateless: every method depends only
//! on its arguments (and the OS entropy source for `create_*` and random
//! integers), so one instance can be shared across threads for the
//! lifetime of the process.
//!
//! File loading, public-key generation, the integer constructors and the
//! random generator are provided methods, so every backend agrees on them:
//! `load_*_from_file` is `load_*_from_bytes` over the file contents, and
//! `generate_public_key(seed)` is the public half of
//! `generate_private_key(seed)`.

use std::path::Path;

use crate::capability::random::{self, SeededRandom};
use crate::capability::{AsymmetricKey, DiffieHellman, Hash, Random};
use crate::config::Backend;
use crate::error::{CryptoError, Result};
use crate::integer::{self, IntegerData};
use crate::storage;

/// Factory for every cryptographic capability object.
///
/// Seeds are arbitrary non-empty byte strings; an empty seed is a
/// [`CryptoError::Format`](crate::CryptoError::Format) error.
pub trait Library: Send + Sync {
    /// Which backend this is.
    fn backend(&self) -> Backend;

    // ── Keys ──────────────────────────────────────────────────────────────────

    /// Load a public key from a file holding its encoded bytes.
    fn load_public_key_from_file(&self, path: &Path) -> Result<Box<dyn AsymmetricKey>> {
        let data = storage::read_key_file(path)?;
        self.load_public_key_from_bytes(&data)
    }

    /// Decode a public key.
    fn load_public_key_from_bytes(&self, data: &[u8]) -> Result<Box<dyn AsymmetricKey>>;

    /// Deterministically derive a public key from `seed`.
    fn generate_public_key(&self, seed: &[u8]) -> Result<Box<dyn AsymmetricKey>> {
        Ok(self.generate_private_key(seed)?.public_key())
    }

    /// Load a private key from a file holding its encoded bytes.
    fn load_private_key_from_file(&self, path: &Path) -> Result<Box<dyn AsymmetricKey>> {
        let data = storage::read_key_file(path)?;
        self.load_private_key_from_bytes(&data)
    }

    /// Decode a private key.
    fn load_private_key_from_bytes(&self, data: &[u8]) -> Result<Box<dyn AsymmetricKey>>;

    /// Deterministically derive a private key from `seed`.
    fn generate_private_key(&self, seed: &[u8]) -> Result<Box<dyn AsymmetricKey>>;

    /// Create a fresh private key from OS entropy.
    fn create_private_key(&self) -> Result<Box<dyn AsymmetricKey>>;

    /// Smallest key size, in bits, this backend considers valid.
    fn minimum_key_size(&self) -> usize;

    /// Reject keys produced by a different backend.
    fn ensure_compatible(&self, key: &dyn AsymmetricKey) -> Result<()> {
        let expected = self.backend().key_algorithm();
        if key.algorithm() != expected {
            return Err(CryptoError::Backend(format!(
                "{} key used with the {} backend (expects {expected})",
                key.algorithm(),
                self.backend()
            )));
        }
        Ok(())
    }

    // ── Randomness and hashing ────────────────────────────────────────────────

    /// A pseudo-random generator seeded with `seed`.
    fn random_number_generator(&self, seed: &[u8]) -> Result<Box<dyn Random>> {
        Ok(Box::new(SeededRandom::new(seed)?))
    }

    /// Seed length, in bytes, the generator consumes natively.
    fn rng_optimal_seed_size(&self) -> usize {
        SeededRandom::optimal_seed_size()
    }

    /// A fresh hash object in the Init state.
    fn hash_algorithm(&self) -> Box<dyn Hash>;

    // ── Integers ──────────────────────────────────────────────────────────────

    fn integer_from_int(&self, value: i64) -> IntegerData {
        IntegerData::from_i64(value)
    }

    /// Big-endian two's-complement bytes.
    fn integer_from_bytes(&self, bytes: &[u8]) -> Result<IntegerData> {
        IntegerData::from_bytes(bytes)
    }

    /// Decimal, or `0x`-prefixed hexadecimal, optionally negative.
    fn integer_from_str(&self, text: &str) -> Result<IntegerData> {
        IntegerData::parse(text)
    }

    /// Miller-Rabin witness count used by this backend.
    fn primality_rounds(&self) -> usize;

    /// The primality check `random_integer*` results satisfy.
    fn is_probable_prime(&self, value: &IntegerData) -> bool {
        value.is_probable_prime(self.primality_rounds())
    }

    /// A random value with exactly `bit_count` significant bits.
    fn random_integer(&self, bit_count: usize, want_prime: bool) -> Result<IntegerData> {
        let mut rng = random::entropy_rng()?;
        integer::random_with_bits(&mut rng, bit_count, want_prime, self.primality_rounds())
    }

    /// A value drawn uniformly from `[min, max]`.
    fn random_integer_in_range(
        &self,
        min: &IntegerData,
        max: &IntegerData,
        want_prime: bool,
    ) -> Result<IntegerData> {
        let mut rng = random::entropy_rng()?;
        integer::random_in_range(&mut rng, min, max, want_prime, self.primality_rounds())
    }

    // ── Diffie-Hellman ────────────────────────────────────────────────────────

    /// A fresh exchange with a private component from OS entropy.
    fn create_diffie_hellman(&self) -> Result<Box<dyn DiffieHellman>>;

    /// Deterministically derive an exchange from `seed`.
    fn generate_diffie_hellman(&self, seed: &[u8]) -> Result<Box<dyn DiffieHellman>>;

    /// Restore an exchange from its private component.
    fn load_diffie_hellman(&self, private_component: &[u8]) -> Result<Box<dyn DiffieHellman>>;
}
