//! Pseudo-random generation.
//!
//! [`SeededRandom`] is the generator both backends hand out: the seed is
//! reduced with SHA-256 to the 32-byte native seed of `StdRng`, so any
//! non-empty seed length works and identical seeds give identical streams.
//! Fresh (non-deterministic) material comes from the operating system via
//! `OsRng` and surfaces failures as [`CryptoError::Entropy`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, Result};

/// Seed length the generator consumes natively.
pub const OPTIMAL_SEED_SIZE: usize = 32;

/// A seeded pseudo-random generator.
pub trait Random: Send {
    fn next_u32(&mut self) -> u32;

    fn next_u64(&mut self) -> u64;

    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Return `len` pseudo-random bytes.
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf);
        buf
    }

    /// Uniform value in `[min, max]`. Fails with [`CryptoError::Range`]
    /// when `min > max`.
    fn range_u64(&mut self, min: u64, max: u64) -> Result<u64>;
}

/// `StdRng` seeded from an arbitrary byte string.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Build a generator from `seed`. Empty seeds are rejected.
    pub fn new(seed: &[u8]) -> Result<Self> {
        if seed.is_empty() {
            return Err(CryptoError::Format("seed must not be empty".into()));
        }
        let native: [u8; 32] = Sha256::digest(seed).into();
        Ok(Self {
            rng: StdRng::from_seed(native),
        })
    }

    /// Seed length the generator consumes without reduction.
    pub fn optimal_seed_size() -> usize {
        OPTIMAL_SEED_SIZE
    }
}

impl Random for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn range_u64(&mut self, min: u64, max: u64) -> Result<u64> {
        if min > max {
            return Err(CryptoError::Range(format!("empty range [{min}, {max}]")));
        }
        Ok(self.rng.gen_range(min..=max))
    }
}

/// Fill a fixed-size array from the operating system random source.
pub(crate) fn entropy_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| CryptoError::Entropy(e.to_string()))?;
    Ok(buf)
}

/// A generator freshly seeded from the operating system random source.
pub(crate) fn entropy_rng() -> Result<StdRng> {
    StdRng::from_rng(OsRng).map_err(|e| CryptoError::Entropy(e.to_string()))
}
