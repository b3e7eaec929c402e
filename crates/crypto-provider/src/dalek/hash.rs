//! SHA-256 hash objects.

use sha2::{Digest, Sha256};

use crate::capability::Hash;

/// Incremental SHA-256.
#[derive(Clone, Default)]
pub struct Sha256Hash {
    hasher: Sha256,
}

impl Sha256Hash {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hash for Sha256Hash {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        self.hasher.finalize_reset().to_vec()
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.hasher);
    }

    fn digest_size(&self) -> usize {
        <Sha256 as Digest>::output_size()
    }
}
