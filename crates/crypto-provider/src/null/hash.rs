//! Null digest: a positional fold of the input into 32 bytes.
//!
//! Deterministic and incremental, with no one-wayness at all.

use crate::capability::Hash;

/// Digest length of [`NullHash`].
pub const NULL_DIGEST_SIZE: usize = 32;

/// Each input byte is folded into slot `position % 32`; the total input
/// length is mixed into the last eight bytes on finalize.
#[derive(Debug, Clone, Default)]
pub struct NullHash {
    state: [u8; NULL_DIGEST_SIZE],
    length: u64,
}

impl NullHash {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hash for NullHash {
    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            let slot = (self.length % NULL_DIGEST_SIZE as u64) as usize;
            self.state[slot] = self.state[slot].rotate_left(1) ^ byte;
            self.length = self.length.wrapping_add(1);
        }
    }

    fn finalize(&mut self) -> Vec<u8> {
        let mut digest = self.state;
        for (slot, len_byte) in digest[NULL_DIGEST_SIZE - 8..]
            .iter_mut()
            .zip(self.length.to_le_bytes())
        {
            *slot ^= len_byte;
        }
        self.reset();
        digest.to_vec()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn digest_size(&self) -> usize {
        NULL_DIGEST_SIZE
    }
}

/// Null digest over length-prefixed parts, so part boundaries matter.
pub(crate) fn null_digest(parts: &[&[u8]]) -> Vec<u8> {
    let mut hash = NullHash::new();
    for part in parts {
        hash.update(&(part.len() as u64).to_le_bytes());
        hash.update(part);
    }
    hash.finalize()
}
