//! Incremental digest capability.

/// A hash algorithm object.
///
/// State machine: Init → `update`* → `finalize`. `finalize` hands back
/// the digest and returns the object to Init, so it can be reused.
pub trait Hash: Send {
    /// Absorb more input.
    fn update(&mut self, data: &[u8]);

    /// Produce the digest of everything absorbed since the last reset.
    fn finalize(&mut self) -> Vec<u8>;

    /// Discard absorbed input.
    fn reset(&mut self);

    /// Digest length in bytes.
    fn digest_size(&self) -> usize;

    /// One-shot digest of `data`. Discards any pending input first.
    fn hash_data(&mut self, data: &[u8]) -> Vec<u8> {
        self.reset();
        self.update(data);
        self.finalize()
    }
}
