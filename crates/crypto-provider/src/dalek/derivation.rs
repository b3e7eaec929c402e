//! Seed expansion using HKDF-SHA256.
//!
//! Seeded keys and exchanges are derived from the seed with a context
//! string per algorithm, so the same seed never yields related Ed25519
//! and X25519 secrets.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::{CryptoError, Result};

/// HKDF info for seeded Ed25519 private keys. Must remain stable.
pub const ED25519_CONTEXT: &str = "crypto-provider/ed25519";

/// HKDF info for seeded X25519 exchanges. Must remain stable.
pub const X25519_CONTEXT: &str = "crypto-provider/x25519";

/// Derive 32 bytes of secret material from `seed` and `context`.
///
/// Uses HKDF-SHA256 (RFC 5869) with the seed as IKM and the context as
/// info. Empty seeds are rejected.
pub fn derive_seed_key(seed: &[u8], context: &str) -> Result<[u8; 32]> {
    if seed.is_empty() {
        return Err(CryptoError::Format("seed must not be empty".into()));
    }
    let hk = Hkdf::<Sha256>::new(None, seed);
    let mut output = [0u8; 32];
    hk.expand(context.as_bytes(), &mut output)
        .map_err(|e| CryptoError::Format(format!("HKDF expand failed: {e}")))?;
    Ok(output)
}
