//! crypto-provider: pluggable cryptographic backends.
//!
//! Protocol code never builds keys, hashes, random generators,
//! Diffie-Hellman exchanges or big integers itself. It holds one
//! [`Library`] for its lifetime and asks it for every capability object.
//! Two backends ship with the crate:
//!
//! - [`DalekLibrary`]: Ed25519 keys, X25519 key exchange, SHA-256.
//! - [`NullLibrary`]: deterministic, cost-free stand-ins for tests and
//!   simulations. It carries no security guarantees whatsoever.
//!
//! The backend is chosen once at startup through [`Backend`] and passed
//! explicitly to consumers.

pub mod capability;
pub mod config;
pub mod dalek;
pub mod error;
pub mod integer;
pub mod library;
pub mod null;
pub mod storage;

// Re-export primary types
pub use capability::{AsymmetricKey, DiffieHellman, Hash, KeyAlgorithm, Random};
pub use config::Backend;
pub use dalek::DalekLibrary;
pub use error::{CryptoError, Result};
pub use integer::IntegerData;
pub use library::Library;
pub use null::NullLibrary;
