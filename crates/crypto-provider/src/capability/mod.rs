//! Capability interfaces produced by a [`Library`](crate::Library).
//!
//! This module provides:
//! - [`AsymmetricKey`] public/private key objects
//! - [`Hash`] incremental digests
//! - [`Random`] seeded pseudo-random generators (and the shared [`SeededRandom`])
//! - [`DiffieHellman`] key-exchange state
//!
//! Every capability object is owned by whoever requested it from the
//! provider. None of them hold a reference back to the provider.

pub mod dh;
pub mod hash;
pub mod key;
pub mod random;

pub use dh::DiffieHellman;
pub use hash::Hash;
pub use key::{AsymmetricKey, KeyAlgorithm};
pub use random::{Random, SeededRandom};
