//! Diffie-Hellman key-exchange capability.

use crate::error::Result;

/// One side of a Diffie-Hellman exchange.
///
/// Two instances built from the same seed hold identical components.
/// Two parties exchanging public components derive the same secret.
pub trait DiffieHellman: Send + Sync {
    /// Public component to send to the peer.
    fn public_component(&self) -> Vec<u8>;

    /// Private component. Loading it back through
    /// [`Library::load_diffie_hellman`](crate::Library::load_diffie_hellman)
    /// restores this exchange. The caller must zeroize it.
    fn private_component(&self) -> Vec<u8>;

    /// Derive the shared secret from the peer's public component.
    fn shared_secret(&self, remote_public: &[u8]) -> Result<Vec<u8>>;
}
