//! Error types for crypto-provider.
//!
//! Every factory operation reports failure through [`CryptoError`];
//! no operation hands back a partially constructed object.
//! Key material is never included in error messages.

/// Error taxonomy shared by every provider backend.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// A key file does not exist or cannot be read.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bytes or text do not decode into key, seed or integer material.
    #[error("Invalid format: {0}")]
    Format(String),

    /// Requested integer range is empty, a bit count is not positive,
    /// or no prime satisfies the constraints.
    #[error("Out of range: {0}")]
    Range(String),

    /// The operating system random source is unavailable. Not retried.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    #[error("Operation requires a private key")]
    NotPrivate,

    /// An object from one backend was handed to another.
    #[error("Backend mismatch: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, CryptoError>;
