//! Backend selection.
//!
//! The backend is a deployment decision: read once at process startup
//! (command-line flag or environment) and turned into a provider with
//! [`Backend::library`]. Nothing in this crate switches backends at
//! runtime, and the choice must never come from network input.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capability::KeyAlgorithm;
use crate::dalek::DalekLibrary;
use crate::error::CryptoError;
use crate::library::Library;
use crate::null::NullLibrary;

/// Environment variable consulted by binaries for the default backend.
pub const BACKEND_ENV_VAR: &str = "CRYPTO_PROVIDER_BACKEND";

/// Available provider backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Deterministic stand-ins with no security. Tests and simulations only.
    Null,
    /// Ed25519, X25519 and SHA-256.
    #[default]
    Dalek,
}

impl Backend {
    /// Construct the provider for this backend.
    pub fn library(self) -> Box<dyn Library> {
        match self {
            Backend::Null => Box::new(NullLibrary::new()),
            Backend::Dalek => Box::new(DalekLibrary::new()),
        }
    }

    /// Construct the provider for sharing across threads.
    pub fn shared_library(self) -> Arc<dyn Library> {
        Arc::from(self.library())
    }

    /// Algorithm family of the keys this backend produces.
    pub fn key_algorithm(self) -> KeyAlgorithm {
        match self {
            Backend::Null => KeyAlgorithm::Null,
            Backend::Dalek => KeyAlgorithm::Ed25519,
        }
    }

    /// True for backends that provide real security.
    pub fn is_secure(self) -> bool {
        matches!(self, Backend::Dalek)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Null => write!(f, "null"),
            Backend::Dalek => write!(f, "dalek"),
        }
    }
}

impl FromStr for Backend {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" => Ok(Backend::Null),
            "dalek" => Ok(Backend::Dalek),
            other => Err(CryptoError::Format(format!(
                "unknown backend '{other}' (expected null or dalek)"
            ))),
        }
    }
}
