//! Key file access.
//!
//! Files hold exactly the bytes a key's `to_bytes` returns, so loading
//! from a file is loading from a byte array plus one read.

use std::path::Path;

use crate::error::{CryptoError, Result};

/// Read a key file in full.
///
/// Any failure to read (missing path, permissions, a directory) is
/// reported as [`CryptoError::NotFound`].
pub fn read_key_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| CryptoError::NotFound(format!("{}: {e}", path.display())))
}

/// Write `data` to `path` atomically using a sibling temporary file.
///
/// Creates the parent directory if it does not exist. A crash during the
/// write cannot leave a partially-written key visible to readers.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, data)?;

    std::fs::rename(&tmp_path, path)?;

    Ok(())
}
