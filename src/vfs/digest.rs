//! Content digests computed through the filesystem contract.

use sha2::{Digest, Sha256};

use crate::vfs::Filesystem;

/// SHA-256 of the file at `path`, as a lowercase hex string. Works against
/// any backend; `None` when the path cannot be read as a file.
pub fn sha256_hex<F: Filesystem + ?Sized>(fs: &F, path: &str) -> Option<String> {
    let contents = fs.read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&contents);
    Some(hex::encode(hasher.finalize()))
}
