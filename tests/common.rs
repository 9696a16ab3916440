//! Shared helpers for the manifold integration tests.

/// Create a temporary directory to serve as a host-backend root.
pub fn with_temp_root() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// The temporary root as a `&str` path, the currency of the contract.
pub fn root_path(td: &tempfile::TempDir) -> String {
    td.path().to_str().expect("utf-8 tempdir").to_string()
}
