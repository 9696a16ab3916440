//! Shared crate-wide constants.
//!
//! Centralizes magic values used across modules. Adjusting these here will
//! propagate through the crate.

/// Mode passed to `mkdir` for directories created by the host backend.
/// The kernel applies the process umask; the crate never reads or restores
/// the umask itself.
pub const DIRECTORY_MODE: u32 = 0o777;

/// Separator between entries of a `PATH`-style search list.
pub const PATH_LIST_SEPARATOR: char = ':';

/// Schema tag expected at the top of a fixture manifest.
/// See `vfs::fixture` for the document format.
pub const FIXTURE_SCHEMA: &str = "fixture.v1";
