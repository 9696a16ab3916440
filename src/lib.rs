#![forbid(unsafe_code)]
//! Manifold: one filesystem contract, two backends.
//!
//! Every consumer of this crate takes a reference to a single [`Filesystem`]
//! instance and performs all of its I/O through that contract. Production
//! code wires in [`HostFilesystem`]; tests and in-process tooling that must
//! operate on synthesized trees wire in [`MemoryFilesystem`]. Nothing else in
//! a program built on this crate touches host I/O directly; that seam is
//! what makes in-memory testing possible.
//!
//! Contract highlights:
//! - Paths are byte strings with `/` separators; comparison is byte-wise.
//! - Probes never panic; a missing path reads as `false` (or `None`).
//! - Type queries describe the leaf itself and never follow symbolic links;
//!   [`Filesystem::resolve_path`] is the only operation that follows links.
//! - Failure is a single bit (or an absent value) per operation. Callers
//!   build their own diagnostics from the operation and path they attempted.

pub mod constants;
pub mod env;
pub mod logging;
pub mod path;
pub mod types;
pub mod vfs;

pub use vfs::host::HostFilesystem;
pub use vfs::memory::{Entry, MemoryFilesystem};
pub use vfs::{FileType, Filesystem};
