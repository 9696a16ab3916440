//! The filesystem contract and its provided operations.
//!
//! [`Filesystem`] is the capability every higher layer depends on: a driver
//! constructs exactly one backend and passes it by reference to each
//! subsystem that reads or writes. Backends implement the primitives; the
//! copy operations and finders are provided here once, composed from those
//! primitives, so both backends share one behavior.
//!
//! Failure reporting is a single bit per operation (or an absent value for
//! reads). Probes never panic: a missing path is `false`, an unknown host
//! object kind is `None`. The contract makes no thread-safety promise;
//! callers sharing one instance across threads serialize externally.

pub mod digest;
pub mod fixture;
pub mod host;
pub mod memory;

use crate::path;

/// Kind of a filesystem entry, as reported by type queries.
///
/// Host objects of any other kind (devices, sockets, pipes) have no known
/// type and probe as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    SymbolicLink,
    Directory,
}

pub trait Filesystem {
    /// Test whether a path exists.
    fn exists(&self, path: &str) -> bool;

    /// Test whether a path is readable.
    fn is_readable(&self, path: &str) -> bool;

    /// Test whether a path is writable.
    fn is_writable(&self, path: &str) -> bool;

    /// Test whether a path is executable.
    fn is_executable(&self, path: &str) -> bool;

    /// Type of the entry at `path`, describing the leaf itself.
    ///
    /// Symbolic links are reported as links, never as their targets; a
    /// missing path or an entry of no known type is `None`.
    fn file_type(&self, path: &str) -> Option<FileType>;

    /// Test whether a path is a regular file.
    fn is_file(&self, path: &str) -> bool {
        self.file_type(path) == Some(FileType::File)
    }

    /// Test whether a path is a symbolic link.
    fn is_symbolic_link(&self, path: &str) -> bool {
        self.file_type(path) == Some(FileType::SymbolicLink)
    }

    /// Test whether a path is a directory.
    fn is_directory(&self, path: &str) -> bool {
        self.file_type(path) == Some(FileType::Directory)
    }

    /// Create an empty file. Succeeds if a regular file already exists at
    /// `path`, leaving its contents untouched; fails if `path` exists as any
    /// other kind.
    fn create_file(&mut self, path: &str) -> bool;

    /// Read the whole contents of a file.
    fn read(&self, path: &str) -> Option<Vec<u8>> {
        self.read_range(path, 0, None)
    }

    /// Read a byte window of a file.
    ///
    /// `offset` must not exceed the file length, and `offset + length` (when
    /// `length` is present) must not exceed it either; an out-of-range or
    /// overflowing window fails. `length` of `None` reads to the end.
    fn read_range(&self, path: &str, offset: usize, length: Option<usize>) -> Option<Vec<u8>>;

    /// Replace the contents of a file, creating it when absent. Fails if
    /// `path` exists as anything other than a regular file.
    fn write(&mut self, contents: &[u8], path: &str) -> bool;

    /// Unlink a regular file. Absence or any other kind fails.
    fn remove_file(&mut self, path: &str) -> bool;

    /// Target of the symbolic link at `path`, stored verbatim and interpreted
    /// relative to the link's containing directory.
    fn read_symbolic_link(&self, path: &str) -> Option<String>;

    /// Create a symbolic link at `path` whose stored target is `target`,
    /// verbatim.
    fn write_symbolic_link(&mut self, target: &str, path: &str) -> bool;

    /// Ensure `path` is not a symbolic link. See each backend for how
    /// non-link paths are treated.
    fn remove_symbolic_link(&mut self, path: &str) -> bool;

    /// Create a directory. When `recursive`, absent ancestors are created as
    /// well; otherwise the immediate parent must already be a directory.
    /// Succeeds if `path` already exists as a directory; fails if it exists
    /// as any other kind.
    fn create_directory(&mut self, path: &str, recursive: bool) -> bool;

    /// Enumerate the contents of a directory.
    ///
    /// `cb` is invoked once per entry with a path relative to `path`, using
    /// `/` between components and never starting with one. `.` and `..` are
    /// never reported. All immediate children of a directory are reported
    /// before any subdirectory is recursed into. The callback cannot abort
    /// the enumeration.
    fn read_directory(&self, path: &str, recursive: bool, cb: &mut dyn FnMut(&str)) -> bool;

    /// Remove a directory. Without `recursive` the directory must be empty.
    /// With `recursive`, contained files, links, and directories are removed
    /// best-effort in unspecified order before the directory itself; the call
    /// returns `false` iff any step failed.
    fn remove_directory(&mut self, path: &str, recursive: bool) -> bool;

    /// Follow all symbolic links and return a normalized absolute path.
    /// This is the only operation that follows links.
    fn resolve_path(&self, path: &str) -> Option<String>;

    /// Copy a regular file. Backends may override this with a bulk facility
    /// that preserves metadata; the default is read-then-write.
    fn copy_file(&mut self, from: &str, to: &str) -> bool {
        let Some(contents) = self.read(from) else {
            return false;
        };
        self.write(&contents, to)
    }

    /// Copy a symbolic link, replacing an existing link at `to`.
    fn copy_symbolic_link(&mut self, from: &str, to: &str) -> bool {
        let Some(target) = self.read_symbolic_link(from) else {
            return false;
        };
        if self.is_symbolic_link(to) && !self.remove_symbolic_link(to) {
            return false;
        }
        self.write_symbolic_link(&target, to)
    }

    /// Copy a directory. Immediate files and links are always copied; nested
    /// directories are copied only when `recursive`, and are otherwise
    /// created empty.
    fn copy_directory(&mut self, from: &str, to: &str, recursive: bool) -> bool {
        if !self.is_directory(from) {
            return false;
        }
        if !self.create_directory(to, false) {
            return false;
        }

        // Snapshot the children first; copying into a sibling tree on the
        // same backend must not observe entries created mid-walk.
        let mut names: Vec<String> = Vec::new();
        if !self.read_directory(from, false, &mut |name| names.push(name.to_string())) {
            return false;
        }

        let mut ok = true;
        for name in &names {
            let source = path::join(from, name);
            let destination = path::join(to, name);
            if self.is_symbolic_link(&source) {
                ok &= self.copy_symbolic_link(&source, &destination);
            } else if self.is_directory(&source) {
                if recursive {
                    ok &= self.copy_directory(&source, &destination, true);
                } else {
                    ok &= self.create_directory(&destination, false);
                }
            } else if self.is_file(&source) {
                ok &= self.copy_file(&source, &destination);
            }
        }
        ok
    }

    /// Search `paths` in order for a directory containing `name`; the first
    /// hit returns the joined path. Links are not followed.
    fn find_file(&self, name: &str, paths: &[String]) -> Option<String> {
        for dir in paths {
            let candidate = path::join(dir, name);
            if self.exists(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Like [`Filesystem::find_file`], but the hit must also probe as
    /// executable; non-executable hits are passed over and the search
    /// continues.
    fn find_executable(&self, name: &str, paths: &[String]) -> Option<String> {
        for dir in paths {
            let candidate = path::join(dir, name);
            if self.exists(&candidate) && self.is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}
