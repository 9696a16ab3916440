//! Host-backed filesystem: the contract implemented against POSIX.
//!
//! Probes use `access`, type queries use `lstat` (the leaf is never
//! followed), links use `symlink`/`readlink`, directories use
//! `mkdir`/`unlink`/`rmdir`, and resolution uses the host's canonicalization.
//! Stream I/O goes through `std::fs`. Relative paths are accepted and
//! interpreted against the process working directory.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};

use log::Level;
use rustix::fs::{access, lstat, mkdir, readlink, rmdir, symlink, unlink, Access, Mode};
use rustix::io::Errno;

use crate::constants::DIRECTORY_MODE;
use crate::logging::{AuditSink, NullSink};
use crate::path;
use crate::vfs::{FileType, Filesystem};

/// Filesystem backend bound to the host operating system.
pub struct HostFilesystem {
    audit: Box<dyn AuditSink>,
}

impl HostFilesystem {
    pub fn new() -> Self {
        Self {
            audit: Box::new(NullSink),
        }
    }

    /// Route per-entry diagnostics from best-effort operations to `audit`.
    /// The contract's results are unchanged; only the diagnostics go live.
    pub fn with_audit(audit: Box<dyn AuditSink>) -> Self {
        Self { audit }
    }

    /// Report all immediate children of `absolute`, then recurse into child
    /// directories. Child names are buffered so each directory is scanned
    /// once; symlinked directories probe as links and are never entered.
    fn walk_directory(
        &self,
        absolute: &str,
        relative: Option<&str>,
        recursive: bool,
        cb: &mut dyn FnMut(&str),
    ) -> bool {
        let entries = match std::fs::read_dir(absolute) {
            Ok(entries) => entries,
            Err(_) => return false,
        };

        let mut names: Vec<String> = Vec::new();
        for entry in entries.flatten() {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                // Non-UTF-8 names cannot cross the contract; skip them.
                Err(_) => continue,
            }
        }

        for name in &names {
            let reported = match relative {
                Some(prefix) => path::join(prefix, name),
                None => name.clone(),
            };
            cb(&reported);
        }

        if recursive {
            for name in &names {
                let child = path::join(absolute, name);
                if self.is_directory(&child) {
                    let reported = match relative {
                        Some(prefix) => path::join(prefix, name),
                        None => name.clone(),
                    };
                    if !self.walk_directory(&child, Some(&reported), recursive, cb) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl Default for HostFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for HostFilesystem {
    fn exists(&self, path: &str) -> bool {
        access(path, Access::EXISTS).is_ok()
    }

    fn is_readable(&self, path: &str) -> bool {
        access(path, Access::READ_OK).is_ok()
    }

    fn is_writable(&self, path: &str) -> bool {
        access(path, Access::WRITE_OK).is_ok()
    }

    fn is_executable(&self, path: &str) -> bool {
        access(path, Access::EXEC_OK).is_ok()
    }

    fn file_type(&self, path: &str) -> Option<FileType> {
        let st = lstat(path).ok()?;
        match rustix::fs::FileType::from_raw_mode(st.st_mode) {
            rustix::fs::FileType::RegularFile => Some(FileType::File),
            rustix::fs::FileType::Symlink => Some(FileType::SymbolicLink),
            rustix::fs::FileType::Directory => Some(FileType::Directory),
            _ => None,
        }
    }

    fn create_file(&mut self, path: &str) -> bool {
        match self.file_type(path) {
            Some(FileType::File) => true,
            Some(_) => false,
            // No known type covers both absence and host objects the
            // contract cannot represent (devices, sockets, pipes); only an
            // absent path may be created.
            None => {
                if self.exists(path) {
                    return false;
                }
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .open(path)
                    .is_ok()
            }
        }
    }

    fn read_range(&self, path: &str, offset: usize, length: Option<usize>) -> Option<Vec<u8>> {
        let mut file = File::open(path).ok()?;
        let size = usize::try_from(file.metadata().ok()?.len()).ok()?;

        if offset > size {
            return None;
        }
        let want = match length {
            Some(length) => {
                let end = offset.checked_add(length)?;
                if end > size {
                    return None;
                }
                length
            }
            None => size - offset,
        };

        if offset > 0 {
            file.seek(SeekFrom::Start(offset as u64)).ok()?;
        }
        let mut contents = vec![0u8; want];
        file.read_exact(&mut contents).ok()?;
        Some(contents)
    }

    fn write(&mut self, contents: &[u8], path: &str) -> bool {
        match self.file_type(path) {
            Some(FileType::File) => std::fs::write(path, contents).is_ok(),
            Some(_) => false,
            // Existing objects of no known type are not files to replace.
            None => !self.exists(path) && std::fs::write(path, contents).is_ok(),
        }
    }

    fn remove_file(&mut self, path: &str) -> bool {
        if self.file_type(path) != Some(FileType::File) {
            return false;
        }
        unlink(path).is_ok()
    }

    fn read_symbolic_link(&self, path: &str) -> Option<String> {
        readlink(path, Vec::new()).ok()?.into_string().ok()
    }

    fn write_symbolic_link(&mut self, target: &str, path: &str) -> bool {
        symlink(target, path).is_ok()
    }

    /// Ensures `path` is not a symbolic link after the call: an existing link
    /// is unlinked, anything else (including absence) is left untouched and
    /// reported as success.
    fn remove_symbolic_link(&mut self, path: &str) -> bool {
        match self.file_type(path) {
            Some(FileType::SymbolicLink) => unlink(path).is_ok(),
            _ => true,
        }
    }

    fn create_directory(&mut self, path: &str, recursive: bool) -> bool {
        let mode = Mode::from_bits_truncate(DIRECTORY_MODE);

        if recursive {
            // Ascend lexically until an existing directory, collecting the
            // missing components, then create from the top down.
            let mut pending: Vec<String> = Vec::new();
            let mut current = path.to_string();
            while !current.is_empty() && current != "/" && !self.is_directory(&current) {
                if self.exists(&current) {
                    return false;
                }
                pending.push(current.clone());
                current = path::dir_name(&current).to_string();
            }

            for directory in pending.iter().rev() {
                if let Err(errno) = mkdir(directory.as_str(), mode) {
                    if errno != Errno::EXIST || !self.is_directory(directory) {
                        return false;
                    }
                }
            }
            true
        } else {
            match mkdir(path, mode) {
                Ok(()) => true,
                Err(Errno::EXIST) => self.is_directory(path),
                Err(_) => false,
            }
        }
    }

    fn read_directory(&self, path: &str, recursive: bool, cb: &mut dyn FnMut(&str)) -> bool {
        self.walk_directory(path, None, recursive, cb)
    }

    fn remove_directory(&mut self, path: &str, recursive: bool) -> bool {
        if recursive {
            let mut names: Vec<String> = Vec::new();
            if !self.read_directory(path, false, &mut |name| names.push(name.to_string())) {
                return false;
            }

            // Best-effort: keep deleting past failures, fail overall if any
            // entry refused to go.
            let mut ok = true;
            for name in &names {
                let child = path::join(path, name);
                let removed = match self.file_type(&child) {
                    Some(FileType::Directory) => self.remove_directory(&child, true),
                    Some(FileType::SymbolicLink) => self.remove_symbolic_link(&child),
                    Some(FileType::File) => self.remove_file(&child),
                    // No known type; nothing this contract can remove.
                    None => false,
                };
                if !removed {
                    ok = false;
                    self.audit
                        .log(Level::Warn, &format!("failed to remove {child}"));
                }
            }
            if !ok {
                return false;
            }
        }

        rmdir(path).is_ok()
    }

    fn resolve_path(&self, path: &str) -> Option<String> {
        std::fs::canonicalize(path)
            .ok()?
            .into_os_string()
            .into_string()
            .ok()
    }

    /// Host copy for regular files: `std::fs::copy` preserves permission
    /// bits, which the read-then-write default does not. An existing regular
    /// file at `to` is removed first; any other existing kind fails.
    fn copy_file(&mut self, from: &str, to: &str) -> bool {
        if !self.is_file(from) {
            return false;
        }
        match self.file_type(to) {
            Some(FileType::File) => {
                if !self.remove_file(to) {
                    return false;
                }
            }
            Some(_) => return false,
            None => {}
        }
        std::fs::copy(from, to).is_ok()
    }
}
