//! Lexical path utilities.
//!
//! Paths are byte strings using `/` as the component separator. Everything in
//! this module is pure string work; nothing here consults the filesystem, so
//! `normalize` of a path through a symlink does not resolve the link (see
//! `Filesystem::resolve_path` for that).

/// Collapse repeated separators and resolve `.`/`..` segments lexically.
///
/// A trailing separator is removed except for the root. `..` at the start of
/// an absolute path is discarded (nothing ascends above `/`); in a relative
/// path it is preserved only when no prior real component can cancel it. A
/// relative path whose components cancel to nothing becomes the empty string,
/// as does an empty input.
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let absolute = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&"..") | None => {
                    if !absolute {
                        stack.push("..");
                    }
                }
                Some(_) => {
                    stack.pop();
                }
            },
            other => stack.push(other),
        }
    }

    if absolute {
        let mut out = String::with_capacity(path.len());
        out.push('/');
        out.push_str(&stack.join("/"));
        out
    } else {
        stack.join("/")
    }
}

/// Longest prefix before the final `/`; empty when the path has no separator.
#[must_use]
pub fn dir_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[..index],
        None => "",
    }
}

/// Suffix after the final `/`; the whole input when there is no separator.
#[must_use]
pub fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// True iff the first byte is `/`.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Join a directory and a name with exactly one separator between them.
#[must_use]
pub fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        return name.to_string();
    }
    if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}

/// Extension of the base name: the suffix after its final `.`.
///
/// Empty when there is no `.`, or when the only `.` leads the base name
/// (dotfiles have no extension).
#[must_use]
pub fn file_extension(path: &str) -> &str {
    let base = base_name(path);
    match base.rfind('.') {
        Some(index) if index > 0 => &base[index + 1..],
        _ => "",
    }
}

/// Base name with its extension (and the `.`) removed.
#[must_use]
pub fn base_name_without_extension(path: &str) -> &str {
    let base = base_name(path);
    match base.rfind('.') {
        Some(index) if index > 0 => &base[..index],
        _ => base,
    }
}

/// True iff the path's extension equals `extension` byte-for-byte.
#[must_use]
pub fn has_extension(path: &str, extension: &str) -> bool {
    file_extension(path) == extension
}

/// Resolve `path` against `base` when relative; normalize either way.
#[must_use]
pub fn resolve_relative(path: &str, base: &str) -> String {
    if is_absolute(path) {
        normalize(path)
    } else {
        normalize(&join(base, path))
    }
}
