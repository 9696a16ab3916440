//! Fixture manifests: seed a [`MemoryFilesystem`] from a JSON document.
//!
//! A manifest is schema-tagged so stored fixtures stay self-describing:
//!
//! ```json
//! {
//!   "schema": "fixture.v1",
//!   "entries": [
//!     { "kind": "directory", "name": "a", "children": [
//!       { "kind": "file", "name": "b.txt", "contents": "hi" }
//!     ]},
//!     { "kind": "file", "name": "blob.bin", "contents_b64": "AAEC" }
//!   ]
//! }
//! ```
//!
//! File payloads are UTF-8 text in `contents` or base64 bytes in
//! `contents_b64`; a file entry carries at most one of the two.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::constants::FIXTURE_SCHEMA;
use crate::types::{Error, ErrorKind, Result};
use crate::vfs::memory::{Entry, MemoryFilesystem};
use crate::vfs::Filesystem;

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub schema: String,
    #[serde(default)]
    pub entries: Vec<EntrySpec>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntrySpec {
    File {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        contents: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        contents_b64: Option<String>,
    },
    Directory {
        name: String,
        #[serde(default)]
        children: Vec<EntrySpec>,
    },
}

/// Parse a manifest and build the seeded filesystem it describes.
pub fn from_json(text: &str) -> Result<MemoryFilesystem> {
    let manifest: Manifest =
        serde_json::from_str(text).map_err(|e| Error::new(ErrorKind::Parse, e.to_string()))?;
    if manifest.schema != FIXTURE_SCHEMA {
        return Err(Error::new(
            ErrorKind::Parse,
            format!("unsupported schema {:?}", manifest.schema),
        ));
    }

    let entries = manifest
        .entries
        .iter()
        .map(build_entry)
        .collect::<Result<Vec<_>>>()?;
    Ok(MemoryFilesystem::with_entries(entries))
}

/// Read a manifest through an existing filesystem instance and build the
/// seeded filesystem it describes.
pub fn from_json_file<F: Filesystem + ?Sized>(fs: &F, path: &str) -> Result<MemoryFilesystem> {
    let bytes = fs
        .read(path)
        .ok_or_else(|| Error::new(ErrorKind::Io, format!("cannot read {path}")))?;
    let text = String::from_utf8(bytes).map_err(|e| Error::new(ErrorKind::Parse, e.to_string()))?;
    from_json(&text)
}

fn build_entry(spec: &EntrySpec) -> Result<Entry> {
    match spec {
        EntrySpec::File {
            name,
            contents,
            contents_b64,
        } => {
            check_name(name)?;
            let bytes = match (contents, contents_b64) {
                (Some(_), Some(_)) => {
                    return Err(Error::new(
                        ErrorKind::Parse,
                        format!("file {name:?} has both contents and contents_b64"),
                    ));
                }
                (Some(text), None) => text.clone().into_bytes(),
                (None, Some(encoded)) => base64::engine::general_purpose::STANDARD
                    .decode(encoded)
                    .map_err(|e| Error::new(ErrorKind::Parse, e.to_string()))?,
                (None, None) => Vec::new(),
            };
            Ok(Entry::file(name.clone(), bytes))
        }
        EntrySpec::Directory { name, children } => {
            check_name(name)?;
            let children = children
                .iter()
                .map(build_entry)
                .collect::<Result<Vec<_>>>()?;
            Ok(Entry::directory(name.clone(), children))
        }
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        return Err(Error::new(
            ErrorKind::InvalidPath,
            format!("{name:?} is not a path component"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_schema() {
        let err = from_json(r#"{"schema": "fixture.v9", "entries": []}"#).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Parse));
    }

    #[test]
    fn rejects_names_with_separators() {
        let text = r#"{
            "schema": "fixture.v1",
            "entries": [{ "kind": "file", "name": "a/b" }]
        }"#;
        let err = from_json(text).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPath));
    }

    #[test]
    fn decodes_base64_payloads() {
        let text = r#"{
            "schema": "fixture.v1",
            "entries": [{ "kind": "file", "name": "blob", "contents_b64": "AAEC" }]
        }"#;
        let fs = from_json(text).expect("fixture");
        assert_eq!(fs.read("/blob"), Some(vec![0u8, 1, 2]));
    }
}
