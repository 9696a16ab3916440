//! Seed an in-memory filesystem from a fixture manifest, enumerate it, and
//! digest a file, with no host I/O involved.
//!
//! Run with: `cargo run --example 02_memory_fixture`

use manifold::vfs::digest::sha256_hex;
use manifold::vfs::fixture;
use manifold::vfs::Filesystem;

const MANIFEST: &str = r#"{
    "schema": "fixture.v1",
    "entries": [
        { "kind": "directory", "name": "bundle", "children": [
            { "kind": "file", "name": "Info.plist", "contents": "<plist/>" },
            { "kind": "directory", "name": "Resources", "children": [
                { "kind": "file", "name": "icon.bin", "contents_b64": "AAECAwQ=" }
            ]}
        ]}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fs = fixture::from_json(MANIFEST)?;

    println!("tree under /:");
    fs.read_directory("/", true, &mut |name| println!("  {name}"));

    let plist = "/bundle/Info.plist";
    if let Some(digest) = sha256_hex(&fs, plist) {
        println!("sha256({plist}) = {digest}");
    }
    Ok(())
}
