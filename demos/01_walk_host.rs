//! Walk a host directory through the contract and look up a tool on PATH.
//!
//! Run with: `cargo run --example 01_walk_host [dir]`

use manifold::env;
use manifold::vfs::host::HostFilesystem;
use manifold::vfs::Filesystem;

fn main() {
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let fs = HostFilesystem::new();

    println!("contents of {dir}:");
    let ok = fs.read_directory(&dir, false, &mut |name| println!("  {name}"));
    if !ok {
        eprintln!("cannot enumerate {dir}");
        std::process::exit(1);
    }

    let paths = env::executable_search_paths();
    match fs.find_executable("sh", &paths) {
        Some(found) => println!("sh lives at {found}"),
        None => println!("no sh on PATH"),
    }
}
