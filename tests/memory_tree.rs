//! End-to-end scenarios against the in-memory backend.

use manifold::vfs::memory::{Entry, MemoryFilesystem};
use manifold::vfs::{FileType, Filesystem};

fn collect(fs: &MemoryFilesystem, path: &str, recursive: bool) -> Option<Vec<String>> {
    let mut names = Vec::new();
    if fs.read_directory(path, recursive, &mut |name| names.push(name.to_string())) {
        Some(names)
    } else {
        None
    }
}

#[test]
fn enumerate_reports_children_before_descending() {
    let fs = MemoryFilesystem::with_entries(vec![Entry::directory(
        "a",
        vec![
            Entry::directory("b", vec![Entry::file("c.txt", *b"hi")]),
            Entry::file("d.txt", *b"x"),
        ],
    )]);

    let mut names = collect(&fs, "/a", true).expect("read_directory");
    assert_eq!(names[0], "b"); // immediate children come first
    names.sort();
    assert_eq!(names, vec!["b", "b/c.txt", "d.txt"]);
}

#[test]
fn enumeration_reports_each_descendant_exactly_once() {
    let fs = MemoryFilesystem::with_entries(vec![
        Entry::directory(
            "x",
            vec![
                Entry::directory("y", vec![Entry::file("f1", Vec::new())]),
                Entry::file("f2", Vec::new()),
            ],
        ),
        Entry::file("f3", Vec::new()),
    ]);

    let names = collect(&fs, "/", true).expect("read_directory");
    assert_eq!(names.len(), 5);
    for name in &names {
        assert!(!name.starts_with('/'), "relative paths only: {name}");
        assert!(name != "." && name != "..");
        assert_eq!(names.iter().filter(|n| *n == name).count(), 1);
    }
}

#[test]
fn replace_write_keeps_last_contents() {
    let mut fs = MemoryFilesystem::new();
    assert!(fs.write(&[0x01], "/f"));
    assert!(fs.write(&[0x02, 0x03], "/f"));
    assert_eq!(fs.read("/f"), Some(vec![0x02, 0x03]));
}

#[test]
fn partial_reads_window_the_contents() {
    let fs = MemoryFilesystem::with_entries(vec![Entry::file("p", *b"abcdef")]);

    assert_eq!(fs.read_range("/p", 2, Some(3)), Some(b"cde".to_vec()));
    assert_eq!(fs.read_range("/p", 0, Some(0)), Some(Vec::new()));
    assert_eq!(fs.read_range("/p", 6, None), Some(Vec::new()));
    assert_eq!(fs.read_range("/p", 4, None), Some(b"ef".to_vec()));

    // Out-of-range and overflowing windows fail.
    assert!(fs.read_range("/p", 7, None).is_none());
    assert!(fs.read_range("/p", 2, Some(5)).is_none());
    assert!(fs.read_range("/p", 1, Some(usize::MAX)).is_none());
}

#[test]
fn recursive_create_builds_the_whole_chain() {
    let mut fs = MemoryFilesystem::new();
    assert!(fs.create_directory("/x/y/z", true));
    assert!(fs.is_directory("/x"));
    assert!(fs.is_directory("/x/y"));
    assert!(fs.is_directory("/x/y/z"));

    // Idempotent: a second application changes nothing.
    assert!(fs.create_directory("/x/y/z", true));
    let mut names = Vec::new();
    assert!(fs.read_directory("/", true, &mut |name| names.push(name.to_string())));
    assert_eq!(names.len(), 3);
}

#[test]
fn non_recursive_create_requires_the_parent() {
    let mut fs = MemoryFilesystem::new();
    assert!(!fs.create_directory("/x/y", false));
    assert!(fs.create_directory("/x", false));
    assert!(fs.create_directory("/x/y", false));
    assert!(fs.create_directory("/x/y", false)); // already a directory
}

#[test]
fn recursive_remove_deletes_the_subtree() {
    let mut fs = MemoryFilesystem::with_entries(vec![Entry::directory(
        "r",
        vec![
            Entry::file("a", Vec::new()),
            Entry::directory("b", vec![Entry::file("c", Vec::new())]),
        ],
    )]);

    assert!(fs.remove_directory("/r", true));
    assert!(!fs.exists("/r"));
    assert!(!fs.exists("/r/b/c"));
}

#[test]
fn non_recursive_remove_fails_on_non_empty() {
    let mut fs = MemoryFilesystem::with_entries(vec![Entry::directory(
        "r",
        vec![Entry::file("a", Vec::new())],
    )]);
    assert!(!fs.remove_directory("/r", false));
    assert!(fs.exists("/r/a"));
}

#[test]
fn wrong_type_guards() {
    let mut fs = MemoryFilesystem::with_entries(vec![
        Entry::directory("d", vec![]),
        Entry::file("f", Vec::new()),
    ]);

    assert!(!fs.create_file("/d"));
    assert!(fs.is_directory("/d"));

    assert!(!fs.create_directory("/f", false));
    assert!(!fs.create_directory("/f", true));
    assert!(fs.is_file("/f"));

    assert!(!fs.remove_file("/d"));
    assert!(!fs.remove_directory("/f", true));
}

#[test]
fn type_probes_imply_existence() {
    let fs = MemoryFilesystem::with_entries(vec![
        Entry::file("f", Vec::new()),
        Entry::directory("d", vec![]),
    ]);
    for path in ["/f", "/d"] {
        if fs.is_file(path) || fs.is_symbolic_link(path) || fs.is_directory(path) {
            assert!(fs.exists(path));
        }
        assert!(fs.file_type(path).is_some());
    }
    assert_eq!(fs.file_type("/f"), Some(FileType::File));
    assert_eq!(fs.file_type("/d"), Some(FileType::Directory));
    assert_eq!(fs.file_type("/missing"), None);
}

#[test]
fn resolve_is_identity_on_existing_normalized_paths() {
    let fs = MemoryFilesystem::with_entries(vec![Entry::directory(
        "a",
        vec![Entry::file("b", Vec::new())],
    )]);
    for path in ["/", "/a", "/a/b"] {
        assert_eq!(fs.resolve_path(path).as_deref(), Some(path));
    }
    assert_eq!(fs.resolve_path("/a//b").as_deref(), Some("/a/b"));
    assert!(fs.resolve_path("/a/c").is_none());
}

#[test]
fn create_file_is_idempotent_over_files() {
    let mut fs = MemoryFilesystem::new();
    assert!(fs.create_file("/f"));
    assert!(fs.is_file("/f"));
    assert!(fs.write(b"data", "/f"));
    assert!(fs.create_file("/f"));
    assert_eq!(fs.read("/f"), Some(b"data".to_vec()));
}
