// tests/common.rs

use filesift::FileMetadata;
use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by the CLI tests, but not all.
pub fn filesift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("filesift"))
}

/// Shorthand for a text file descriptor.
#[allow(dead_code)]
pub fn text_file(path: &str, size: i64) -> FileMetadata {
    FileMetadata::new(path, size, "text/plain")
}

/// Writes `files` as a JSON array into `dir/name` and returns its path.
#[allow(dead_code)]
pub fn write_file_list(dir: &Path, name: &str, files: &[FileMetadata]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(files).unwrap()).unwrap();
    path
}

/// Writes raw JSON text into `dir/name` and returns its path.
#[allow(dead_code)]
pub fn write_json(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

/// A synthetic tree of `count` files mixing sources, tests, vendored code,
/// large blobs and images.
#[allow(dead_code)]
pub fn synthetic_files(count: usize) -> Vec<FileMetadata> {
    (0..count)
        .map(|i| {
            let (path, size, content_type) = match i % 6 {
                0 => (format!("src/mod{}/file{}.ts", i % 17, i), 100 + i as i64, "text/plain"),
                1 => (format!("src/mod{}/file{}.test.ts", i % 17, i), 50, "text/plain"),
                2 => (format!("node_modules/pkg{}/index{}.ts", i % 5, i), 10, "text/plain"),
                3 => (format!("assets/blob{}.ts", i), 50_000, "text/plain"),
                4 => (format!("assets/img{}.ts", i), 10, "image/png"),
                _ => (format!("docs/page{}.md", i), 10, "text/markdown"),
            };
            FileMetadata::new(path, size, content_type)
        })
        .collect()
}
