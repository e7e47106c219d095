// src/config/parsing.rs

use super::FilterConfig;
use crate::core_types::FileMetadata;
use crate::errors::{io_error_with_path, Error, Result};
use byte_unit::Byte;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Parses an optional human-readable size ("512", "1k", "2MiB") into bytes.
pub(super) fn parse_size(size_str: Option<&str>, name: &str) -> Result<Option<u64>> {
    size_str
        .map(|s| {
            Byte::from_str(s.trim())
                .map(|b| b.as_u64())
                .map_err(|e| Error::Config(format!("Invalid {} '{}': {}", name, s, e)))
        })
        .transpose()
}

/// Normalizes MIME types to lowercase and drops blank entries.
pub(super) fn normalize_content_types<I, S>(types: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    types
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Reads a JSON file as text; `-` reads standard input.
fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin()).map_err(|e| io_error_with_path(e, "<stdin>"))
    } else {
        fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))
    }
}

/// Loads a JSON rule set.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read and `Error::Json` if it is
/// not a valid rule set (including unknown fields).
pub fn load_rules_file(path: &Path) -> Result<FilterConfig> {
    let text = read_document(path)?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        context: format!("rules file '{}'", path.display()),
        source,
    })
}

/// Loads a JSON array of file descriptors; `-` reads standard input.
///
/// Each entry is decoded on its own. An entry that is not a valid descriptor
/// (e.g. a non-integer `size`) becomes a [`FileMetadata::malformed`]
/// placeholder, so it is excluded as invalid metadata while the rest of the
/// list is still classified.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read and `Error::Json` if the
/// document is not a JSON array.
pub fn load_file_list(path: &Path) -> Result<Vec<FileMetadata>> {
    let text = read_document(path)?;
    let entries: Vec<Value> = serde_json::from_str(&text).map_err(|source| Error::Json {
        context: format!("file list '{}'", path.display()),
        source,
    })?;
    Ok(entries.into_iter().enumerate().map(decode_entry).collect())
}

fn decode_entry((index, entry): (usize, Value)) -> FileMetadata {
    let path = entry
        .get("path")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    match serde_json::from_value(entry) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("File list entry {} ('{}') is malformed: {}", index, path, e);
            FileMetadata::malformed(path, e.to_string())
        }
    }
}
