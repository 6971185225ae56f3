/*!
 * Path normalization helpers shared by every export mode
 */

use std::fs;
use std::io;
use std::path::Path;

/// Normalize separators and strip surrounding slashes for consistent
/// comparison. Permissive on purpose: selective mode feeds user-typed
/// strings straight through here.
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/").trim_matches('/').to_string()
}

/// Join a normalized relative directory and an entry name. The root's
/// relative path is the empty string.
pub fn join_relative(rel_dir: &str, name: &str) -> String {
    if rel_dir.is_empty() {
        normalize(name)
    } else {
        normalize(&format!("{}/{}", rel_dir, name))
    }
}

/// Lowercase extension of a file name, including the leading dot.
///
/// Leading dots do not start an extension, so dotfiles like `.gitignore`
/// report no extension.
pub fn file_extension(name: &str) -> Option<String> {
    let trimmed = name.trim_start_matches('.');
    let dot = trimmed.rfind('.')?;
    Some(trimmed[dot..].to_lowercase())
}

/// Read a file as text, substituting invalid UTF-8 sequences with the
/// replacement character instead of failing. Open and read errors still
/// surface so callers can record a per-file error.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
