/*!
 * Exclusion rules for directories and file extensions
 */

use std::collections::HashSet;

use crate::path::normalize;

/// Relative directory paths pruned from traversal.
///
/// Built from a comma-separated input string; entries are trimmed,
/// normalized, and empty entries dropped, so the root (relative path `""`)
/// can never match an entry.
#[derive(Debug, Clone, Default)]
pub struct DirExclusions {
    entries: HashSet<String>,
}

impl DirExclusions {
    /// Parse a comma-separated list of relative directory paths.
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .map(|d| normalize(d.trim()))
            .filter(|d| !d.is_empty())
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the path equals an entry or lives underneath one.
    pub fn is_excluded(&self, rel_path: &str) -> bool {
        self.entries.iter().any(|e| {
            rel_path == e
                || rel_path
                    .strip_prefix(e.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// File extensions dropped from source compilation.
///
/// Entries are stored lowercase with a leading dot; `TXT`, `.txt` and
/// `txt` all normalize to `.txt`.
#[derive(Debug, Clone, Default)]
pub struct ExtExclusions {
    entries: HashSet<String>,
}

impl ExtExclusions {
    /// Parse a comma-separated list of extensions.
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .filter_map(|e| {
                let e = e.trim().trim_start_matches('.').to_lowercase();
                (!e.is_empty()).then(|| format!(".{}", e))
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact membership test against the normalized dotted form.
    pub fn is_excluded(&self, ext: &str) -> bool {
        self.entries.contains(&ext.to_lowercase())
    }
}
