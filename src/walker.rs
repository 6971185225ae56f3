/*!
 * Filtered depth-first directory traversal
 */

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::filter::DirExclusions;
use crate::path::join_relative;

/// One visited directory: its root-relative path and the file names it
/// holds, in platform-native entry order.
#[derive(Debug, Clone)]
pub struct DirVisit {
    /// Normalized relative path of the directory; empty for the root.
    pub rel_dir: String,
    /// Real filesystem path of the directory. Callers open files through
    /// this rather than the normalized relative path, which would mangle
    /// names containing literal backslashes.
    pub abs_dir: PathBuf,
    /// Names of files directly inside the directory.
    pub file_names: Vec<String>,
    /// The visit matched an exclusion rule; no files are carried.
    pub excluded: bool,
}

impl DirVisit {
    /// Label for log lines; the root's relative path is empty.
    pub fn display_dir(&self) -> &str {
        if self.rel_dir.is_empty() {
            "(root level excluded dir)"
        } else {
            &self.rel_dir
        }
    }
}

/// Depth-first, top-down walk that prunes excluded subtrees before
/// descent, driven by an explicit frontier stack. Excluded subdirectories
/// are never pushed, so their children are never listed at all.
pub struct TreeWalker {
    exclusions: DirExclusions,
    frontier: Vec<(PathBuf, String)>,
}

impl TreeWalker {
    pub fn new(root: &Path, exclusions: DirExclusions) -> Self {
        Self {
            exclusions,
            frontier: vec![(root.to_path_buf(), String::new())],
        }
    }
}

impl Iterator for TreeWalker {
    type Item = DirVisit;

    fn next(&mut self) -> Option<DirVisit> {
        let (abs_dir, rel_dir) = self.frontier.pop()?;

        // Children are filtered when pushed, but the popped directory must
        // be re-checked: the root never passes through the child-level
        // check. An excluded visit is still yielded so callers can log it.
        if self.exclusions.is_excluded(&rel_dir) {
            return Some(DirVisit {
                rel_dir,
                abs_dir,
                file_names: Vec::new(),
                excluded: true,
            });
        }

        let mut subdirs = Vec::new();
        let mut file_names = Vec::new();
        for entry in WalkDir::new(&abs_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.file_type().is_dir() {
                let sub_rel = join_relative(&rel_dir, &name);
                if !self.exclusions.is_excluded(&sub_rel) {
                    subdirs.push((entry.into_path(), sub_rel));
                }
            } else if entry.file_type().is_file()
                || (entry.file_type().is_symlink() && entry.path().is_file())
            {
                // Symlinks to regular files are listed like files; the
                // read goes through the link target.
                file_names.push(name);
            }
        }

        // Reverse so the first child encountered is the next one popped.
        subdirs.reverse();
        self.frontier.extend(subdirs);

        Some(DirVisit {
            rel_dir,
            abs_dir,
            file_names,
            excluded: false,
        })
    }
}
