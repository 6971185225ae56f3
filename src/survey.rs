/*!
 * Extension discovery over the filtered tree
 *
 * Builds an index of every extension found in non-excluded directories,
 * keeping a bounded sample of example paths per extension. Used as a
 * preview before deciding which extensions to exclude from compilation;
 * extension exclusions themselves are deliberately not applied here.
 */

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::filter::DirExclusions;
use crate::path::{file_extension, join_relative};
use crate::report::ExportRun;
use crate::walker::TreeWalker;

/// How many example paths are kept per extension.
const EXAMPLES_PER_EXTENSION: usize = 3;

/// Index of extensions found under a root.
#[derive(Debug, Default)]
pub struct ExtensionSurvey {
    /// Extension to up to three example relative paths, sorted by extension
    pub extensions: BTreeMap<String, Vec<String>>,
    /// Every file seen in a non-excluded directory, extension or not
    pub files_scanned: u64,
}

/// Scan the tree and index extensions with example paths.
///
/// Files without an extension count toward `files_scanned` but are never
/// indexed. Once an extension holds three examples, further files of that
/// extension only advance the counter.
pub fn survey(root: &Path, exclusions: &DirExclusions, run: &mut ExportRun) -> ExtensionSurvey {
    let mut result = ExtensionSurvey::default();

    for visit in TreeWalker::new(root, exclusions.clone()) {
        if visit.excluded {
            run.log(format!(
                "Skipping excluded directory: {}",
                visit.display_dir()
            ));
            continue;
        }
        for name in &visit.file_names {
            result.files_scanned += 1;
            if let Some(ext) = file_extension(name) {
                let examples = result.extensions.entry(ext).or_default();
                if examples.len() < EXAMPLES_PER_EXTENSION {
                    examples.push(join_relative(&visit.rel_dir, name));
                }
            }
        }
    }

    result
}

impl ExtensionSurvey {
    /// Human-readable report: extensions in sorted order with their
    /// example paths, followed by the total file count.
    pub fn render_report(&self) -> String {
        let mut out = String::new();

        if self.extensions.is_empty() {
            out.push_str("No files with extensions found in non-excluded directories.\n");
        } else {
            out.push_str(
                "Found extensions (up to 3 examples each, from non-excluded directories):\n",
            );
            for (ext, examples) in &self.extensions {
                let _ = writeln!(out, "\n{}:", ext);
                for example in examples {
                    let _ = writeln!(out, "  - {}", example);
                }
            }
        }

        let _ = writeln!(
            out,
            "Total files scanned (in non-excluded dirs): {}",
            self.files_scanned
        );
        out
    }
}
