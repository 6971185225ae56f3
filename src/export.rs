/*!
 * Export operations: source compilation, path export, selective export
 *
 * All three stream into a freshly created (truncated) artifact through a
 * buffered writer that stays open for the whole run. Per-file read
 * failures become inline markers and log lines; only artifact write
 * failures abort an operation.
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ensure;
use crate::error::Result;
use crate::filter::{DirExclusions, ExtExclusions};
use crate::path::{file_extension, join_relative, normalize, read_lossy};
use crate::report::ExportRun;
use crate::walker::TreeWalker;

/// Progress log interval for path export.
const PATH_PROGRESS_INTERVAL: usize = 200;

/// Write one path-delimited content block, or an inline error marker when
/// the file cannot be read. Selective mode labels its error markers with
/// the offending path.
fn write_file_block<W: Write>(
    out: &mut W,
    full_path: &Path,
    rel_path: &str,
    label_read_errors: bool,
    run: &mut ExportRun,
) -> Result<()> {
    writeln!(out, "--- RELATIVE PATH: {} ---", rel_path)?;
    match read_lossy(full_path) {
        Ok(content) => {
            out.write_all(content.as_bytes())?;
            out.write_all(b"\n\n")?;
            run.files_written += 1;
        }
        Err(err) => {
            if label_read_errors {
                writeln!(out, "ERROR READING FILE ({}): {}\n", rel_path, err)?;
            } else {
                writeln!(out, "ERROR READING FILE: {}\n", err)?;
            }
            run.log(format!("Error reading {}: {}", rel_path, err));
            run.errors += 1;
        }
    }
    Ok(())
}

/// Concatenate every qualifying file under `root` into one artifact with
/// path-delimited headers. Directory exclusions prune the walk; extension
/// exclusions drop individual files (an empty set drops nothing, and
/// files without an extension are never extension-excluded).
pub fn compile(
    root: &Path,
    dirs: &DirExclusions,
    exts: &ExtExclusions,
    output_path: &Path,
    run: &mut ExportRun,
) -> Result<()> {
    let mut out = BufWriter::new(File::create(output_path)?);

    for visit in TreeWalker::new(root, dirs.clone()) {
        if visit.excluded {
            run.log(format!("Skipping excluded dir: {}", visit.display_dir()));
            continue;
        }
        for name in &visit.file_names {
            if let Some(ext) = file_extension(name) {
                if exts.is_excluded(&ext) {
                    continue;
                }
            }
            // Open through the entry's real path; the normalized relative
            // path is only ever written to the header.
            let rel_path = join_relative(&visit.rel_dir, name);
            run.log(format!("Processing: {}", rel_path));
            write_file_block(&mut out, &visit.abs_dir.join(name), &rel_path, false, run)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Write one normalized relative path per line, in traversal order. No
/// extension filter in this mode.
pub fn export_paths(
    root: &Path,
    dirs: &DirExclusions,
    output_path: &Path,
    run: &mut ExportRun,
) -> Result<()> {
    let mut out = BufWriter::new(File::create(output_path)?);

    for visit in TreeWalker::new(root, dirs.clone()) {
        if visit.excluded {
            run.log(format!("Skipping excluded dir: {}", visit.display_dir()));
            continue;
        }
        for name in &visit.file_names {
            writeln!(out, "{}", join_relative(&visit.rel_dir, name))?;
            run.paths_written += 1;
            if run.paths_written % PATH_PROGRESS_INTERVAL == 0 {
                run.log(format!("Exported {} paths...", run.paths_written));
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Ordered relative paths for selective export, as typed by the user.
#[derive(Debug, Clone)]
pub struct SelectionList {
    paths: Vec<String>,
}

impl SelectionList {
    /// Split raw multi-line text on line breaks, trim, normalize, drop
    /// blank lines. Input order is preserved and drives output order.
    pub fn parse(raw: &str) -> Self {
        let paths = raw
            .lines()
            .map(|line| normalize(line.trim()))
            .filter(|p| !p.is_empty())
            .collect();
        Self { paths }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

/// Concatenate an explicit list of relative paths into one artifact, with
/// no traversal. Entries that do not resolve to a regular file become
/// SKIPPED markers and count as errors; the run continues.
pub fn export_selected(
    root: &Path,
    selection: &SelectionList,
    output_path: &Path,
    run: &mut ExportRun,
) -> Result<()> {
    // Validated before any output I/O, distinct from a run that merely
    // writes zero files.
    ensure!(!selection.is_empty(), Config, "no valid file paths to process");

    let mut out = BufWriter::new(File::create(output_path)?);

    for rel_path in selection.iter() {
        let full_path = root.join(rel_path);
        if !full_path.is_file() {
            run.log(format!("SKIPPING (Not a file or not found): {}", rel_path));
            writeln!(out, "--- SKIPPED (Not a file or not found): {} ---\n", rel_path)?;
            run.errors += 1;
            continue;
        }

        run.log(format!("Processing: {}", rel_path));
        write_file_block(&mut out, &full_path, rel_path, true, run)?;
    }

    out.flush()?;
    Ok(())
}
