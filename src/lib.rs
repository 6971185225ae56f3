/*!
 * flatcat - Flatten directory trees into single-file text exports
 *
 * This library walks a directory tree and produces flat text exports of
 * file contents or file paths, filtered by excluded directories and file
 * extensions. Three export modes and an extension survey share one
 * traversal/filtering engine.
 */

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod path;
pub mod report;
pub mod survey;
pub mod walker;


// Re-export main components for easier access
pub use config::Config;
pub use error::{FlatcatError, Result};
pub use export::SelectionList;
pub use filter::{DirExclusions, ExtExclusions};
pub use report::{ExportReport, ExportRun, ReportFormat, Reporter};
pub use survey::ExtensionSurvey;
pub use walker::{DirVisit, TreeWalker};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
