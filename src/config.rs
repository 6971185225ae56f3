/*!
 * Configuration handling for flatcat
 */

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::error::{FlatcatError, Result};

/// Default artifact name for source compilation
pub const COMPILED_SOURCES_FILENAME: &str = "compiled_sources.txt";
/// Default artifact name for path export
pub const EXPORTED_PATHS_FILENAME: &str = "exported_paths.txt";
/// Default artifact name for selective export
pub const SELECTIVE_EXPORT_FILENAME: &str = "selectively_exported_files.txt";

/// Command-line arguments for flatcat
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "flatcat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flatten directory trees into single-file text exports",
    long_about = "Walks a directory tree and produces flat text exports of file contents or file paths, filtered by excluded directories and file extensions."
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum, global = true)]
    pub generate: Option<Shell>,
}

/// Export operations, one per mode
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Concatenate file contents into one artifact with path headers
    Compile {
        /// Root directory to walk
        #[clap(default_value = ".")]
        directory: String,

        /// Comma-separated list of relative directory paths to exclude
        #[clap(long, default_value = "")]
        exclude_dirs: String,

        /// Comma-separated list of file extensions to exclude
        #[clap(long, default_value = "")]
        exclude_extensions: String,

        /// Output file name
        #[clap(short, long, default_value = COMPILED_SOURCES_FILENAME)]
        output: String,
    },

    /// List every relative path into one artifact, one per line
    Paths {
        /// Root directory to walk
        #[clap(default_value = ".")]
        directory: String,

        /// Comma-separated list of relative directory paths to exclude
        #[clap(long, default_value = "")]
        exclude_dirs: String,

        /// Output file name
        #[clap(short, long, default_value = EXPORTED_PATHS_FILENAME)]
        output: String,
    },

    /// Concatenate an explicit list of relative paths into one artifact
    Select {
        /// Root directory the listed paths are relative to
        #[clap(default_value = ".")]
        directory: String,

        /// File holding relative paths, one per line ("-" reads stdin)
        #[clap(short, long, default_value = "-")]
        list: String,

        /// Output file name
        #[clap(short, long, default_value = SELECTIVE_EXPORT_FILENAME)]
        output: String,
    },

    /// Survey extensions found under the root, with example paths
    Extensions {
        /// Root directory to walk
        #[clap(default_value = ".")]
        directory: String,

        /// Comma-separated list of relative directory paths to exclude
        #[clap(long, default_value = "")]
        exclude_dirs: String,
    },
}

/// Validated settings shared by every operation. Built once per run and
/// passed explicitly; operations never read shared mutable state.
#[derive(Clone, Debug)]
pub struct Config {
    /// Traversal base; must exist and be a directory
    pub root_dir: PathBuf,
}

impl Config {
    pub fn new(directory: &str) -> Self {
        Self {
            root_dir: PathBuf::from(directory),
        }
    }

    /// Validate the configuration before any traversal
    pub fn validate(&self) -> Result<()> {
        if !self.root_dir.is_dir() {
            return Err(FlatcatError::Config(format!(
                "root directory not set or not a directory: {}",
                self.root_dir.display()
            )));
        }
        Ok(())
    }
}
