//! Global error handling for flatcat
//!
//! Only operation-fatal conditions become `FlatcatError`: an unusable root
//! or selection list, and failures creating or writing the output artifact.
//! Per-file read failures are swallowed into artifact markers and log
//! lines by the export operations themselves.

use std::io;
use thiserror::Error;

/// Global error type for flatcat operations
#[derive(Error, Debug)]
pub enum FlatcatError {
    /// Root directory missing/invalid, or an empty selection list
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system errors, including output artifact write failures
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for flatcat operations
pub type Result<T> = std::result::Result<T, FlatcatError>;

/// Creates a FlatcatError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::FlatcatError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow converting FlatcatError to io::Error for callers working in
// io::Result contexts, including the tests
impl From<FlatcatError> for io::Error {
    fn from(err: FlatcatError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
