use arrow::error::ArrowError;
use glob::PatternError;
use parquet::errors::ParquetError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the CSV-to-Parquet converter
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error while reading a delimited file into a table
    ///
    /// Covers both parse failures and schema-inference conflicts.
    TableRead { source: ArrowError, path: PathBuf },
    /// Error while persisting a table as Parquet
    TableWrite {
        source: ParquetError,
        path: PathBuf,
    },
    /// Error related to settings parsing
    SettingsParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error when a path is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::TableRead { source, path } => {
                write!(f, "Failed to read table from {}: {source}", path.display())
            }
            Error::TableWrite { source, path } => {
                write!(f, "Failed to write table to {}: {source}", path.display())
            }
            Error::SettingsParsing { detail, .. } => {
                write!(f, "Settings parsing error: {detail}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Path is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            Error::TableRead { source, .. } => Some(source),
            Error::TableWrite { source, .. } => Some(source),
            Error::SettingsParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Error::GlobPattern {
            source: err,
            pattern: String::new(),
        }
    }
}

/// Custom Result type for the CSV-to-Parquet converter
///
/// Used as the return type for most fallible functions in the crate.
///
/// # Examples
/// ```
/// use csv_to_parquet::prelude::Result;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a table read error
pub fn table_read_error(err: ArrowError, path: PathBuf) -> Error {
    Error::TableRead { source: err, path }
}

/// Helper function to create a table write error
pub fn table_write_error(err: ParquetError, path: PathBuf) -> Error {
    Error::TableWrite { source: err, path }
}

/// Helper function to create a settings parsing error
pub fn settings_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::SettingsParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
