/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Directory scanned for input files when no override is given
pub const DATA_DIR_DEFAULT: &str = "data";

/// Glob applied to file names inside the data directory
///
/// The pattern ends in the literal substring "csv" with no dot, so
/// `notes.csv` and `weird_csv` both match while `report.csv.bak` does not.
pub const CSV_GLOB: &str = "*csv";

/// Substring replaced when deriving an output path
pub const CSV_SUFFIX: &str = ".csv";

/// Substring substituted into the derived output path
pub const PARQUET_SUFFIX: &str = ".parquet";

/// Default path for the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "csv2parquet.yaml";

/// Default log file; an empty value means console logging only
pub const LOG_FILE_DEFAULT: &str = "";

/// Help text for the settings command-line option
pub const SETTINGS_HELP: &str = "Read from a specific settings file";

/// Help text for the directory command-line option
pub const DIRECTORY_HELP: &str = "Convert files in this directory instead of ./data";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Append log output to this file";
