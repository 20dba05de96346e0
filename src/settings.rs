use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{CSV_GLOB, DATA_DIR_DEFAULT};
use crate::errors::{Result, file_operation_error, invalid_filename_error, settings_parsing_error};

/// Settings for a conversion run
///
/// Loaded from an optional YAML file; every field falls back to its default
/// when absent, so running without a settings file converts `data/*csv`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory scanned for input files
    pub directory: PathBuf,
    /// Glob applied to file names inside the directory
    pub pattern: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            directory: PathBuf::from(DATA_DIR_DEFAULT),
            pattern: CSV_GLOB.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let raw = read_to_string(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
        serde_yaml::from_str(&raw).map_err(|e| {
            settings_parsing_error(e, &format!("invalid settings file {}", path.display()))
        })
    }

    /// The full glob pattern covering matching files under the directory
    pub fn glob_pattern(&self) -> Result<String> {
        let full = self.directory.join(&self.pattern);
        full.to_str()
            .map(|s| s.to_string())
            .ok_or_else(|| invalid_filename_error(full.clone()))
    }
}
