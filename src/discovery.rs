//! Input file discovery
//!
//! This module enumerates the files a conversion run will process.

use std::path::PathBuf;

use glob::glob;
use log::debug;

use crate::errors::{Error, Result, file_operation_error, glob_pattern_error};
use crate::settings::Settings;

/// Finds all input files matching the configured glob
///
/// Matching is non-recursive: `*` does not cross path separators, so only
/// entries directly inside the configured directory are returned. A missing
/// directory produces an empty list rather than an error.
///
/// # Arguments
/// * `settings` - The run settings holding the directory and pattern
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The matched paths, in the order the glob walk
///   yields them (callers must not rely on any particular order)
///
/// # Errors
/// Returns an error if the combined pattern is invalid or a matched entry
/// cannot be accessed
pub fn discover_input_files(settings: &Settings) -> Result<Vec<PathBuf>> {
    let pattern = settings.glob_pattern()?;
    debug!("Scanning for input files: {pattern}");

    let pattern_results = glob(&pattern).map_err(|e| glob_pattern_error(e, &pattern))?;

    let files: Vec<PathBuf> = pattern_results
        .map(|res| {
            res.map_err(|e| {
                let path = e.path().to_path_buf();
                file_operation_error(e.into_error(), path, "access")
            })
        })
        .collect::<std::result::Result<Vec<PathBuf>, Error>>()?;

    debug!("Found {} input file(s)", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir};
    use tempfile::tempdir;

    fn settings_for(directory: PathBuf) -> Settings {
        Settings {
            directory,
            ..Settings::default()
        }
    }

    #[test]
    fn test_matches_names_ending_in_csv() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("notes.csv")).unwrap();
        File::create(temp.path().join("weird_csv")).unwrap();
        File::create(temp.path().join("report.csv.bak")).unwrap();
        File::create(temp.path().join("readme.txt")).unwrap();

        let mut files = discover_input_files(&settings_for(temp.path().to_path_buf())).unwrap();
        files.sort();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["notes.csv", "weird_csv"]);
    }

    #[test]
    fn test_does_not_recurse_into_subdirectories() {
        let temp = tempdir().unwrap();
        create_dir(temp.path().join("nested")).unwrap();
        File::create(temp.path().join("nested").join("inner.csv")).unwrap();

        let files = discover_input_files(&settings_for(temp.path().to_path_buf())).unwrap();
        assert!(files.is_empty(), "Nested files should not be discovered");
    }

    #[test]
    fn test_missing_directory_yields_empty_set() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("no_such_dir");

        let files = discover_input_files(&settings_for(missing)).unwrap();
        assert!(
            files.is_empty(),
            "A missing directory is an empty match set, not an error"
        );
    }
}
