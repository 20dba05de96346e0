use std::path::PathBuf;

use clap::ArgMatches;
use colored::Colorize;
use log::info;

use crate::converter::convert_file;
use crate::discovery::discover_input_files;
use crate::errors::Result;
use crate::logging::format_message;
use crate::settings::Settings;

/// Runs the batch conversion described by the command-line arguments
pub fn perform_conversion_based_on_configuration(argument_matches: ArgMatches) -> Result<()> {
    let settings_path = PathBuf::from(argument_matches.get_one::<String>("settings").unwrap());
    let mut settings = Settings::load(&settings_path)?;

    if let Some(directory) = argument_matches.get_one::<String>("directory") {
        settings.directory = PathBuf::from(directory);
    }

    execute_based_on_settings(&settings, argument_matches.get_flag("dry"))
}

/// Converts every matching file under the configured directory
///
/// Files are processed one at a time; the first failure aborts the run and
/// leaves any already-written outputs in place. An empty match set (including
/// a missing directory) completes successfully without writing anything.
pub fn execute_based_on_settings(settings: &Settings, is_dry_run: bool) -> Result<()> {
    let files = discover_input_files(settings)?;

    if files.is_empty() {
        info!(
            "No files matching {} found in {}",
            settings.pattern,
            settings.directory.display()
        );
        return Ok(());
    }

    for file in &files {
        convert_file(file, is_dry_run)?;
    }

    let message = if is_dry_run {
        format!("Would convert {} file(s)", files.len())
    } else {
        format!("Converted {} file(s)", files.len())
    };
    info!("{}", format_message(&message, &message.green().to_string()));

    Ok(())
}
