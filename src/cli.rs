use clap::{Arg, ArgMatches, command, crate_description, crate_name, crate_version};

use crate::constants::{
    DEFAULT_SETTINGS_PATH, DIRECTORY_HELP, DRY_RUN_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP,
    SETTINGS_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::Verbosity;

/// Gets the run options from command-line arguments
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
///
/// # Errors
/// Returns an error if the command-line arguments cannot be parsed
pub fn get_run_options() -> Result<ArgMatches> {
    let argument_matches = get_matches()?;

    // Verify that the settings option exists
    argument_matches
        .get_one::<String>("settings")
        .ok_or_else(|| generic_error("Settings file option not found"))?;

    Ok(argument_matches)
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `settings`: Path to the settings file
/// - `directory`: Convert this directory instead of the configured one
/// - `dry`: Run without writing any files
/// - `verbose`: Increase verbosity level
/// - `log_file`: Append log output to a file
pub fn get_matches() -> Result<ArgMatches> {
    // define arg for reading from a specific settings file
    let arg_settings = Arg::new("settings")
        .short('c')
        .long("settings")
        .help(SETTINGS_HELP)
        .default_value(DEFAULT_SETTINGS_PATH);

    // define arg for overriding the input directory
    let arg_directory = Arg::new("directory")
        .short('d')
        .long("directory")
        .help(DIRECTORY_HELP);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    let matches = command!()
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_settings)
        .arg(arg_directory)
        .arg(arg_dry)
        .arg(arg_log_file)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count to a
/// Verbosity value (none -> Info, `-v` -> Debug, `-vv` or more -> Trace).
pub fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    let verbose_count = matches.get_count("verbose");
    Verbosity::from_occurrences(verbose_count)
}

/// Gets the log file path from the command-line arguments
///
/// An empty value disables file logging.
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}
