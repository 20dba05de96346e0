pub use cli::*;
pub use configuration::*;
pub use converter::*;
pub use discovery::*;
pub use errors::*;
pub use settings::*;

pub mod cli;
pub mod configuration;
pub mod constants;
pub mod converter;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod settings;

pub mod prelude {
    pub use crate::errors::{
        file_operation_error, generic_error, glob_pattern_error, invalid_filename_error,
        settings_parsing_error, table_read_error, table_write_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::get_run_options;
    pub use crate::logging::{Verbosity, format_message, init_logger};
    pub use crate::perform_conversion_based_on_configuration;
}
