use csv_to_parquet::cli::{get_log_file, get_verbosity};
use csv_to_parquet::prelude::*;

fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    let argument_matches = get_run_options()?;

    let verbosity = get_verbosity(&argument_matches);
    let log_file = get_log_file(&argument_matches);
    init_logger(verbosity, &log_file)?;

    perform_conversion_based_on_configuration(argument_matches)?;

    Ok(())
}
