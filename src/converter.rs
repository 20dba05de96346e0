//! CSV-to-Parquet conversion for a single input file
//!
//! Each input is fully loaded into memory, written out, and released before
//! the next input begins. The Parquet writer is opened and closed inside the
//! per-file step so no file handle outlives its conversion.

use std::fs::File;
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::constants::{CSV_SUFFIX, PARQUET_SUFFIX};
use crate::errors::{
    Result, file_operation_error, invalid_filename_error, table_read_error, table_write_error,
};

/// A fully materialised table read from one delimited input file
#[derive(Debug, Clone)]
pub struct Table {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Table {
    /// The inferred schema of the table
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Total number of rows across all record batches
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    /// Number of columns in the table
    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }
}

/// Reads a comma-delimited file with a header row into memory
///
/// Column types are inferred from the data at the reader's defaults; blank
/// fields read as null. Parse failures and schema-inference conflicts both
/// surface as a table read error.
pub fn load_table(path: &Path) -> Result<Table> {
    let mut file =
        File::open(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "open"))?;

    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(&mut file, None)
        .map_err(|e| table_read_error(e, path.to_path_buf()))?;
    file.rewind()
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "rewind"))?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .build(file)
        .map_err(|e| table_read_error(e, path.to_path_buf()))?;
    let schema = reader.schema();

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch.map_err(|e| table_read_error(e, path.to_path_buf()))?);
    }

    debug!(
        "Loaded {} row(s) and {} column(s) from {}",
        batches.iter().map(RecordBatch::num_rows).sum::<usize>(),
        schema.fields().len(),
        path.display()
    );

    Ok(Table { schema, batches })
}

/// Derives the output path from an input path
///
/// Substitutes ".parquet" for the first ".csv" occurrence anywhere in the
/// path string, so `a.csv.csv` derives to `a.parquet.csv` and a matched name
/// with no ".csv" substring (such as `weird_csv`) derives to itself.
pub fn derive_output_path(input: &Path) -> Result<PathBuf> {
    let input_string = input
        .to_str()
        .ok_or_else(|| invalid_filename_error(input.to_path_buf()))?;

    Ok(PathBuf::from(
        input_string.replacen(CSV_SUFFIX, PARQUET_SUFFIX, 1),
    ))
}

/// Persists a table as Parquet with default writer settings
///
/// The embedded schema carries the column names and the types inferred on
/// read. An existing file at `path` is overwritten without warning. The
/// writer is closed before returning so the file footer is complete.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let file =
        File::create(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "create"))?;

    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, table.schema.clone(), Some(props))
        .map_err(|e| table_write_error(e, path.to_path_buf()))?;

    for batch in &table.batches {
        writer
            .write(batch)
            .map_err(|e| table_write_error(e, path.to_path_buf()))?;
    }

    writer
        .close()
        .map_err(|e| table_write_error(e, path.to_path_buf()))?;

    Ok(())
}

/// Converts one input file, returning the path written
///
/// With `dry_run` set, only the output path is derived and logged; nothing
/// is loaded or written.
pub fn convert_file(input: &Path, dry_run: bool) -> Result<PathBuf> {
    let output = derive_output_path(input)?;

    if dry_run {
        info!(
            "Would convert {} -> {}",
            input.display(),
            output.display()
        );
        return Ok(output);
    }

    let table = load_table(input)?;
    write_table(&table, &output)?;

    info!(
        "Converted {} -> {} ({} rows, {} columns)",
        input.display(),
        output.display(),
        table.num_rows(),
        table.num_columns()
    );

    Ok(output)
}
