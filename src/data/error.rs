use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a collection from a data source.  Always fatal at
/// startup; a failed reload keeps the previously loaded data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read data source '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Malformed CSV in '{0}'")]
    Csv(PathBuf, #[source] csv::Error),

    #[error("Malformed parquet file '{0}'")]
    Parquet(PathBuf, #[source] parquet::errors::ParquetError),

    #[error("Failed to decode column '{column}' in '{source_path}'")]
    Arrow {
        source_path: PathBuf,
        column: String,
        #[source]
        source: arrow::error::ArrowError,
    },

    #[error("Data source '{source_path}' is missing expected column '{column}'")]
    MissingColumn { source_path: PathBuf, column: String },

    #[error("Invalid value '{value}' in column '{column}', row {row} of '{source_path}'")]
    InvalidValue {
        source_path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("Unsupported file extension '.{extension}' for '{source_path}'")]
    UnsupportedFormat {
        source_path: PathBuf,
        extension: String,
    },
}
