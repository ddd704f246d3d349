//! Error taxonomy for the ingestion pipeline.
//!
//! Per-row failures stay inside the loader; file-level failures are reported
//! once and converted to an empty dataset. Nothing here ever reaches the user
//! as a raw I/O error or a panic.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single data row was rejected. The loader drops the row and moves on.
#[derive(Error, Debug)]
pub enum RowParseError {
    #[error("row has {found} fields, expected at least {required}")]
    IncompleteRow { found: usize, required: usize },

    #[error("field '{field}' is not numeric: '{value}'")]
    NumericField { field: &'static str, value: String },
}

/// Why the whole file could not be ingested. Logged once at the loader
/// boundary; the caller only ever sees an empty collection.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not valid UTF-8 and strict decoding was requested")]
    InvalidEncoding { path: PathBuf },
}
