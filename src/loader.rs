use crate::errors::LoadError;
use crate::parse::{parse_row, MIN_COLUMNS};
use crate::types::BookingRecord;
use csv::ReaderBuilder;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// What to do with byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Policy {
    /// Substitute malformed sequences with U+FFFD and keep going.
    Lossy,
    /// Treat malformed input as a file-level failure.
    Strict,
}

/// Explicit loader configuration; nothing here is ambient or global.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub min_columns: usize,
    pub encoding: Utf8Policy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            delimiter: b',',
            min_columns: MIN_COLUMNS,
            encoding: Utf8Policy::Lossy,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Data rows seen (header excluded).
    pub total_rows: usize,
    /// Rows dropped because they failed column-count or numeric checks.
    pub skipped_rows: usize,
}

/// Load the dataset, returning every row that survives validation.
///
/// The first line is always treated as a header and skipped, with no content
/// checks. Rows that fail parsing are dropped silently; only the aggregate
/// skip count is surfaced, via the report and one debug log line. A file that
/// cannot be read at all produces an empty collection and a single logged
/// error; the underlying I/O failure never propagates to the caller.
pub fn load(path: &Path, options: &LoadOptions) -> (Vec<BookingRecord>, LoadReport) {
    let content = match read_decoded(path, options.encoding) {
        Ok(content) => content,
        Err(e) => {
            error!("failed to load dataset: {}", e);
            return (Vec::new(), LoadReport::default());
        }
    };

    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut report = LoadReport::default();
    let mut records: Vec<BookingRecord> = Vec::new();
    for result in rdr.records() {
        report.total_rows += 1;
        let raw = match result {
            Ok(r) => r,
            Err(_) => {
                report.skipped_rows += 1;
                continue;
            }
        };
        match parse_row(&raw, options.min_columns) {
            Ok(rec) => records.push(rec),
            Err(_) => report.skipped_rows += 1,
        }
    }

    if report.skipped_rows > 0 {
        debug!(
            "dropped {} of {} data rows during validation",
            report.skipped_rows, report.total_rows
        );
    }
    (records, report)
}

/// Read the whole file and decode it according to the configured policy.
/// The file handle lives only inside `fs::read`, so it is released on every
/// exit path before parsing starts.
fn read_decoded(path: &Path, encoding: Utf8Policy) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    match encoding {
        Utf8Policy::Lossy => Ok(match String::from_utf8_lossy(&bytes) {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => s,
        }),
        Utf8Policy::Strict => String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding {
            path: path.to_path_buf(),
        }),
    }
}
