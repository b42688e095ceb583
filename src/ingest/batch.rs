use crate::ingest::IngestError;
use crate::models::{TransactionRecord, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, Trim};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// What one transaction file contributed to the batch.
#[derive(Debug)]
pub enum FileOutcome {
    Matched(Vec<TransactionRecord>),
    NoMatches,
    Empty,
    Failed(IngestError)
}

impl FileOutcome {
    pub fn collect(path: &Path, product_filter: &str) -> Self {
        match read_matching_rows(path, product_filter) {
            Ok(rows) if rows.is_empty() => FileOutcome::NoMatches,
            Ok(rows) => FileOutcome::Matched(rows),
            Err(IngestError::Empty { .. }) => FileOutcome::Empty,
            Err(error) => FileOutcome::Failed(error)
        }
    }
}

/// Lists `*.csv` files in `directory`, sorted by file name.
///
/// Sorting fixes which file is "first" and therefore which file the currency
/// symbol is detected from.
pub fn list_csv_files(directory: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let to_error = |source| IngestError::DataDirectory { path: directory.to_path_buf(), source };

    let mut files = Vec::new();

    for entry in fs::read_dir(directory).map_err(to_error)? {
        let path = entry.map_err(to_error)?.path();

        if path.is_file() && path.extension().is_some_and(|extension| extension == "csv") {
            files.push(path);
        }
    }

    files.sort_by(|left, right| left.file_name().cmp(&right.file_name()));

    Ok(files)
}

/// Reads every row of `path` whose product equals `product_filter` exactly.
///
/// Short rows are kept: missing trailing cells read as blank. A row with more
/// cells than the header, or any other CSV error, fails the whole file so a
/// partially readable file never contributes half of its rows.
pub fn read_matching_rows(path: &Path, product_filter: &str) -> Result<Vec<TransactionRecord>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;
    let to_error = |source| IngestError::Csv { path: path.to_path_buf(), source };

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers().map_err(to_error)?.clone();

    if headers.iter().all(str::is_empty) {
        return Err(IngestError::Empty { path: path.to_path_buf() });
    }

    let missing: Vec<String> = REQUIRED_COLUMNS.iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { path: path.to_path_buf(), columns: missing });
    }

    let mut rows = Vec::new();

    for result in reader.records() {
        let row = result.map_err(to_error)?;

        if row.len() > headers.len() {
            return Err(IngestError::TooManyFields {
                path: path.to_path_buf(),
                line: row.position().map_or(0, |position| position.line()),
                expected: headers.len(),
                found: row.len()
            });
        }

        let record: TransactionRecord = row.deserialize(Some(&headers)).map_err(to_error)?;

        if record.product == product_filter {
            rows.push(record);
        }
    }

    Ok(rows)
}
