use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("The directory '{}' could not be read: {source}", path.display())]
    DataDirectory {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Could not open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Could not parse '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error
    },
    #[error("'{}' is missing required column(s): {}", path.display(), columns.join(", "))]
    MissingColumns {
        path: PathBuf,
        columns: Vec<String>
    },
    #[error("'{}' line {line} has {found} field(s), the header has {expected}", path.display())]
    TooManyFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize
    },
    #[error("'{}' is empty", path.display())]
    Empty {
        path: PathBuf
    }
}
