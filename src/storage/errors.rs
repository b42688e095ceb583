use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Sales summary not found at '{}'", path.display())]
    NotFound {
        path: PathBuf
    },
    #[error("I/O error on sales summary '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("CSV error on sales summary '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error
    }
}
