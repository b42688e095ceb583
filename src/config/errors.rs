use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file '{}' not found", path.display())]
    NotFound {
        path: PathBuf
    },
    #[error("Configuration file '{}' could not be read: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Default currency symbol must be a single non-numeric character, got '{0}'")]
    InvalidCurrencySymbol(String)
}
