use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ConfigError;
use crate::types::starts_number;

pub const DEFAULT_CONFIG_PATH: &str = "sales_config.yaml";
pub const DEFAULT_CURRENCY_SYMBOL: char = '$';

const DEFAULT_DATA_DIRECTORY: &str = "data";
const DEFAULT_PRODUCT_FILTER: &str = "pink morsel";
const DEFAULT_OUTPUT_DIRECTORY: &str = ".";
const ARTIFACT_SUFFIX: &str = "_sales_summary.csv";

/// Settings for an ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory scanned for `*.csv` transaction files.
    pub data_directory: PathBuf,
    /// Product name rows must match exactly (case-sensitive).
    pub product_filter: String,
    /// Symbol written to the summary when none is detected in the input.
    pub default_currency_symbol: char,
    /// Directory the sales summary is written to.
    pub output_directory: PathBuf
}

/// The document as written on disk; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsDocument {
    data_directory: Option<PathBuf>,
    product_filter: Option<String>,
    default_currency_symbol: Option<String>,
    output_directory: Option<PathBuf>
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from(DEFAULT_DATA_DIRECTORY),
            product_filter: DEFAULT_PRODUCT_FILTER.to_string(),
            default_currency_symbol: DEFAULT_CURRENCY_SYMBOL,
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
        }
    }
}

impl Settings {
    /// Loads settings from a YAML file. A missing file is an error, not a default.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::NotFound { path: path.to_path_buf() },
            _ => ConfigError::Read { path: path.to_path_buf(), source }
        })?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: serde_yaml::Value = serde_yaml::from_str(content)?;

        if value.is_null() {
            return Ok(Self::default());
        }

        let document: SettingsDocument = serde_yaml::from_value(value)?;

        Self::try_from(document)
    }

    /// `<product lower-cased, spaces as underscores>_sales_summary.csv`
    pub fn artifact_file_name(&self) -> String {
        format!("{}{}", self.product_filter.replace(' ', "_").to_lowercase(), ARTIFACT_SUFFIX)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.output_directory.join(self.artifact_file_name())
    }
}

impl TryFrom<SettingsDocument> for Settings {
    type Error = ConfigError;

    fn try_from(document: SettingsDocument) -> Result<Self, Self::Error> {
        let defaults = Settings::default();

        let default_currency_symbol = match document.default_currency_symbol {
            Some(symbol) => parse_symbol(&symbol)?,
            None => defaults.default_currency_symbol
        };

        Ok(Self {
            data_directory: document.data_directory.unwrap_or(defaults.data_directory),
            product_filter: document.product_filter.unwrap_or(defaults.product_filter),
            default_currency_symbol,
            output_directory: document.output_directory.unwrap_or(defaults.output_directory)
        })
    }
}

fn parse_symbol(value: &str) -> Result<char, ConfigError> {
    let mut characters = value.chars();

    match (characters.next(), characters.next()) {
        (Some(symbol), None) if !symbol.is_whitespace() && !starts_number(symbol) => Ok(symbol),
        _ => Err(ConfigError::InvalidCurrencySymbol(value.to_string()))
    }
}
