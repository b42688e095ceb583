mod errors;
mod settings;

pub use errors::ConfigError;
pub use settings::{Settings, DEFAULT_CONFIG_PATH, DEFAULT_CURRENCY_SYMBOL};
