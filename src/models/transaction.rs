use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Column names every transaction file must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["product", "price", "quantity", "date", "region"];

/// Represents a single row from a raw transaction CSV file.
///
/// `price` and `quantity` stay as text so that a bad value can be coerced to zero
/// instead of rejecting the row. `date` and `region` are passed through verbatim,
/// and read as blank when a short row leaves them out.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub product: String,
    /// Currency formatted unit price, e.g. `$3.00`.
    pub price: Option<String>,
    pub quantity: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub region: String
}

impl TransactionRecord {
    /// The quantity as a whole number, if the cell holds one.
    ///
    /// Integral decimals such as `5.0` are accepted since spreadsheet exports produce them.
    pub fn quantity(&self) -> Option<i64> {
        let value = self.quantity.as_deref()?.trim();

        value.parse::<i64>().ok().or_else(|| {
            Decimal::from_str(value).ok()
                .filter(|decimal| decimal.fract().is_zero())
                .and_then(|decimal| decimal.to_i64())
        })
    }
}
