mod currency;
mod errors;
mod monetary;
#[cfg(test)]
mod tests;

pub use currency::{coerce_amount, detect_currency, CurrencyRule};
pub(crate) use currency::starts_number;
pub use monetary::Monetary;
