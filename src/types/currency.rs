use tracing::debug;

use crate::types::Monetary;

/// The currency symbol and leading-character strip count applied to every amount
/// in one processing run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CurrencyRule {
    pub symbol: char,
    pub strip: usize
}

impl CurrencyRule {
    /// A symbol was found on the first amount: strip it from every value.
    pub fn detected(symbol: char) -> Self {
        Self { symbol, strip: 1 }
    }

    /// No symbol was found: parse values as they are and use the default for output only.
    pub fn fallback(default_symbol: char) -> Self {
        Self { symbol: default_symbol, strip: 0 }
    }

    pub fn is_detected(&self) -> bool {
        self.strip > 0
    }

    /// Removes `strip` leading characters. Counts chars, not bytes, so `€` and `£` are safe.
    pub fn strip<'a>(&self, value: &'a str) -> &'a str {
        value.char_indices()
            .nth(self.strip)
            .map_or("", |(index, _)| &value[index..])
    }

    pub fn format(&self, amount: Monetary) -> String {
        format!("{}{}", self.symbol, amount)
    }
}

/// Decides the currency rule for a whole run from the first non-empty value.
///
/// A leading character that could start a number (digit, sign or decimal point)
/// is not a symbol; the run then falls back to `default_symbol` with no stripping.
pub fn detect_currency<'a, I>(values: I, default_symbol: char) -> CurrencyRule
where
    I: IntoIterator<Item = &'a str>
{
    let first = values.into_iter()
        .map(str::trim)
        .find(|value| !value.is_empty());

    match first.and_then(|value| value.chars().next()) {
        Some(symbol) if !starts_number(symbol) => CurrencyRule::detected(symbol),
        _ => CurrencyRule::fallback(default_symbol)
    }
}

/// Strips and parses one amount, coercing anything unparseable to zero.
///
/// The returned flag is `true` when the value was coerced so callers can count it.
pub fn coerce_amount(rule: &CurrencyRule, raw: Option<&str>) -> (Monetary, bool) {
    let Some(raw) = raw else {
        debug!("Missing amount coerced to zero");
        return (Monetary::new(), true)
    };

    match Monetary::parse_decimal(rule.strip(raw.trim())) {
        Ok(amount) => (amount, false),
        Err(error) => {
            debug!("Amount '{raw}' coerced to zero: {error}");
            (Monetary::new(), true)
        }
    }
}

pub(crate) fn starts_number(character: char) -> bool {
    character.is_ascii_digit() || matches!(character, '.' | '-' | '+')
}
