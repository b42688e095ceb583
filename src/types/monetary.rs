use crate::types::errors::MonetaryError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: u32 = 2;
const SCALE: i64 = 10i64.pow(DECIMAL_PLACES);

/// An exact monetary amount stored as a whole number of cents.
///
/// All multiplication and summation happens on the integer representation, the
/// value only becomes a float when it is handed to the chart via [`Monetary::to_f64`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(i64);

impl Monetary {
    pub fn new() -> Self {
        Monetary(0)
    }

    #[cfg(test)]
    pub fn from_cents(cents: i64) -> Self {
        Monetary(cents)
    }

    #[cfg(test)]
    pub fn cents(self) -> i64 {
        self.0
    }

    #[cfg(test)]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    /// Multiplies a unit price by a whole quantity without leaving integer cents.
    pub fn checked_mul_quantity(self, quantity: i64) -> Option<Monetary> {
        self.0.checked_mul(quantity).map(Monetary)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Parses a decimal literal into cents.
    ///
    /// The text is parsed exactly (plain or scientific notation), scaled by 100 and
    /// rounded half away from zero, so `"0.125"` becomes 13 cents and `"-0.125"`
    /// becomes -13 cents.
    pub fn parse_decimal(value: &str) -> Result<Self, MonetaryError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map_err(|error| {
                MonetaryError::InvalidFormat(format!("Value '{value}' is not a decimal number: {error}"))
            })?;

        let cents = decimal.checked_mul(Decimal::from(SCALE))
            .ok_or(MonetaryError::Overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        cents.to_i64().map(Monetary).ok_or(MonetaryError::Overflow)
    }
}

impl AddAssign<Monetary> for Monetary {
    fn add_assign(&mut self, rhs: Monetary) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Monetary AddAssign error: Overflow")
        }
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let integer = abs / SCALE as u64;
        let fraction = abs % SCALE as u64;
        write!(formatter, "{}{}.{:0width$}", sign, integer, fraction, width = DECIMAL_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Monetary::parse_decimal(value)
    }
}
