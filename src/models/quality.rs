use tracing::{debug, warn};

/// Counts of values that were coerced or dropped while cleaning, so lossy
/// handling stays visible in the logs.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct DataQuality {
    pub coerced_prices: usize,
    pub coerced_quantities: usize,
    pub overflowed_rows: usize,
    pub skipped_dates: usize
}

impl DataQuality {
    pub fn is_clean(&self) -> bool {
        *self == DataQuality::default()
    }

    pub fn report(&self, stage: &str) {
        if self.is_clean() {
            debug!("{stage}: every value parsed cleanly");
            return;
        }

        warn!(
            "{stage}: {} amount(s) and {} quantity value(s) coerced to zero, {} row(s) zeroed on overflow, {} row(s) skipped for unreadable dates",
            self.coerced_prices,
            self.coerced_quantities,
            self.overflowed_rows,
            self.skipped_dates
        );
    }
}
