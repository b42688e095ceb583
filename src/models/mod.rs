mod quality;
mod sales;
mod transaction;

pub use quality::DataQuality;
pub use sales::{DailyRegionalTotal, SalesRecord};
pub use transaction::{TransactionRecord, REQUIRED_COLUMNS};
