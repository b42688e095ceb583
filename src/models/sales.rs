use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::Monetary;

/// Slash dates are month first, e.g. `01/02/2020` is January 2nd.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y", "%d %b %Y"];
const DATE_TIME_FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%m/%d/%Y %H:%M:%S"];

/// One row of the cleaned sales summary, the file shared by ingestion and presentation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Currency formatted total for the source row, e.g. `$12.50`.
    pub sales: String,
    pub date: String,
    pub region: String
}

impl SalesRecord {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let value = self.date.trim();

        DATE_FORMATS.iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            .or_else(|| DATE_TIME_FORMATS.iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|moment| moment.date()))
            .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|moment| moment.date_naive()))
    }
}

/// Total sales for one region on one day.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DailyRegionalTotal {
    pub date: NaiveDate,
    pub region: String,
    pub total: Monetary
}

impl DailyRegionalTotal {
    pub fn total_sales(&self) -> f64 {
        self.total.to_f64()
    }
}
