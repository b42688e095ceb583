use crate::models::{DailyRegionalTotal, DataQuality, SalesRecord};
use crate::presentation::page::{product_label, render_page};
use crate::presentation::ChartFigure;
use crate::storage::{ArtifactError, ArtifactStore};
use crate::types::{coerce_amount, detect_currency, CurrencyRule, Monetary};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

/// Everything the dashboard shows, computed once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Product name used in headings, e.g. `Pink Morsel`.
    pub product: String,
    /// File name of the sales summary the data came from.
    pub source: String,
    pub rule: CurrencyRule,
    pub daily: Vec<DailyRegionalTotal>
}

impl Dashboard {
    /// Loads and aggregates the sales summary.
    ///
    /// A missing, empty or unreadable summary produces an empty dashboard rather
    /// than an error.
    pub fn initialize<S: ArtifactStore>(store: &S, default_symbol: char, product: Option<String>) -> Self {
        let location = store.location();

        let records = match store.load() {
            Ok(records) => {
                if records.is_empty() {
                    warn!("Sales summary {} is empty", location.display());
                }
                records
            }
            Err(ArtifactError::NotFound { path }) => {
                error!("Data file not found at {}, run `morsel-sales ingest` first", path.display());
                Vec::new()
            }
            Err(error) => {
                error!("{error}");
                Vec::new()
            }
        };

        let rule = detect_currency(records.iter().map(|record| record.sales.as_str()), default_symbol);
        let (daily, quality) = aggregate_daily(&records, rule);
        quality.report("presentation");

        info!("Loaded {} sales record(s) into {} daily regional total(s)", records.len(), daily.len());

        Self {
            product: product.unwrap_or_else(|| product_label(location)),
            source: location.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| location.display().to_string()),
            rule,
            daily
        }
    }

    pub fn figure(&self) -> ChartFigure {
        ChartFigure::daily_sales(&self.daily, &self.product, self.rule.symbol)
    }

    pub fn render_page(&self) -> Result<String, serde_json::Error> {
        render_page(&self.product, &self.source, &self.figure())
    }
}

/// Sums the summary per `(date, region)` in cents, sorted by date then region.
///
/// Rows with an unreadable date are skipped and counted; unreadable amounts count as zero.
pub fn aggregate_daily(records: &[SalesRecord], rule: CurrencyRule) -> (Vec<DailyRegionalTotal>, DataQuality) {
    let mut quality = DataQuality::default();
    let mut totals = BTreeMap::<(NaiveDate, String), Monetary>::new();

    for record in records {
        let Some(date) = record.parsed_date() else {
            debug!("Skipping sales row with unreadable date '{}'", record.date);
            quality.skipped_dates += 1;
            continue;
        };

        let (amount, coerced) = coerce_amount(&rule, Some(record.sales.as_str()));

        if coerced {
            quality.coerced_prices += 1;
        }

        *totals.entry((date, record.region.clone())).or_default() += amount;
    }

    let daily = totals.into_iter()
        .map(|((date, region), total)| DailyRegionalTotal { date, region, total })
        .collect();

    (daily, quality)
}
