use crate::config::Settings;
use crate::ingest::{list_csv_files, FileOutcome};
use crate::models::{DataQuality, SalesRecord, TransactionRecord};
use crate::storage::{ArtifactError, ArtifactStore};
use crate::types::{coerce_amount, detect_currency, CurrencyRule, Monetary};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Turns a directory of raw transaction files into the cleaned sales summary.
pub struct IngestEngine {
    settings: Settings
}

/// Sales rows ready to be written, plus how they were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedBatch {
    pub records: Vec<SalesRecord>,
    pub rule: CurrencyRule,
    pub quality: DataQuality,
    pub files_matched: usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    Written {
        path: PathBuf,
        rows: usize,
        rule: CurrencyRule
    },
    /// No row matched the product filter; nothing was written.
    Empty
}

impl IngestEngine {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings
        }
    }

    /// Runs the whole batch and saves the summary through `store`.
    ///
    /// Only a failure to write the summary is an error. Unreadable files and bad
    /// values are logged and skipped or coerced.
    pub fn run<S: ArtifactStore>(&self, store: &S) -> Result<IngestOutcome, ArtifactError> {
        let Some(batch) = self.clean() else {
            info!("No '{}' data was extracted from any file, nothing written", self.settings.product_filter);
            return Ok(IngestOutcome::Empty);
        };

        batch.quality.report("ingest");
        store.save(&batch.records)?;

        info!(
            "Wrote {} '{}' sales record(s) from {} file(s) to {}",
            batch.records.len(),
            self.settings.product_filter,
            batch.files_matched,
            store.location().display()
        );

        Ok(IngestOutcome::Written {
            path: store.location().to_path_buf(),
            rows: batch.records.len(),
            rule: batch.rule
        })
    }

    /// Collects, detects the currency once, then transforms every matching row.
    ///
    /// Returns `None` when no row in any file matched the product filter.
    pub fn clean(&self) -> Option<CleanedBatch> {
        let batches = self.collect();
        let first = batches.first()?;

        let rule = detect_currency(
            first.iter().filter_map(|record| record.price.as_deref()),
            self.settings.default_currency_symbol
        );

        if rule.is_detected() {
            info!("Detected currency symbol '{}'", rule.symbol);
        } else {
            warn!("No currency symbol detected, parsing prices as plain numbers and writing '{}'", rule.symbol);
        }

        let (records, quality) = transform(&batches, rule);

        Some(CleanedBatch {
            records,
            rule,
            quality,
            files_matched: batches.len()
        })
    }

    fn collect(&self) -> Vec<Vec<TransactionRecord>> {
        let directory = &self.settings.data_directory;
        let product_filter = &self.settings.product_filter;

        info!("Processing '{product_filter}' sales from directory: {}", directory.display());

        let files = match list_csv_files(directory) {
            Ok(files) => files,
            Err(error) => {
                error!("{error}");
                return Vec::new();
            }
        };

        if files.is_empty() {
            error!("No CSV files found in {}, check the 'data_directory' setting", directory.display());
        }

        let mut batches = Vec::new();

        for path in files {
            debug!("Processing {}", path.display());

            match FileOutcome::collect(&path, product_filter) {
                FileOutcome::Matched(rows) => {
                    info!("{}: {} '{product_filter}' row(s)", path.display(), rows.len());
                    batches.push(rows);
                }
                FileOutcome::NoMatches => {
                    warn!("{}: no '{product_filter}' entries, skipping", path.display());
                }
                FileOutcome::Empty => {
                    warn!("{}: empty file, skipping", path.display());
                }
                FileOutcome::Failed(error) => {
                    error!("{error}, skipping file");
                }
            }
        }

        batches
    }
}

/// Prices every row in cents with the run's currency rule.
pub(crate) fn transform(batches: &[Vec<TransactionRecord>], rule: CurrencyRule) -> (Vec<SalesRecord>, DataQuality) {
    let mut quality = DataQuality::default();
    let mut records = Vec::with_capacity(batches.iter().map(Vec::len).sum());

    for record in batches.iter().flatten() {
        let (unit_price, coerced) = coerce_amount(&rule, record.price.as_deref());

        if coerced {
            quality.coerced_prices += 1;
        }

        let quantity = record.quantity().unwrap_or_else(|| {
            debug!("Quantity {:?} for {} on {} coerced to zero", record.quantity, record.region, record.date);
            quality.coerced_quantities += 1;
            0
        });

        let total = unit_price.checked_mul_quantity(quantity).unwrap_or_else(|| {
            warn!("Sales total overflowed for {} on {}, recorded as zero", record.region, record.date);
            quality.overflowed_rows += 1;
            Monetary::new()
        });

        records.push(SalesRecord {
            sales: rule.format(total),
            date: record.date.clone(),
            region: record.region.clone()
        });
    }

    (records, quality)
}
