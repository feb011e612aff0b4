//! CSV rate-table loader
//!
//! Builds a [`RateRegistry`] from the on-disk layout produced by the
//! central-bank fetch pipeline:
//!
//! ```text
//! rates/
//!   ECB/2024/rates.csv     # EUR
//!   NBP/2024/rates.csv     # PLN
//!   RBA/2024/rates.csv     # AUD
//! ```
//!
//! Each file has a `date,rate,direction` header and one row per trading day,
//! e.g. `2025-01-17,3.9312,USD_TO_PLN`. Malformed rows are skipped with a
//! warning; only I/O failures are fatal.

use crate::currency::{Currency, QuoteDirection};
use crate::error::Result;
use crate::registry::RateRegistry;
use crate::table::{RateRecord, RateTable};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name of the per-year rate partition
const RATES_FILE: &str = "rates.csv";

/// One raw CSV row, before validation
#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    rate: f64,
    direction: String,
}

/// Load every bank directory under `rates_dir` into a registry
///
/// Bank directories map to currencies via [`Currency::from_bank_code`];
/// unknown directories are skipped. A missing `rates_dir` yields an empty
/// registry rather than an error, matching a fresh checkout with no data.
pub fn load_registry(rates_dir: &Path) -> Result<RateRegistry> {
    let mut registry = RateRegistry::new();

    if !rates_dir.is_dir() {
        warn!("rates directory {} does not exist", rates_dir.display());
        return Ok(registry);
    }

    for entry in fs::read_dir(rates_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let Some(currency) = Currency::from_bank_code(&name) else {
            warn!("skipping unknown bank directory: {name}");
            continue;
        };

        let table = load_bank_dir(&entry.path())?;
        debug!(
            "loaded {} records for {} from {}",
            table.len(),
            currency,
            entry.path().display()
        );
        registry.insert(currency, table);
    }

    Ok(registry)
}

/// Load all per-year partitions under one bank directory into a single table
fn load_bank_dir(bank_dir: &Path) -> Result<RateTable> {
    let mut table = RateTable::new();

    for entry in fs::read_dir(bank_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let rates_file = entry.path().join(RATES_FILE);
        if rates_file.is_file() {
            load_rate_file(&rates_file, &mut table)?;
        }
    }

    Ok(table)
}

/// Load a single `rates.csv` partition into `table`
///
/// Returns the number of rows accepted. Rows with unparseable dates, unknown
/// direction tags, or non-positive rates are dropped individually.
pub fn load_rate_file(path: &Path, table: &mut RateTable) -> Result<usize> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut accepted = 0;

    for row in reader.deserialize::<RawRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("{}: skipping malformed row: {e}", path.display());
                continue;
            }
        };

        let Ok(date) = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d") else {
            warn!("{}: skipping row with bad date '{}'", path.display(), row.date);
            continue;
        };

        let Some(direction) = QuoteDirection::from_tag(&row.direction) else {
            warn!(
                "{}: skipping row with unknown direction '{}'",
                path.display(),
                row.direction
            );
            continue;
        };

        if table.insert(RateRecord::new(date, row.rate, direction)) {
            accepted += 1;
        } else {
            warn!(
                "{}: skipping non-positive rate {} on {date}",
                path.display(),
                row.rate
            );
        }
    }

    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_rates(root: &Path, bank: &str, year: &str, body: &str) {
        let dir = root.join(bank).join(year);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(RATES_FILE), body).unwrap();
    }

    #[test]
    fn test_load_single_partition() {
        let tmp = TempDir::new().unwrap();
        write_rates(
            tmp.path(),
            "NBP",
            "2025",
            "date,rate,direction\n2025-01-16,3.92,USD_TO_PLN\n2025-01-17,3.9312,USD_TO_PLN\n",
        );

        let registry = load_registry(tmp.path()).unwrap();
        let table = registry.table(Currency::PLN).unwrap();

        assert_eq!(table.len(), 2);
        let record = table
            .get(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap())
            .unwrap();
        assert_eq!(record.rate, 3.9312);
        assert_eq!(record.direction, QuoteDirection::UsdToTarget);
    }

    #[test]
    fn test_load_merges_year_partitions() {
        let tmp = TempDir::new().unwrap();
        write_rates(
            tmp.path(),
            "ECB",
            "2024",
            "date,rate,direction\n2024-12-30,1.0429,EUR_TO_USD\n",
        );
        write_rates(
            tmp.path(),
            "ECB",
            "2025",
            "date,rate,direction\n2025-01-02,1.0352,EUR_TO_USD\n",
        );

        let registry = load_registry(tmp.path()).unwrap();
        let table = registry.table(Currency::EUR).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.earliest(),
            Some(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap())
        );
        assert_eq!(
            table.latest(),
            Some(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
        );
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let tmp = TempDir::new().unwrap();
        write_rates(
            tmp.path(),
            "NBP",
            "2025",
            concat!(
                "date,rate,direction\n",
                "2025-01-16,3.92,USD_TO_PLN\n",
                "garbage-date,3.93,USD_TO_PLN\n",
                "2025-01-17,not-a-number,USD_TO_PLN\n",
                "2025-01-20,-1.0,USD_TO_PLN\n",
                "2025-01-21,3.95,EUR_TO_PLN\n",
                "2025-01-22,3.96,USD_TO_PLN\n",
            ),
        );

        let registry = load_registry(tmp.path()).unwrap();
        let table = registry.table(Currency::PLN).unwrap();

        // Only the two valid rows survive
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unknown_bank_dir_skipped() {
        let tmp = TempDir::new().unwrap();
        write_rates(
            tmp.path(),
            "BOJ",
            "2025",
            "date,rate,direction\n2025-01-16,155.2,USD_TO_JPY\n",
        );

        let registry = load_registry(tmp.path()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_rates_dir_yields_empty_registry() {
        let tmp = TempDir::new().unwrap();
        let registry = load_registry(&tmp.path().join("no-such-dir")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lowercase_bank_dir_accepted() {
        let tmp = TempDir::new().unwrap();
        write_rates(
            tmp.path(),
            "rba",
            "2025",
            "date,rate,direction\n2025-01-16,0.6201,AUD_TO_USD\n",
        );

        let registry = load_registry(tmp.path()).unwrap();
        assert!(registry.contains(Currency::AUD));
    }
}
