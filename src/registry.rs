//! Currency registry and coverage metadata

use crate::currency::Currency;
use crate::table::RateTable;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Immutable mapping from currency to its rate table
///
/// Built once at startup and passed by reference into lookups; there is no
/// ambient global state, so tests can construct synthetic registries.
#[derive(Debug, Clone, Default)]
pub struct RateRegistry {
    tables: HashMap<Currency, RateTable>,
}

/// Per-currency data coverage, as reported by the `list` command
#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub currency: Currency,
    pub earliest_date: NaiveDate,
    pub latest_date: NaiveDate,
    pub total_days: usize,
}

impl RateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Register a currency's table
    ///
    /// Empty tables are dropped: a currency with no dated records has no
    /// coverage to report and behaves as unsupported.
    pub fn insert(&mut self, currency: Currency, table: RateTable) {
        if table.is_empty() {
            debug!("dropping {} table with no records", currency);
            return;
        }
        self.tables.insert(currency, table);
    }

    /// Get the table for a currency
    pub fn table(&self, currency: Currency) -> Option<&RateTable> {
        self.tables.get(&currency)
    }

    /// Whether a currency is registered
    pub fn contains(&self, currency: Currency) -> bool {
        self.tables.contains_key(&currency)
    }

    /// Registered currencies, sorted by code
    pub fn supported(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self.tables.keys().copied().collect();
        currencies.sort();
        currencies
    }

    /// Registered currency codes, sorted
    pub fn supported_codes(&self) -> Vec<String> {
        self.supported()
            .iter()
            .map(|c| c.code().to_string())
            .collect()
    }

    /// Coverage summary for every registered currency, sorted by code
    pub fn coverage(&self) -> Vec<Coverage> {
        self.supported()
            .into_iter()
            .filter_map(|currency| {
                let table = self.tables.get(&currency)?;
                Some(Coverage {
                    currency,
                    earliest_date: table.earliest()?,
                    latest_date: table.latest()?,
                    total_days: table.len(),
                })
            })
            .collect()
    }

    /// Number of registered currencies
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no currencies are registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
