//! Per-currency rate tables
//!
//! A [`RateTable`] holds one currency's daily records in a `BTreeMap` keyed by
//! date, which keeps them sorted and duplicate-free and allows finding the
//! nearest record at or before a date with a range query.

use crate::currency::QuoteDirection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One quoted exchange rate for one currency on one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub date: NaiveDate,
    pub rate: f64,
    pub direction: QuoteDirection,
}

impl RateRecord {
    /// Create a new rate record
    pub fn new(date: NaiveDate, rate: f64, direction: QuoteDirection) -> Self {
        Self {
            date,
            rate,
            direction,
        }
    }
}

/// Date-sorted, duplicate-free collection of rate records for one currency
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    records: BTreeMap<NaiveDate, RateRecord>,
}

impl RateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Build a table from raw records, dropping invalid ones
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RateRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Insert a record, returning whether it was accepted
    ///
    /// Records with a non-positive or non-finite rate are rejected. A later
    /// record for the same date replaces the earlier one (source partitions
    /// can overlap after re-fetches).
    pub fn insert(&mut self, record: RateRecord) -> bool {
        if !record.rate.is_finite() || record.rate <= 0.0 {
            return false;
        }
        self.records.insert(record.date, record);
        true
    }

    /// Get the record for an exact date
    pub fn get(&self, date: NaiveDate) -> Option<&RateRecord> {
        self.records.get(&date)
    }

    /// Get the nearest record at or before `date`
    pub fn at_or_before(&self, date: NaiveDate) -> Option<&RateRecord> {
        self.records.range(..=date).next_back().map(|(_, r)| r)
    }

    /// Earliest dated record, if any
    pub fn earliest(&self) -> Option<NaiveDate> {
        self.records.keys().next().copied()
    }

    /// Latest dated record, if any
    pub fn latest(&self) -> Option<NaiveDate> {
        self.records.keys().next_back().copied()
    }

    /// Number of dated records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in date order
    pub fn iter(&self) -> impl Iterator<Item = &RateRecord> {
        self.records.values()
    }
}
