//! Backward-search rate resolution
//!
//! Resolves a (currency, date) request to a concrete rate record: exact date
//! first, then strictly backwards day by day within a bounded lookback
//! window. Weekends and holidays thus fall back to the preceding trading day;
//! a future rate is never substituted for a past gap.

use crate::currency::Currency;
use crate::error::{FxError, Result};
use crate::registry::RateRegistry;
use crate::table::RateRecord;
use chrono::NaiveDate;

/// Default maximum backward search, in days
///
/// Long enough to bridge weekends and multi-day holiday clusters in the
/// central-bank calendars covered here.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// Policy for resolving non-trading days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupPolicy {
    /// Maximum number of days to search backwards from the requested date
    pub max_lookback_days: i64,
}

impl LookupPolicy {
    /// Create a policy with a custom lookback window
    pub fn with_lookback(max_lookback_days: i64) -> Self {
        Self { max_lookback_days }
    }
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            max_lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

/// A rate record resolved for a concrete request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRate {
    pub currency: Currency,
    pub record: RateRecord,
    /// The date as originally requested; `record.date` is the date used
    pub requested: NaiveDate,
}

impl ResolvedRate {
    /// Days stepped back from the requested date (0 for an exact hit)
    pub fn days_back(&self) -> i64 {
        (self.requested - self.record.date).num_days()
    }
}

/// Resolve a requested (currency, date) pair to a rate record
///
/// Returns [`FxError::UnsupportedCurrency`] if the currency has no table, and
/// [`FxError::NoRateFound`] if no record exists within the lookback window —
/// whether because the request precedes the earliest available date or
/// because the window is exhausted across a gap.
pub fn resolve(
    registry: &RateRegistry,
    currency: Currency,
    requested: NaiveDate,
    policy: LookupPolicy,
) -> Result<ResolvedRate> {
    let unsupported = || FxError::UnsupportedCurrency {
        requested: currency.code().to_string(),
        available: registry.supported_codes(),
    };

    let table = registry.table(currency).ok_or_else(unsupported)?;
    let (Some(earliest), Some(latest)) = (table.earliest(), table.latest()) else {
        // Registry drops empty tables, but don't rely on that here.
        return Err(unsupported());
    };

    if let Some(record) = table.at_or_before(requested) {
        let stepped = (requested - record.date).num_days();
        if stepped <= policy.max_lookback_days {
            return Ok(ResolvedRate {
                currency,
                record: *record,
                requested,
            });
        }
    }

    Err(FxError::NoRateFound {
        currency: currency.code().to_string(),
        requested,
        lookback_days: policy.max_lookback_days,
        earliest,
        latest,
    })
}

/// Parse a requested date from common input formats
///
/// Accepted: `YYYY-MM-DD`, `MM/DD/YYYY`, `DD-MM-YYYY`, `YYYY/MM/DD`,
/// `DD/MM/YYYY` — tried in that order, so US slash dates win over EU ones
/// when ambiguous.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    const FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d", "%d/%m/%Y"];

    let trimmed = input.trim();
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(FxError::InvalidDate(input.to_string()))
}
