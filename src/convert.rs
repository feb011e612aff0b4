//! Conversion of USD amounts at resolved rates

use crate::currency::{Currency, QuoteDirection};
use crate::error::{FxError, Result};
use crate::lookup::ResolvedRate;
use chrono::NaiveDate;
use serde::Serialize;

/// Display precision for converted amounts
const AMOUNT_DECIMALS: i32 = 2;
/// Display precision for rates
const RATE_DECIMALS: i32 = 4;

/// Result of converting a USD amount at a resolved rate
///
/// Carries both the rate date and the originally requested date so callers
/// can surface a "nearest available rate" notice when they differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub amount_usd: f64,
    pub converted_amount: f64,
    pub currency: Currency,
    pub rate: f64,
    pub rate_date: NaiveDate,
    pub requested_date: NaiveDate,
}

/// Convert a USD amount to the resolved rate's currency
///
/// The quote direction decides the arithmetic: `UsdToTarget` multiplies,
/// `TargetToUsd` divides. Sign is preserved and zero is a valid amount;
/// non-finite amounts fail with [`FxError::InvalidAmount`].
pub fn convert_usd(amount_usd: f64, resolved: &ResolvedRate) -> Result<Conversion> {
    if !amount_usd.is_finite() {
        return Err(FxError::InvalidAmount(format!("{amount_usd}")));
    }

    let rate = resolved.record.rate;
    // Non-positive rates are rejected at table-build time; one reaching this
    // point is a loader defect, not a user error.
    debug_assert!(rate > 0.0, "non-positive rate escaped table construction");

    let converted = match resolved.record.direction {
        QuoteDirection::UsdToTarget => amount_usd * rate,
        QuoteDirection::TargetToUsd => amount_usd / rate,
    };

    Ok(Conversion {
        amount_usd,
        converted_amount: round_to(converted, AMOUNT_DECIMALS),
        currency: resolved.currency,
        rate: round_to(rate, RATE_DECIMALS),
        rate_date: resolved.record.date,
        requested_date: resolved.requested,
    })
}

/// Round to a fixed number of decimal places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
