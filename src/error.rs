//! Error types for fxhist

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for fxhist
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Currency {requested} not supported. Available currencies: {}", .available.join(", "))]
    UnsupportedCurrency {
        requested: String,
        available: Vec<String>,
    },

    #[error("No exchange rate found for {currency} within {lookback_days} days before {requested}. Available range: {earliest} to {latest}")]
    NoRateFound {
        currency: String,
        requested: NaiveDate,
        lookback_days: i64,
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date format: '{0}'. Expected formats: YYYY-MM-DD, MM/DD/YYYY, or DD-MM-YYYY")]
    InvalidDate(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for fxhist operations
pub type Result<T> = std::result::Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_currency_message() {
        let err = FxError::UnsupportedCurrency {
            requested: "XYZ".to_string(),
            available: vec!["AUD".to_string(), "EUR".to_string(), "PLN".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.contains("XYZ"));
        assert!(msg.contains("AUD, EUR, PLN"));
    }

    #[test]
    fn test_no_rate_found_message() {
        let err = FxError::NoRateFound {
            currency: "PLN".to_string(),
            requested: NaiveDate::from_ymd_opt(2009, 1, 1).unwrap(),
            lookback_days: 30,
            earliest: NaiveDate::from_ymd_opt(2012, 1, 2).unwrap(),
            latest: NaiveDate::from_ymd_opt(2025, 10, 24).unwrap(),
        };

        let msg = err.to_string();
        assert!(msg.contains("PLN"));
        assert!(msg.contains("2009-01-01"));
        assert!(msg.contains("2012-01-02"));
        assert!(msg.contains("2025-10-24"));
    }

    #[test]
    fn test_invalid_date_message() {
        let err = FxError::InvalidDate("not-a-date".to_string());
        assert!(err.to_string().contains("not-a-date"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
