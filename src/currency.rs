//! Currency codes, central-bank sources, and quote directions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported target currencies (ISO 4217 codes)
///
/// Each currency is backed by the daily reference rates of one central bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Australian Dollar (Reserve Bank of Australia)
    AUD,
    /// Euro (European Central Bank)
    EUR,
    /// Polish Zloty (Narodowy Bank Polski)
    PLN,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AUD => "AUD",
            Currency::EUR => "EUR",
            Currency::PLN => "PLN",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "AUD" => Some(Currency::AUD),
            "EUR" => Some(Currency::EUR),
            "PLN" => Some(Currency::PLN),
            _ => None,
        }
    }

    /// Code of the central bank publishing this currency's rates
    pub fn bank_code(&self) -> &'static str {
        match self {
            Currency::AUD => "RBA",
            Currency::EUR => "ECB",
            Currency::PLN => "NBP",
        }
    }

    /// Resolve a central-bank code (directory name in the rates tree)
    pub fn from_bank_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RBA" => Some(Currency::AUD),
            "ECB" => Some(Currency::EUR),
            "NBP" => Some(Currency::PLN),
            _ => None,
        }
    }

    /// Get all supported currencies, in code order
    pub fn all() -> Vec<Currency> {
        vec![Currency::AUD, Currency::EUR, Currency::PLN]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which way a source quotes its daily rate against USD
///
/// NBP publishes `USD_TO_PLN` (1 USD = X PLN) while ECB and RBA publish
/// `EUR_TO_USD` / `AUD_TO_USD` (1 unit = X USD). The direction is tagged per
/// record so conversion stays a single algorithm over the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteDirection {
    /// 1 USD = rate units of the target currency (e.g. `USD_TO_PLN`)
    UsdToTarget,
    /// 1 unit of the target currency = rate USD (e.g. `EUR_TO_USD`)
    TargetToUsd,
}

impl QuoteDirection {
    /// Parse a source tag like `USD_TO_PLN` or `EUR_TO_USD`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let (base, quote) = tag.trim().split_once("_TO_")?;
        if base == "USD" {
            Some(QuoteDirection::UsdToTarget)
        } else if quote == "USD" {
            Some(QuoteDirection::TargetToUsd)
        } else {
            None
        }
    }
}
