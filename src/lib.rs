//! # fxhist
//!
//! Convert USD amounts to EUR, PLN, or AUD using historical daily exchange
//! rates published by central banks (ECB, NBP, RBA).
//!
//! Rates live in per-currency CSV tables and are loaded once into an
//! immutable [`registry::RateRegistry`]. A lookup resolves the requested date
//! to the nearest trading day at or before it (bounded backward search, 30
//! days by default), and the conversion applies the source's quote direction:
//! NBP quotes USD→PLN while ECB and RBA quote EUR→USD / AUD→USD.
//!
//! ## Example
//!
//! ```rust
//! use fxhist::prelude::*;
//! use chrono::NaiveDate;
//!
//! let friday = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
//! let mut table = RateTable::new();
//! table.insert(RateRecord::new(friday, 3.9312, QuoteDirection::UsdToTarget));
//!
//! let mut registry = RateRegistry::new();
//! registry.insert(Currency::PLN, table);
//!
//! // Saturday has no record; the lookup falls back to Friday
//! let saturday = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
//! let resolved = resolve(&registry, Currency::PLN, saturday, LookupPolicy::default()).unwrap();
//! assert_eq!(resolved.record.date, friday);
//!
//! let conversion = convert_usd(1500.0, &resolved).unwrap();
//! assert_eq!(conversion.converted_amount, 5896.80);
//! ```

pub mod convert;
pub mod currency;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod registry;
pub mod table;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::convert::{convert_usd, Conversion};
    pub use crate::currency::{Currency, QuoteDirection};
    pub use crate::error::{FxError, Result};
    pub use crate::loader::load_registry;
    pub use crate::lookup::{parse_date, resolve, LookupPolicy, ResolvedRate};
    pub use crate::registry::{Coverage, RateRegistry};
    pub use crate::table::{RateRecord, RateTable};
}
