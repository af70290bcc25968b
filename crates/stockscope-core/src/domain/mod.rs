//! # Domain Models
//!
//! Canonical domain types shared by the market-data adapters, the indicator
//! engine and the CLI.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker |
//! | [`CompanyProfile`] | Lookup result: names, sector, book and officers |
//! | [`Officer`] | Named executive with optional compensation |
//! | [`PriceSeries`] | Ascending daily closes for one symbol |
//! | [`HistoryRange`] | Lookback window for history requests |
//! | [`UtcDateTime`] | UTC timestamp |

mod models;
mod range;
mod symbol;
mod timestamp;

pub use models::{CompanyProfile, Officer, PricePoint, PriceSeries};
pub use range::HistoryRange;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
