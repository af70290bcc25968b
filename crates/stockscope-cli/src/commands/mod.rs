//! Slash-command handlers.
//!
//! Handlers return structured results; rendering lives in [`crate::output`].

pub mod boot;
pub mod gov;
pub mod view;

pub use boot::BootOutcome;
pub use view::{ChartAnalysis, ChartSection, NewsSection, TickerQuery, ViewOutcome, ViewReport};
