//! # Stockscope Core
//!
//! Contracts and computation behind the `stockscope` terminal tool.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Yahoo Finance adapter and an in-memory source |
//! | [`config`] | Transport settings |
//! | [`content`] | Simulated headlines and Fed event text |
//! | [`data_source`] | `MarketData` trait and source errors |
//! | [`domain`] | Symbols, company profiles, price series |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP transport seam |
//! | [`indicators`] | Moving-average trend signal |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI router     │
//! └───┬─────────┬───┘
//!     │         │
//!     ▼         ▼
//! ┌────────┐ ┌──────────────┐     ┌─────────────┐
//! │content │ │ MarketData   │────▶│ HttpClient  │
//! └────────┘ │ (adapters)   │     │ (reqwest)   │
//!            └──────┬───────┘     └─────────────┘
//!                   ▼
//!            ┌──────────────┐
//!            │ indicators   │
//!            └──────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod content;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod indicators;

pub use adapters::{StaticMarketData, YahooAdapter};
pub use config::ClientConfig;
pub use data_source::{MarketData, SourceError, SourceErrorKind, SourceFuture};
pub use domain::{CompanyProfile, HistoryRange, Officer, PricePoint, PriceSeries, Symbol, UtcDateTime};
pub use error::ValidationError;
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpFuture, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use indicators::{compute_moving_average, IndicatorResult, Signal, DEFAULT_MA_WINDOW};
