//! Market data contract consumed by the CLI.
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | [`lookup`](MarketData::lookup) | [`Symbol`] | [`CompanyProfile`] or not found |
//! | [`history`](MarketData::history) | [`Symbol`] + [`HistoryRange`] | [`PriceSeries`] (possibly empty) |
//!
//! Adapters make exactly one upstream attempt per call; failures surface
//! immediately as [`SourceError`].

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::{CompanyProfile, HistoryRange, PriceSeries, Symbol};

/// Why a market data call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure, rejected session or unusable crumb.
    Unavailable,
    RateLimited,
    /// Upstream answered with a payload that could not be decoded.
    InvalidResponse,
    Internal,
}

impl SourceErrorKind {
    /// Stable machine-readable code, also shown in JSON reports.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Unavailable => "source.unavailable",
            Self::RateLimited => "source.rate_limited",
            Self::InvalidResponse => "source.invalid_response",
            Self::Internal => "source.internal",
        }
    }
}

/// Failure of a single upstream attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({})", kind.code())]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unavailable, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::RateLimited, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::InvalidResponse, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Internal, message)
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }
}

pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// Market data provider contract.
///
/// Implementations must be `Send + Sync`; the CLI holds them behind
/// `Arc<dyn MarketData>`.
pub trait MarketData: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Resolves company metadata for `symbol`.
    ///
    /// `Ok(None)` means the provider does not know the symbol. A profile
    /// without a long name should be treated the same way by callers
    /// (see [`CompanyProfile::is_resolved`]).
    fn lookup<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, Option<CompanyProfile>>;

    /// Fetches daily closing prices for `range`. An empty series is not an error.
    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: HistoryRange,
    ) -> SourceFuture<'a, PriceSeries>;
}
