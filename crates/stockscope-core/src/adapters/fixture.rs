use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use time::Duration;

use crate::data_source::{MarketData, SourceError, SourceFuture};
use crate::{
    CompanyProfile, HistoryRange, Officer, PricePoint, PriceSeries, Symbol, UtcDateTime,
};

/// In-memory market data used for offline runs and tests.
///
/// Symbols without a registered profile resolve to "not found"; symbols
/// without a registered series return an empty history. Call counters let
/// tests assert which upstream operations a command performed.
#[derive(Debug, Default)]
pub struct StaticMarketData {
    profiles: HashMap<Symbol, CompanyProfile>,
    histories: HashMap<Symbol, Vec<f64>>,
    failing_history: Option<String>,
    lookup_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

impl StaticMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: CompanyProfile) -> Self {
        self.profiles.insert(profile.symbol.clone(), profile);
        self
    }

    /// Registers closes, oldest first, stamped on consecutive days ending today.
    pub fn with_closes(mut self, symbol: Symbol, closes: Vec<f64>) -> Self {
        self.histories.insert(symbol, closes);
        self
    }

    /// Makes every history call fail with `message`.
    pub fn with_failing_history(mut self, message: impl Into<String>) -> Self {
        self.failing_history = Some(message.into());
        self
    }

    /// A small built-in catalogue so the CLI can run without network access.
    pub fn demo() -> Self {
        let mut source = Self::new();
        for (ticker, name, sector, industry, officers) in demo_catalog() {
            let Ok(symbol) = Symbol::parse(ticker) else {
                continue;
            };
            let closes = synthetic_closes(&symbol, HistoryRange::OneYear.trading_days());
            let last = closes.last().copied().unwrap_or(100.0);
            let profile = CompanyProfile {
                long_name: Some(String::from(name)),
                sector: Some(String::from(sector)),
                industry: Some(String::from(industry)),
                previous_close: Some(round_cents(last * 0.995)),
                bid: Some(round_cents(last - 0.05)),
                ask: Some(round_cents(last + 0.05)),
                dividend_yield: Some(0.0052),
                officers: officers
                    .iter()
                    .map(|(name, title, pay)| {
                        Officer::new(*name, Some(String::from(*title)), *pay)
                    })
                    .collect(),
                ..CompanyProfile::bare(symbol.clone())
            };
            source = source.with_profile(profile).with_closes(symbol, closes);
        }
        source
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    fn series_for(&self, symbol: &Symbol, range: HistoryRange) -> Result<PriceSeries, SourceError> {
        let Some(closes) = self.histories.get(symbol) else {
            return Ok(PriceSeries::empty(symbol.clone()));
        };

        let take = closes.len().min(range.trading_days());
        let start = closes.len() - take;
        let today = UtcDateTime::now().start_of_day().into_inner();
        let mut points = Vec::with_capacity(take);
        for (index, close) in closes[start..].iter().enumerate() {
            let offset = Duration::days((take - index - 1) as i64);
            let date = UtcDateTime::from_offset_datetime(today - offset);
            let point =
                PricePoint::new(date, *close).map_err(|e| SourceError::internal(e.to_string()))?;
            points.push(point);
        }
        Ok(PriceSeries::new(symbol.clone(), points))
    }
}

impl MarketData for StaticMarketData {
    fn name(&self) -> &'static str {
        "static"
    }

    fn lookup<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, Option<CompanyProfile>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        let profile = self.profiles.get(symbol).cloned();
        Box::pin(async move { Ok(profile) })
    }

    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: HistoryRange,
    ) -> SourceFuture<'a, PriceSeries> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        let result = match &self.failing_history {
            Some(message) => Err(SourceError::unavailable(message.clone())),
            None => self.series_for(symbol, range),
        };
        Box::pin(async move { result })
    }
}

type DemoOfficer = (&'static str, &'static str, Option<i64>);

fn demo_catalog() -> Vec<(&'static str, &'static str, &'static str, &'static str, Vec<DemoOfficer>)> {
    vec![
        (
            "AAPL",
            "Apple Inc.",
            "Technology",
            "Consumer Electronics",
            vec![
                ("Mr. Timothy D. Cook", "CEO & Director", Some(16_239_562)),
                ("Mr. Kevan Parekh", "Senior VP & CFO", None),
            ],
        ),
        (
            "MSFT",
            "Microsoft Corporation",
            "Technology",
            "Software - Infrastructure",
            vec![
                ("Mr. Satya Nadella", "Chairman & CEO", Some(7_869_547)),
                ("Ms. Amy E. Hood", "Executive VP & CFO", Some(4_742_707)),
            ],
        ),
        (
            "KO",
            "The Coca-Cola Company",
            "Consumer Defensive",
            "Beverages - Non-Alcoholic",
            Vec::new(),
        ),
    ]
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol
        .as_str()
        .bytes()
        .fold(0_u64, |acc, byte| acc.wrapping_mul(31).wrapping_add(u64::from(byte)))
}

/// Deterministic saw-tooth walk around a symbol-specific base price.
fn synthetic_closes(symbol: &Symbol, len: usize) -> Vec<f64> {
    let seed = symbol_seed(symbol);
    let base = 90.0 + (seed % 350) as f64 / 10.0;
    (0..len)
        .map(|index| {
            let drift = index as f64 * 0.08;
            let wobble = ((seed + index as u64) % 17) as f64 / 10.0 - 0.8;
            round_cents(base + drift + wobble)
        })
        .collect()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
