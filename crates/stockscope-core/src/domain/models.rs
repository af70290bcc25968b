use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// Named company executive as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub name: String,
    pub title: Option<String>,
    pub total_pay: Option<i64>,
}

impl Officer {
    pub fn new(name: impl Into<String>, title: Option<String>, total_pay: Option<i64>) -> Self {
        Self {
            name: name.into(),
            title,
            total_pay,
        }
    }

    fn is_ceo(&self) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| title.to_lowercase().contains("ceo"))
    }
}

/// Company metadata returned by a symbol lookup.
///
/// Every market field is optional: providers omit values for instruments
/// that do not trade on a book (indices) or do not pay dividends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: Symbol,
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub previous_close: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    /// Raw fraction, e.g. `0.0052` for 0.52%.
    pub dividend_yield: Option<f64>,
    pub officers: Vec<Officer>,
}

impl CompanyProfile {
    /// Empty profile for `symbol`; fill fields with struct update syntax.
    pub fn bare(symbol: Symbol) -> Self {
        Self {
            symbol,
            long_name: None,
            sector: None,
            industry: None,
            previous_close: None,
            bid: None,
            ask: None,
            dividend_yield: None,
            officers: Vec::new(),
        }
    }

    /// A lookup only counts as resolved when the provider knows the company name.
    pub fn is_resolved(&self) -> bool {
        self.long_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Name of the first officer whose title mentions "ceo", case-insensitively.
    pub fn ceo_name(&self) -> Option<&str> {
        self.officers
            .iter()
            .find(|officer| officer.is_ceo())
            .map(|officer| officer.name.as_str())
    }
}

/// Single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: UtcDateTime,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: UtcDateTime, close: f64) -> Result<Self, ValidationError> {
        if !close.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "close" });
        }
        if close < 0.0 {
            return Err(ValidationError::NegativeValue { field: "close" });
        }
        Ok(Self { date, close })
    }
}

/// Chronologically ascending closing prices for one symbol.
///
/// Missing sessions are allowed; the series is never cached beyond the
/// request that fetched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: Symbol, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| point.date);
        Self { symbol, points }
    }

    pub fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            points: Vec::new(),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.points.iter().map(|point| point.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol() -> Symbol {
        Symbol::parse("AAPL").expect("valid symbol")
    }

    #[test]
    fn finds_first_ceo_case_insensitively() {
        let profile = CompanyProfile {
            officers: vec![
                Officer::new("Jane Roe", Some(String::from("CFO")), Some(1_000)),
                Officer::new("Tim Cook", Some(String::from("Co-Founder & Ceo")), None),
                Officer::new("Sam Poe", Some(String::from("CEO, Services")), None),
            ],
            ..CompanyProfile::bare(symbol())
        };

        assert_eq!(profile.ceo_name(), Some("Tim Cook"));
    }

    #[test]
    fn ceo_is_absent_without_matching_title() {
        let profile = CompanyProfile {
            officers: vec![Officer::new("Jane Roe", None, None)],
            ..CompanyProfile::bare(symbol())
        };
        assert_eq!(profile.ceo_name(), None);
        assert_eq!(CompanyProfile::bare(symbol()).ceo_name(), None);
    }

    #[test]
    fn blank_long_name_is_unresolved() {
        let profile = CompanyProfile {
            long_name: Some(String::from("  ")),
            ..CompanyProfile::bare(symbol())
        };
        assert!(!profile.is_resolved());
    }

    #[test]
    fn series_sorts_points_by_date() {
        let later = UtcDateTime::parse("2024-01-03T00:00:00Z").expect("timestamp");
        let earlier = UtcDateTime::parse("2024-01-02T00:00:00Z").expect("timestamp");
        let series = PriceSeries::new(
            symbol(),
            vec![
                PricePoint::new(later, 11.0).expect("point"),
                PricePoint::new(earlier, 10.0).expect("point"),
            ],
        );

        assert_eq!(series.closes().collect::<Vec<_>>(), vec![10.0, 11.0]);
        assert_eq!(series.last_close(), Some(11.0));
    }

    #[test]
    fn rejects_non_finite_close() {
        let ts = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp");
        let err = PricePoint::new(ts, f64::NAN).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { field: "close" }));
    }
}
