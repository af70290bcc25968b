use rand::Rng;
use serde::Serialize;
use stockscope_core::content::{generate_daily_headlines, GeneratedHeadline};
use stockscope_core::{
    compute_moving_average, CompanyProfile, HistoryRange, IndicatorResult, MarketData, Officer,
    Symbol, ValidationError, DEFAULT_MA_WINDOW,
};
use tracing::{debug, warn};

use crate::cli::ViewArgs;
use crate::error::CommandError;

/// Normalized `/view` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerQuery {
    pub symbol: Symbol,
    pub news: bool,
    pub chart: bool,
}

impl TickerQuery {
    /// News is shown when neither section was asked for.
    pub fn from_flags(symbol: Symbol, news: bool, chart: bool) -> Self {
        Self {
            symbol,
            news: news || !chart,
            chart,
        }
    }

    pub fn from_args(args: &ViewArgs) -> Result<Self, ValidationError> {
        let symbol = Symbol::parse(&args.stock_name)?;
        Ok(Self::from_flags(symbol, args.news, args.chart))
    }
}

/// Officers plus the simulated daily headlines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsSection {
    pub officers: Vec<Officer>,
    pub ceo: Option<String>,
    pub headlines: Vec<GeneratedHeadline>,
}

/// Trend analysis over one year of daily closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ChartAnalysis {
    Indicator(IndicatorResult),
    /// The provider returned no history.
    Unavailable,
    Failed { message: String },
}

/// Quote fields and the moving-average analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSection {
    pub previous_close: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub analysis: ChartAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewReport {
    pub profile: CompanyProfile,
    pub news: Option<NewsSection>,
    pub chart: Option<ChartSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    Found(ViewReport),
    NotFound { symbol: Symbol },
}

/// Looks the ticker up once, then builds the requested sections.
///
/// An unresolved lookup stops here: no officer or history request follows.
/// Chart failures stay inside the chart section.
pub async fn run<R: Rng + ?Sized>(
    query: &TickerQuery,
    source: &dyn MarketData,
    rng: &mut R,
) -> Result<ViewOutcome, CommandError> {
    debug!(symbol = %query.symbol, source = source.name(), "looking up ticker");
    let profile = match source.lookup(&query.symbol).await? {
        Some(profile) if profile.is_resolved() => profile,
        _ => {
            return Ok(ViewOutcome::NotFound {
                symbol: query.symbol.clone(),
            })
        }
    };

    let news = query.news.then(|| news_section(&profile, rng));
    let chart = if query.chart {
        Some(chart_section(&profile, source).await)
    } else {
        None
    };

    Ok(ViewOutcome::Found(ViewReport {
        profile,
        news,
        chart,
    }))
}

fn news_section<R: Rng + ?Sized>(profile: &CompanyProfile, rng: &mut R) -> NewsSection {
    let ceo = profile.ceo_name().map(str::to_owned);
    let headlines = generate_daily_headlines(rng, profile.symbol.as_str(), ceo.as_deref());
    NewsSection {
        officers: profile.officers.clone(),
        ceo,
        headlines,
    }
}

async fn chart_section(profile: &CompanyProfile, source: &dyn MarketData) -> ChartSection {
    let analysis = match source.history(&profile.symbol, HistoryRange::OneYear).await {
        Ok(series) if series.is_empty() => ChartAnalysis::Unavailable,
        Ok(series) => ChartAnalysis::Indicator(compute_moving_average(&series, DEFAULT_MA_WINDOW)),
        Err(error) => {
            warn!(symbol = %profile.symbol, code = error.code(), "history request failed");
            ChartAnalysis::Failed {
                message: error.to_string(),
            }
        }
    };

    ChartSection {
        previous_close: profile.previous_close,
        bid: profile.bid,
        ask: profile.ask,
        dividend_yield: profile.dividend_yield,
        analysis,
    }
}
