use std::sync::{Arc, Mutex};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::data_source::{MarketData, SourceError, SourceFuture};
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{
    CompanyProfile, HistoryRange, Officer, PricePoint, PriceSeries, Symbol, UtcDateTime,
};

const REFERER: &str = "https://finance.yahoo.com/";
const SUMMARY_MODULES: &str = "price,summaryDetail,assetProfile";
/// Officers Yahoo lists without a name are kept under this placeholder.
const UNNAMED_OFFICER: &str = "N/A";

/// Yahoo Finance adapter over the unofficial quoteSummary and chart endpoints.
///
/// Yahoo requires a session cookie (kept by the transport's cookie jar) and a
/// crumb token passed as a query parameter. The crumb is fetched lazily and
/// dropped whenever Yahoo answers 401.
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
    crumb: Mutex<Option<String>>,
}

impl YahooAdapter {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(&config));
        Self::with_http_client(http_client, config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
            crumb: Mutex::new(None),
        }
    }

    fn request(&self, url: impl Into<String>) -> HttpRequest {
        HttpRequest::get(url)
            .with_header("referer", REFERER)
            .with_timeout_ms(self.config.timeout_ms)
    }

    fn cached_crumb(&self) -> Result<Option<String>, SourceError> {
        self.crumb
            .lock()
            .map(|crumb| crumb.clone())
            .map_err(|_| SourceError::internal("yahoo crumb cache is poisoned"))
    }

    fn store_crumb(&self, value: Option<String>) {
        if let Ok(mut crumb) = self.crumb.lock() {
            *crumb = value;
        }
    }

    async fn crumb(&self) -> Result<String, SourceError> {
        if let Some(crumb) = self.cached_crumb()? {
            return Ok(crumb);
        }

        // The cookie page answers 404 while still setting the session cookie,
        // so only transport failures matter here.
        self.http_client
            .execute(self.request(self.config.cookie_url.as_str()))
            .await
            .map_err(|e| {
                SourceError::unavailable(format!("failed to fetch Yahoo cookie: {e}"))
            })?;

        let endpoint = format!("{}/v1/test/getcrumb", self.config.query_base_url);
        let response = self
            .http_client
            .execute(self.request(endpoint))
            .await
            .map_err(|e| {
                SourceError::unavailable(format!("failed to fetch Yahoo crumb: {e}"))
            })?;

        if response.status == 429 {
            return Err(SourceError::rate_limited(
                "Yahoo rate limited while fetching crumb",
            ));
        }

        let body = response.body.trim();
        let looks_valid = response.is_success()
            && !body.is_empty()
            && body.len() < 100
            && !body.contains(' ')
            && !body.contains('<');
        if !looks_valid {
            return Err(SourceError::unavailable(format!(
                "Yahoo returned an unusable crumb (status {})",
                response.status
            )));
        }

        debug!("obtained yahoo crumb");
        self.store_crumb(Some(body.to_owned()));
        Ok(body.to_owned())
    }

    async fn get(&self, endpoint: String) -> Result<HttpResponse, SourceError> {
        debug!(%endpoint, "yahoo request");
        let response = self
            .http_client
            .execute(self.request(endpoint))
            .await
            .map_err(|e| {
                warn!(error = %e, "yahoo transport error");
                SourceError::unavailable(format!("yahoo transport error: {e}"))
            })?;

        match response.status {
            401 => {
                self.store_crumb(None);
                Err(SourceError::unavailable("yahoo rejected the session (status 401)"))
            }
            429 => Err(SourceError::rate_limited("yahoo returned status 429")),
            _ => Ok(response),
        }
    }

    async fn fetch_profile(&self, symbol: &Symbol) -> Result<Option<CompanyProfile>, SourceError> {
        let crumb = self.crumb().await?;
        let endpoint = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            self.config.query_base_url,
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(SUMMARY_MODULES),
            urlencoding::encode(&crumb)
        );

        let response = self.get(endpoint).await?;
        if response.is_not_found() {
            debug!(%symbol, "yahoo does not know symbol");
            return Ok(None);
        }
        if !response.is_success() {
            warn!(status = response.status, %symbol, "yahoo quoteSummary failed");
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        parse_summary(symbol, &response.body)
    }

    async fn fetch_history(
        &self,
        symbol: &Symbol,
        range: HistoryRange,
    ) -> Result<PriceSeries, SourceError> {
        let crumb = self.crumb().await?;
        let endpoint = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d&crumb={}",
            self.config.query_base_url,
            urlencoding::encode(symbol.as_str()),
            range.as_str(),
            urlencoding::encode(&crumb)
        );

        let response = self.get(endpoint).await?;
        if response.is_not_found() {
            return Ok(PriceSeries::empty(symbol.clone()));
        }
        if !response.is_success() {
            warn!(status = response.status, %symbol, "yahoo chart failed");
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        parse_chart(symbol, &response.body)
    }
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl MarketData for YahooAdapter {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn lookup<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, Option<CompanyProfile>> {
        Box::pin(self.fetch_profile(symbol))
    }

    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: HistoryRange,
    ) -> SourceFuture<'a, PriceSeries> {
        Box::pin(self.fetch_history(symbol, range))
    }
}

fn parse_summary(symbol: &Symbol, body: &str) -> Result<Option<CompanyProfile>, SourceError> {
    let envelope: YahooSummaryEnvelope = serde_json::from_str(body).map_err(|e| {
        SourceError::invalid_response(format!("failed to parse yahoo quoteSummary: {e}"))
    })?;

    if let Some(error) = envelope.quote_summary.error {
        if error.is_not_found() {
            return Ok(None);
        }
        return Err(SourceError::unavailable(format!(
            "yahoo quoteSummary API error: {}",
            error.describe()
        )));
    }

    let Some(result) = envelope.quote_summary.result.into_iter().flatten().next() else {
        return Ok(None);
    };

    let price = result.price.unwrap_or_default();
    let detail = result.summary_detail.unwrap_or_default();
    let asset = result.asset_profile.unwrap_or_default();

    let resolved_symbol = price
        .symbol
        .as_deref()
        .and_then(|raw| Symbol::parse(raw).ok())
        .unwrap_or_else(|| symbol.clone());

    let officers = asset
        .company_officers
        .into_iter()
        .map(|officer| {
            Officer::new(
                officer.name.unwrap_or_else(|| String::from(UNNAMED_OFFICER)),
                officer.title,
                officer.total_pay.and_then(RawNum::value).map(|pay| pay.round() as i64),
            )
        })
        .collect();

    Ok(Some(CompanyProfile {
        symbol: resolved_symbol,
        long_name: price.long_name,
        sector: asset.sector,
        industry: asset.industry,
        previous_close: detail
            .previous_close
            .and_then(RawNum::value)
            .or_else(|| price.regular_market_previous_close.and_then(RawNum::value)),
        bid: detail.bid.and_then(RawNum::value),
        ask: detail.ask.and_then(RawNum::value),
        dividend_yield: detail.dividend_yield.and_then(RawNum::value),
        officers,
    }))
}

fn parse_chart(symbol: &Symbol, body: &str) -> Result<PriceSeries, SourceError> {
    let envelope: YahooChartEnvelope = serde_json::from_str(body)
        .map_err(|e| SourceError::invalid_response(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = envelope.chart.error {
        if error.is_not_found() {
            return Ok(PriceSeries::empty(symbol.clone()));
        }
        return Err(SourceError::unavailable(format!(
            "yahoo chart API error: {}",
            error.describe()
        )));
    }

    let Some(result) = envelope.chart.result.into_iter().flatten().next() else {
        return Ok(PriceSeries::empty(symbol.clone()));
    };

    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|quote| quote.close)
        .unwrap_or_default();

    let mut points = Vec::with_capacity(timestamps.len());
    for (ts, close) in timestamps.into_iter().zip(closes) {
        // Yahoo reports halted sessions as null closes.
        let Some(close) = close else { continue };
        let date = UtcDateTime::from_unix_timestamp(ts)
            .map_err(|e| SourceError::invalid_response(format!("invalid chart timestamp: {e}")))?;
        match PricePoint::new(date, close) {
            Ok(point) => points.push(point),
            Err(error) => debug!(%error, ts, "skipping malformed close"),
        }
    }

    Ok(PriceSeries::new(symbol.clone(), points))
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl YahooApiError {
    fn is_not_found(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|code| code.eq_ignore_ascii_case("not found"))
    }

    fn describe(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{code}: {description}"),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => String::from("unspecified"),
        }
    }
}

/// Numeric values arrive wrapped as `{"raw": 1.23, "fmt": "1.23"}`.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawNum {
    #[serde(default)]
    raw: Option<f64>,
}

impl RawNum {
    fn value(self) -> Option<f64> {
        self.raw.filter(|value| value.is_finite())
    }
}

#[derive(Debug, Deserialize)]
struct YahooSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: YahooSummaryData,
}

#[derive(Debug, Deserialize)]
struct YahooSummaryData {
    #[serde(default)]
    result: Option<Vec<YahooSummaryResult>>,
    #[serde(default)]
    error: Option<YahooApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooSummaryResult {
    #[serde(default)]
    price: Option<YahooPrice>,
    #[serde(default)]
    summary_detail: Option<YahooSummaryDetail>,
    #[serde(default)]
    asset_profile: Option<YahooAssetProfile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooPrice {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    regular_market_previous_close: Option<RawNum>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooSummaryDetail {
    #[serde(default)]
    previous_close: Option<RawNum>,
    #[serde(default)]
    bid: Option<RawNum>,
    #[serde(default)]
    ask: Option<RawNum>,
    #[serde(default)]
    dividend_yield: Option<RawNum>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooAssetProfile {
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    company_officers: Vec<YahooOfficer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooOfficer {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    total_pay: Option<RawNum>,
}

#[derive(Debug, Deserialize)]
struct YahooChartEnvelope {
    chart: YahooChartData,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooApiError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooChartIndicators {
    #[serde(default)]
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
