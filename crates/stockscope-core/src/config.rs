/// Transport settings for market-data adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Base for `v10/finance/quoteSummary` and `v8/finance/chart`.
    pub query_base_url: String,
    /// Page visited first to obtain the session cookie.
    pub cookie_url: String,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_query_base_url(mut self, url: impl Into<String>) -> Self {
        self.query_base_url = url.into().trim_end_matches('/').to_owned();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            user_agent: format!(
                "Mozilla/5.0 (compatible; stockscope/{})",
                env!("CARGO_PKG_VERSION")
            ),
            query_base_url: String::from("https://query1.finance.yahoo.com"),
            cookie_url: String::from("https://fc.yahoo.com"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config = ClientConfig::default().with_query_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.query_base_url, "http://127.0.0.1:9000");
    }
}
