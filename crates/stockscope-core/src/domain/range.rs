use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Lookback window for daily price history requests.
///
/// The chart view only ever asks for one year of daily closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryRange {
    #[default]
    #[serde(rename = "1y")]
    OneYear,
}

impl HistoryRange {
    /// Value of Yahoo's `range` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneYear => "1y",
        }
    }

    /// Approximate number of trading sessions covered by the range.
    pub const fn trading_days(self) -> usize {
        match self {
            Self::OneYear => 252,
        }
    }
}

impl Display for HistoryRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
