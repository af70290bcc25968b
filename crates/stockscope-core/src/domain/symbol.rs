use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_TICKER_CHARS: usize = 15;

/// Upper-cased ticker as typed after `/view`.
///
/// Index tickers (`^GSPC`), currency pairs (`EURUSD=X`) and exchange
/// listings such as `7203.T` pass through because Yahoo addresses them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

fn allowed_first(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '^'
}

fn allowed_rest(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '=')
}

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let ticker = input.trim().to_ascii_uppercase();

        let mut chars = ticker.chars();
        let first = chars.next().ok_or(ValidationError::EmptySymbol)?;

        let len = ticker.chars().count();
        if len > MAX_TICKER_CHARS {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_TICKER_CHARS,
            });
        }
        if !allowed_first(first) {
            return Err(ValidationError::SymbolInvalidStart { ch: first });
        }
        if let Some((index, ch)) = chars
            .enumerate()
            .map(|(offset, ch)| (offset + 1, ch))
            .find(|&(_, ch)| !allowed_rest(ch))
        {
            return Err(ValidationError::SymbolInvalidChar { ch, index });
        }

        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
