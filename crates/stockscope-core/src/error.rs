use thiserror::Error;

/// Rejected input for core domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker is empty")]
    EmptySymbol,
    #[error("ticker has {len} characters, at most {max} are allowed")]
    SymbolTooLong { len: usize, max: usize },
    #[error("ticker must start with a letter, a digit or '^', found '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("ticker character '{ch}' at position {index} is not allowed")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("timestamp is not valid RFC3339: '{value}'")]
    TimestampInvalid { value: String },
    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },

    #[error("{field} is not a finite number")]
    NonFiniteValue { field: &'static str },
    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },
}
