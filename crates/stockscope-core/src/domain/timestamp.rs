use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, Time, UtcOffset};

use crate::ValidationError;

/// Instant normalized to UTC; price points are stamped at midnight UTC.
///
/// Serialized as RFC 3339 (`2024-01-02T00:00:00Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtcDateTime(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parses RFC 3339 with any offset and shifts it to UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        OffsetDateTime::parse(input, &Rfc3339)
            .map(Self::from_offset_datetime)
            .map_err(|_| ValidationError::TimestampInvalid {
                value: input.to_owned(),
            })
    }

    /// Seconds since the Unix epoch, as chart endpoints report them.
    pub fn from_unix_timestamp(seconds: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(Self)
            .map_err(|_| ValidationError::TimestampOutOfRange { value: seconds })
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value.to_offset(UtcOffset::UTC))
    }

    /// Same calendar day at 00:00 UTC.
    pub fn start_of_day(self) -> Self {
        Self(self.0.replace_time(Time::MIDNIGHT))
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
