use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::error::{Result, TsError};

pub fn parse(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input).map_err(|e| TsError::Parse {
        format: "rfc3339",
        input: input.to_string(),
        detail: e.to_string(),
    })
}

/// Seconds precision, `Z` for a zero offset.
pub fn render(t: &DateTime<FixedOffset>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
