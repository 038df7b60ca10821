use chrono::{DateTime, FixedOffset};

use crate::error::{Result, TsError};

pub fn parse(input: &str) -> Result<DateTime<FixedOffset>> {
    let milli: i64 = input.parse().map_err(|e: std::num::ParseIntError| TsError::Parse {
        format: "ms",
        input: input.to_string(),
        detail: e.to_string(),
    })?;

    DateTime::from_timestamp_millis(milli)
        .map(|t| t.fixed_offset())
        .ok_or_else(|| TsError::Parse {
            format: "ms",
            input: input.to_string(),
            detail: "milliseconds out of representable range".to_string(),
        })
}

/// Unix milliseconds, floored toward negative infinity.
pub fn render(t: &DateTime<FixedOffset>) -> String {
    t.timestamp_millis().to_string()
}
