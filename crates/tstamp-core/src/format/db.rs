use chrono::{DateTime, FixedOffset};

use crate::error::{Result, TsError};

/// DBeaver's default display pattern for `timestamp with time zone`:
/// fixed 3-digit fraction, numeric offset without a colon.
/// `.%3f` (not `%.3f`) so the fraction is mandatory when parsing.
const PATTERN: &str = "%Y-%m-%d %H:%M:%S.%3f %z";

pub fn parse(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(input, PATTERN).map_err(|e| TsError::Parse {
        format: "db",
        input: input.to_string(),
        detail: e.to_string(),
    })
}

pub fn render(t: &DateTime<FixedOffset>) -> String {
    t.format(PATTERN).to_string()
}
