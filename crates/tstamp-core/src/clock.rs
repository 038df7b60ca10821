use chrono::{DateTime, FixedOffset, Local};

/// Current system time carrying the host's local UTC offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
