use chrono::{DateTime, FixedOffset};

/// Signed difference `t2 - t1` in whole milliseconds, truncated toward zero.
pub fn diff_millis(t1: &DateTime<FixedOffset>, t2: &DateTime<FixedOffset>) -> i64 {
    (*t2 - *t1).num_milliseconds()
}
