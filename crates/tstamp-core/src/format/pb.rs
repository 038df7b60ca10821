use chrono::{DateTime, FixedOffset, Local, Utc};

/// Protobuf `Timestamp` components: whole epoch seconds plus a nanosecond
/// remainder in `[0, 1e9)`, shown alongside the UTC and local instants.
pub fn render(t: &DateTime<FixedOffset>) -> String {
    let utc = t.with_timezone(&Utc);
    let local = t.with_timezone(&Local);
    format!(
        "UTC Timestamp {utc}\nLocal Timestamp {local}\nSeconds {}\nNanos {}",
        utc.timestamp(),
        utc.timestamp_subsec_nanos(),
    )
}
