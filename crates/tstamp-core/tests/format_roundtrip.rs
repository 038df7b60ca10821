use tstamp_core::format::{db, ms, rfc3339};

#[test]
fn rfc3339_roundtrip_at_seconds_precision() {
    let t = rfc3339::parse("2021-01-01T00:00:00Z").unwrap();
    let s = rfc3339::render(&t);
    assert_eq!(s, "2021-01-01T00:00:00Z");
    assert_eq!(rfc3339::parse(&s).unwrap(), t);
}

#[test]
fn rfc3339_keeps_the_offset() {
    let t = rfc3339::parse("2021-06-15T12:30:45+02:00").unwrap();
    assert_eq!(rfc3339::render(&t), "2021-06-15T12:30:45+02:00");
}

#[test]
fn db_roundtrip_preserves_millis_and_offset() {
    let s1 = "2021-01-01 00:00:00.123 +0530";
    let t = db::parse(s1).unwrap();
    let s2 = db::render(&t);
    assert_eq!(s1, s2);
    assert_eq!(db::parse(&s2).unwrap(), t);
}

#[test]
fn ms_roundtrip_exact() {
    let t = ms::parse("1609459200000").unwrap();
    assert_eq!(ms::render(&t), "1609459200000");
}

#[test]
fn ms_roundtrip_negative_before_epoch() {
    let t = ms::parse("-1").unwrap();
    assert_eq!(ms::render(&t), "-1");
}

#[test]
fn rfc3339_to_ms_known_instant() {
    let t = rfc3339::parse("2021-01-01T00:00:00Z").unwrap();
    assert_eq!(ms::render(&t), "1609459200000");
}

#[test]
fn ms_to_db_known_instant() {
    let t = ms::parse("1609459200000").unwrap();
    assert_eq!(db::render(&t), "2021-01-01 00:00:00.000 +0000");
}

#[test]
fn db_to_rfc3339_truncates_subsecond() {
    // rfc3339 renders at seconds precision, millis are dropped.
    let t = db::parse("2021-01-01 00:00:00.999 +0000").unwrap();
    assert_eq!(rfc3339::render(&t), "2021-01-01T00:00:00Z");
}
