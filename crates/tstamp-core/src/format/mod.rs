// crates/tstamp-core/src/format/mod.rs

use chrono::{DateTime, FixedOffset};

use crate::error::{Result, TsError};

pub mod db;
pub mod ms;
pub mod pb;
pub mod rfc3339;

pub type ParseFn = fn(&str) -> Result<DateTime<FixedOffset>>;
pub type RenderFn = fn(&DateTime<FixedOffset>) -> String;

/// One named format: how to read it and how to write it.
#[derive(Debug)]
pub struct FormatEntry {
    pub name: &'static str,
    pub parse: ParseFn,
    pub render: RenderFn,
}

/// The full format table. Adding a format means adding one row here.
pub const REGISTRY: &[FormatEntry] = &[
    FormatEntry {
        name: "rfc3339",
        parse: rfc3339::parse,
        render: rfc3339::render,
    },
    FormatEntry {
        name: "db",
        parse: db::parse,
        render: db::render,
    },
    // pb reads the db grammar but writes the component report.
    FormatEntry {
        name: "pb",
        parse: db::parse,
        render: pb::render,
    },
    FormatEntry {
        name: "ms",
        parse: ms::parse,
        render: ms::render,
    },
];

pub fn lookup(name: &str) -> Result<&'static FormatEntry> {
    REGISTRY
        .iter()
        .find(|e| e.name == name)
        .ok_or_else(|| TsError::UnknownFormat(name.to_string()))
}
