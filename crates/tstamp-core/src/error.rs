use thiserror::Error;

pub type Result<T> = std::result::Result<T, TsError>;

#[derive(Debug, Error)]
pub enum TsError {
    #[error("unknown format {0:?} (expected rfc3339, db, pb or ms)")]
    UnknownFormat(String),

    #[error("cannot parse {input:?} as {format}: {detail}")]
    Parse {
        format: &'static str,
        input: String,
        detail: String,
    },
}
