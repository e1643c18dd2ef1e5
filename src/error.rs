//! Errors raised by the I/O-facing parts of the crate.
//!
//! Extraction itself never fails: a heading that does not parse simply yields
//! no records. Only reading a book dump and writing records can go wrong.

use thiserror::Error;

pub type Result<T, E = DaijirinError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DaijirinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed book JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Gaiji marker named a font bank other than `n` or `w`.
    #[error("unknown glyph table: {0:?}")]
    UnknownGlyphTable(String),
}
