//! Term extraction for the Daijirin (大辞林) EPWING dictionary.
//!
//! Each decoded entry is a `(heading, text)` pair. [`DaijirinExtractor::extract`]
//! turns one pair into zero or more [`Record`]s:
//!
//! 1. [`heading::segment`] splits the heading into reading and 【expression】
//! 2. [`variant::expand`] turns the expression field into surface forms
//! 3. [`tags::extract_tags`] and [`tags::classify`] derive tags and rules from
//!    the body's `（...）` annotations
//! 4. [`record::build_records`] pairs every expression with every reading
//!
//! The gaiji tables in [`glyphs`] are used upstream by [`source`] to repair
//! characters the EPWING font stores outside Unicode.

pub mod error;
pub mod extractor;
pub mod glyphs;
pub mod heading;
pub mod parallel;
mod patterns;
pub mod record;
pub mod source;
pub mod tags;
pub mod variant;

pub use error::{DaijirinError, Result};
pub use extractor::{DaijirinExtractor, REVISION};
pub use glyphs::{lookup, GlyphTable};
pub use record::Record;
pub use source::{Book, Entry};

/// Extract records from one entry with a default extractor.
pub fn extract(heading: &str, text: &str) -> Vec<Record> {
    DaijirinExtractor::new().extract(heading, text)
}
