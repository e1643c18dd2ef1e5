//! Reading decoded EPWING book dumps.
//!
//! The upstream decoder writes each book as JSON, with glyphs it could not map
//! left behind as `{{n_CODE}}` / `{{w_CODE}}` markers. This module loads that
//! dump and swaps the markers for the Daijirin gaiji tables.

use regex::Captures;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::debug;

use crate::error::Result;
use crate::glyphs::{lookup, GlyphTable};
use crate::patterns::GLYPH_MARKER;

/// One dictionary entry as handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subbook {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub subbooks: Vec<Subbook>,
}

/// Entries of a book with gaiji markers resolved.
#[derive(Debug, Default)]
pub struct DecodedBook {
    pub entries: Vec<Entry>,
    /// Markers whose code had no table entry.
    pub missing_glyphs: usize,
}

impl Book {
    pub fn from_reader<R: Read>(reader: R) -> Result<Book> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolve glyph markers in every entry of every subbook, in order.
    pub fn decode(self) -> DecodedBook {
        let mut decoded = DecodedBook::default();
        for subbook in self.subbooks {
            debug!(title = %subbook.title, entries = subbook.entries.len(), "decoding subbook");
            for entry in subbook.entries {
                let (heading, missing_heading) = decode_glyphs(&entry.heading);
                let (text, missing_text) = decode_glyphs(&entry.text);
                decoded.missing_glyphs += missing_heading + missing_text;
                decoded.entries.push(Entry { heading, text });
            }
        }
        decoded
    }
}

/// Replace every glyph marker in `text`.
///
/// Codes without a table entry are replaced by nothing; the second value
/// counts how many were dropped that way.
pub fn decode_glyphs(text: &str) -> (String, usize) {
    let mut missing = 0;
    let decoded = GLYPH_MARKER.replace_all(text, |caps: &Captures| {
        let replacement = resolve_marker(&caps[1], &caps[2]);
        if replacement.is_none() {
            debug!(marker = &caps[0], "no glyph for marker");
            missing += 1;
        }
        replacement.unwrap_or("")
    });
    (decoded.into_owned(), missing)
}

fn resolve_marker(table: &str, code: &str) -> Option<&'static str> {
    let table = GlyphTable::from_marker(table)?;
    let code = code.parse::<u32>().ok()?;
    lookup(code, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_and_wide_markers() {
        let (text, missing) = decode_glyphs("caf{{n_49447}} {{w_45122}}");
        assert_eq!(text, "café 卍");
        assert_eq!(missing, 0);
    }

    #[test]
    fn unknown_code_is_dropped_and_counted() {
        let (text, missing) = decode_glyphs("a{{n_999999}}b{{w_1}}c");
        assert_eq!(text, "abc");
        assert_eq!(missing, 2);
    }

    #[test]
    fn oversized_code_counts_as_missing() {
        let (text, missing) = decode_glyphs("x{{n_99999999999999999999}}");
        assert_eq!(text, "x");
        assert_eq!(missing, 1);
    }

    #[test]
    fn text_without_markers_unchanged() {
        let (text, missing) = decode_glyphs("{{x_1}} {n_49441}");
        assert_eq!(text, "{{x_1}} {n_49441}");
        assert_eq!(missing, 0);
    }

    #[test]
    fn book_decodes_all_subbooks_in_order() {
        let json = r#"{
            "subbooks": [
                {"title": "大辞林", "entries": [
                    {"heading": "あ【亜{{w_41249}}】", "text": "（名）"},
                    {"heading": "い", "text": "{{n_49441}}"}
                ]},
                {"title": "付録", "copyright": "(c)", "entries": [
                    {"heading": "う", "text": "{{n_1}}"}
                ]}
            ]
        }"#;
        let book = Book::from_reader(json.as_bytes()).unwrap();
        let decoded = book.decode();
        let headings: Vec<_> = decoded.entries.iter().map(|e| e.heading.as_str()).collect();
        assert_eq!(headings, vec!["あ【亜仿】", "い", "う"]);
        assert_eq!(decoded.entries[1].text, "á");
        assert_eq!(decoded.missing_glyphs, 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Book::from_reader("{\"subbooks\": [".as_bytes()).is_err());
    }
}
