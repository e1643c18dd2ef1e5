//! The per-entry extraction entry point.

use tracing::debug;

use crate::glyphs::{self, GlyphTable};
use crate::heading::segment;
use crate::record::{build_records, Record};
use crate::tags::{classify, extract_tags};
use crate::variant::expand;

/// Identifies the dialect of records this extractor produces.
pub const REVISION: &str = "daijirin:1";

/// Stateless extractor for Daijirin entries.
///
/// All shared state lives in immutable statics, so one value can be shared
/// freely between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct DaijirinExtractor;

impl DaijirinExtractor {
    pub fn new() -> Self {
        DaijirinExtractor
    }

    /// Turn one `(heading, text)` entry into records.
    ///
    /// Headings that do not parse produce an empty list.
    pub fn extract(&self, heading: &str, text: &str) -> Vec<Record> {
        let Some(parts) = segment(heading) else {
            debug!(heading, "heading does not match, skipping");
            return Vec::new();
        };

        let expressions = parts.expression.map(expand).unwrap_or_default();
        let readings = parts.readings();

        let tokens = extract_tags(text);
        let class = classify(tokens.iter().map(String::as_str));

        build_records(&readings, &expressions, text, &class)
    }

    pub fn revision(&self) -> &'static str {
        REVISION
    }

    /// Replacement for a gaiji code, for the source reader.
    pub fn glyph(&self, code: u32, table: GlyphTable) -> Option<&'static str> {
        glyphs::lookup(code, table)
    }

    pub fn font_narrow(&self) -> &'static [(u32, &'static str)] {
        GlyphTable::Narrow.entries()
    }

    pub fn font_wide(&self) -> &'static [(u32, &'static str)] {
        GlyphTable::Wide.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn extract(heading: &str, text: &str) -> Vec<Record> {
        DaijirinExtractor::new().extract(heading, text)
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unparseable_heading_yields_nothing() {
        assert!(extract("", "（名）").is_empty());
        assert!(extract("【", "text").is_empty());
        assert!(extract("（〖【", "text").is_empty());
    }

    #[test]
    fn bare_reading_is_the_expression() {
        let records = extract("こ-れ", "（代）指示代名詞。");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "これ");
        assert_eq!(records[0].reading, "");
        assert_eq!(records[0].glossary, vec!["（代）指示代名詞。"]);
        assert_eq!(records[0].tags, set(&["代"]));
    }

    #[test]
    fn optional_span_gives_two_records() {
        let text = "たべる【食べ(る)】\n（動バ下一）\n食物を口に入れる。";
        let records = extract("たべる【食べ(る)】", text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].expression, "食べる");
        assert_eq!(records[1].expression, "食べ");
        for record in &records {
            assert_eq!(record.reading, "たべる");
            assert_eq!(record.tags, set(&["動バ下一", "v1"]));
            assert_eq!(record.rules, set(&["v1"]));
            assert_eq!(record.glossary, vec![text]);
        }
    }

    #[test]
    fn separated_expressions_share_reading_and_tags() {
        let records = extract("えー【Ａ・Ｂ】", "（名）");
        let expressions: Vec<_> = records.iter().map(|r| r.expression.as_str()).collect();
        assert_eq!(expressions, vec!["Ａ", "Ｂ"]);
        assert_eq!(records[0].reading, "えー");
        assert_eq!(records[0].tags, records[1].tags);
        assert_eq!(records[0].glossary, records[1].glossary);
    }

    #[test]
    fn reading_marks_stripped_in_records() {
        let records = extract("あお・い【青い】", "（形）");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reading, "あおい");
        assert_eq!(records[0].tags, set(&["形", "adj-i"]));
        assert_eq!(records[0].rules, set(&["adj-i"]));
    }

    // ─────────────────────────────────────────────────────────────
    // Bracket boundaries
    // ─────────────────────────────────────────────────────────────

    fn pairs(heading: &str) -> Vec<(String, String)> {
        extract(heading, "")
            .into_iter()
            .map(|r| (r.expression, r.reading))
            .collect()
    }

    fn pair(expression: &str, reading: &str) -> (String, String) {
        (expression.to_string(), reading.to_string())
    }

    #[test]
    fn adjacent_expression_brackets_are_one_greedy_field() {
        assert_eq!(pairs("あ【A】【B】"), vec![pair("A】【B", "あ")]);
    }

    #[test]
    fn heading_search_is_not_anchored() {
        // the reading run starts after the leading bracket
        assert_eq!(pairs("〖x〗あ"), vec![pair("x〗あ", "")]);
    }

    #[test]
    fn annotation_before_expression_ends_the_heading() {
        assert_eq!(pairs("あ（名）【愛】"), vec![pair("あ", "")]);
    }

    #[test]
    fn repeated_optional_spans_are_one_greedy_span() {
        assert_eq!(
            pairs("か【食(べ)(る)】"),
            vec![pair("食べ)(る", "か"), pair("食", "か")]
        );
    }

    #[test]
    fn repeated_extraction_is_identical() {
        let heading = "かく【書く】";
        let text = "（動カ五［四］）\n文字をしるす。";
        assert_eq!(extract(heading, text), extract(heading, text));
    }

    #[test]
    fn revision_is_fixed() {
        let extractor = DaijirinExtractor::new();
        extractor.extract("かく【書く】", "（動カ五）");
        assert_eq!(extractor.revision(), "daijirin:1");
    }

    #[test]
    fn glyph_accessors() {
        let extractor = DaijirinExtractor::new();
        assert_eq!(extractor.glyph(49441, GlyphTable::Narrow), Some("á"));
        assert_eq!(extractor.glyph(999999, GlyphTable::Narrow), None);
        assert_eq!(extractor.font_narrow().len(), 153);
        assert_eq!(extractor.font_wide().len(), 1234);
    }
}
