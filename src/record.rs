//! Output records and the reading × expression assembly.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeSet;

use crate::tags::Classification;

/// One term ready for the term database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub expression: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reading: String,
    pub glossary: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub rules: BTreeSet<String>,
}

impl Record {
    fn new(expression: &str, reading: &str, text: &str) -> Self {
        Record {
            expression: expression.to_string(),
            reading: reading.to_string(),
            glossary: vec![text.to_string()],
            tags: BTreeSet::new(),
            rules: BTreeSet::new(),
        }
    }

    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    pub fn add_rules<I, S>(&mut self, rules: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.extend(rules.into_iter().map(Into::into));
    }

    /// Row layout of a term bank:
    /// `[expression, reading, tags, rules, score, glossary, sequence, term_tags]`.
    /// The binary writes these with `--term-bank`.
    pub fn to_term_bank_row(&self) -> Value {
        json!([
            self.expression,
            self.reading,
            join(&self.tags),
            join(&self.rules),
            0,
            self.glossary,
            0,
            "",
        ])
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// Assemble the records of one entry.
///
/// With expressions, every expression is paired with every reading. Without
/// any, each reading stands in as the expression and the reading field stays
/// empty. Pairs with an empty expression are not emitted.
pub fn build_records(
    readings: &[String],
    expressions: &[String],
    text: &str,
    class: &Classification,
) -> Vec<Record> {
    let pairs: Vec<(&str, &str)> = if expressions.is_empty() {
        readings.iter().map(|r| (r.as_str(), "")).collect()
    } else {
        expressions
            .iter()
            .flat_map(|e| readings.iter().map(move |r| (e.as_str(), r.as_str())))
            .collect()
    };

    pairs
        .into_iter()
        .filter(|(expression, _)| !expression.is_empty())
        .map(|(expression, reading)| {
            let mut record = Record::new(expression, reading, text);
            record.add_tags(class.tags.iter().cloned());
            record.add_rules(class.rules.iter().cloned());
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn noun() -> Classification {
        let mut class = Classification::default();
        class.tags.insert("名".to_string());
        class
    }

    #[test]
    fn reading_only_becomes_expression() {
        let records = build_records(&strings(&["これ"]), &[], "body", &noun());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "これ");
        assert_eq!(records[0].reading, "");
        assert_eq!(records[0].glossary, vec!["body"]);
    }

    #[test]
    fn cross_product_of_expressions_and_readings() {
        let records = build_records(
            &strings(&["たべる"]),
            &strings(&["食べる", "食べ"]),
            "body",
            &noun(),
        );
        let pairs: Vec<_> = records
            .iter()
            .map(|r| (r.expression.as_str(), r.reading.as_str()))
            .collect();
        assert_eq!(pairs, vec![("食べる", "たべる"), ("食べ", "たべる")]);
        assert!(records.iter().all(|r| r.tags == noun().tags));
    }

    #[test]
    fn no_readings_means_no_records() {
        assert!(build_records(&[], &strings(&["愛"]), "body", &noun()).is_empty());
    }

    #[test]
    fn empty_expression_is_skipped() {
        let records = build_records(&strings(&["あ"]), &strings(&["", "亜"]), "b", &noun());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "亜");
    }

    #[test]
    fn empty_reading_with_expression_is_kept() {
        let records = build_records(&strings(&[""]), &strings(&["亜"]), "b", &noun());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reading, "");
    }

    #[test]
    fn add_tags_is_idempotent() {
        let mut record = Record::new("愛", "あい", "b");
        record.add_tags(["名", "名"]);
        record.add_rules(["v5"]);
        record.add_rules(["v5"]);
        assert_eq!(record.tags.len(), 1);
        assert_eq!(record.rules.len(), 1);
    }

    // ─────────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_reading_is_omitted_from_json() {
        let record = Record::new("これ", "", "body");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("reading"));
    }

    #[test]
    fn term_bank_row_layout() {
        let mut record = Record::new("食べる", "たべる", "body");
        record.add_tags(["動バ下一", "v1"]);
        record.add_rules(["v1"]);
        assert_eq!(
            record.to_term_bank_row(),
            json!(["食べる", "たべる", "v1 動バ下一", "v1", 0, ["body"], 0, ""])
        );
    }
}
