//! Grammatical tags from body annotations.
//!
//! Body lines carry part-of-speech notes in full-width parentheses, e.g.
//! `（動カ五）` or `（名・形動）`. Tokens that name a known category become tags;
//! verb and adjective classes additionally yield an inflection rule.

use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashSet};

use crate::patterns::{ANNOTATION_PATTERN, FIVE_GRADE_PATTERN, ONE_GRADE_PATTERN};

/// Every part-of-speech label kept as a tag.
#[rustfmt::skip]
pub const TAG_VOCABULARY: &[&str] = &[
    "並立助", "代", "係助", "副", "副助", "助動", "動",
    "動ア上一", "動ア下一", "動ア下二", "動ア五［ハ四］",
    "動カ上一", "動カ上二", "動カ下一", "動カ下二", "動カ五", "動カ五［四］", "動カ四", "動カ変",
    "動ガ上一", "動ガ上二", "動ガ下一", "動ガ下二", "動ガ五", "動ガ五［四］", "動ガ四",
    "動サ上一", "動サ下一", "動サ下二", "動サ五", "動サ五［四］", "動サ四", "動サ変", "動サ特活",
    "動ザ上一", "動ザ上二", "動ザ下一", "動ザ下二",
    "動タ上一", "動タ上二", "動タ下一", "動タ下二", "動タ五［四］", "動タ四",
    "動ダ上二", "動ダ下一", "動ダ下二",
    "動ナ上一", "動ナ下一", "動ナ下二", "動ナ五", "動ナ五［四］",
    "動ハ上一", "動ハ上二", "動ハ下一", "動ハ下二", "動ハ四", "動ハ特活",
    "動バ上一", "動バ上二", "動バ下一", "動バ下二", "動バ五［四］", "動バ四",
    "動マ上一", "動マ上二", "動マ下一", "動マ下二", "動マ五", "動マ五［四］", "動マ四", "動マ特活",
    "動ヤ上一", "動ヤ上二", "動ヤ下二",
    "動ラ上一", "動ラ上二", "動ラ下一", "動ラ下二", "動ラ五", "動ラ五［四］", "動ラ四", "動ラ変", "動ラ特活",
    "動ワ上一", "動ワ上二", "動ワ下一", "動ワ下二", "動ワ五", "動ワ五［ハ四］",
    "動五［四］", "動特活", "動詞五［四］段型活用",
    "名", "形", "形ク", "形シク", "形動", "形動タリ", "形動ナリ",
    "感", "接助", "接尾", "接続", "接頭", "枕詞", "格助", "終助", "連体", "連語", "間投助",
];

/// The single token that marks an i-adjective.
pub const ADJECTIVE_MARKER: &str = "形";

lazy_static! {
    static ref VOCABULARY: HashSet<&'static str> = TAG_VOCABULARY.iter().copied().collect();
}

/// Whether `token` is a recognised part-of-speech label.
pub fn is_known_tag(token: &str) -> bool {
    VOCABULARY.contains(token)
}

/// Collect candidate tag tokens from every line of an entry body.
pub fn extract_tags(text: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for line in text.split('\n') {
        if let Some(cap) = ANNOTATION_PATTERN.captures(line) {
            for token in cap[1].split('・') {
                tokens.insert(token.to_string());
            }
        }
    }
    tokens
}

/// Inflection behaviour implied by a tag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InflectionRule {
    Adjective,
    FiveGrade,
    OneGrade,
}

impl InflectionRule {
    /// Precedence order; the first rule that matches a token wins.
    pub const ORDER: [InflectionRule; 3] = [
        InflectionRule::Adjective,
        InflectionRule::FiveGrade,
        InflectionRule::OneGrade,
    ];

    /// Tag and rule name written to records.
    pub fn as_str(self) -> &'static str {
        match self {
            InflectionRule::Adjective => "adj-i",
            InflectionRule::FiveGrade => "v5",
            InflectionRule::OneGrade => "v1",
        }
    }

    fn matches(self, token: &str) -> bool {
        match self {
            InflectionRule::Adjective => token == ADJECTIVE_MARKER,
            InflectionRule::FiveGrade => FIVE_GRADE_PATTERN.is_match(token),
            InflectionRule::OneGrade => ONE_GRADE_PATTERN.is_match(token),
        }
    }

    /// The rule a token implies, if any.
    pub fn detect(token: &str) -> Option<InflectionRule> {
        Self::ORDER.iter().copied().find(|rule| rule.matches(token))
    }
}

/// Tags and rules derived once per entry and shared by all of its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub tags: BTreeSet<String>,
    pub rules: BTreeSet<String>,
}

/// Filter candidate tokens against the vocabulary and derive inflection rules.
pub fn classify<'a, I>(tokens: I) -> Classification
where
    I: IntoIterator<Item = &'a str>,
{
    let mut class = Classification::default();
    for token in tokens {
        if is_known_tag(token) {
            class.tags.insert(token.to_string());
        }
        if let Some(rule) = InflectionRule::detect(token) {
            class.tags.insert(rule.as_str().to_string());
            class.rules.insert(rule.as_str().to_string());
        }
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ─────────────────────────────────────────────────────────────
    // Extraction
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn extracts_tokens_from_each_line() {
        let text = "たべる【食べる】\n（動バ下一）\n食物を口に入れる。\n（名・形動）";
        assert_eq!(extract_tags(text), set(&["動バ下一", "名", "形動"]));
    }

    #[test]
    fn embedded_annotation_is_found() {
        assert_eq!(extract_tags("❶（副）ゆっくりと"), set(&["副"]));
    }

    #[test]
    fn lines_without_annotation_contribute_nothing() {
        assert!(extract_tags("ただの説明文。\n二行目").is_empty());
    }

    #[test]
    fn duplicate_tokens_collapse() {
        assert_eq!(extract_tags("（名）\n（名）"), set(&["名"]));
    }

    // ─────────────────────────────────────────────────────────────
    // Classification
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn adjective_and_five_grade() {
        let class = classify(["形", "動カ五"]);
        assert_eq!(class.tags, set(&["形", "動カ五", "adj-i", "v5"]));
        assert_eq!(class.rules, set(&["adj-i", "v5"]));
    }

    #[test]
    fn order_independent() {
        assert_eq!(classify(["動カ五", "形"]), classify(["形", "動カ五"]));
    }

    #[test]
    fn one_grade_verb() {
        let class = classify(["動バ下一"]);
        assert_eq!(class.tags, set(&["動バ下一", "v1"]));
        assert_eq!(class.rules, set(&["v1"]));
    }

    #[test]
    fn two_grade_counts_as_five_grade() {
        let class = classify(["動ハ下二"]);
        assert_eq!(class.rules, set(&["v5"]));
    }

    #[test]
    fn unknown_tokens_dropped() {
        let class = classify(["古語", "英語"]);
        assert!(class.tags.is_empty());
        assert!(class.rules.is_empty());
    }

    #[test]
    fn rule_applies_without_vocabulary_entry() {
        // not in the vocabulary, but still a five-grade class
        let class = classify(["動ア五"]);
        assert_eq!(class.tags, set(&["v5"]));
        assert_eq!(class.rules, set(&["v5"]));
    }

    #[test]
    fn adjective_variants_do_not_trigger_rule() {
        let class = classify(["形動", "形ク"]);
        assert_eq!(class.tags, set(&["形動", "形ク"]));
        assert!(class.rules.is_empty());
    }

    #[test]
    fn first_matching_rule_wins() {
        // two-grade classes fall under the five-grade rule
        assert_eq!(InflectionRule::detect("動カ上二"), Some(InflectionRule::FiveGrade));
        assert_eq!(InflectionRule::detect("動カ上一"), Some(InflectionRule::OneGrade));
        assert_eq!(InflectionRule::detect("形"), Some(InflectionRule::Adjective));
        assert_eq!(InflectionRule::detect("名"), None);
    }

    #[test]
    fn vocabulary_has_no_gaps() {
        assert!(is_known_tag("動詞五［四］段型活用"));
        assert!(is_known_tag("間投助"));
        assert!(!is_known_tag("形容詞"));
    }
}
