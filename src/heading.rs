//! Heading segmentation.
//!
//! A Daijirin heading looks like `たべる【食べる】〖…〗（…）`: a kana reading
//! followed by optional bracketed fields. Only the reading and the 【】
//! expression field feed records; the other two are captured for callers
//! that want them.

use crate::patterns::{HEADING_PATTERN, PHONETIC_MARKS};

/// The four fields of one heading, borrowed from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Reading exactly as written, phonetic marks included.
    pub reading: &'a str,
    /// Contents of `【...】`, if present and non-empty.
    pub expression: Option<&'a str>,
    /// Contents of `〖...〗`.
    pub auxiliary: Option<&'a str>,
    /// Contents of the trailing `（...）`.
    pub annotation: Option<&'a str>,
}

impl<'a> Heading<'a> {
    /// Readings with `-` and `・` runs removed.
    ///
    /// The heading dialect carries a single reading, so this never holds more
    /// than one element.
    pub fn readings(&self) -> Vec<String> {
        if self.reading.is_empty() {
            return vec![];
        }
        vec![PHONETIC_MARKS.replace_all(self.reading, "").into_owned()]
    }
}

/// Split a heading into its fields.
///
/// Returns `None` when the heading has no reading run at all, which callers
/// treat as "no records" rather than an error.
pub fn segment(heading: &str) -> Option<Heading<'_>> {
    let caps = HEADING_PATTERN.captures(heading)?;
    let non_empty = |i: usize| caps.get(i).map(|m| m.as_str()).filter(|s| !s.is_empty());

    Some(Heading {
        reading: caps.get(1)?.as_str(),
        expression: non_empty(2),
        auxiliary: non_empty(3),
        annotation: non_empty(4),
    })
}
