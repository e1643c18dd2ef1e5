//! Compiled patterns shared by the heading, variant and tag passes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::glyphs::GlyphTable;

lazy_static! {
    // Heading: reading, then optional 【expression】, 〖auxiliary〗, （annotation）
    pub static ref HEADING_PATTERN: Regex =
        Regex::new(r"([^（【〖]+)(?:【(.*)】)?(?:〖(.*)〗)?(?:（(.*)）)?").unwrap();

    // Length and syllable marks inside readings
    pub static ref PHONETIC_MARKS: Regex = Regex::new(r"[-・]+").unwrap();

    // Optional orthographic span inside an expression candidate, e.g. 食べ(る)
    pub static ref VARIANT_PATTERN: Regex = Regex::new(r"\((.*)\)").unwrap();

    // Full-width parenthetical, used both in expressions and in body lines
    pub static ref ANNOTATION_PATTERN: Regex = Regex::new(r"（(.*)）").unwrap();

    // Inflection class markers
    pub static ref FIVE_GRADE_PATTERN: Regex = Regex::new(r"(動.五)|(動..二)").unwrap();
    pub static ref ONE_GRADE_PATTERN: Regex = Regex::new(r"動..一").unwrap();

    // Gaiji markers emitted by the upstream decoder: {{n_49441}}, {{w_41249}}
    pub static ref GLYPH_MARKER: Regex = {
        let prefixes = GlyphTable::ALL.map(GlyphTable::marker).join("|");
        Regex::new(&format!(r"\{{\{{({prefixes})_(\d+)\}}\}}")).unwrap()
    };
}
