//! Expansion of the 【】 expression field into surface forms.

use crate::patterns::{ANNOTATION_PATTERN, VARIANT_PATTERN};

/// Expand a raw expression field into every written form it stands for.
///
/// `（...）` annotations are dropped, the remainder is split on `・`, and any
/// candidate with an optional `(...)` span yields two forms: one with the span
/// kept and one with it removed. `食べ(る)` gives `食べる` then `食べ`.
pub fn expand(expression: &str) -> Vec<String> {
    let expression = ANNOTATION_PATTERN.replace_all(expression, "");

    let mut forms = Vec::new();
    for candidate in expression.split('・') {
        let inclusive = VARIANT_PATTERN.replace_all(candidate, "$1");
        let has_variant = inclusive != candidate;
        forms.push(inclusive.into_owned());

        if has_variant {
            forms.push(VARIANT_PATTERN.replace_all(candidate, "").into_owned());
        }
    }

    forms
}
