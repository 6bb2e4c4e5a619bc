// src/core/agreement.rs
use crate::core::data::numeral_system;
use crate::core::types::{NounCategory, NumeralValue, NumeralWord};

/// Picks the numeral word for counting `value` nouns of `category`.
/// Only ever reads the table belonging to `category`.
pub fn resolve_numeral(category: NounCategory, value: NumeralValue) -> &'static NumeralWord {
    &numeral_system(category)[value.table_index()]
}

/// Chuukese form of [`resolve_numeral`].
pub fn resolve_numeral_word(category: NounCategory, value: NumeralValue) -> &'static str {
    resolve_numeral(category, value).chuukese
}

/// English plural for glosses. A small suffix heuristic, good enough for the
/// fixed noun catalog.
pub fn pluralize_english(base: &str, value: NumeralValue) -> String {
    if value.get() == 1 {
        return base.to_string();
    }
    if let Some(stem) = base.strip_suffix('y') {
        return format!("{}ies", stem);
    }
    if ["s", "x", "ch", "sh"].iter().any(|suffix| base.ends_with(suffix)) {
        return format!("{}es", base);
    }
    format!("{}s", base)
}
