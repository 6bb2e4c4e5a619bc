// src/core/template.rs
use crate::core::agreement::{pluralize_english, resolve_numeral};
use crate::core::data::{self, ARTICLE, EXISTENTIAL_SUBJECT, EXISTENTIAL_VERB, POSSESSIVE_VERB};
use crate::core::types::{Location, Noun, NumeralValue, Pronoun, SlotKind, TemplateId};
use serde::Serialize;
use std::collections::BTreeMap;

/// The word bound to one slot, with its English gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotBinding {
    pub chuukese: String,
    pub english: String,
}

impl SlotBinding {
    fn new(chuukese: impl Into<String>, english: impl Into<String>) -> Self {
        Self { chuukese: chuukese.into(), english: english.into() }
    }
}

/// Everything the learner currently has selected.
#[derive(Debug, Clone, Copy)]
pub struct SentenceInputs<'a> {
    pub noun: &'a Noun,
    pub value: NumeralValue,
    pub location: &'a Location,
    pub pronoun: &'a Pronoun,
}

/// A fully bound sentence for one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub template: TemplateId,
    pub canonical_order: Vec<SlotKind>,
    pub bindings: BTreeMap<SlotKind, SlotBinding>,
}

impl Sentence {
    pub fn binding(&self, kind: SlotKind) -> Option<&SlotBinding> {
        self.bindings.get(&kind)
    }

    /// Chuukese words in canonical order.
    pub fn chuukese_words(&self) -> Vec<&str> {
        self.canonical_order
            .iter()
            .filter_map(|k| self.bindings.get(k))
            .map(|b| b.chuukese.as_str())
            .collect()
    }

    pub fn chuukese_text(&self) -> String {
        finish_sentence(&self.chuukese_words().join(" "))
    }

    pub fn english_text(&self) -> String {
        let words: Vec<&str> = self
            .canonical_order
            .iter()
            .filter_map(|k| self.bindings.get(k))
            .map(|b| b.english.as_str())
            .collect();
        finish_sentence(&words.join(" "))
    }
}

fn finish_sentence(raw: &str) -> String {
    let mut chars = raw.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };
    out.push('.');
    out
}

/// Binds every slot of `template` from the current selections.
pub fn compose(template: TemplateId, inputs: &SentenceInputs<'_>) -> Sentence {
    let numeral = resolve_numeral(inputs.noun.category, inputs.value);
    let number = SlotBinding::new(numeral.chuukese, numeral.english);
    let noun = SlotBinding::new(inputs.noun.chuukese, pluralize_english(inputs.noun.english, inputs.value));

    let mut bindings = BTreeMap::new();
    match template {
        TemplateId::Existential => {
            let copula = if inputs.value.get() == 1 { "is" } else { "are" };
            bindings.insert(SlotKind::Subject, SlotBinding::new(EXISTENTIAL_SUBJECT.0, EXISTENTIAL_SUBJECT.1));
            bindings.insert(SlotKind::Verb, SlotBinding::new(EXISTENTIAL_VERB, copula));
            bindings.insert(SlotKind::Number, number);
            bindings.insert(SlotKind::Noun, noun);
            bindings.insert(
                SlotKind::Preposition,
                SlotBinding::new(inputs.location.preposition_chk, inputs.location.preposition_en),
            );
            bindings.insert(SlotKind::Article, SlotBinding::new(ARTICLE.0, ARTICLE.1));
            bindings.insert(
                SlotKind::Location,
                SlotBinding::new(inputs.location.chuukese, inputs.location.english),
            );
        }
        TemplateId::Possessive => {
            bindings.insert(
                SlotKind::Subject,
                SlotBinding::new(inputs.pronoun.chuukese, inputs.pronoun.english),
            );
            bindings.insert(SlotKind::Verb, SlotBinding::new(POSSESSIVE_VERB.0, POSSESSIVE_VERB.1));
            bindings.insert(SlotKind::Number, number);
            bindings.insert(SlotKind::Noun, noun);
        }
    }

    Sentence {
        template,
        canonical_order: data::template(template).canonical_order.to_vec(),
        bindings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{numeral_system, LOCATIONS, NOUNS, PRONOUNS};
    use crate::core::types::NounCategory;

    fn inputs(noun: usize, value: u32, location: usize, pronoun: usize) -> SentenceInputs<'static> {
        SentenceInputs {
            noun: &NOUNS[noun],
            value: NumeralValue::new(value).unwrap(),
            location: &LOCATIONS[location],
            pronoun: &PRONOUNS[pronoun],
        }
    }

    #[test]
    fn existential_binds_puk_example() {
        let sentence = compose(TemplateId::Existential, &inputs(0, 1, 0, 0));
        assert_eq!(
            sentence.canonical_order,
            vec![
                SlotKind::Subject,
                SlotKind::Verb,
                SlotKind::Number,
                SlotKind::Noun,
                SlotKind::Preposition,
                SlotKind::Article,
                SlotKind::Location,
            ]
        );
        let expected_numeral = numeral_system(NounCategory::General)[0].chuukese;
        assert_eq!(
            sentence.chuukese_words(),
            vec!["A", EXISTENTIAL_VERB, expected_numeral, "puk", "wóón", "ewe", "tépen"]
        );
        assert_eq!(sentence.english_text(), "There is one book on the table.");
    }

    #[test]
    fn existential_plural_gloss() {
        let sentence = compose(TemplateId::Existential, &inputs(4, 3, 2, 0));
        assert_eq!(sentence.english_text(), "There are three coconuts in the lagoon.");
        assert_eq!(sentence.binding(SlotKind::Number).unwrap().chuukese, "únúféú");
    }

    #[test]
    fn possessive_has_no_location_slots() {
        let sentence = compose(TemplateId::Possessive, &inputs(6, 2, 3, 0));
        assert_eq!(sentence.bindings.len(), 4);
        assert!(sentence.binding(SlotKind::Location).is_none());
        assert!(sentence.binding(SlotKind::Preposition).is_none());
        assert_eq!(sentence.english_text(), "I have two persons.");
        assert_eq!(sentence.chuukese_text(), "Ngang wor ruomén aramas.");
    }

    #[test]
    fn numeral_follows_noun_category() {
        let pencil = compose(TemplateId::Possessive, &inputs(2, 1, 0, 1));
        let cat = compose(TemplateId::Possessive, &inputs(7, 1, 0, 1));
        assert_eq!(pencil.binding(SlotKind::Number).unwrap().chuukese, "efóch");
        assert_eq!(cat.binding(SlotKind::Number).unwrap().chuukese, "emén");
    }
}
