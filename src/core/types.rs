// src/core/types.rs
use crate::error::{GrammarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index into the noun catalog.
pub type NounIndex = usize;
/// Index into the location catalog.
pub type LocationIndex = usize;
/// Index into the pronoun table.
pub type PronounIndex = usize;

/// The semantic class of a noun. Chuukese picks a different numeral series
/// depending on what is being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NounCategory {
    General,
    LongThin,
    Round,
    Animate,
}

impl NounCategory {
    pub const ALL: [NounCategory; 4] = [
        NounCategory::General,
        NounCategory::LongThin,
        NounCategory::Round,
        NounCategory::Animate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NounCategory::General => "general",
            NounCategory::LongThin => "long-thin",
            NounCategory::Round => "round",
            NounCategory::Animate => "animate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Noun {
    pub chuukese: &'static str,
    pub english: &'static str,
    pub category: NounCategory,
}

/// One entry of a numeral series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumeralWord {
    pub chuukese: &'static str,
    pub english: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub chuukese: &'static str,
    pub english: &'static str,
    pub preposition_chk: &'static str,
    pub preposition_en: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pronoun {
    pub chuukese: &'static str,
    pub english: &'static str,
}

/// A counted quantity. Only 1..=10 exist in the numeral tables, so anything
/// else is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NumeralValue(u8);

impl NumeralValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const ONE: NumeralValue = NumeralValue(1);

    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN as u32..=Self::MAX as u32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(GrammarError::NumeralOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Position of this value inside a numeral series.
    pub fn table_index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for NumeralValue {
    type Error = GrammarError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value as u32)
    }
}

impl From<NumeralValue> for u8 {
    fn from(value: NumeralValue) -> u8 {
        value.0
    }
}

/// A grammatical role position inside a sentence template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Subject,
    Verb,
    Number,
    Noun,
    Preposition,
    Article,
    Location,
}

impl SlotKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotKind::Subject => "subject",
            SlotKind::Verb => "verb",
            SlotKind::Number => "number",
            SlotKind::Noun => "noun",
            SlotKind::Preposition => "preposition",
            SlotKind::Article => "article",
            SlotKind::Location => "location",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotKind {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subject" => Ok(SlotKind::Subject),
            "verb" => Ok(SlotKind::Verb),
            "number" => Ok(SlotKind::Number),
            "noun" => Ok(SlotKind::Noun),
            "preposition" => Ok(SlotKind::Preposition),
            "article" => Ok(SlotKind::Article),
            "location" => Ok(SlotKind::Location),
            other => Err(GrammarError::UnknownSlot(other.to_string())),
        }
    }
}

/// The two supported sentence patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// "There is/are N noun PREP the location."
    #[default]
    Existential,
    /// "PRONOUN have N noun."
    Possessive,
}

impl TemplateId {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Existential => "existential",
            TemplateId::Possessive => "possessive",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "existential" => Ok(TemplateId::Existential),
            "possessive" => Ok(TemplateId::Possessive),
            other => Err(GrammarError::UnknownTemplate(other.to_string())),
        }
    }
}

/// A fixed sentence pattern. `canonical_order` never repeats a slot, so
/// "right position" and "right part" mean the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceTemplate {
    pub id: TemplateId,
    pub canonical_order: &'static [SlotKind],
    /// Hand-picked permutation shown in build mode. Not randomised, so a
    /// template is always the same puzzle.
    pub scrambled_order: &'static [SlotKind],
    pub has_location_slots: bool,
}

impl SentenceTemplate {
    pub fn len(&self) -> usize {
        self.canonical_order.len()
    }

    pub fn contains(&self, kind: SlotKind) -> bool {
        self.canonical_order.contains(&kind)
    }
}

/// Which explore-mode selector was last changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightElement {
    Noun,
    Numeral,
    Location,
    Pronoun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Explore,
    Build,
}

impl FromStr for Mode {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explore" => Ok(Mode::Explore),
            "build" => Ok(Mode::Build),
            other => Err(GrammarError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeral_value_rejects_out_of_range() {
        assert!(NumeralValue::new(0).is_err());
        assert!(NumeralValue::new(11).is_err());
        assert_eq!(NumeralValue::new(10).unwrap().table_index(), 9);
        assert_eq!(NumeralValue::ONE.table_index(), 0);
    }

    #[test]
    fn numeral_value_deserializes_with_validation() {
        let ok: NumeralValue = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<NumeralValue>("0").is_err());
    }

    #[test]
    fn slot_kind_parses_case_insensitively() {
        assert_eq!("Noun".parse::<SlotKind>().unwrap(), SlotKind::Noun);
        assert!(matches!(
            "adverb".parse::<SlotKind>(),
            Err(GrammarError::UnknownSlot(_))
        ));
    }
}
