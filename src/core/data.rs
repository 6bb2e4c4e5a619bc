// src/core/data.rs
//! Static reference tables. Loaded with the binary and never mutated.

use crate::core::types::{
    Location, Noun, NounCategory, NumeralWord, Pronoun, SentenceTemplate, SlotKind, TemplateId,
};

/// The article "the".
pub const ARTICLE: (&str, &str) = ("ewe", "the");
/// Existential verb; English gloss depends on number ("is"/"are").
pub const EXISTENTIAL_VERB: &str = "mi wor";
/// Subject marker opening an existential sentence.
pub const EXISTENTIAL_SUBJECT: (&str, &str) = ("A", "there");
/// Possessive verb.
pub const POSSESSIVE_VERB: (&str, &str) = ("wor", "have");

pub static NOUNS: [Noun; 8] = [
    Noun { chuukese: "puk", english: "book", category: NounCategory::General },
    Noun { chuukese: "imw", english: "house", category: NounCategory::General },
    Noun { chuukese: "pinsel", english: "pencil", category: NounCategory::LongThin },
    Noun { chuukese: "irá", english: "tree", category: NounCategory::LongThin },
    Noun { chuukese: "taka", english: "coconut", category: NounCategory::Round },
    Noun { chuukese: "pool", english: "ball", category: NounCategory::Round },
    Noun { chuukese: "aramas", english: "person", category: NounCategory::Animate },
    Noun { chuukese: "kátu", english: "cat", category: NounCategory::Animate },
];

const ENGLISH_NUMBERS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const fn series(chuukese: [&'static str; 10]) -> [NumeralWord; 10] {
    let mut out = [NumeralWord { chuukese: "", english: "" }; 10];
    let mut i = 0;
    while i < 10 {
        out[i] = NumeralWord { chuukese: chuukese[i], english: ENGLISH_NUMBERS[i] };
        i += 1;
    }
    out
}

static GENERAL_NUMERALS: [NumeralWord; 10] = series([
    "ew", "ruu", "únú", "fáán", "niim", "woon", "fúús", "waan", "ttiwa", "engoon",
]);

static LONG_THIN_NUMERALS: [NumeralWord; 10] = series([
    "efóch", "ruofóch", "únúfóch", "fáfóch", "limefóch",
    "wonofóch", "fúfóch", "wanufóch", "ttiwefóch", "engoonfóch",
]);

static ROUND_NUMERALS: [NumeralWord; 10] = series([
    "eféú", "ruoféú", "únúféú", "fáféú", "limeféú",
    "wonoféú", "fúféú", "wanuféú", "ttiweféú", "engoonféú",
]);

static ANIMATE_NUMERALS: [NumeralWord; 10] = series([
    "emén", "ruomén", "únúmén", "fémén", "limemén",
    "wonomén", "fúmén", "wanumén", "ttiwemén", "engoonmén",
]);

/// The numeral series used for counting nouns of `category`.
pub fn numeral_system(category: NounCategory) -> &'static [NumeralWord; 10] {
    match category {
        NounCategory::General => &GENERAL_NUMERALS,
        NounCategory::LongThin => &LONG_THIN_NUMERALS,
        NounCategory::Round => &ROUND_NUMERALS,
        NounCategory::Animate => &ANIMATE_NUMERALS,
    }
}

pub static LOCATIONS: [Location; 5] = [
    Location { chuukese: "tépen", english: "table", preposition_chk: "wóón", preposition_en: "on" },
    Location { chuukese: "imw", english: "house", preposition_chk: "lón", preposition_en: "in" },
    Location { chuukese: "nóómw", english: "lagoon", preposition_chk: "lón", preposition_en: "in" },
    Location { chuukese: "fénú", english: "island", preposition_chk: "wóón", preposition_en: "on" },
    Location { chuukese: "ppi", english: "beach", preposition_chk: "wóón", preposition_en: "on" },
];

pub static PRONOUNS: [Pronoun; 5] = [
    Pronoun { chuukese: "ngang", english: "I" },
    Pronoun { chuukese: "en", english: "you" },
    Pronoun { chuukese: "i", english: "he" },
    Pronoun { chuukese: "kich", english: "we" },
    Pronoun { chuukese: "ir", english: "they" },
];

static EXISTENTIAL: SentenceTemplate = SentenceTemplate {
    id: TemplateId::Existential,
    canonical_order: &[
        SlotKind::Subject,
        SlotKind::Verb,
        SlotKind::Number,
        SlotKind::Noun,
        SlotKind::Preposition,
        SlotKind::Article,
        SlotKind::Location,
    ],
    scrambled_order: &[
        SlotKind::Noun,
        SlotKind::Location,
        SlotKind::Subject,
        SlotKind::Verb,
        SlotKind::Article,
        SlotKind::Preposition,
        SlotKind::Number,
    ],
    has_location_slots: true,
};

static POSSESSIVE: SentenceTemplate = SentenceTemplate {
    id: TemplateId::Possessive,
    canonical_order: &[SlotKind::Subject, SlotKind::Verb, SlotKind::Number, SlotKind::Noun],
    scrambled_order: &[SlotKind::Number, SlotKind::Noun, SlotKind::Verb, SlotKind::Subject],
    has_location_slots: false,
};

pub fn template(id: TemplateId) -> &'static SentenceTemplate {
    match id {
        TemplateId::Existential => &EXISTENTIAL,
        TemplateId::Possessive => &POSSESSIVE,
    }
}

pub fn templates() -> [&'static SentenceTemplate; 2] {
    [&EXISTENTIAL, &POSSESSIVE]
}
