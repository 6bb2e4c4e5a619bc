use crate::config::TrainerConfig;
use crate::core::data::{self, LOCATIONS, NOUNS, PRONOUNS};
use crate::core::highlight::{HighlightTicket, HighlightTracker};
use crate::core::puzzle::{PlacedSlot, PlacementOutcome, PuzzleController, PuzzleState};
use crate::core::template::{compose, Sentence, SentenceInputs};
use crate::core::types::{
    HighlightElement, LocationIndex, Mode, NounIndex, NumeralValue, PronounIndex, SlotKind,
    TemplateId,
};
use crate::error::{GrammarError, Result};
use crate::persistence::{load_ledger, save_ledger};
use crate::scoring::{BadgeTier, ScoreLedger};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The trainer as seen by a presentation layer: commands mutate, queries
/// only read. Nothing here touches the disk unless `save_ledger` is called.
pub struct GrammarEngine {
    noun: NounIndex,
    value: NumeralValue,
    location: LocationIndex,
    pronoun: PronounIndex,
    template: TemplateId,
    mode: Mode,
    puzzle: PuzzleController,
    highlights: HighlightTracker,
    ledger_path: Option<PathBuf>,
}

/// Serializable view of every query at once.
#[derive(Debug, Clone, Serialize)]
pub struct TrainerSnapshot {
    pub mode: Mode,
    pub template: TemplateId,
    pub noun: NounIndex,
    pub numeral: NumeralValue,
    pub location: LocationIndex,
    pub pronoun: PronounIndex,
    pub sentence: Sentence,
    pub chuukese_text: String,
    pub english_text: String,
    pub puzzle_state: PuzzleState,
    pub remaining_slots: Vec<SlotKind>,
    pub placed_slots: Vec<PlacedSlot>,
    pub cumulative_score: u32,
    pub badge: Option<BadgeTier>,
    pub highlights: Vec<HighlightTicket>,
}

impl GrammarEngine {
    pub fn new() -> Self {
        Self::with_ledger(ScoreLedger::new())
    }

    pub fn with_ledger(ledger: ScoreLedger) -> Self {
        Self {
            noun: 0,
            value: NumeralValue::ONE,
            location: 0,
            pronoun: 0,
            template: TemplateId::default(),
            mode: Mode::Explore,
            puzzle: PuzzleController::with_ledger(ledger),
            highlights: HighlightTracker::new(),
            ledger_path: None,
        }
    }

    /// Builds an engine from config, restoring the ledger when a saved one
    /// exists. A missing file starts from zero; a file that exists but
    /// cannot be read is an error, so it is never overwritten by a fresh
    /// ledger.
    pub fn from_config(config: &TrainerConfig) -> Result<Self> {
        let ledger = match &config.ledger_path {
            Some(path) if path.exists() => load_ledger(path).map_err(|e| {
                warn!(path = %path.display(), error = %e, "could not load score ledger");
                e
            })?,
            _ => ScoreLedger::new(),
        };
        let mut engine = Self::with_ledger(ledger);
        engine.template = config.default_template;
        engine.ledger_path = config.ledger_path.clone();
        Ok(engine)
    }

    /// Like `from_config`, but an unreadable ledger leaves the engine with
    /// an in-memory ledger and no save path instead of failing.
    pub fn from_config_or_detached(config: &TrainerConfig) -> Self {
        Self::from_config(config).unwrap_or_else(|e| {
            warn!(error = %e, "score ledger left untouched; scores will not be saved this run");
            let mut engine = Self::new();
            engine.template = config.default_template;
            engine
        })
    }

    // --- commands ---

    /// Changing the noun can change its numeral series, so the numeral falls
    /// back to 1 and loses its highlight.
    pub fn select_noun(&mut self, index: NounIndex) -> Result<HighlightTicket> {
        if index >= NOUNS.len() {
            warn!(index, "rejected noun selection");
            return Err(GrammarError::NounOutOfRange { index, len: NOUNS.len() });
        }
        self.noun = index;
        self.value = NumeralValue::ONE;
        self.highlights.clear(HighlightElement::Numeral);
        Ok(self.highlights.set(HighlightElement::Noun))
    }

    pub fn select_numeral(&mut self, value: u32) -> Result<HighlightTicket> {
        self.value = NumeralValue::new(value).map_err(|e| {
            warn!(value, "rejected numeral selection");
            e
        })?;
        Ok(self.highlights.set(HighlightElement::Numeral))
    }

    pub fn select_location(&mut self, index: LocationIndex) -> Result<HighlightTicket> {
        if index >= LOCATIONS.len() {
            warn!(index, "rejected location selection");
            return Err(GrammarError::LocationOutOfRange { index, len: LOCATIONS.len() });
        }
        self.location = index;
        Ok(self.highlights.set(HighlightElement::Location))
    }

    pub fn select_pronoun(&mut self, index: PronounIndex) -> Result<HighlightTicket> {
        if index >= PRONOUNS.len() {
            warn!(index, "rejected pronoun selection");
            return Err(GrammarError::PronounOutOfRange { index, len: PRONOUNS.len() });
        }
        self.pronoun = index;
        Ok(self.highlights.set(HighlightElement::Pronoun))
    }

    /// Timer callback from the driver.
    pub fn expire_highlight(&mut self, ticket: HighlightTicket) -> bool {
        self.highlights.expire(ticket)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        info!(?mode, "mode changed");
        self.mode = mode;
        match mode {
            Mode::Build => self.puzzle.enter_build_mode(self.template),
            Mode::Explore => self.puzzle.toggle_mode(true),
        }
    }

    /// A different template has a different slot count and scramble, so an
    /// active puzzle is rebuilt from scratch.
    pub fn switch_template(&mut self, template: TemplateId) {
        if template == self.template {
            return;
        }
        info!(%template, "template switched");
        self.template = template;
        if self.mode == Mode::Build {
            self.puzzle.reset();
            self.puzzle.enter_build_mode(template);
        }
    }

    pub fn place_slot(&mut self, kind: SlotKind) -> PlacementOutcome {
        self.puzzle.place_slot(kind)
    }

    pub fn remove_slot(&mut self, index: usize) -> Option<SlotKind> {
        self.puzzle.remove_slot(index)
    }

    /// Discards the current attempt. In build mode a fresh puzzle for the
    /// same template starts right away.
    pub fn reset_puzzle(&mut self) {
        self.puzzle.reset();
        if self.mode == Mode::Build {
            self.puzzle.enter_build_mode(self.template);
        }
    }

    /// Writes the ledger to the configured path. Returns whether anything
    /// was written; without a path this is a no-op returning `false`.
    pub fn save_ledger(&self) -> Result<bool> {
        match &self.ledger_path {
            Some(path) => {
                save_ledger(self.puzzle.ledger(), path)?;
                info!(path = %path.display(), score = self.cumulative_score(), "score ledger saved");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn ledger_path(&self) -> Option<&Path> {
        self.ledger_path.as_deref()
    }

    // --- queries ---

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn selected_noun(&self) -> NounIndex {
        self.noun
    }

    pub fn selected_numeral(&self) -> NumeralValue {
        self.value
    }

    pub fn selected_location(&self) -> LocationIndex {
        self.location
    }

    pub fn selected_pronoun(&self) -> PronounIndex {
        self.pronoun
    }

    pub fn sentence(&self) -> Sentence {
        let inputs = SentenceInputs {
            noun: &NOUNS[self.noun],
            value: self.value,
            location: &LOCATIONS[self.location],
            pronoun: &PRONOUNS[self.pronoun],
        };
        compose(self.template, &inputs)
    }

    pub fn puzzle_state(&self) -> PuzzleState {
        self.puzzle.state()
    }

    pub fn remaining_scrambled_slots(&self) -> Vec<SlotKind> {
        self.puzzle.remaining()
    }

    pub fn placed_slots(&self) -> Vec<PlacedSlot> {
        self.puzzle.placed_slots()
    }

    pub fn ledger(&self) -> &ScoreLedger {
        self.puzzle.ledger()
    }

    pub fn cumulative_score(&self) -> u32 {
        self.puzzle.cumulative_score()
    }

    pub fn badge_tier(&self) -> Option<BadgeTier> {
        self.puzzle.badge()
    }

    pub fn highlights(&self) -> Vec<HighlightTicket> {
        self.highlights.active()
    }

    pub fn is_highlighted(&self, element: HighlightElement) -> bool {
        self.highlights.is_active(element)
    }

    pub fn template_has_location_slots(&self) -> bool {
        data::template(self.template).has_location_slots
    }

    pub fn snapshot(&self) -> TrainerSnapshot {
        let sentence = self.sentence();
        TrainerSnapshot {
            mode: self.mode,
            template: self.template,
            noun: self.noun,
            numeral: self.value,
            location: self.location,
            pronoun: self.pronoun,
            chuukese_text: sentence.chuukese_text(),
            english_text: sentence.english_text(),
            sentence,
            puzzle_state: self.puzzle_state(),
            remaining_slots: self.remaining_scrambled_slots(),
            placed_slots: self.placed_slots(),
            cumulative_score: self.cumulative_score(),
            badge: self.badge_tier(),
            highlights: self.highlights(),
        }
    }
}

impl Default for GrammarEngine {
    fn default() -> Self {
        Self::new()
    }
}
