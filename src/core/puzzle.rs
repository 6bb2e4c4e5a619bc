// src/core/puzzle.rs
use crate::core::data;
use crate::core::types::{SlotKind, TemplateId};
use crate::scoring::{BadgeTier, ScoreLedger};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Where a puzzle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "placed", rename_all = "snake_case")]
pub enum PuzzleState {
    Idle,
    Building(usize),
    Completed,
}

/// Result of a `place_slot` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementOutcome {
    /// Slot already placed, foreign to the template, no active puzzle, or
    /// the puzzle is finished.
    Ignored,
    Placed { correct: bool },
    Completed { correct: bool, round_score: u32, perfect: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedSlot {
    pub kind: SlotKind,
    pub correct: bool,
}

/// One build-mode attempt at reconstructing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSession {
    canonical_order: &'static [SlotKind],
    scrambled_order: &'static [SlotKind],
    placed_order: Vec<SlotKind>,
    correctness: BTreeMap<SlotKind, bool>,
    completed: bool,
}

impl PuzzleSession {
    pub fn new(template: TemplateId) -> Self {
        let t = data::template(template);
        Self {
            canonical_order: t.canonical_order,
            scrambled_order: t.scrambled_order,
            placed_order: Vec::with_capacity(t.len()),
            correctness: BTreeMap::new(),
            completed: false,
        }
    }

    pub fn placed_order(&self) -> &[SlotKind] {
        &self.placed_order
    }

    /// Correctness per placed slot. Unplaced slots have no entry.
    pub fn correctness(&self) -> &BTreeMap<SlotKind, bool> {
        &self.correctness
    }

    pub fn state(&self) -> PuzzleState {
        if self.completed {
            PuzzleState::Completed
        } else {
            PuzzleState::Building(self.placed_order.len())
        }
    }

    /// Scrambled slots not yet placed, in scrambled order.
    pub fn remaining(&self) -> Vec<SlotKind> {
        self.scrambled_order
            .iter()
            .copied()
            .filter(|k| !self.placed_order.contains(k))
            .collect()
    }

    pub fn placed_slots(&self) -> Vec<PlacedSlot> {
        self.placed_order
            .iter()
            .map(|&kind| PlacedSlot {
                kind,
                correct: self.correctness.get(&kind).copied().unwrap_or(false),
            })
            .collect()
    }

    /// Number of placed slots sitting at their canonical position.
    pub fn round_score(&self) -> u32 {
        self.placed_order
            .iter()
            .zip(self.canonical_order)
            .filter(|(placed, canonical)| placed == canonical)
            .count() as u32
    }

    fn place(&mut self, kind: SlotKind) -> PlacementOutcome {
        if self.completed
            || self.placed_order.contains(&kind)
            || !self.scrambled_order.contains(&kind)
        {
            return PlacementOutcome::Ignored;
        }

        self.placed_order.push(kind);
        let position = self.placed_order.len() - 1;
        let correct = self.canonical_order[position] == kind;
        self.correctness.insert(kind, correct);

        if self.placed_order.len() == self.canonical_order.len() {
            self.completed = true;
            let round_score = self.round_score();
            PlacementOutcome::Completed {
                correct,
                round_score,
                perfect: round_score as usize == self.canonical_order.len(),
            }
        } else {
            PlacementOutcome::Placed { correct }
        }
    }

    fn remove(&mut self, index: usize) -> Option<SlotKind> {
        if self.completed || index >= self.placed_order.len() {
            return None;
        }
        let removed = self.placed_order.remove(index);
        // Everything after `index` shifted left, so rebuild the whole map.
        self.correctness = self
            .placed_order
            .iter()
            .zip(self.canonical_order)
            .map(|(&placed, &canonical)| (placed, placed == canonical))
            .collect();
        Some(removed)
    }
}

/// Owns the active puzzle (if any) and the score ledger that outlives it.
#[derive(Debug, Clone, Default)]
pub struct PuzzleController {
    session: Option<PuzzleSession>,
    ledger: ScoreLedger,
}

impl PuzzleController {
    pub fn new() -> Self {
        Self::with_ledger(ScoreLedger::new())
    }

    pub fn with_ledger(ledger: ScoreLedger) -> Self {
        Self { session: None, ledger }
    }

    pub fn state(&self) -> PuzzleState {
        self.session.as_ref().map_or(PuzzleState::Idle, PuzzleSession::state)
    }

    pub fn session(&self) -> Option<&PuzzleSession> {
        self.session.as_ref()
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn cumulative_score(&self) -> u32 {
        self.ledger.cumulative_score()
    }

    pub fn badge(&self) -> Option<BadgeTier> {
        self.ledger.badge()
    }

    /// Idle -> Building(0). Replaces any session already running.
    pub fn enter_build_mode(&mut self, template: TemplateId) {
        info!(template = %template, "puzzle started");
        self.session = Some(PuzzleSession::new(template));
    }

    pub fn place_slot(&mut self, kind: SlotKind) -> PlacementOutcome {
        let Some(session) = self.session.as_mut() else {
            debug!(slot = %kind, "place ignored: no active puzzle");
            return PlacementOutcome::Ignored;
        };
        let outcome = session.place(kind);
        match outcome {
            PlacementOutcome::Ignored => debug!(slot = %kind, "place ignored"),
            PlacementOutcome::Placed { correct } => debug!(slot = %kind, correct, "slot placed"),
            PlacementOutcome::Completed { round_score, perfect, .. } => {
                let total = self.ledger.record_round(round_score);
                info!(round_score, perfect, total, "puzzle completed");
            }
        }
        outcome
    }

    /// Returns the removed slot, or `None` when the call was a no-op.
    pub fn remove_slot(&mut self, index: usize) -> Option<SlotKind> {
        let removed = self.session.as_mut().and_then(|s| s.remove(index));
        if removed.is_none() {
            debug!(index, "remove ignored");
        }
        removed
    }

    /// Any state -> Idle. The ledger is untouched.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            debug!("puzzle discarded");
        }
    }

    /// Leaving build mode drops the in-progress puzzle.
    pub fn toggle_mode(&mut self, explore: bool) {
        if explore {
            self.reset();
        }
    }

    pub fn remaining(&self) -> Vec<SlotKind> {
        self.session.as_ref().map(PuzzleSession::remaining).unwrap_or_default()
    }

    pub fn placed_slots(&self) -> Vec<PlacedSlot> {
        self.session.as_ref().map(PuzzleSession::placed_slots).unwrap_or_default()
    }
}
