// File: src/command.rs
//! JSON command protocol between a presentation layer and the engine.
//! One request object in, one response object out.

use crate::core::engine::{GrammarEngine, TrainerSnapshot};
use crate::core::highlight::HighlightTicket;
use crate::core::puzzle::PlacementOutcome;
use crate::core::types::{HighlightElement, Mode, SlotKind, TemplateId};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    SelectNoun { index: usize },
    SelectNumeral { value: u32 },
    SelectLocation { index: usize },
    SelectPronoun { index: usize },
    SetMode { mode: Mode },
    SwitchTemplate { template: TemplateId },
    PlaceSlot { slot: SlotKind },
    RemoveSlot { index: usize },
    ResetPuzzle,
    HighlightExpired { element: HighlightElement, generation: u64 },
    SaveLedger,
    Snapshot,
}

/// What a command did, beyond the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    None,
    /// The driver should schedule a clear-timer for this ticket.
    Highlight { ticket: HighlightTicket, clear_after_ms: u64 },
    Placement { placement: PlacementOutcome },
    Removed { slot: Option<SlotKind> },
    HighlightCleared { cleared: bool },
    /// `persisted` is false when no ledger path is configured.
    Saved { persisted: bool },
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Ok { ok: bool, outcome: Outcome, snapshot: Box<TrainerSnapshot> },
    Err { ok: bool, error: String },
}

impl Response {
    pub fn ok(outcome: Outcome, snapshot: TrainerSnapshot) -> Self {
        Response::Ok { ok: true, outcome, snapshot: Box::new(snapshot) }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Err { ok: false, error: message.into() }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }
}

pub fn parse(line: &str) -> Result<Command> {
    Ok(serde_json::from_str(line)?)
}

/// Runs one command. Errors leave the engine unchanged.
pub fn dispatch(engine: &mut GrammarEngine, command: Command, highlight_ms: u64) -> Result<Outcome> {
    let highlight = |ticket| Outcome::Highlight { ticket, clear_after_ms: highlight_ms };
    let outcome = match command {
        Command::SelectNoun { index } => highlight(engine.select_noun(index)?),
        Command::SelectNumeral { value } => highlight(engine.select_numeral(value)?),
        Command::SelectLocation { index } => highlight(engine.select_location(index)?),
        Command::SelectPronoun { index } => highlight(engine.select_pronoun(index)?),
        Command::SetMode { mode } => {
            engine.set_mode(mode);
            Outcome::None
        }
        Command::SwitchTemplate { template } => {
            engine.switch_template(template);
            Outcome::None
        }
        Command::PlaceSlot { slot } => Outcome::Placement { placement: engine.place_slot(slot) },
        Command::RemoveSlot { index } => Outcome::Removed { slot: engine.remove_slot(index) },
        Command::ResetPuzzle => {
            engine.reset_puzzle();
            Outcome::None
        }
        Command::HighlightExpired { element, generation } => Outcome::HighlightCleared {
            cleared: engine.expire_highlight(HighlightTicket { element, generation }),
        },
        Command::SaveLedger => Outcome::Saved { persisted: engine.save_ledger()? },
        Command::Snapshot => Outcome::None,
    };
    Ok(outcome)
}

/// Parse, dispatch and wrap, never failing: protocol errors become error
/// responses.
pub fn handle_line(engine: &mut GrammarEngine, line: &str, highlight_ms: u64) -> Response {
    match parse(line).and_then(|cmd| dispatch(engine, cmd, highlight_ms)) {
        Ok(outcome) => Response::ok(outcome, engine.snapshot()),
        Err(e) => Response::error(e.to_string()),
    }
}
