// File: src/core/highlight.rs
use crate::core::types::HighlightElement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Handed to whoever schedules the clear-timer. Clearing only works while
/// the generation still matches the element's live highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightTicket {
    pub element: HighlightElement,
    pub generation: u64,
}

/// Transient "just changed" markers for the explore-mode selectors.
#[derive(Debug, Clone, Default)]
pub struct HighlightTracker {
    next_generation: u64,
    active: BTreeMap<HighlightElement, u64>,
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `element` as highlighted with a fresh generation.
    pub fn set(&mut self, element: HighlightElement) -> HighlightTicket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.active.insert(element, generation);
        HighlightTicket { element, generation }
    }

    /// Timer callback. A stale ticket is ignored. Returns whether anything
    /// was cleared.
    pub fn expire(&mut self, ticket: HighlightTicket) -> bool {
        match self.active.get(&ticket.element) {
            Some(&live) if live == ticket.generation => {
                self.active.remove(&ticket.element);
                true
            }
            _ => false,
        }
    }

    /// Drops a highlight unconditionally, e.g. when its value was reset.
    pub fn clear(&mut self, element: HighlightElement) {
        self.active.remove(&element);
    }

    pub fn is_active(&self, element: HighlightElement) -> bool {
        self.active.contains_key(&element)
    }

    pub fn active(&self) -> Vec<HighlightTicket> {
        self.active
            .iter()
            .map(|(&element, &generation)| HighlightTicket { element, generation })
            .collect()
    }
}
