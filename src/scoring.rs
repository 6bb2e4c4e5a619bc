// File: src/scoring.rs
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Beginner,
    Intermediate,
    Proficient,
}

impl BadgeTier {
    pub fn label(self) -> &'static str {
        match self {
            BadgeTier::Beginner => "Beginner",
            BadgeTier::Intermediate => "Intermediate",
            BadgeTier::Proficient => "Proficient",
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Default thresholds, highest first.
pub const DEFAULT_TIERS: [(u32, BadgeTier); 3] = [
    (500, BadgeTier::Proficient),
    (200, BadgeTier::Intermediate),
    (100, BadgeTier::Beginner),
];

fn default_tiers() -> Vec<(u32, BadgeTier)> {
    DEFAULT_TIERS.to_vec()
}

/// Running total of puzzle points across every session of one run.
/// Only ever grows. Only the score is persisted; thresholds always come
/// from `DEFAULT_TIERS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    cumulative_score: u32,
    #[serde(skip, default = "default_tiers")]
    tier_thresholds: Vec<(u32, BadgeTier)>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::with_score(0)
    }

    pub fn with_score(cumulative_score: u32) -> Self {
        Self { cumulative_score, tier_thresholds: default_tiers() }
    }

    pub fn cumulative_score(&self) -> u32 {
        self.cumulative_score
    }

    /// Adds a finished round. Saturates instead of wrapping.
    pub fn record_round(&mut self, round_score: u32) -> u32 {
        self.cumulative_score = self.cumulative_score.saturating_add(round_score);
        self.cumulative_score
    }

    /// Derived on every call; nothing is cached.
    pub fn badge(&self) -> Option<BadgeTier> {
        tier_for(self.cumulative_score, &self.tier_thresholds)
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest tier whose threshold `score` reaches.
pub fn tier_for(score: u32, thresholds: &[(u32, BadgeTier)]) -> Option<BadgeTier> {
    thresholds
        .iter()
        .filter(|(min, _)| score >= *min)
        .max_by_key(|(min, _)| *min)
        .map(|(_, tier)| *tier)
}
