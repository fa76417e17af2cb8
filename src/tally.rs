use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcome::OutcomeCategory;

/// Win/loss/draw counters for the lifetime of a session. Only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SessionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_outcome(&mut self, category: OutcomeCategory) {
        match category {
            OutcomeCategory::Win => self.wins += 1,
            OutcomeCategory::Loss => self.losses += 1,
            OutcomeCategory::Draw => self.draws += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl fmt::Display for SessionTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {} | Losses: {} | Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}
