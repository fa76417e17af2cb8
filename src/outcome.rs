use std::fmt;

use serde::{Deserialize, Serialize};

/// How a resolved round ended. Variants are listed in resolution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Draw,
}

/// Which tally counter an outcome feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCategory {
    Win,
    Loss,
    Draw,
}

/// Sound cue the presentation layer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Deal,
    Click,
    Win,
    Lose,
}

impl Outcome {
    /// Compares final totals. A player bust is decided before the dealer's
    /// total is looked at.
    pub fn resolve(player_score: u8, dealer_score: u8) -> Self {
        if player_score > 21 {
            Outcome::PlayerBust
        } else if dealer_score > 21 {
            Outcome::DealerBust
        } else if player_score > dealer_score {
            Outcome::PlayerWins
        } else if player_score < dealer_score {
            Outcome::DealerWins
        } else {
            Outcome::Draw
        }
    }

    pub fn category(&self) -> OutcomeCategory {
        match self {
            Outcome::DealerBust | Outcome::PlayerWins => OutcomeCategory::Win,
            Outcome::PlayerBust | Outcome::DealerWins => OutcomeCategory::Loss,
            Outcome::Draw => OutcomeCategory::Draw,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBust => "You went over. You lose 😭",
            Outcome::DealerBust => "Dealer busts! You win 😎",
            Outcome::PlayerWins => "You win 🎉",
            Outcome::DealerWins => "Dealer wins 😤",
            Outcome::Draw => "It's a draw 🤝",
        }
    }

    pub fn cue(&self) -> Cue {
        match self.category() {
            OutcomeCategory::Win => Cue::Win,
            OutcomeCategory::Loss => Cue::Lose,
            OutcomeCategory::Draw => Cue::Click,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Deal => "deal",
            Cue::Click => "click",
            Cue::Win => "win",
            Cue::Lose => "lose",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
