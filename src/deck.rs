use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};

/// Where the table gets its cards from.
pub trait CardSource {
    fn deal_card(&mut self) -> Card;
}

/// Infinite shoe: every card is drawn with replacement, so it never runs out
/// and the same card may come up any number of times.
#[derive(Debug, Clone)]
pub struct Shoe {
    rng: ChaCha8Rng,
}

impl Shoe {
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl CardSource for Shoe {
    fn deal_card(&mut self) -> Card {
        let rank = Rank::ALL[self.rng.gen_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[self.rng.gen_range(0..Suit::ALL.len())];
        Card::new(rank, suit)
    }
}

/// Deals a fixed script of cards first, then falls back to a seeded shoe.
/// Used to replay recorded rounds and to pin down deals in tests.
#[derive(Debug, Clone)]
pub struct StackedShoe {
    script: VecDeque<Card>,
    fallback: Shoe,
}

impl StackedShoe {
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            script: cards.into_iter().collect(),
            fallback: Shoe::seeded(0),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn push(&mut self, card: Card) {
        self.script.push_back(card);
    }
}

impl CardSource for StackedShoe {
    fn deal_card(&mut self) -> Card {
        self.script
            .pop_front()
            .unwrap_or_else(|| self.fallback.deal_card())
    }
}
