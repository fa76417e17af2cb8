use crate::deck::CardSource;
use crate::hand::Hand;
use crate::outcome::Outcome;
use crate::table::{RoundPhase, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Hit,
    Stand,
}

/// Hits below a fixed total, stands at or above it.
pub fn threshold_move(hand: &Hand, stand_on: u8) -> Move {
    if hand.value() < stand_on {
        Move::Hit
    } else {
        Move::Stand
    }
}

/// Deals and plays one round without a human at the table.
pub fn autoplay_round<S: CardSource>(table: &mut Table<S>, stand_on: u8) -> Option<Outcome> {
    table.start_round();
    while table.phase() == RoundPhase::Dealt {
        match threshold_move(table.round().player(), stand_on) {
            Move::Hit => table.hit(),
            Move::Stand => table.stand(),
        };
    }
    table.round().outcome()
}
