mod card;
mod config;
mod dealer;
mod deck;
mod error;
mod hand;
mod outcome;
mod strategy;
mod table;
mod tally;

pub use card::{Card, CardFace, Rank, Suit};
pub use config::TableConfig;
pub use dealer::{dealer_should_hit, play_dealer_hand, DealerDraw};
pub use deck::{CardSource, Shoe, StackedShoe};
pub use error::TableError;
pub use hand::{
    calculate_hand_value, is_blackjack, is_busted, is_soft_hand, visible_hand_value, Hand,
};
pub use outcome::{Cue, Outcome, OutcomeCategory};
pub use strategy::{autoplay_round, threshold_move, Move};
pub use table::{Round, RoundPhase, RoundView, Table, TableEvent};
pub use tally::SessionTally;
