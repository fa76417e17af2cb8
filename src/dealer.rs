use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::CardSource;
use crate::hand::Hand;

/// The dealer stands on any total at or above this, soft 17 included.
const DEALER_STANDS_ON: u8 = 17;

/// One step of the dealer's turn: the card just drawn and the hand after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerDraw {
    pub card: Card,
    pub hand: Vec<Card>,
    pub value: u8,
}

pub fn dealer_should_hit(hand: &Hand) -> bool {
    hand.value() < DEALER_STANDS_ON
}

/// Draws for the dealer until the hand reaches 17 or more.
///
/// Returns one snapshot per card drawn, in draw order; empty when the hand
/// already stands. A bust stops the loop like any other total >= 17.
pub fn play_dealer_hand<S: CardSource>(hand: &mut Hand, shoe: &mut S) -> Vec<DealerDraw> {
    let mut draws = Vec::new();
    while dealer_should_hit(hand) {
        let card = shoe.deal_card();
        hand.add_card(card);
        let value = hand.value();
        log::debug!("Dealer draws {card}, total {value}");
        draws.push(DealerDraw {
            card,
            hand: hand.cards.clone(),
            value,
        });
    }
    draws
}
