use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardFace};
use crate::config::TableConfig;
use crate::dealer::{play_dealer_hand, DealerDraw};
use crate::deck::{CardSource, Shoe};
use crate::hand::{visible_hand_value, Hand};
use crate::outcome::{Cue, Outcome};
use crate::tally::SessionTally;
use crate::TableError;

/// Where the live round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    NotStarted,
    /// Cards are out and the player is to act.
    Dealt,
    DealerTurn,
    Resolved,
}

/// Everything scoped to a single deal. Replaced wholesale by the next deal.
///
/// The dealer's hand is only readable through [`Round::dealer_faces`], which
/// keeps the hole card face down until the dealer's turn.
#[derive(Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) player: Hand,
    pub(crate) dealer: Hand,
    pub(crate) dealer_revealed: bool,
    pub(crate) phase: RoundPhase,
    pub(crate) status: String,
    pub(crate) result: String,
    pub(crate) outcome: Option<Outcome>,
}

impl Round {
    fn not_started() -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_revealed: false,
            phase: RoundPhase::NotStarted,
            status: String::new(),
            result: String::new(),
            outcome: None,
        }
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn dealer_revealed(&self) -> bool {
        self.dealer_revealed
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Dealer hand with every card after the first masked until reveal.
    pub fn dealer_faces(&self) -> Vec<CardFace> {
        self.dealer
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i == 0 || self.dealer_revealed {
                    CardFace::Up(*card)
                } else {
                    CardFace::FaceDown
                }
            })
            .collect()
    }

    pub fn player_score(&self) -> u8 {
        self.player.value()
    }

    /// Dealer total as the player can see it.
    pub fn dealer_score(&self) -> u8 {
        visible_hand_value(&self.dealer_faces())
    }
}

impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("player", &self.player)
            .field("dealer", &self.dealer_faces())
            .field("dealer_revealed", &self.dealer_revealed)
            .field("phase", &self.phase)
            .field("status", &self.status)
            .field("result", &self.result)
            .field("outcome", &self.outcome)
            .finish()
    }
}

/// Something the presentation layer should render or play, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    Status(String),
    Cue(Cue),
    PlayerCard(Card),
    DealerDraw(DealerDraw),
    Resolved {
        outcome: Outcome,
        player_score: u8,
        dealer_score: u8,
    },
}

impl TableEvent {
    /// The dealer's draws out of an event stream, in draw order.
    pub fn dealer_draws(events: &[TableEvent]) -> impl Iterator<Item = &DealerDraw> {
        events.iter().filter_map(|event| match event {
            TableEvent::DealerDraw(draw) => Some(draw),
            _ => None,
        })
    }
}

/// Read-only snapshot of the table, safe to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub phase: RoundPhase,
    pub player: Vec<Card>,
    pub dealer: Vec<CardFace>,
    pub player_score: u8,
    pub dealer_score: u8,
    pub status: String,
    pub result: String,
    pub tally: SessionTally,
}

/// Single-seat blackjack table: one live round plus the session tally.
///
/// `hit` and `stand` only act while the player is to move; at any other time
/// they return no events and change nothing.
#[derive(Debug, Clone)]
pub struct Table<S = Shoe> {
    shoe: S,
    round: Round,
    tally: SessionTally,
}

impl Table<Shoe> {
    pub fn new() -> Self {
        Self::with_source(Shoe::from_entropy())
    }

    pub fn from_config(config: &TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::with_source(Shoe::with_seed(config.seed)))
    }
}

impl Default for Table<Shoe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CardSource> Table<S> {
    pub fn with_source(shoe: S) -> Self {
        Self {
            shoe,
            round: Round::not_started(),
            tally: SessionTally::new(),
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            phase: self.round.phase,
            player: self.round.player.cards.clone(),
            dealer: self.round.dealer_faces(),
            player_score: self.round.player_score(),
            dealer_score: self.round.dealer_score(),
            status: self.round.status.clone(),
            result: self.round.result.clone(),
            tally: self.tally,
        }
    }

    /// Deals a fresh round: two cards each, dealer's second card face down.
    ///
    /// Ignored while a round is still being played.
    pub fn start_round(&mut self) -> Vec<TableEvent> {
        if matches!(self.round.phase, RoundPhase::Dealt | RoundPhase::DealerTurn) {
            log::trace!("start_round ignored in phase {:?}", self.round.phase);
            return Vec::new();
        }

        let mut round = Round::not_started();
        for _ in 0..2 {
            round.player.add_card(self.shoe.deal_card());
        }
        for _ in 0..2 {
            round.dealer.add_card(self.shoe.deal_card());
        }
        round.phase = RoundPhase::Dealt;

        log::info!(
            "Round started: player {} {} ({}), dealer shows {}",
            round.player.cards[0],
            round.player.cards[1],
            round.player.value(),
            round.dealer.cards[0],
        );

        self.round = round;
        vec![TableEvent::Cue(Cue::Deal)]
    }

    pub fn hit(&mut self) -> Vec<TableEvent> {
        if self.round.phase != RoundPhase::Dealt {
            log::trace!("hit ignored in phase {:?}", self.round.phase);
            return Vec::new();
        }

        let mut events = Vec::new();
        self.set_status(&mut events, "Player hits...");

        let card = self.shoe.deal_card();
        self.round.player.add_card(card);
        log::debug!("Player draws {card}, total {}", self.round.player.value());
        events.push(TableEvent::PlayerCard(card));
        events.push(TableEvent::Cue(Cue::Click));

        if self.round.player.is_busted() {
            self.set_status(&mut events, "Player busted! Dealer wins.");
            // The dealer still plays out its hand before the round resolves.
            self.finish_round(&mut events);
        }
        events
    }

    pub fn stand(&mut self) -> Vec<TableEvent> {
        if self.round.phase != RoundPhase::Dealt {
            log::trace!("stand ignored in phase {:?}", self.round.phase);
            return Vec::new();
        }

        let mut events = Vec::new();
        self.finish_round(&mut events);
        events
    }

    fn finish_round(&mut self, events: &mut Vec<TableEvent>) {
        self.round.phase = RoundPhase::DealerTurn;
        self.set_status(events, "Player stands. Dealer's turn...");
        self.round.dealer_revealed = true;

        for draw in play_dealer_hand(&mut self.round.dealer, &mut self.shoe) {
            events.push(TableEvent::DealerDraw(draw));
            self.set_status(events, "Dealer draws another card...");
        }
        self.set_status(events, "Dealer stands.");

        let player_score = self.round.player.value();
        let dealer_score = self.round.dealer.value();
        let outcome = Outcome::resolve(player_score, dealer_score);

        self.tally.record_outcome(outcome.category());
        self.round.result = outcome.message().to_string();
        self.round.outcome = Some(outcome);
        self.round.phase = RoundPhase::Resolved;

        log::info!(
            "Round resolved: {outcome:?} (player {player_score}, dealer {dealer_score}); {}",
            self.tally
        );

        events.push(TableEvent::Cue(outcome.cue()));
        events.push(TableEvent::Resolved {
            outcome,
            player_score,
            dealer_score,
        });
    }

    fn set_status(&mut self, events: &mut Vec<TableEvent>, status: &str) {
        self.round.status = status.to_string();
        events.push(TableEvent::Status(status.to_string()));
    }
}
