use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Blackjack point value with aces counted high.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }

    fn short(&self) -> &'static str {
        match self {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            other => other.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Maps 0-51 onto the card domain, rank-major: `index / 4` picks the rank
    /// (two through ace) and `index % 4` the suit.
    pub fn from_index(index: usize) -> Result<Self, TableError> {
        if index >= 52 {
            return Err(TableError::InvalidCardIndex(index));
        }
        Ok(Self::new(Rank::ALL[index / 4], Suit::ALL[index % 4]))
    }

    /// Inverse of [`Card::from_index`]. Enum declaration order matches `ALL`.
    pub fn index(&self) -> usize {
        self.rank as usize * 4 + self.suit as usize
    }

    /// Image asset stem, e.g. `ace_of_spades` or `10_of_hearts`.
    pub fn asset_name(&self) -> String {
        format!("{}_of_{}", self.rank.name(), self.suit.name())
    }

    pub fn to_display(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl FromStr for Card {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TableError::InvalidCardName(s.to_string());
        let (rank, suit) = s.split_once("_of_").ok_or_else(invalid)?;
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.name() == rank)
            .ok_or_else(invalid)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|x| x.name() == suit)
            .ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

/// A card as the presentation layer is allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Up(Card),
    FaceDown,
}

impl CardFace {
    /// Point value as rendered. A face-down card scores nothing.
    pub fn value(&self) -> u8 {
        match self {
            CardFace::Up(card) => card.value(),
            CardFace::FaceDown => 0,
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, CardFace::Up(card) if card.is_ace())
    }

    pub fn asset_name(&self) -> String {
        match self {
            CardFace::Up(card) => card.asset_name(),
            CardFace::FaceDown => "back".to_string(),
        }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Up(card) => write!(f, "{card}"),
            CardFace::FaceDown => f.write_str("??"),
        }
    }
}

impl From<Card> for CardFace {
    fn from(card: Card) -> Self {
        CardFace::Up(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).value(), 2);
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).value(), 10);
        assert_eq!(Card::new(Rank::Jack, Suit::Spades).value(), 10);
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).value(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).value(), 11);
    }

    #[test]
    fn test_face_down_scores_zero() {
        assert_eq!(CardFace::FaceDown.value(), 0);
        assert!(!CardFace::FaceDown.is_ace());
        assert_eq!(CardFace::FaceDown.asset_name(), "back");
    }

    #[test]
    fn test_from_index_covers_domain() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..52 {
            let card = Card::from_index(i).unwrap();
            assert_eq!(card.index(), i);
            seen.insert(card);
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_index_follows_declaration_order() {
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).index(), 0);
        assert_eq!(Card::new(Rank::Two, Suit::Spades).index(), 3);
        assert_eq!(Card::new(Rank::Three, Suit::Hearts).index(), 4);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).index(), 51);
        for (i, rank) in Rank::ALL.into_iter().enumerate() {
            assert_eq!(rank as usize, i);
        }
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            assert_eq!(suit as usize, i);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(matches!(Card::from_index(52), Err(TableError::InvalidCardIndex(52))));
    }

    #[test]
    fn test_asset_name() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).asset_name(), "ace_of_spades");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).asset_name(), "10_of_hearts");
    }

    #[test]
    fn test_parse_asset_name() {
        let card: Card = "queen_of_diamonds".parse().unwrap();
        assert_eq!(card, Card::new(Rank::Queen, Suit::Diamonds));
        assert!("back".parse::<Card>().is_err());
        assert!("11_of_hearts".parse::<Card>().is_err());
        assert!("ace_of_stars".parse::<Card>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(CardFace::FaceDown.to_string(), "??");
    }
}
