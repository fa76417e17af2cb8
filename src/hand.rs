use serde::{Deserialize, Serialize};

use crate::card::{Card, CardFace};

/// Blackjack total of a set of cards.
///
/// Every ace starts at 11; while the total busts, aces are dropped to 1 one at
/// a time. The result can still exceed 21 when no ace is left to soften.
pub fn calculate_hand_value<'a, I>(cards: I) -> u8
where
    I: IntoIterator<Item = &'a Card>,
{
    score(cards.into_iter().map(|c| (c.value(), c.is_ace())))
}

/// Same as [`calculate_hand_value`] for what the presentation layer sees.
/// Face-down cards count as zero.
pub fn visible_hand_value(cards: &[CardFace]) -> u8 {
    score(cards.iter().map(|c| (c.value(), c.is_ace())))
}

fn score(cards: impl Iterator<Item = (u8, bool)>) -> u8 {
    let mut total: u8 = 0;
    let mut aces = 0;

    for (value, is_ace) in cards {
        if is_ace {
            aces += 1;
        }
        total = total.saturating_add(value);
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Soft: some ace is still counted as 11.
pub fn is_soft_hand(cards: &[Card]) -> bool {
    let hard: u8 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { c.value() })
        .sum();
    let value = calculate_hand_value(cards);
    value <= 21 && value != hard
}

/// Two-card 21.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect()
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Two, Rank::Three])), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::King, Rank::Queen])), 20);
    }

    #[test]
    fn test_calculate_hand_value_ace_king() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Ace, Rank::King])), 21);
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        let hand = cards(&[Rank::Ace, Rank::Six, Rank::Nine]);
        assert_eq!(calculate_hand_value(&hand), 16);
    }

    #[test]
    fn test_calculate_hand_value_two_aces_and_nine() {
        // 11 + 11 + 9 = 31, one ace drops to 1.
        let hand = cards(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(calculate_hand_value(&hand), 21);
    }

    #[test]
    fn test_calculate_hand_value_reduces_only_as_needed() {
        // 11 + 11 + 11 + 11 = 44 -> 14 after three reductions, fourth ace stays high.
        let hand = cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(calculate_hand_value(&hand), 14);
    }

    #[test]
    fn test_calculate_hand_value_bust_after_all_aces_reduced() {
        let hand = cards(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]);
        assert_eq!(calculate_hand_value(&hand), 26);
    }

    #[test]
    fn test_no_ace_hand_is_plain_sum() {
        let all: Vec<Rank> = Rank::ALL.into_iter().filter(|r| *r != Rank::Ace).collect();
        for window in all.windows(3) {
            let hand = cards(window);
            let sum: u8 = hand.iter().map(Card::value).sum();
            assert_eq!(calculate_hand_value(&hand), sum);
        }
    }

    #[test]
    fn test_empty_hand_is_zero() {
        assert_eq!(Hand::new().value(), 0);
    }

    #[test]
    fn test_visible_value_ignores_face_down() {
        let shown = [
            CardFace::Up(Card::new(Rank::Ace, Suit::Hearts)),
            CardFace::FaceDown,
        ];
        assert_eq!(visible_hand_value(&shown), 11);
    }

    #[test]
    fn test_is_busted() {
        assert!(is_busted(&cards(&[Rank::King, Rank::Queen, Rank::Five])));
        assert!(!is_busted(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_is_soft_hand() {
        assert!(is_soft_hand(&cards(&[Rank::Ace, Rank::Six])));
        assert!(!is_soft_hand(&cards(&[Rank::Ace, Rank::Six, Rank::Nine])));
        assert!(!is_soft_hand(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&cards(&[Rank::Ace, Rank::King])));
        assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
    }

    #[test]
    fn test_hand_struct() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.add_card(Card::new(Rank::King, Suit::Hearts));
        hand.add_card(Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.value(), 17);
        assert!(!hand.is_soft());
        assert!(!hand.is_busted());
    }
}
