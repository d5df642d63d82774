//! The chance deck: a shuffled draw pile and a discard pile.
//!
//! Cards leave the draw pile one at a time. When it runs dry the discard
//! pile is shuffled into a new draw pile, so every card is seen once per
//! cycle before any card repeats.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::ChanceCard;
use crate::core::GameRng;

/// Draw pile plus discard pile.
///
/// The top of the draw pile is the end of the vec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceDeck {
    cards: Vec<ChanceCard>,
    discard: Vec<ChanceCard>,
    reshuffles: u32,
}

impl ChanceDeck {
    /// Build a deck from `cards`, shuffled.
    #[must_use]
    pub fn new(mut cards: Vec<ChanceCard>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self {
            cards,
            discard: Vec::new(),
            reshuffles: 0,
        }
    }

    /// Take the top card.
    ///
    /// An empty draw pile is refilled from the discard pile and shuffled
    /// first. Returns `None` only when every card is held or in play.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<ChanceCard> {
        if self.cards.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            std::mem::swap(&mut self.cards, &mut self.discard);
            rng.shuffle(&mut self.cards);
            self.reshuffles += 1;
            debug!(cards = self.cards.len(), "reshuffled chance deck");
        }
        self.cards.pop()
    }

    /// Put a resolved card on the discard pile.
    pub fn discard(&mut self, card: ChanceCard) {
        self.discard.push(card);
    }

    /// Move `card` from wherever it sits in the deck to the top of the draw
    /// pile. Returns false if the card is in neither pile.
    pub fn move_to_top(&mut self, card: &ChanceCard) -> bool {
        let found = if let Some(idx) = self.cards.iter().position(|c| c == card) {
            self.cards.remove(idx)
        } else if let Some(idx) = self.discard.iter().position(|c| c == card) {
            self.discard.remove(idx)
        } else {
            return false;
        };
        self.cards.push(found);
        true
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the draw pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[ChanceCard] {
        &self.cards
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discarded(&self) -> &[ChanceCard] {
        &self.discard
    }

    /// How many times the discard pile was recycled.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_deck(rng: &mut GameRng) -> ChanceDeck {
        ChanceDeck::new(
            vec![ChanceCard::MoveToGo, ChanceCard::Birthday, ChanceCard::MoveOneOrChance],
            rng,
        )
    }

    #[test]
    fn test_draw_until_empty_then_recycle() {
        let mut rng = GameRng::new(3);
        let mut deck = small_deck(&mut rng);

        let mut seen = Vec::new();
        for _ in 0..3 {
            let card = deck.draw(&mut rng).unwrap();
            seen.push(card.clone());
            deck.discard(card);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.reshuffles(), 0);

        seen.sort_by_key(|c| c.to_string());
        seen.dedup();
        assert_eq!(seen.len(), 3);

        assert!(deck.draw(&mut rng).is_some());
        assert_eq!(deck.reshuffles(), 1);
        assert_eq!(deck.len(), 2);
        assert!(deck.discarded().is_empty());
    }

    #[test]
    fn test_draw_with_everything_out_of_deck() {
        let mut rng = GameRng::new(3);
        let mut deck = ChanceDeck::new(vec![ChanceCard::Birthday], &mut rng);

        let card = deck.draw(&mut rng);
        assert_eq!(card, Some(ChanceCard::Birthday));
        assert_eq!(deck.draw(&mut rng), None);
        assert_eq!(deck.reshuffles(), 0);
    }

    #[test]
    fn test_move_to_top() {
        let mut rng = GameRng::new(9);
        let mut deck = small_deck(&mut rng);

        assert!(deck.move_to_top(&ChanceCard::Birthday));
        assert_eq!(deck.draw(&mut rng), Some(ChanceCard::Birthday));

        deck.discard(ChanceCard::Birthday);
        assert!(deck.move_to_top(&ChanceCard::Birthday));
        assert!(deck.discarded().is_empty());
        assert_eq!(deck.len(), 3);

        assert!(!deck.move_to_top(&ChanceCard::GetOutOfJailFree));
    }
}
