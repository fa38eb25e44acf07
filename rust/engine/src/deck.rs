use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, CardList};
use crate::errors::DeckError;

/// A standard 52-card deck dealt from the front.
///
/// Dealt cards are never returned; `position` marks the current front.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Fresh deck in canonical order, with an entropy-seeded shuffle source.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Uniformly permutes the cards that have not been dealt yet.
    pub fn shuffle(&mut self) {
        self.cards[self.position..].shuffle(&mut self.rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] once all 52 cards are gone.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = *self
            .cards
            .get(self.position)
            .ok_or(DeckError::EmptyDeck)?;
        self.position += 1;
        Ok(card)
    }

    /// Remaining cards, front first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    pub fn len(&self) -> usize {
        self.cards.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CardList(self.cards()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_after_partial_shuffle_keeps_dealt_cards_out() {
        let mut deck = Deck::new_with_seed(9);
        let first = deck.deal().unwrap();
        deck.shuffle();
        assert_eq!(deck.len(), 51);
        assert!(!deck.cards().contains(&first));
    }

    #[test]
    fn display_lists_remaining_cards() {
        let mut deck = Deck::new_with_seed(1);
        for _ in 0..49 {
            deck.deal().unwrap();
        }
        assert_eq!(deck.to_string(), "[A♣, A♦, A♥]");
    }
}
