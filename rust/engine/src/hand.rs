use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardList};
use crate::deck::Deck;
use crate::errors::DeckError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Hand categories in conventional poker precedence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Trip = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quad = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::Trip => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::Quad => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five cards dealt from a deck.
///
/// Rank-based predicates all derive from [`Hand::num_matches`]: the count of
/// ordered position pairs `(i, j)`, `i != j`, holding equal ranks. Each
/// matching unordered pair therefore counts twice, giving
/// 0 / 2 / 4 / 6 / 8 / 12 for high card / pair / two pair / trip / full house / quad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Deals five cards from `deck`, in draw order.
    ///
    /// # Errors
    ///
    /// Propagates [`DeckError::EmptyDeck`] when fewer than five cards remain;
    /// cards dealt before the failure stay out of the deck.
    pub fn deal(deck: &mut Deck) -> Result<Self, DeckError> {
        let cards = [
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
        ];
        Ok(Self { cards })
    }

    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn num_matches(&self) -> u32 {
        let mut matches = 0;
        for i in 0..HAND_SIZE {
            for j in 0..HAND_SIZE {
                if i != j && self.cards[i].rank == self.cards[j].rank {
                    matches += 1;
                }
            }
        }
        matches
    }

    pub fn is_pair(&self) -> bool {
        self.num_matches() == 2
    }

    pub fn is_two_pair(&self) -> bool {
        self.num_matches() == 4
    }

    pub fn is_trip(&self) -> bool {
        self.num_matches() == 6
    }

    pub fn is_full_house(&self) -> bool {
        self.num_matches() == 8
    }

    pub fn is_quad(&self) -> bool {
        self.num_matches() == 12
    }

    /// All five cards share the suit of the first.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|c| c.suit == suit)
    }

    /// Five distinct ranks spanning exactly four rank positions.
    ///
    /// Sorts the hand in place by rank index as a side effect, so
    /// [`Hand::cards`] is ascending afterwards whenever the ranks are distinct.
    /// Ace only ranks high: A-2-3-4-5 is not a straight.
    pub fn is_straight(&mut self) -> bool {
        if self.num_matches() != 0 {
            return false;
        }
        self.cards.sort_by_key(|c| c.rank.index());
        self.cards[HAND_SIZE - 1].rank.index() == self.cards[0].rank.index() + 4
    }

    /// Best category for the hand. Inherits the sort from [`Hand::is_straight`].
    pub fn category(&mut self) -> Category {
        let straight = self.is_straight();
        let flush = self.is_flush();
        match (straight, flush, self.num_matches()) {
            (true, true, _) => Category::StraightFlush,
            (_, _, 12) => Category::Quad,
            (_, _, 8) => Category::FullHouse,
            (_, true, _) => Category::Flush,
            (true, _, _) => Category::Straight,
            (_, _, 6) => Category::Trip,
            (_, _, 4) => Category::TwoPair,
            (_, _, 2) => Category::Pair,
            _ => Category::HighCard,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CardList(&self.cards))
    }
}
