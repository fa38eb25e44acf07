use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CardError;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order is the canonical deck order: ♠ ♣ ♦ ♥.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }

    /// Parses a suit from its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for anything but ♠ ♣ ♦ ♥.
    pub fn from_symbol(s: &str) -> Result<Suit, CardError> {
        match s {
            "♠" => Ok(Suit::Spades),
            "♣" => Ok(Suit::Clubs),
            "♦" => Ok(Suit::Diamonds),
            "♥" => Ok(Suit::Hearts),
            other => Err(CardError::InvalidSuit(other.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Ace is always the highest rank; there is no Ace-low ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (J)
    Jack,
    /// Queen (Q)
    Queen,
    /// King (K)
    King,
    /// Ace (A)
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
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

    /// Position within [`Rank::ALL`] (Two is 0, Ace is 12).
    pub fn index(self) -> usize {
        self as usize - Rank::Two as usize
    }

    pub fn symbol(self) -> &'static str {
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
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parses a rank from its symbol (`2`..`10`, `J`, `Q`, `K`, `A`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for any other input.
    pub fn from_symbol(s: &str) -> Result<Rank, CardError> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.symbol() == s)
            .ok_or_else(|| CardError::InvalidRank(s.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a single playing card with a rank and suit.
/// Cards are plain values: equality is by the (rank, suit) pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Builds a card from raw rank and suit symbols.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] when a
    /// symbol falls outside the fixed vocabulary. Rank is checked first.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, CardError> {
        let rank = Rank::from_symbol(rank)?;
        let suit = Suit::from_symbol(suit)?;
        Ok(Card { rank, suit })
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the `Display` form, e.g. `A♠` or `10♥`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((split, _)) = s.char_indices().last() else {
            return Err(CardError::Malformed(s.to_string()));
        };
        // A bare rank such as `10` is missing its suit, not a bad rank.
        if split == 0 || Rank::from_symbol(s).is_ok() {
            return Err(CardError::Malformed(s.to_string()));
        }
        Card::from_symbols(&s[..split], &s[split..])
    }
}

/// Renders a slice of cards as a bracketed list, e.g. `[A♠, 10♥]`.
#[derive(Debug, Copy, Clone)]
pub struct CardList<'a>(pub &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("]")
    }
}

/// All 52 cards in canonical order: for each rank, for each suit.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &Rank::ALL {
        for &s in &Suit::ALL {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
