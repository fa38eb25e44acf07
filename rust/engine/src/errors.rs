use thiserror::Error;

/// Raised when a card is built from symbols outside the fixed vocabularies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),
    #[error("Invalid card: {0}")]
    Malformed(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("Cannot deal from an empty deck")]
    EmptyDeck,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("{0}")]
    Deck(#[from] DeckError),
    #[error("Trial count must be >= 1")]
    ZeroTrials,
    #[error("Hit count must be >= 1")]
    ZeroHits,
    #[error("Failed to record hit: {0}")]
    Record(String),
}
