//! # pokersim-engine: Card Deck and Hand Classification Core
//!
//! A 52-card deck, a five-card hand classifier driven by rank-match counts,
//! and a Monte Carlo driver that estimates how often a classification occurs.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and canonical deck order
//! - [`deck`] - Front-dealing deck with seedable ChaCha20 shuffling
//! - [`hand`] - Five-card hands, match counting and category predicates
//! - [`simulation`] - Trial loop, stop rules and probability reports
//! - [`logger`] - JSONL recording of simulation hits
//! - [`errors`] - Error types for card parsing, dealing and simulation
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersim_engine::cards::{Card, Rank, Suit};
//! use pokersim_engine::hand::Hand;
//!
//! let mut hand = Hand::from_cards([
//!     Card::new(Rank::Two, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Two, Suit::Diamonds),
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Five, Suit::Spades),
//! ]);
//! assert_eq!(hand.num_matches(), 8);
//! assert!(hand.is_full_house());
//! let category = hand.category();
//! println!("{} is a {}", hand, category);
//! ```
//!
//! ## Estimating a Probability
//!
//! ```rust
//! use pokersim_engine::simulation::{simulate, SimulationConfig, StopRule, Target};
//!
//! let config = SimulationConfig::new(Target::Flush, StopRule::Trials(1_000)).with_seed(42);
//! let report = simulate(&config, None).unwrap();
//! assert_eq!(report.trials, 1_000);
//! println!("flush: {:.3}%", report.percentage());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod simulation;
