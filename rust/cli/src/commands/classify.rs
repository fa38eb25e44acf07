//! Classify command handler: evaluate five cards given on the command line.

use crate::error::CliError;
use crate::formatters::format_cards;
use pokersim_engine::cards::Card;
use pokersim_engine::hand::{Hand, HAND_SIZE};
use std::collections::HashSet;
use std::io::Write;

/// Parses five distinct cards.
fn parse_cards(args: &[String]) -> Result<[Card; HAND_SIZE], CliError> {
    if args.len() != HAND_SIZE {
        return Err(CliError::InvalidInput(format!(
            "expected {} cards, got {}",
            HAND_SIZE,
            args.len()
        )));
    }
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(HAND_SIZE);
    for raw in args {
        let card: Card = raw.parse()?;
        if !seen.insert(card) {
            return Err(CliError::InvalidInput(format!("duplicate card {}", card)));
        }
        cards.push(card);
    }
    cards
        .try_into()
        .map_err(|_| CliError::InvalidInput("expected five cards".into()))
}

/// Handle the classify command.
///
/// Prints the hand as given, its match count, and its category. Invalid
/// ranks or suits and repeated cards are rejected.
pub fn handle_classify_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let mut hand = Hand::from_cards(parse_cards(cards)?);
    writeln!(out, "Hand: {}", format_cards(hand.cards()))?;
    writeln!(out, "Matches: {}", hand.num_matches())?;
    writeln!(out, "Category: {}", hand.category())?;
    Ok(())
}
