//! Deal command handler for single hand dealing and display.
//!
//! Shuffles a fresh deck, deals one five-card hand and prints it together
//! with its match count and category. A seed makes the deal reproducible.

use crate::error::CliError;
use crate::formatters::format_cards;
use pokersim_engine::deck::Deck;
use pokersim_engine::hand::Hand;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();
    let mut hand = Hand::deal(&mut deck)?;

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Hand: {}", format_cards(hand.cards()))?;
    writeln!(out, "Matches: {}", hand.num_matches())?;
    writeln!(out, "Category: {}", hand.category())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_deterministic() {
        // Test that same seed produces same output
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(None, &mut out);

        assert!(result.is_ok(), "Deal command should succeed without seed");
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Hand: ["), "Output should contain the hand");
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4, "Output should have exactly 4 lines");
        assert_eq!(lines[0], "Seed: 999");
        assert!(lines[1].starts_with("Hand: "));
        assert!(lines[2].starts_with("Matches: "));
        assert!(lines[3].starts_with("Category: "));
    }
}
