//! Card and hand formatters for terminal display.
//!
//! Cards render as `<rank><suit>`. Suits use Unicode symbols with an ASCII
//! fallback for terminals that cannot draw them.
//!
//! - **Unicode mode**: Uses ♠ ♣ ♦ ♥ symbols
//! - **ASCII mode**: Uses s c d h letters
//!
//! ## Example
//!
//! ```rust
//! use pokersim_engine::cards::{Card, Rank, Suit};
//! use pokersim_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use pokersim_engine::cards::{Card, CardList, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn ascii_suit(suit: Suit) -> char {
    match suit {
        Suit::Spades => 's',
        Suit::Clubs => 'c',
        Suit::Diamonds => 'd',
        Suit::Hearts => 'h',
    }
}

/// Replaces suit symbols in engine-rendered text with their ASCII letters.
fn to_ascii(rendered: String) -> String {
    rendered
        .chars()
        .map(|ch| {
            Suit::ALL
                .iter()
                .find(|s| s.symbol() == ch)
                .map_or(ch, |s| ascii_suit(*s))
        })
        .collect()
}

fn terminal_form(rendered: String) -> String {
    if supports_unicode() {
        rendered
    } else {
        to_ascii(rendered)
    }
}

pub fn format_suit(suit: &Suit) -> String {
    terminal_form(suit.symbol().to_string())
}

/// Format a Card as a string combining rank and suit, e.g. `10♥` or `10h`.
pub fn format_card(card: &Card) -> String {
    terminal_form(card.to_string())
}

/// Format cards as a bracketed, comma-separated list: `[A♠, 10♥]`.
pub fn format_cards(cards: &[Card]) -> String {
    terminal_form(CardList(cards).to_string())
}

/// Percentage with four decimals, e.g. `0.3546%`.
pub fn format_percentage(pct: f64) -> String {
    format!("{:.4}%", pct)
}
