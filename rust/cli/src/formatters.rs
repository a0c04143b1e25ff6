//! Card, board, and action formatters for terminal display.
//!
//! Suits render as Unicode symbols where the terminal supports them and as
//! the letters h d c s otherwise.
//!
//! ## Example
//!
//! ```rust
//! use tablestakes_engine::cards::{Card, Rank, Suit};
//! use tablestakes_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use tablestakes_engine::cards::{Card, Rank, Suit};
use tablestakes_engine::hand::HandStrength;
use tablestakes_engine::player::PlayerAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). Elsewhere assumes yes.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a board (list of cards) in bracket notation, `[]` when empty.
///
/// ```rust
/// use tablestakes_engine::cards::parse_cards;
/// # use tablestakes_cli::formatters::format_board;
///
/// let flop = parse_cards("As Kh Qd").unwrap();
/// let formatted = format_board(&flop);
/// assert!(formatted.starts_with("[A"));
/// assert!(formatted.ends_with("]"));
/// ```
pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// Lowercase action text: "fold", "call 4", "raise to 40", "all-in 120".
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call(amount) => format!("call {}", amount),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(amount) => format!("raise to {}", amount),
        PlayerAction::AllIn(amount) => format!("all-in {}", amount),
    }
}

/// Category name followed by the tie-break ranks, e.g. "Two Pair (K 7 A)".
pub fn format_strength(strength: &HandStrength) -> String {
    let ranks: Vec<String> = strength
        .key
        .iter()
        .map(|&v| format_rank(&Rank::from_value(v)))
        .collect();
    format!("{} ({})", strength.category, ranks.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablestakes_engine::cards::parse_cards;
    use tablestakes_engine::hand::evaluate_hand;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(&PlayerAction::Fold), "fold");
        assert_eq!(format_action(&PlayerAction::Call(4)), "call 4");
        assert_eq!(format_action(&PlayerAction::Raise(40)), "raise to 40");
        assert_eq!(format_action(&PlayerAction::AllIn(120)), "all-in 120");
    }

    #[test]
    fn test_format_strength_lists_tiebreaks() {
        let hs = evaluate_hand(&parse_cards("Kh Kd 7s 7c Ah 2d 3c").unwrap());
        assert_eq!(format_strength(&hs), "Two Pair (K 7 A)");
    }
}
