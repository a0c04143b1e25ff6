//! Heuristic hand strength on a 0.0 to 1.0 scale.
//!
//! Preflop hands are scored from a fixed table; postflop hands start from
//! their evaluated category, gain a little for high kickers, and lose some
//! when the board is coordinated or when several opponents are still in.

use tablestakes_engine::cards::Card;
use tablestakes_engine::hand::{evaluate_hand, Category, MIN_EVAL_CARDS};
use tablestakes_engine::table::SeatView;

const FLOOR: f64 = 0.05;

/// Strength of the deciding player's hand as seen through `view`.
pub fn estimate(view: &SeatView<'_>) -> f64 {
    let cards = view.player.hand().cards();
    let board = view.table.community();
    if board.is_empty() || cards.len() < MIN_EVAL_CARDS {
        return preflop_strength(cards);
    }
    postflop_strength(cards, board, view.opponents)
}

/// Table-driven score for two hole cards. Anything but exactly two cards
/// scores as trash.
pub fn preflop_strength(hole: &[Card]) -> f64 {
    let [a, b] = hole else {
        return 0.1;
    };
    let (high, low) = if a.rank >= b.rank {
        (a.rank.value(), b.rank.value())
    } else {
        (b.rank.value(), a.rank.value())
    };
    let suited = a.suit == b.suit;
    let pick = |s: f64, o: f64| if suited { s } else { o };

    if high == low {
        return match high {
            12.. => 0.95,
            11 => 0.90,
            10 => 0.85,
            9 => 0.75,
            7..=8 => 0.65,
            5..=6 => 0.50,
            _ => 0.35,
        };
    }

    // Ace high
    if high == 12 {
        return match low {
            11.. => pick(0.88, 0.82),
            10 => pick(0.78, 0.70),
            9 => pick(0.68, 0.60),
            8 => pick(0.58, 0.50),
            6..=7 if suited => 0.45,
            _ if suited => 0.35,
            _ => 0.25,
        };
    }

    // King high
    if high == 11 {
        return match low {
            10.. => pick(0.75, 0.65),
            9 => pick(0.65, 0.55),
            8 if suited => 0.50,
            _ if suited => 0.35,
            _ => 0.25,
        };
    }

    if suited {
        let gap = high - low;
        if gap <= 1 && high >= 8 {
            return 0.55;
        }
        if gap <= 2 && high >= 9 {
            return 0.45;
        }
        if gap <= 1 {
            return 0.40;
        }
        if gap <= 3 && high >= 10 {
            return 0.35;
        }
    }

    if high >= 10 && low >= 9 {
        return 0.50;
    }
    0.15
}

/// Score for a made hand of 5 to 7 cards against `board`.
pub fn postflop_strength(cards: &[Card], board: &[Card], opponents: usize) -> f64 {
    let hs = evaluate_hand(cards);
    let mut kicker_bonus = 0.0;
    if let Some(&k) = hs.key.first() {
        kicker_bonus += f64::from(k) / 12.0 * 0.15;
    }
    if let Some(&k) = hs.key.get(1) {
        kicker_bonus += f64::from(k) / 12.0 * 0.05;
    }
    let strength = (base_strength(hs.category) + kicker_bonus).min(0.98);
    let strength = adjust_for_board(strength, board);
    adjust_for_opponents(strength, opponents)
}

pub fn base_strength(category: Category) -> f64 {
    match category {
        Category::HighCard => 0.05,
        Category::OnePair => 0.25,
        Category::TwoPair => 0.45,
        Category::ThreeOfAKind => 0.65,
        Category::Straight => 0.75,
        Category::Flush => 0.80,
        Category::FullHouse => 0.90,
        Category::FourOfAKind => 0.95,
        Category::StraightFlush => 0.98,
    }
}

/// How coordinated the board is: 0.2 per suit showing three or more cards,
/// plus 0.15 for three or more connected ranks.
pub fn board_danger(board: &[Card]) -> f64 {
    let mut suits = [0u8; 4];
    let mut mask: u16 = 0;
    for c in board {
        suits[c.suit.index()] += 1;
        mask |= 1 << c.rank.value();
    }
    let mut danger = suits.iter().filter(|&&n| n >= 3).count() as f64 * 0.2;

    let mut run = 0;
    let mut longest = 0;
    for r in 0..13 {
        if mask & (1 << r) != 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    if longest >= 3 {
        danger += 0.15;
    }
    danger
}

fn adjust_for_board(strength: f64, board: &[Card]) -> f64 {
    if board.is_empty() {
        return strength;
    }
    let mut s = strength;
    // strong hands are not discounted
    if s < 0.8 {
        s *= 1.0 - board_danger(board) * 0.5;
    }
    s.max(FLOOR)
}

fn adjust_for_opponents(strength: f64, opponents: usize) -> f64 {
    let penalty = (opponents.saturating_sub(1) as f64 * 0.05).min(1.0);
    let mut s = strength;
    if s < 0.9 {
        s *= 1.0 - penalty;
    }
    s.max(FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablestakes_engine::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn preflop_table_orders_common_holdings() {
        let aces = preflop_strength(&cards("As Ad"));
        let ak_suited = preflop_strength(&cards("As Ks"));
        let ak_off = preflop_strength(&cards("As Kd"));
        let connectors = preflop_strength(&cards("9h 8h"));
        let trash = preflop_strength(&cards("7c 2d"));
        assert_eq!(aces, 0.95);
        assert_eq!(ak_suited, 0.88);
        assert_eq!(ak_off, 0.82);
        assert_eq!(connectors, 0.55);
        assert_eq!(trash, 0.15);
        assert_eq!(preflop_strength(&cards("As")), 0.1);
    }

    #[test]
    fn board_danger_counts_flush_and_straight_textures() {
        assert_eq!(board_danger(&cards("2c 7d Kh")), 0.0);
        assert!((board_danger(&cards("2h 7h Kh")) - 0.2).abs() < 1e-9);
        assert!((board_danger(&cards("5c 6d 7h")) - 0.15).abs() < 1e-9);
        assert!((board_danger(&cards("5h 6h 7h")) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn made_hands_outscore_air() {
        let board = cards("2c 7d Kh");
        let set = postflop_strength(&cards("Ks Kd 2c 7d Kh"), &board, 1);
        let pair = postflop_strength(&cards("Ks 9d 2c 7d Kh"), &board, 1);
        let air = postflop_strength(&cards("As 9d 2c 7d Kh"), &board, 1);
        assert!(set > pair);
        assert!(pair > air);
        assert!(air >= FLOOR);
    }

    #[test]
    fn more_opponents_lower_medium_hands() {
        let board = cards("2c 7d Kh");
        let hand = cards("Ks 9d 2c 7d Kh");
        let heads_up = postflop_strength(&hand, &board, 1);
        let multiway = postflop_strength(&hand, &board, 5);
        assert!(multiway < heads_up);
    }
}
