use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Most cards a single player's hand may hold (two hole cards plus the board).
pub const MAX_HAND_CARDS: usize = 7;
/// Fewest cards the evaluator gives a meaningful category for.
pub const MIN_EVAL_CARDS: usize = 5;

const WHEEL_MASK: u16 = 0b1_0000_0000_1111;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Result of ranking a card set. Field order gives the derived ordering:
/// category first, then the tie-break key compared element-wise.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    /// Rank values (0 = Two .. 12 = Ace), most significant first.
    pub key: Vec<u8>,
}

/// The cards one player can use: hole cards plus whatever community cards
/// have been dealt. Cleared between hands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(MAX_HAND_CARDS),
        }
    }

    pub fn add_card(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= MAX_HAND_CARDS {
            return Err(GameError::HandFull);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Adds all cards or none of them.
    pub fn add_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        if self.cards.len() + cards.len() > MAX_HAND_CARDS {
            return Err(GameError::HandFull);
        }
        self.cards.extend_from_slice(cards);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ranks the hand, refusing sets too small to form a five-card hand.
    pub fn strength(&self) -> Result<HandStrength, GameError> {
        if self.cards.len() < MIN_EVAL_CARDS {
            return Err(GameError::NotEnoughCards {
                count: self.cards.len(),
            });
        }
        Ok(evaluate_hand(&self.cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Ranks a set of 5 to 7 cards.
///
/// The best five-card combination is found implicitly by scanning rank
/// counts and per-suit rank masks, never by enumerating subsets. Smaller
/// sets still return a value but it is not a meaningful poker hand; callers
/// go through [`Hand::strength`] to have that guarded.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::cards::parse_cards;
/// use tablestakes_engine::hand::{evaluate_hand, Category};
///
/// let cards = parse_cards("As Ad Ac Ks Kd").unwrap();
/// let hs = evaluate_hand(&cards);
/// assert_eq!(hs.category, Category::FullHouse);
/// assert_eq!(hs.key, vec![12, 11]);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 13];
    let mut rank_mask: u16 = 0;
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    for c in cards {
        let r = c.rank.value();
        let s = c.suit.index();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        suit_counts[s] += 1;
        suit_masks[s] |= 1 << r;
    }

    // Every suit is searched; with more than 7 cards two could qualify.
    let flush_suits = (0..4).filter(|&s| suit_counts[s] >= 5);

    // Straight flush
    if let Some(high) = flush_suits
        .clone()
        .filter_map(|s| straight_high_from_mask(suit_masks[s]))
        .max()
    {
        return strength(Category::StraightFlush, vec![high]);
    }

    let quads = ranks_with_count(&rank_counts, |n| n >= 4);
    let trips = ranks_with_count(&rank_counts, |n| n == 3);
    let pairs = ranks_with_count(&rank_counts, |n| n == 2);

    // Four of a kind
    if let Some(&quad) = quads.first() {
        let mut key = vec![quad];
        key.extend(best_kickers(rank_mask, &[quad], 1));
        return strength(Category::FourOfAKind, key);
    }

    // Full house: a second triplet can fill the pair slot.
    if let Some(&trip) = trips.first() {
        let pair = trips.iter().skip(1).chain(pairs.iter()).copied().max();
        if let Some(pair) = pair {
            return strength(Category::FullHouse, vec![trip, pair]);
        }
    }

    // Flush
    if let Some(key) = flush_suits
        .map(|s| descending_ranks(suit_masks[s]).take(5).collect::<Vec<u8>>())
        .max()
    {
        return strength(Category::Flush, key);
    }

    // Straight
    if let Some(high) = straight_high_from_mask(rank_mask) {
        return strength(Category::Straight, vec![high]);
    }

    if let Some(&trip) = trips.first() {
        let mut key = vec![trip];
        key.extend(best_kickers(rank_mask, &[trip], 1));
        return strength(Category::ThreeOfAKind, key);
    }

    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut key = vec![high, low];
        key.extend(best_kickers(rank_mask, &[high, low], 1));
        return strength(Category::TwoPair, key);
    }

    if let Some(&pair) = pairs.first() {
        let mut key = vec![pair];
        key.extend(best_kickers(rank_mask, &[pair], 3));
        return strength(Category::OnePair, key);
    }

    strength(
        Category::HighCard,
        descending_ranks(rank_mask).take(5).collect(),
    )
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.key.cmp(&b.key),
        ord => ord,
    }
}

fn strength(category: Category, key: Vec<u8>) -> HandStrength {
    HandStrength { category, key }
}

/// Highest straight in a 13-bit rank mask. The wheel (A-2-3-4-5) reports 3,
/// the value of the Five, so it ranks below a six-high straight.
fn straight_high_from_mask(mask: u16) -> Option<u8> {
    for high in (4..=12u8).rev() {
        let window = 0b1_1111u16 << (high - 4);
        if mask & window == window {
            return Some(high);
        }
    }
    if mask & WHEEL_MASK == WHEEL_MASK {
        return Some(3);
    }
    None
}

fn descending_ranks(mask: u16) -> impl Iterator<Item = u8> + Clone {
    (0..13u8).rev().filter(move |r| mask & (1 << r) != 0)
}

fn ranks_with_count(counts: &[u8; 13], pred: impl Fn(u8) -> bool) -> Vec<u8> {
    (0..13u8)
        .rev()
        .filter(|&r| pred(counts[r as usize]))
        .collect()
}

fn best_kickers(mask: u16, used: &[u8], n: usize) -> impl Iterator<Item = u8> + '_ {
    descending_ranks(mask)
        .filter(move |r| !used.contains(r))
        .take(n)
}
