use thiserror::Error;

use crate::player::PlayerAction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action {action:?} for seat {seat}: {reason}")]
    IllegalAction {
        seat: usize,
        action: PlayerAction,
        reason: String,
    },
    #[error("It's not seat {actual}'s turn (expected seat {expected:?})")]
    NotPlayersTurn {
        expected: Option<usize>,
        actual: usize,
    },
    #[error("Chip count overflow: a table holds at most {} chips", u32::MAX)]
    ChipOverflow,
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Hand already holds 7 cards")]
    HandFull,
    #[error("Hand has {count} cards, at least 5 are required for evaluation")]
    NotEnoughCards { count: usize },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("A hand is in progress")]
    HandInProgress,
    #[error("Invalid player count: {count} (allowed {min}..={max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Table is full ({max} seats)")]
    TableFull { max: usize },
    #[error("No such seat: {0}")]
    NoSuchSeat(usize),
    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}
