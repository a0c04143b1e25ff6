use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;

/// Where a seat stands within the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Still in the hand and able to act
    Active,
    /// Forfeited the hand; chips already committed stay in the pot
    Folded,
    /// No chips left behind; stays eligible for the pots it contributed to
    AllIn,
    /// Not dealt in
    SittingOut,
}

impl PlayerStatus {
    pub fn can_act(self) -> bool {
        self == PlayerStatus::Active
    }
}

/// The kind of an action, without its amount.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

/// Represents a player action during a betting round.
///
/// Amounts are interpreted per kind: `Call` carries the chips needed to match,
/// `Bet` and `Raise` carry the total the player's round bet is brought *to*,
/// and `AllIn` carries the resulting round total. Fold, check and all-in
/// amounts are informational; the engine ignores them when applying.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no chips committed)
    Check,
    /// Match the current bet
    Call(u32),
    /// Open the betting to the given total
    Bet(u32),
    /// Raise the current bet to the given total
    Raise(u32),
    /// Commit every remaining chip
    AllIn(u32),
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call(_) => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::AllIn(_) => ActionKind::AllIn,
        }
    }

    pub fn amount(&self) -> u32 {
        match *self {
            PlayerAction::Fold | PlayerAction::Check => 0,
            PlayerAction::Call(n)
            | PlayerAction::Bet(n)
            | PlayerAction::Raise(n)
            | PlayerAction::AllIn(n) => n,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => write!(f, "FOLD"),
            PlayerAction::Check => write!(f, "CHECK"),
            PlayerAction::Call(n) => write!(f, "CALL {}", n),
            PlayerAction::Bet(n) => write!(f, "BET {}", n),
            PlayerAction::Raise(n) => write!(f, "RAISE to {}", n),
            PlayerAction::AllIn(n) => write!(f, "ALL-IN {}", n),
        }
    }
}

/// Per-seat record: chip stack, contributions and status.
///
/// The stack persists across hands; `round_bet` is cleared at the start of
/// every betting round and `total_bet` only when a new hand starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    seat: usize,
    stack: u32,
    round_bet: u32,
    total_bet: u32,
    status: PlayerStatus,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: usize, stack: u32) -> Self {
        Self {
            name: name.into(),
            seat,
            stack,
            round_bet: 0,
            total_bet: 0,
            status: PlayerStatus::Active,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn seat(&self) -> usize {
        self.seat
    }
    pub(crate) fn set_seat(&mut self, seat: usize) {
        self.seat = seat;
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn round_bet(&self) -> u32 {
        self.round_bet
    }
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn can_act(&self) -> bool {
        self.status.can_act()
    }
    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }
    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }
    /// Still contesting the pot (active or all-in).
    pub fn in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    pub fn to_call(&self, current_bet: u32) -> u32 {
        current_bet.saturating_sub(self.round_bet)
    }

    pub fn can_call(&self, current_bet: u32) -> bool {
        let delta = self.to_call(current_bet);
        self.can_act() && delta > 0 && self.stack >= delta
    }

    pub fn can_check(&self, current_bet: u32) -> bool {
        self.can_act() && self.round_bet == current_bet
    }

    /// Whether the stack covers matching `current_bet` plus `increment`.
    pub fn can_raise(&self, current_bet: u32, increment: u32) -> bool {
        self.can_act() && self.stack >= self.to_call(current_bet) + increment
    }

    /// Moves `amount` from the stack into the current round. A stack that
    /// reaches zero puts the player all-in.
    pub fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        self.round_bet += amount;
        self.total_bet += amount;
        if self.stack == 0 && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        Ok(())
    }

    /// Commits the whole stack and returns how much was moved.
    pub fn go_all_in(&mut self) -> u32 {
        let amount = self.stack;
        self.stack = 0;
        self.round_bet += amount;
        self.total_bet += amount;
        self.status = PlayerStatus::AllIn;
        amount
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    pub fn add_chips(&mut self, amount: u32) -> Result<(), GameError> {
        self.stack = self
            .stack
            .checked_add(amount)
            .ok_or(GameError::ChipOverflow)?;
        Ok(())
    }

    pub fn deal_card(&mut self, card: Card) -> Result<(), GameError> {
        self.hand.add_card(card)
    }

    pub fn clear_round_bet(&mut self) {
        self.round_bet = 0;
    }

    /// Clears cards and contributions. Seats without chips sit the hand out.
    pub fn reset_for_hand(&mut self) {
        self.hand.clear();
        self.round_bet = 0;
        self.total_bet = 0;
        self.status = if self.stack == 0 || self.status == PlayerStatus::SittingOut {
            PlayerStatus::SittingOut
        } else {
            PlayerStatus::Active
        };
    }

    pub fn sit_out(&mut self) {
        self.status = PlayerStatus::SittingOut;
    }

    /// Rejoins at the next hand; a player without chips stays out.
    pub fn sit_in(&mut self) {
        if self.status == PlayerStatus::SittingOut && self.stack > 0 {
            self.status = PlayerStatus::Active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_moves_chips_and_flags_all_in() {
        let mut p = Player::new("a", 0, 100);
        p.commit(40).unwrap();
        assert_eq!((p.stack(), p.round_bet(), p.total_bet()), (60, 40, 40));
        p.clear_round_bet();
        p.commit(60).unwrap();
        assert_eq!(p.status(), PlayerStatus::AllIn);
        assert_eq!((p.stack(), p.round_bet(), p.total_bet()), (0, 60, 100));
    }

    #[test]
    fn commit_refuses_overdraft_without_mutation() {
        let mut p = Player::new("a", 0, 10);
        assert_eq!(
            p.commit(11),
            Err(GameError::InsufficientChips {
                needed: 11,
                available: 10
            })
        );
        assert_eq!(p.stack(), 10);
        assert_eq!(p.total_bet(), 0);
    }

    #[test]
    fn reset_keeps_stack_and_sits_out_busted_players() {
        let mut p = Player::new("a", 0, 50);
        p.commit(50).unwrap();
        p.reset_for_hand();
        assert_eq!(p.status(), PlayerStatus::SittingOut);
        p.add_chips(10).unwrap();
        p.sit_in();
        p.reset_for_hand();
        assert_eq!(p.status(), PlayerStatus::Active);
        assert_eq!((p.round_bet(), p.total_bet()), (0, 0));
    }

    #[test]
    fn action_kind_and_amount() {
        assert_eq!(PlayerAction::Raise(40).kind(), ActionKind::Raise);
        assert_eq!(PlayerAction::Raise(40).amount(), 40);
        assert_eq!(PlayerAction::Check.amount(), 0);
        assert_eq!(PlayerAction::Raise(40).to_string(), "RAISE to 40");
    }

    #[test]
    fn call_and_check_predicates() {
        let mut p = Player::new("a", 0, 30);
        assert!(p.can_check(0));
        assert!(!p.can_call(0));
        assert!(p.can_call(20));
        assert!(!p.can_call(31));
        assert!(p.can_raise(10, 20));
        assert!(!p.can_raise(20, 20));
        p.fold();
        assert!(!p.can_check(0));
    }

    #[test]
    fn add_chips_refuses_to_overflow_the_stack() {
        let mut p = Player::new("a", 0, u32::MAX - 5);
        assert_eq!(p.add_chips(6), Err(GameError::ChipOverflow));
        assert_eq!(p.stack(), u32::MAX - 5);
        p.add_chips(5).unwrap();
        assert_eq!(p.stack(), u32::MAX);
    }
}
