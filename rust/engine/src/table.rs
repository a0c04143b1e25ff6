use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Player;
use crate::pot::{self, Pot};

/// Represents a stage of a hand. Each phase except showdown has one
/// betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Hole cards dealt, blinds posted
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands revealed; terminal
    Showdown,
}

impl Phase {
    /// The following phase; showdown stays put.
    pub fn next(self) -> Phase {
        match self {
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River | Phase::Showdown => Phase::Showdown,
        }
    }

    /// Community cards dealt when entering this phase.
    pub fn cards_dealt(self) -> usize {
        match self {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            Phase::Preflop | Phase::Showdown => 0,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        };
        f.write_str(s)
    }
}

/// Shared table state for the hand in progress. Seats are referred to by
/// index into the engine's seat table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableState {
    pub(crate) phase: Phase,
    pub(crate) community: Vec<Card>,
    pub(crate) current_bet: u32,
    pub(crate) dealer: usize,
    pub(crate) small_blind_seat: usize,
    pub(crate) big_blind_seat: usize,
    pub(crate) acting: Option<usize>,
    pub(crate) pots: Vec<Pot>,
    pub(crate) betting_round: u32,
    pub(crate) raises_this_round: u32,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            phase: Phase::Preflop,
            community: Vec::with_capacity(5),
            current_bet: 0,
            dealer: 0,
            small_blind_seat: 0,
            big_blind_seat: 0,
            acting: None,
            pots: Vec::new(),
            betting_round: 0,
            raises_this_round: 0,
        }
    }
}

impl TableState {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn small_blind_seat(&self) -> usize {
        self.small_blind_seat
    }
    pub fn big_blind_seat(&self) -> usize {
        self.big_blind_seat
    }
    /// Seat whose turn it is, if any.
    pub fn acting(&self) -> Option<usize> {
        self.acting
    }
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }
    pub fn betting_round(&self) -> u32 {
        self.betting_round
    }
    pub fn raises_this_round(&self) -> u32 {
        self.raises_this_round
    }

    /// Chips in pots collected at the end of earlier rounds.
    pub fn pot_total(&self) -> u32 {
        pot::total(&self.pots)
    }

    /// Clears everything for a new hand; the dealer seat survives.
    pub fn reset_for_hand(&mut self) {
        let dealer = self.dealer;
        *self = Self {
            dealer,
            ..Self::default()
        };
    }
}

/// Read-only view of the table handed to a strategy for one decision.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub table: &'a TableState,
    pub seat: usize,
    pub player: &'a Player,
    pub big_blind: u32,
    /// Non-folded opponents still contesting the hand.
    pub opponents: usize,
    /// Pots plus every chip committed in the current round.
    pub pot: u32,
    /// Largest round total a bet or raise may reach under the rules,
    /// capped by the player's own chips.
    pub max_total: u32,
}

impl SeatView<'_> {
    pub fn to_call(&self) -> u32 {
        self.player.to_call(self.table.current_bet)
    }

    /// Round total reached by pushing every chip in.
    pub fn all_in_total(&self) -> u32 {
        self.player.round_bet() + self.player.stack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_and_stop_at_showdown() {
        let mut p = Phase::Preflop;
        let mut dealt = 0;
        while p != Phase::Showdown {
            p = p.next();
            dealt += p.cards_dealt();
        }
        assert_eq!(dealt, 5);
        assert_eq!(Phase::Showdown.next(), Phase::Showdown);
    }

    #[test]
    fn reset_keeps_dealer_only() {
        let mut t = TableState {
            dealer: 3,
            current_bet: 40,
            betting_round: 2,
            acting: Some(1),
            ..TableState::default()
        };
        t.pots.push(Pot {
            amount: 10,
            eligible: vec![0],
        });
        t.reset_for_hand();
        assert_eq!(t.dealer(), 3);
        assert_eq!(t.current_bet(), 0);
        assert_eq!(t.acting(), None);
        assert_eq!(t.pot_total(), 0);
        assert_eq!(t.phase(), Phase::Preflop);
    }
}
