use crate::player::PlayerAction;
use crate::table::SeatView;

/// Decision-making capability for a seat.
///
/// Called once per turn with a fresh view of the table and the legal actions
/// in canonical order (fold, check, call, bet, raise, all-in). The returned
/// action should come from `legal`; anything else is rejected by the engine
/// and replaced with a check or fold.
pub trait Strategy: Send {
    fn decide(&mut self, view: &SeatView<'_>, legal: &[PlayerAction]) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Checks when it can, calls when it must, never bets.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passive;

impl Strategy for Passive {
    fn decide(&mut self, _view: &SeatView<'_>, legal: &[PlayerAction]) -> PlayerAction {
        legal
            .iter()
            .copied()
            .find(|a| matches!(a, PlayerAction::Check))
            .or_else(|| {
                legal
                    .iter()
                    .copied()
                    .find(|a| matches!(a, PlayerAction::Call(_)))
            })
            .unwrap_or(PlayerAction::Fold)
    }

    fn name(&self) -> &str {
        "passive"
    }
}

/// Replays a fixed list of actions, then checks or folds.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    actions: std::collections::VecDeque<PlayerAction>,
}

impl Scripted {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl Strategy for Scripted {
    fn decide(&mut self, _view: &SeatView<'_>, legal: &[PlayerAction]) -> PlayerAction {
        if let Some(a) = self.actions.pop_front() {
            return a;
        }
        if legal.contains(&PlayerAction::Check) {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
