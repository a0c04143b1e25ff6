//! Threshold bots: one decision rule, tuned by tightness and aggression.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tablestakes_engine::player::{ActionKind, PlayerAction};
use tablestakes_engine::strategy::Strategy;
use tablestakes_engine::table::SeatView;
use tracing::debug;

use crate::strength;

/// Plays by comparing estimated hand strength against a call threshold.
///
/// `tightness` raises the threshold, `aggressiveness` lowers it and controls
/// how often the bot bets or raises instead of checking or calling.
/// `bluff_frequency` is the chance of betting a weak hand into an unopened
/// pot.
#[derive(Debug, Clone)]
pub struct ThresholdBot {
    name: String,
    tightness: f64,
    aggressiveness: f64,
    bluff_frequency: f64,
    rng: ChaCha8Rng,
}

impl ThresholdBot {
    pub fn new(
        name: impl Into<String>,
        tightness: f64,
        aggressiveness: f64,
        bluff_frequency: f64,
        seed: u64,
    ) -> Self {
        Self {
            name: name.into(),
            tightness: tightness.clamp(0.0, 1.0),
            aggressiveness: aggressiveness.clamp(0.0, 1.0),
            bluff_frequency: bluff_frequency.clamp(0.0, 1.0),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Folds most hands, rarely raises.
    pub fn tight(seed: u64) -> Self {
        Self::new("tight", 0.8, 0.3, 0.0, seed)
    }

    /// Plays many hands and bets them hard, with the occasional bluff.
    pub fn aggressive(seed: u64) -> Self {
        Self::new("aggressive", 0.4, 0.8, 0.2, seed)
    }

    pub fn balanced(seed: u64) -> Self {
        Self::new("balanced", 0.6, 0.5, 0.0, seed)
    }

    /// Minimum strength needed to put more chips in facing a bet.
    pub fn call_threshold(&self) -> f64 {
        0.2 + self.tightness * 0.5 - self.aggressiveness * 0.1
    }

    fn aggressive_action(
        &mut self,
        view: &SeatView<'_>,
        legal: &[PlayerAction],
        strength: f64,
    ) -> PlayerAction {
        let current = view.table.current_bet();
        if current == 0 {
            let fraction = if strength > 0.8 {
                1.0
            } else if strength > 0.6 {
                0.6
            } else if strength > 0.4 {
                0.3
            } else if self.rng.random::<f64>() < self.bluff_frequency {
                0.4
            } else {
                0.0
            };
            let target = (f64::from(view.pot) * fraction) as u32;
            if target > 0 {
                if let Some(a) = sized(view, legal, ActionKind::Bet, target) {
                    return a;
                }
            }
            return self.passive_action(view, legal, strength);
        }

        if self.rng.random::<f64>() < self.aggressiveness * strength {
            let multiple = if strength > 0.8 {
                3
            } else if strength > 0.6 || self.rng.random::<f64>() < self.bluff_frequency {
                2
            } else {
                0
            };
            if multiple > 0 {
                let target = current.saturating_mul(multiple);
                if let Some(a) = sized(view, legal, ActionKind::Raise, target) {
                    return a;
                }
            }
        }

        self.passive_action(view, legal, strength)
    }

    fn passive_action(
        &self,
        view: &SeatView<'_>,
        legal: &[PlayerAction],
        strength: f64,
    ) -> PlayerAction {
        if legal.contains(&PlayerAction::Check) {
            return PlayerAction::Check;
        }
        if strength > self.call_threshold() {
            if let Some(call) = find(legal, ActionKind::Call) {
                return call;
            }
            // calling would take every chip
            if view.to_call() >= view.player.stack() {
                if let Some(shove) = find(legal, ActionKind::AllIn) {
                    return shove;
                }
            }
        }
        PlayerAction::Fold
    }
}

impl Strategy for ThresholdBot {
    fn decide(&mut self, view: &SeatView<'_>, legal: &[PlayerAction]) -> PlayerAction {
        let strength = strength::estimate(view);
        let roll = self.rng.random::<f64>();
        let action = if roll < self.aggressiveness {
            self.aggressive_action(view, legal, strength)
        } else {
            self.passive_action(view, legal, strength)
        };
        debug!(
            bot = %self.name,
            seat = view.seat,
            phase = %view.table.phase(),
            strength,
            %action,
            "threshold decision"
        );
        action
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn find(legal: &[PlayerAction], kind: ActionKind) -> Option<PlayerAction> {
    legal.iter().copied().find(|a| a.kind() == kind)
}

/// Turns a desired round total into a legal bet or raise: lifted to the
/// minimum the engine offers, capped by `max_total`, and converted to an
/// all-in when it would use the whole stack.
fn sized(
    view: &SeatView<'_>,
    legal: &[PlayerAction],
    kind: ActionKind,
    target: u32,
) -> Option<PlayerAction> {
    let all_in = view.all_in_total();
    let Some(min) = find(legal, kind).map(|a| a.amount()) else {
        // too short to make the full minimum; only a shove remains
        return find(legal, ActionKind::AllIn).filter(|_| target >= all_in);
    };
    let total = target.max(min).min(view.max_total.max(min));
    if total >= all_in {
        return find(legal, ActionKind::AllIn);
    }
    Some(match kind {
        ActionKind::Bet => PlayerAction::Bet(total),
        _ => PlayerAction::Raise(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_order_their_thresholds() {
        let tight = ThresholdBot::tight(1);
        let balanced = ThresholdBot::balanced(1);
        let aggressive = ThresholdBot::aggressive(1);
        assert!(tight.call_threshold() > balanced.call_threshold());
        assert!(balanced.call_threshold() > aggressive.call_threshold());
        assert!((tight.call_threshold() - 0.57).abs() < 1e-9);
    }

    #[test]
    fn parameters_are_clamped() {
        let bot = ThresholdBot::new("odd", 3.0, -1.0, 0.5, 0);
        assert!((bot.call_threshold() - 0.7).abs() < 1e-9);
        assert_eq!(bot.name(), "odd");
    }
}
