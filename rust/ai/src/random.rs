use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::strategy::Strategy;
use tablestakes_engine::table::SeatView;

/// Picks uniformly among the legal actions. Useful as a noise baseline.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: ChaCha8Rng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomBot {
    fn decide(&mut self, _view: &SeatView<'_>, legal: &[PlayerAction]) -> PlayerAction {
        if legal.is_empty() {
            return PlayerAction::Fold;
        }
        legal[self.rng.random_range(0..legal.len())]
    }

    fn name(&self) -> &str {
        "random"
    }
}
