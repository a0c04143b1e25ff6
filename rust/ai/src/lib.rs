//! # tablestakes-ai: Computer Players
//!
//! Ready-made [`Strategy`] implementations to seat at a
//! [`tablestakes_engine::engine::Engine`].
//!
//! ## Core Components
//!
//! - [`strength`] - Heuristic hand strength estimates, preflop and postflop
//! - [`threshold`] - Tight, aggressive and balanced bots built on one rule
//! - [`random`] - Uniformly random legal play
//! - [`create_ai`] - Factory building a bot from its kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_ai::create_ai;
//! use tablestakes_engine::engine::Engine;
//! use tablestakes_engine::rules::RuleSet;
//!
//! let mut engine = Engine::new(RuleSet::default(), 7).unwrap();
//! engine.add_player("alice", create_ai("tight", 1).unwrap()).unwrap();
//! engine.add_player("bob", create_ai("aggressive", 2).unwrap()).unwrap();
//! let summaries = engine.play_game(3).unwrap();
//! assert!(!summaries.is_empty());
//! ```
//!
//! ## AI Kinds
//!
//! - `"tight"`, `"aggressive"`, `"balanced"` - [`threshold::ThresholdBot`] presets
//! - `"random"` - [`random::RandomBot`]
//! - `"passive"` - the engine's check/call [`Passive`] strategy

use std::fmt;

use tablestakes_engine::strategy::{Passive, Strategy};

pub mod random;
pub mod strength;
pub mod threshold;

/// Every name [`create_ai`] accepts.
pub const AI_KINDS: &[&str] = &["tight", "aggressive", "balanced", "random", "passive"];

/// Returned by [`create_ai`] for a name it does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown AI kind '{}' (expected one of: {})",
            self.0,
            AI_KINDS.join(", ")
        )
    }
}

impl std::error::Error for UnknownStrategy {}

/// Builds a bot by kind name. Randomized bots draw from a stream seeded
/// with `seed`, so the same seed replays the same decisions.
///
/// ```rust
/// use tablestakes_ai::create_ai;
///
/// let bot = create_ai("balanced", 0).unwrap();
/// assert_eq!(bot.name(), "balanced");
/// assert!(create_ai("shark", 0).is_err());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Result<Box<dyn Strategy>, UnknownStrategy> {
    let bot: Box<dyn Strategy> = match kind.trim().to_ascii_lowercase().as_str() {
        "tight" => Box::new(threshold::ThresholdBot::tight(seed)),
        "aggressive" => Box::new(threshold::ThresholdBot::aggressive(seed)),
        "balanced" => Box::new(threshold::ThresholdBot::balanced(seed)),
        "random" => Box::new(random::RandomBot::new(seed)),
        "passive" => Box::new(Passive),
        _ => return Err(UnknownStrategy(kind.to_string())),
    };
    Ok(bot)
}
