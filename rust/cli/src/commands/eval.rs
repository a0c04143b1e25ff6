//! AI evaluation command.
//!
//! Plays two AI kinds heads-up over a number of games, swapping seats every
//! game, and reports game wins and average chip results.

use crate::cli::RuleArgs;
use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;
use tablestakes_ai::create_ai;
use tablestakes_engine::engine::Engine;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalStats {
    pub games: u32,
    pub wins_a: u32,
    pub wins_b: u32,
    pub draws: u32,
    pub hands: u64,
    /// Net chips won by A across all games
    pub chip_delta_a: i64,
}

impl EvalStats {
    fn win_rate(&self, wins: u32) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(self.games) * 100.0
        }
    }

    fn avg_delta(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.chip_delta_a as f64 / f64::from(self.games)
        }
    }
}

/// Runs the match and returns its statistics without printing.
pub fn run_match(
    ai_a: &str,
    ai_b: &str,
    games: u32,
    hands_per_game: u64,
    base_seed: u64,
    rule_args: &RuleArgs,
) -> Result<EvalStats, CliError> {
    let mut resolved = config::load_with_sources()?;
    resolved.apply_overrides(Some(base_seed), rule_args)?;
    let rules = resolved.config.to_rules();
    let stack = i64::from(rules.starting_stack);

    // Fail on unknown kinds before any game starts.
    create_ai(ai_a, 0)?;
    create_ai(ai_b, 0)?;

    let mut stats = EvalStats::default();
    for game in 0..games {
        let seed = base_seed.wrapping_add(u64::from(game));
        let mut engine = Engine::new(rules.clone(), seed)?;
        let a = create_ai(ai_a, seed.wrapping_mul(2))?;
        let b = create_ai(ai_b, seed.wrapping_mul(2).wrapping_add(1))?;
        if game % 2 == 0 {
            engine.add_player("A", a)?;
            engine.add_player("B", b)?;
        } else {
            engine.add_player("B", b)?;
            engine.add_player("A", a)?;
        }

        let played = engine.play_game(hands_per_game)?;
        let stack_of = |name: &str| {
            engine
                .players()
                .find(|p| p.name() == name)
                .map_or(0, |p| i64::from(p.stack()))
        };
        let (a_end, b_end) = (stack_of("A"), stack_of("B"));
        debug!(game, hands = played.len(), a_end, b_end, "eval game finished");

        stats.games += 1;
        stats.hands += played.len() as u64;
        stats.chip_delta_a += a_end - stack;
        match a_end.cmp(&b_end) {
            std::cmp::Ordering::Greater => stats.wins_a += 1,
            std::cmp::Ordering::Less => stats.wins_b += 1,
            std::cmp::Ordering::Equal => stats.draws += 1,
        }
    }
    Ok(stats)
}

pub fn handle_eval_command(
    ai_a: &str,
    ai_b: &str,
    games: u32,
    hands_per_game: u64,
    seed: Option<u64>,
    rule_args: &RuleArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("--games must be at least 1".into()));
    }
    let base_seed = seed
        .or(config::load()?.seed)
        .unwrap_or_else(rand::random);
    let stats = run_match(ai_a, ai_b, games, hands_per_game, base_seed, rule_args)?;

    ui::write_heading(out, &format!("{} (A) vs {} (B), seed {}", ai_a, ai_b, base_seed))?;
    writeln!(out, "Games: {}  Hands: {}", stats.games, stats.hands)?;
    writeln!(
        out,
        "A wins: {} ({:.1}%)",
        stats.wins_a,
        stats.win_rate(stats.wins_a)
    )?;
    writeln!(
        out,
        "B wins: {} ({:.1}%)",
        stats.wins_b,
        stats.win_rate(stats.wins_b)
    )?;
    writeln!(out, "Draws: {}", stats.draws)?;
    writeln!(out, "A avg chips/game: {:+.1}", stats.avg_delta())?;
    Ok(())
}
