//! Play command: seats computer players and runs hands to completion.
//!
//! Each hand prints one summary line; an optional JSONL file receives the
//! full [`HandRecord`](tablestakes_engine::logger::HandRecord) of every hand.

use crate::cli::RuleArgs;
use crate::config;
use crate::error::CliError;
use crate::formatters::format_board;
use crate::ui;
use std::io::Write;
use tablestakes_ai::create_ai;
use tablestakes_engine::engine::{Engine, HandSummary};
use tablestakes_engine::logger::HandLogger;
use tracing::info;

/// Runs up to `hands` hands with one seat per entry in `players`.
///
/// Stops early once a single player holds every chip. The seed comes from
/// `--seed`, then the configuration, then a random draw; it is always
/// printed so the session can be replayed.
pub fn handle_play_command(
    players: &[String],
    hands: u64,
    seed: Option<u64>,
    output: Option<&str>,
    rule_args: &RuleArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut resolved = config::load_with_sources()?;
    resolved.apply_overrides(seed, rule_args)?;
    let rules = resolved.config.to_rules();
    let base_seed = resolved.config.seed.unwrap_or_else(rand::random);

    if !rules.is_valid_player_count(players.len()) {
        return Err(CliError::InvalidInput(format!(
            "{} players given, a table seats {} to {}",
            players.len(),
            rules.min_players,
            rules.max_players
        )));
    }
    if hands == 0 {
        ui::display_warning(err, "--hands is 0, nothing to play")?;
        return Ok(());
    }

    let mut engine = Engine::new(rules, base_seed)?;
    for (i, kind) in players.iter().enumerate() {
        let bot = create_ai(kind, base_seed.wrapping_add(i as u64 + 1))?;
        engine.add_player(format!("{}-{}", kind.trim(), i), bot)?;
    }

    let mut logger = match output {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "Seed {} | {} players | blinds {}/{} | stack {}",
        base_seed,
        players.len(),
        engine.rules().small_blind,
        engine.rules().big_blind,
        engine.rules().starting_stack
    )?;

    let mut played = 0;
    while played < hands {
        if engine.is_game_over() || !engine.rules().is_valid_player_count(engine.seat_count()) {
            break;
        }
        let summary = engine.play_hand()?;
        played += 1;
        write_hand_line(out, &summary)?;
        if let (Some(log), Some(record)) = (logger.as_mut(), engine.last_record()) {
            log.write(record)?;
        }
    }
    info!(played, seed = base_seed, "session finished");

    ui::write_heading(out, &format!("Standings after {} hands", played))?;
    let mut standings: Vec<(&str, u32)> = engine.players().map(|p| (p.name(), p.stack())).collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1));
    for (name, stack) in standings {
        writeln!(out, "{:<16} {:>8}", name, stack)?;
    }
    if let Some(log) = &logger {
        writeln!(out, "Wrote {} hand records", log.written())?;
    }
    Ok(())
}

fn write_hand_line(out: &mut dyn Write, summary: &HandSummary) -> std::io::Result<()> {
    let pots: Vec<String> = summary
        .pots
        .iter()
        .map(|p| match p.category {
            Some(c) => format!("{} -> {} ({})", p.amount, p.winner_name, c),
            None => format!("{} -> {}", p.amount, p.winner_name),
        })
        .collect();
    write!(
        out,
        "Hand {}: {} {}",
        summary.hand_number,
        format_board(&summary.board),
        pots.join(", ")
    )?;
    if !summary.eliminated.is_empty() {
        write!(out, " | out: {}", summary.eliminated.join(", "))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_play_prints_hands_and_standings() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_play_command(
            &kinds(&["tight", "passive", "random"]),
            3,
            Some(5),
            None,
            &RuleArgs::default(),
            &mut out,
            &mut err,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Seed 5 | 3 players"));
        assert!(text.contains("Hand 1:"));
        assert!(text.contains("Standings after"));
    }

    #[test]
    fn test_play_rejects_single_player() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_play_command(
            &kinds(&["tight"]),
            1,
            Some(1),
            None,
            &RuleArgs::default(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_play_rejects_unknown_ai() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_play_command(
            &kinds(&["tight", "shark"]),
            1,
            Some(1),
            None,
            &RuleArgs::default(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(m)) if m.contains("shark")));
    }
}
