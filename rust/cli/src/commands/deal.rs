//! Deal command: one hand dealt straight to the river, no betting.

use crate::error::CliError;
use crate::formatters::{format_board, format_strength};
use std::io::Write;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::hand::compare_hands;
use tablestakes_engine::rules::RuleSet;
use tablestakes_engine::strategy::Passive;
use tablestakes_engine::table::Phase;

/// Deals hole cards to `players` seats, runs out the board and prints each
/// seat's holding with its best hand. The best hand is marked with `*`.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let rules = RuleSet::default();
    if !rules.is_valid_player_count(players) {
        return Err(CliError::InvalidInput(format!(
            "--players must be between {} and {}",
            rules.min_players, rules.max_players
        )));
    }
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut eng = Engine::new(rules, base_seed)?;
    for i in 0..players {
        eng.add_player(format!("P{}", i + 1), Box::new(Passive))?;
    }
    eng.start_hand()?;
    eng.deal_hole_cards()?;
    while eng.get_game_state().phase() != Phase::River {
        eng.advance_phase()?;
    }

    let mut strengths = Vec::with_capacity(players);
    for p in eng.players() {
        strengths.push(p.hand().strength()?);
    }
    let best = strengths
        .iter()
        .max_by(|a, b| compare_hands(a, b))
        .cloned();

    for (p, hs) in eng.players().zip(&strengths) {
        let hole = &p.hand().cards()[..2];
        let mark = if Some(hs) == best.as_ref() { "*" } else { " " };
        writeln!(
            out,
            "{}{:<4} {} {}",
            mark,
            p.name(),
            format_board(hole),
            format_strength(hs)
        )?;
    }
    writeln!(out, "Board: {}", format_board(eng.get_game_state().community()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), 3, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("P1"));
        assert!(lines[3].starts_with("Board: ["));
        assert!(lines.iter().any(|l| l.starts_with('*')));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), 4, &mut out1).unwrap();
        handle_deal_command(Some(12345), 4, &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_deal_command_rejects_table_size() {
        let mut out = Vec::new();
        assert!(handle_deal_command(Some(1), 1, &mut out).is_err());
        assert!(handle_deal_command(Some(1), 11, &mut out).is_err());
    }
}
