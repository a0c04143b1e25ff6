//! Rank command: evaluates hands given as arguments or read from stdin.

use crate::error::CliError;
use crate::formatters::{format_board, format_strength};
use crate::io_utils::read_stdin_line;
use std::cmp::Ordering;
use std::io::{BufRead, Write};
use tablestakes_engine::cards::parse_cards;
use tablestakes_engine::hand::{compare_hands, Hand, HandStrength};

/// Prints the category and tie-break key of each hand. With more than one
/// hand, also prints which one wins (or that they tie).
///
/// When `hands` is empty, each non-empty stdin line is one hand.
pub fn handle_rank_command(
    hands: &[String],
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut inputs: Vec<String> = hands.to_vec();
    if inputs.is_empty() {
        while let Some(line) = read_stdin_line(stdin) {
            if !line.is_empty() {
                inputs.push(line);
            }
        }
    }
    if inputs.is_empty() {
        return Err(CliError::InvalidInput("no hands to rank".into()));
    }

    let mut ranked: Vec<HandStrength> = Vec::with_capacity(inputs.len());
    for (i, text) in inputs.iter().enumerate() {
        let cards = parse_cards(text)?;
        let mut hand = Hand::new();
        hand.add_cards(&cards)?;
        let hs = hand.strength()?;
        writeln!(
            out,
            "#{} {} => {}",
            i + 1,
            format_board(hand.cards()),
            format_strength(&hs)
        )?;
        ranked.push(hs);
    }

    if ranked.len() > 1 {
        let mut best = vec![0];
        for i in 1..ranked.len() {
            match compare_hands(&ranked[i], &ranked[best[0]]) {
                Ordering::Greater => best = vec![i],
                Ordering::Equal => best.push(i),
                Ordering::Less => {}
            }
        }
        let names: Vec<String> = best.iter().map(|i| format!("#{}", i + 1)).collect();
        if best.len() == 1 {
            writeln!(out, "Winner: {}", names[0])?;
        } else {
            writeln!(out, "Tie: {}", names.join(" "))?;
        }
    }
    Ok(())
}
