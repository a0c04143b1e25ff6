//! # Tablestakes CLI Library
//!
//! Command-line front end for the tablestakes poker engine: run tables of
//! computer players, deal and rank hands, and pit AI kinds against each
//! other.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a subcommand and returns the
//! process exit code.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = tablestakes_cli::run(["tablestakes", "deal", "--seed", "42"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Run a table of AI players and optionally log hands as JSONL
//! - `deal`: Deal one hand to the river for inspection
//! - `rank`: Evaluate and compare hands
//! - `eval`: Evaluate two AI kinds head-to-head
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, TablestakesCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_rank_command,
};

pub use error::CliError;

/// Success exit code.
pub const EXIT_SUCCESS: i32 = 0;
/// Any failure: bad arguments, bad configuration, I/O or engine errors.
pub const EXIT_ERROR: i32 = 2;

/// Main entry point for the CLI application.
///
/// Help and version output go to `out` with exit code `0`. Argument errors
/// and command failures are written to `err` and return `2`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "rank", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TablestakesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return EXIT_ERROR;
                    }
                    EXIT_SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = writeln!(err, "Commands: {}", COMMANDS.join(", "));
                    let _ = writeln!(err, "For full help, run: tablestakes --help");
                    EXIT_ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            players,
            hands,
            seed,
            output,
            rules,
        } => handle_play_command(&players, hands, seed, output.as_deref(), &rules, out, err),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Rank { hands } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_rank_command(&hands, out, &mut stdin_lock)
        }
        Commands::Eval {
            ai_a,
            ai_b,
            games,
            hands,
            seed,
            rules,
        } => handle_eval_command(&ai_a, &ai_b, games, hands, seed, &rules, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            EXIT_ERROR
        }
    }
}
