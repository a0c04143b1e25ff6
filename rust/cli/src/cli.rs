//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tablestakes",
    version,
    about = "Tablestakes multi-player poker engine CLI"
)]
pub struct TablestakesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Rule overrides shared by the commands that build a table. Each flag wins
/// over the config file and environment.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RuleArgs {
    #[arg(long)]
    pub small_blind: Option<u32>,
    #[arg(long)]
    pub big_blind: Option<u32>,
    #[arg(long)]
    pub starting_stack: Option<u32>,
    /// no-limit, pot-limit or fixed-limit
    #[arg(long)]
    pub structure: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a table of computer players for a number of hands
    Play {
        /// Comma-separated AI kinds, one per seat
        #[arg(
            long,
            value_delimiter = ',',
            default_values = ["tight", "aggressive", "balanced", "random"]
        )]
        players: Vec<String>,
        #[arg(long, default_value_t = 10)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Append hand records to this JSONL file
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        rules: RuleArgs,
    },
    /// Deal one hand to the river and show every holding
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2)]
        players: usize,
    },
    /// Rank hands of 5 to 7 cards, e.g. "As Ks Qs Js Ts"; reads stdin when none given
    Rank { hands: Vec<String> },
    /// Play two AI kinds against each other heads-up
    Eval {
        #[arg(long)]
        ai_a: String,
        #[arg(long)]
        ai_b: String,
        #[arg(long, default_value_t = 10)]
        games: u32,
        /// Hand limit per game
        #[arg(long, default_value_t = 200)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        rules: RuleArgs,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
