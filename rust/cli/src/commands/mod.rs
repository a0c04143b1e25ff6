//! Command handler modules.
//!
//! Each subcommand lives in its own file and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`, writing to the
//! output streams it is given rather than to stdout directly.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod rank;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use rank::handle_rank_command;
