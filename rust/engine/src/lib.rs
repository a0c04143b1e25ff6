//! # tablestakes-engine: Multi-player Poker Engine Core
//!
//! A deterministic no-limit hold'em engine for two to ten seats. Provides
//! hand evaluation, betting-round validation, side-pot accounting and
//! showdown resolution, with a seeded deck so whole games can be replayed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation parsing
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand value type and the 5 to 7 card evaluator
//! - [`rules`] - Rule sets, bet sizing and action validation
//! - [`player`] - Player record, status and actions
//! - [`pot`] - Main pot and side pot computation
//! - [`table`] - Table state, phases and the per-decision seat view
//! - [`strategy`] - The decision-making capability seats plug into
//! - [`engine`] - Hand orchestration: deal, bet, showdown, payout
//! - [`logger`] - Hand history records and JSONL output
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_engine::cards::parse_cards;
//! use tablestakes_engine::hand::{evaluate_hand, Category};
//!
//! // Evaluate a 7-card poker hand
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::StraightFlush);
//! assert_eq!(strength.key, vec![12]);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! The same seed and the same strategies replay the same game:
//!
//! ```rust
//! use tablestakes_engine::engine::Engine;
//! use tablestakes_engine::rules::RuleSet;
//! use tablestakes_engine::strategy::Passive;
//!
//! let run = |seed| {
//!     let mut engine = Engine::new(RuleSet::default(), seed).unwrap();
//!     engine.add_player("a", Box::new(Passive)).unwrap();
//!     engine.add_player("b", Box::new(Passive)).unwrap();
//!     engine.play_game(5).unwrap()
//! };
//! let first: Vec<_> = run(42).into_iter().map(|s| s.board).collect();
//! let again: Vec<_> = run(42).into_iter().map(|s| s.board).collect();
//! let same = first
//!     .iter()
//!     .flatten()
//!     .zip(again.iter().flatten())
//!     .all(|(x, y)| x.index() == y.index());
//! assert!(same);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod strategy;
pub mod table;
