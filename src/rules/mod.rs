//! Game rules.
//!
//! `GuessingGame` owns the configuration and entropy source and turns
//! `(GameState, Event)` into the next `GameState`. The shell calls into
//! it but never decides outcomes itself.

pub mod engine;

pub use engine::{judge, GameResult, GuessingGame, Verdict, ROUND_START_MESSAGE};
