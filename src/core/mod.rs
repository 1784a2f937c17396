//! Core types: state, events, entropy, configuration.
//!
//! Nothing here knows the rules of the game. `rules` combines these
//! pieces into the transition function.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Event, Guess};
pub use config::{ConfigError, GameConfig};
pub use rng::{EntropySource, FixedEntropy, GameRng, GameRngState, SequenceEntropy};
pub use state::{GameState, RoundPhase};
