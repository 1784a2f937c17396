//! # guess-game
//!
//! A number-guessing game built around one pure transition function.
//!
//! A round draws a hidden integer, the player gets a fixed budget of
//! guesses, and each guess is answered with "greater", "less" or a win.
//!
//! ## Design
//!
//! - **One writer**: `GuessingGame::apply(state, event)` is the only thing
//!   that produces a new `GameState`. Events are `StartGame`,
//!   `UpdateGuess` and `SubmitGuess`.
//!
//! - **Injected entropy**: the secret comes from an `EntropySource` given
//!   to the game, so tests can fix it.
//!
//! - **Phase, not flags**: control enablement is derived from a single
//!   `RoundPhase`.
//!
//! ## Modules
//!
//! - `core`: state, events, entropy, configuration
//! - `rules`: the state machine
//! - `shell`: session, input gating, render model, terminal commands
//!
//! ```
//! use guess_game::{Event, FixedEntropy, GameState, GuessingGame};
//!
//! let mut game = GuessingGame::new(FixedEntropy(50));
//! let state = game.apply(GameState::new(), Event::StartGame);
//! let state = game.apply(state, Event::update_guess("30"));
//! let state = game.apply(state, Event::SubmitGuess);
//!
//! assert_eq!(state.feedback.as_deref(), Some("30 is less than the secret number"));
//! assert_eq!(state.trials_remaining, 9);
//! ```

pub mod core;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EntropySource, Event, FixedEntropy, GameConfig, GameRng, GameRngState,
    GameState, Guess, RoundPhase, SequenceEntropy,
};

pub use crate::rules::{GameResult, GuessingGame, Verdict};

pub use crate::shell::{Command, Session, ShellError, ShellSettings, View};
