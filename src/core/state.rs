//! Game state.
//!
//! ## GameState
//!
//! Everything the shell renders:
//! - The text currently in the guess input
//! - The secret (once a round has started)
//! - Feedback for the last action
//! - Trials left and the round phase
//!
//! Which controls are enabled is computed from `RoundPhase` rather than
//! stored, so the flags can never disagree with the trial counter.

use serde::{Deserialize, Serialize};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started this session.
    #[default]
    NotStarted,
    /// Guesses are being accepted.
    InProgress,
    /// The last round ended with a correct guess.
    Won,
    /// The last round ran out of trials.
    Lost,
}

impl RoundPhase {
    /// Whether guesses are being accepted.
    #[must_use]
    pub fn is_active(self) -> bool {
        self == RoundPhase::InProgress
    }

    /// Whether a round has finished.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

/// Complete game state. Replaced wholesale on every event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Raw text in the guess input.
    pub player_guess: String,

    /// Hidden target. `None` until the first round starts.
    pub secret_number: Option<u32>,

    /// Message describing the outcome of the last action.
    pub feedback: Option<String>,

    /// Guesses left in this round.
    pub trials_remaining: u32,

    /// Round status.
    pub phase: RoundPhase,
}

impl GameState {
    /// The state a session starts in: no round, everything disabled but
    /// "new game".
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn guess_enabled(&self) -> bool {
        self.phase.is_active()
    }

    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.phase.is_active()
    }

    #[must_use]
    pub fn new_game_enabled(&self) -> bool {
        !self.phase.is_active()
    }
}
