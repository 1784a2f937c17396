//! Game configuration.
//!
//! `GameConfig` fixes the shape of a round: which secrets are possible,
//! how many guesses a player gets, and how a win is scored. The defaults
//! are the classic 0..100 range with ten trials worth ten points each.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower bound of the secret (inclusive).
pub const DEFAULT_SECRET_MIN: u32 = 0;
/// Default upper bound of the secret (exclusive).
pub const DEFAULT_SECRET_MAX: u32 = 100;
/// Default guess budget per round.
pub const DEFAULT_MAX_TRIALS: u32 = 10;
/// Default points awarded per unused trial.
pub const DEFAULT_POINTS_PER_TRIAL: u32 = 10;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("secret range {min}..{max} is empty")]
    EmptySecretRange { min: u32, max: u32 },
    #[error("a round needs at least one trial")]
    NoTrials,
    #[error("best score {max_trials} x {points_per_trial} does not fit in a u32")]
    ScoreOverflow { max_trials: u32, points_per_trial: u32 },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest possible secret (inclusive).
    pub secret_min: u32,

    /// Upper bound of the secret (exclusive).
    pub secret_max: u32,

    /// Guesses available per round.
    pub max_trials: u32,

    /// Score per trial left after a winning guess.
    pub points_per_trial: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            secret_min: DEFAULT_SECRET_MIN,
            secret_max: DEFAULT_SECRET_MAX,
            max_trials: DEFAULT_MAX_TRIALS,
            points_per_trial: DEFAULT_POINTS_PER_TRIAL,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the half-open secret range `min..max`.
    #[must_use]
    pub fn with_secret_range(mut self, min: u32, max: u32) -> Self {
        self.secret_min = min;
        self.secret_max = max;
        self
    }

    /// Set the guess budget.
    #[must_use]
    pub fn with_max_trials(mut self, trials: u32) -> Self {
        self.max_trials = trials;
        self
    }

    /// Set the score per remaining trial.
    #[must_use]
    pub fn with_points_per_trial(mut self, points: u32) -> Self {
        self.points_per_trial = points;
        self
    }

    /// Check that a round can actually be played with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_min >= self.secret_max {
            return Err(ConfigError::EmptySecretRange {
                min: self.secret_min,
                max: self.secret_max,
            });
        }
        if self.max_trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.max_trials.checked_mul(self.points_per_trial).is_none() {
            return Err(ConfigError::ScoreOverflow {
                max_trials: self.max_trials,
                points_per_trial: self.points_per_trial,
            });
        }
        Ok(())
    }

    /// The secret range as a `Range`.
    #[must_use]
    pub fn secret_range(&self) -> std::ops::Range<u32> {
        self.secret_min..self.secret_max
    }

    /// Score for a win with `trials_left` guesses unused.
    ///
    /// Saturates; `validate` already rejects configs that could overflow.
    #[must_use]
    pub fn score(&self, trials_left: u32) -> u32 {
        trials_left.saturating_mul(self.points_per_trial)
    }
}
