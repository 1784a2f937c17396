//! Events the shell feeds into the state machine, and guess parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player action forwarded by the shell.
///
/// ```
/// use guess_game::core::Event;
///
/// let typed = Event::update_guess("42");
/// assert_eq!(typed, Event::UpdateGuess { text: "42".to_string() });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Start a new round, abandoning any round in progress.
    StartGame,
    /// The input field changed. Text is unvalidated.
    UpdateGuess { text: String },
    /// Submit the current input as a guess.
    SubmitGuess,
}

impl Event {
    /// Build an `UpdateGuess` event.
    #[must_use]
    pub fn update_guess(text: impl Into<String>) -> Self {
        Event::UpdateGuess { text: text.into() }
    }

    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Event::StartGame => "start_game",
            Event::UpdateGuess { .. } => "update_guess",
            Event::SubmitGuess => "submit_guess",
        }
    }
}

/// Guess text converted to a number.
///
/// Surrounding whitespace is ignored and fractional or exponent forms
/// are accepted, so `" 30 "`, `"30.0"` and `"3e1"` are all thirty.
/// Anything that does not parse to a finite number is `Invalid`, which
/// never equals a secret. That includes hex (`"0x1A"`) and infinities
/// (`"Infinity"`, `"inf"`): they are reported as "not a number" rather
/// than compared.
#[derive(Clone, Debug, PartialEq)]
pub enum Guess {
    Number(f64),
    Invalid(String),
}

impl Guess {
    /// Parse raw input text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Guess::Number(value),
            _ => Guess::Invalid(text.to_string()),
        }
    }

    /// Whether this guess hits `secret` exactly.
    #[must_use]
    pub fn matches(&self, secret: u32) -> bool {
        matches!(self, Guess::Number(value) if *value == f64::from(secret))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `-0` and `0` are the same guess; show it as `0`.
            Guess::Number(value) => write!(f, "{}", value + 0.0),
            Guess::Invalid(text) => write!(f, "{:?}", text),
        }
    }
}
