//! A play session: the latest state plus the machine that advances it.

use thiserror::Error;
use tracing::warn;

use crate::core::action::Event;
use crate::core::config::{ConfigError, GameConfig};
use crate::core::rng::EntropySource;
use crate::core::state::GameState;
use crate::rules::GuessingGame;

use super::view::View;

/// Notice shown when the player submits an empty guess.
pub const EMPTY_GUESS_NOTICE: &str = "Houston!! type a number!! yikes .....";

/// Something the shell refused to do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Houston!! type a number!! yikes .....")]
    EmptyGuess,
    #[error("the {0} control is disabled")]
    Disabled(&'static str),
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Holds the current state and routes player input into the state machine.
///
/// Control gating mirrors the rendered screen: typing and guessing only
/// while a round runs, "new game" only between rounds.
pub struct Session<E> {
    game: GuessingGame<E>,
    state: GameState,
}

impl<E: EntropySource> Session<E> {
    /// Start a session with the default configuration.
    pub fn new(entropy: E) -> Self {
        Self {
            game: GuessingGame::new(entropy),
            state: GameState::new(),
        }
    }

    /// Start a session with a custom configuration.
    pub fn with_config(config: GameConfig, entropy: E) -> Result<Self, ShellError> {
        Ok(Self {
            game: GuessingGame::with_config(config, entropy)?,
            state: GameState::new(),
        })
    }

    /// The latest state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The render model for the latest state.
    #[must_use]
    pub fn view(&self) -> View {
        View::render(&self.state, self.game.config())
    }

    /// The "New Game" button.
    pub fn new_game(&mut self) -> Result<&GameState, ShellError> {
        if !self.state.new_game_enabled() {
            return Err(ShellError::Disabled("new game"));
        }
        Ok(self.dispatch(Event::StartGame))
    }

    /// A change to the guess input.
    pub fn type_guess(&mut self, text: impl Into<String>) -> Result<&GameState, ShellError> {
        if !self.state.input_enabled() {
            return Err(ShellError::Disabled("guess input"));
        }
        Ok(self.dispatch(Event::update_guess(text)))
    }

    /// The "Guess" button. Empty input is refused before it reaches the
    /// state machine.
    pub fn submit_guess(&mut self) -> Result<&GameState, ShellError> {
        if !self.state.guess_enabled() {
            return Err(ShellError::Disabled("guess"));
        }
        if self.state.player_guess.is_empty() {
            warn!("empty guess rejected");
            return Err(ShellError::EmptyGuess);
        }
        Ok(self.dispatch(Event::SubmitGuess))
    }

    /// Forward an event without any shell-side gating.
    pub fn dispatch(&mut self, event: Event) -> &GameState {
        let current = std::mem::take(&mut self.state);
        self.state = self.game.apply(current, event);
        &self.state
    }
}
