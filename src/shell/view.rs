//! Render model of the game screen.

use std::fmt;

use crate::core::config::GameConfig;
use crate::core::state::GameState;

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub trials_label: String,
    pub input: String,
    pub feedback: Option<String>,
    pub new_game_enabled: bool,
    pub input_enabled: bool,
    pub guess_enabled: bool,
}

impl View {
    #[must_use]
    pub fn render(state: &GameState, config: &GameConfig) -> Self {
        Self {
            title: format!(
                "Houston!! Guess a number between {} and {}",
                config.secret_min, config.secret_max
            ),
            trials_label: format!("{} trials remaining", state.trials_remaining),
            input: state.player_guess.clone(),
            feedback: state.feedback.clone(),
            new_game_enabled: state.new_game_enabled(),
            input_enabled: state.input_enabled(),
            guess_enabled: state.guess_enabled(),
        }
    }
}

fn marker(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " (disabled)"
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "[New Game]{}", marker(self.new_game_enabled))?;
        writeln!(f, "{}", self.trials_label)?;
        writeln!(f, "> {}{}", self.input, marker(self.input_enabled))?;
        if let Some(feedback) = &self.feedback {
            writeln!(f, "{}", feedback)?;
        }
        write!(f, "[Guess]{}", marker(self.guess_enabled))
    }
}
