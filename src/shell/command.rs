//! Line commands for the terminal front end.

use super::session::{Session, ShellError};
use crate::core::rng::EntropySource;

/// One line of terminal input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame,
    /// Type the text, then press "Guess".
    Guess(String),
    Type(String),
    Submit,
    Show,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines show the screen again.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" | "show" => Ok(Command::Show),
            "new" => Ok(Command::NewGame),
            "guess" | "g" => Ok(Command::Guess(rest.to_string())),
            "type" => Ok(Command::Type(rest.to_string())),
            "submit" => Ok(Command::Submit),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ShellError::UnknownCommand(line.to_string())),
        }
    }

    /// Run against a session. `Show` and `Quit` are no-ops here.
    pub fn execute<E: EntropySource>(self, session: &mut Session<E>) -> Result<(), ShellError> {
        match self {
            Command::NewGame => session.new_game().map(|_| ()),
            Command::Guess(text) => {
                session.type_guess(text)?;
                session.submit_guess().map(|_| ())
            }
            Command::Type(text) => session.type_guess(text).map(|_| ()),
            Command::Submit => session.submit_guess().map(|_| ()),
            Command::Show | Command::Quit => Ok(()),
        }
    }
}
