//! Environment-driven settings for the terminal shell.

use std::env;

use crate::core::config::GameConfig;

/// How log lines are formatted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Shell settings read from the process environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellSettings {
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub game: GameConfig,
    pub log_format: LogFormat,
}

impl ShellSettings {
    /// Read `GUESS_SEED`, `GUESS_MAX_TRIALS` and `LOG_FORMAT`.
    ///
    /// Unparseable values, and a trial budget the game would reject,
    /// fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("GUESS_SEED").and_then(|v| v.trim().parse().ok());

        let game = lookup("GUESS_MAX_TRIALS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(|trials| GameConfig::default().with_max_trials(trials))
            .filter(|config| config.validate().is_ok())
            .unwrap_or_default();

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Self {
            seed,
            game,
            log_format,
        }
    }
}
