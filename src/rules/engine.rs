//! The guessing-game state machine.
//!
//! `GuessingGame::apply` is the only way state changes:
//! - `StartGame` draws a secret and opens a round
//! - `UpdateGuess` replaces the input text
//! - `SubmitGuess` scores the input against the secret
//!
//! Every transition is total. Illegal submits return the state untouched.

use tracing::{debug, info};

use crate::core::action::{Event, Guess};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::rng::EntropySource;
use crate::core::state::{GameState, RoundPhase};

/// Feedback shown when a round opens.
pub const ROUND_START_MESSAGE: &str = "Secret number generated. Good luck guessing it!";

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Guessed correctly with this score.
    Won { score: u32 },
    /// Ran out of trials; the secret is revealed.
    Lost { secret: u32 },
}

/// What a single submitted guess did.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Correct { score: u32 },
    OutOfTrials { secret: u32 },
    TooHigh(Guess),
    TooLow(Guess),
    NotANumber(Guess),
}

impl Verdict {
    /// Player-facing message for this verdict.
    #[must_use]
    pub fn feedback(&self) -> String {
        match self {
            Verdict::Correct { score } => format!("You win! Score: {}", score),
            Verdict::OutOfTrials { secret } => {
                format!("You lost. The secret number was {}", secret)
            }
            Verdict::TooHigh(guess) => format!("{} is greater than the secret number", guess),
            Verdict::TooLow(guess) => format!("{} is less than the secret number", guess),
            Verdict::NotANumber(guess) => format!("{} is not a number", guess),
        }
    }
}

/// Judge `guess` against `secret` with `trials_left` guesses remaining
/// after this one.
///
/// Equality wins over exhaustion: a correct last guess is a win.
#[must_use]
pub fn judge(guess: Guess, secret: u32, trials_left: u32, config: &GameConfig) -> Verdict {
    if guess.matches(secret) {
        return Verdict::Correct {
            score: config.score(trials_left),
        };
    }
    if trials_left == 0 {
        return Verdict::OutOfTrials { secret };
    }
    match guess {
        Guess::Number(value) if value > f64::from(secret) => Verdict::TooHigh(guess),
        Guess::Number(_) => Verdict::TooLow(guess),
        Guess::Invalid(_) => Verdict::NotANumber(guess),
    }
}

/// The state machine: rules plus the entropy used to pick secrets.
#[derive(Clone, Debug)]
pub struct GuessingGame<E> {
    config: GameConfig,
    entropy: E,
}

impl<E: EntropySource> GuessingGame<E> {
    /// Create a game with the default configuration.
    pub fn new(entropy: E) -> Self {
        Self {
            config: GameConfig::default(),
            entropy,
        }
    }

    /// Create a game with a custom configuration.
    pub fn with_config(config: GameConfig, entropy: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, entropy })
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether `event` would change anything in `state`.
    ///
    /// Only `SubmitGuess` can be illegal, and only outside a round.
    #[must_use]
    pub fn is_legal(&self, state: &GameState, event: &Event) -> bool {
        match event {
            Event::StartGame | Event::UpdateGuess { .. } => true,
            Event::SubmitGuess => state.guess_enabled() && state.secret_number.is_some(),
        }
    }

    /// Check if the round in `state` is over.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match (state.phase, state.secret_number) {
            (RoundPhase::Won, _) => Some(GameResult::Won {
                score: self.config.score(state.trials_remaining),
            }),
            (RoundPhase::Lost, Some(secret)) => Some(GameResult::Lost { secret }),
            _ => None,
        }
    }

    /// Apply one event, producing the next state.
    pub fn apply(&mut self, state: GameState, event: Event) -> GameState {
        debug!(event = event.kind(), phase = ?state.phase, "applying event");
        match event {
            Event::StartGame => self.start_game(state),
            Event::UpdateGuess { text } => GameState {
                player_guess: text,
                ..state
            },
            Event::SubmitGuess => self.submit_guess(state),
        }
    }

    fn start_game(&mut self, state: GameState) -> GameState {
        if state.phase.is_active() {
            debug!(trials_remaining = state.trials_remaining, "abandoning round in progress");
        }
        let secret = self.entropy.draw(self.config.secret_range());
        info!(max_trials = self.config.max_trials, "round started");

        GameState {
            player_guess: String::new(),
            secret_number: Some(secret),
            feedback: Some(ROUND_START_MESSAGE.to_string()),
            trials_remaining: self.config.max_trials,
            phase: RoundPhase::InProgress,
        }
    }

    fn submit_guess(&mut self, state: GameState) -> GameState {
        let secret = match state.secret_number {
            Some(secret) if state.guess_enabled() => secret,
            _ => {
                debug!(phase = ?state.phase, "submit ignored outside a round");
                return state;
            }
        };

        let trials_left = state.trials_remaining.saturating_sub(1);
        let verdict = judge(Guess::parse(&state.player_guess), secret, trials_left, &self.config);
        let feedback = Some(verdict.feedback());

        match verdict {
            Verdict::Correct { score } => {
                info!(score, trials_left, "round won");
                GameState {
                    feedback,
                    trials_remaining: trials_left,
                    phase: RoundPhase::Won,
                    ..state
                }
            }
            Verdict::OutOfTrials { .. } => {
                info!(secret, "round lost");
                GameState {
                    feedback,
                    trials_remaining: 0,
                    phase: RoundPhase::Lost,
                    ..state
                }
            }
            Verdict::TooHigh(_) | Verdict::TooLow(_) | Verdict::NotANumber(_) => {
                debug!(trials_left, "wrong guess");
                GameState {
                    feedback,
                    trials_remaining: trials_left,
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{FixedEntropy, GameRng};

    fn started(secret: u32) -> (GuessingGame<FixedEntropy>, GameState) {
        let mut game = GuessingGame::new(FixedEntropy(secret));
        let state = game.apply(GameState::new(), Event::StartGame);
        (game, state)
    }

    fn guess(game: &mut GuessingGame<FixedEntropy>, state: GameState, text: &str) -> GameState {
        let state = game.apply(state, Event::update_guess(text));
        game.apply(state, Event::SubmitGuess)
    }

    #[test]
    fn test_start_game() {
        let (_, state) = started(50);

        assert_eq!(state.secret_number, Some(50));
        assert_eq!(state.trials_remaining, 10);
        assert_eq!(state.player_guess, "");
        assert_eq!(state.feedback.as_deref(), Some(ROUND_START_MESSAGE));
        assert!(state.guess_enabled());
        assert!(state.input_enabled());
        assert!(!state.new_game_enabled());
    }

    #[test]
    fn test_start_game_with_rng_in_range() {
        let mut game = GuessingGame::new(GameRng::new(42));
        let mut state = GameState::new();

        for _ in 0..200 {
            state = game.apply(state, Event::StartGame);
            let secret = state.secret_number.unwrap();
            assert!(secret < 100);
        }
    }

    #[test]
    fn test_update_guess_is_verbatim() {
        let mut game = GuessingGame::new(FixedEntropy(5));
        let before = GameState::new();

        let after = game.apply(before.clone(), Event::update_guess(" 12abc "));

        assert_eq!(after.player_guess, " 12abc ");
        assert_eq!(
            GameState {
                player_guess: String::new(),
                ..after
            },
            before
        );
    }

    #[test]
    fn test_too_low_then_too_high() {
        let (mut game, state) = started(50);

        let state = guess(&mut game, state, "30");
        assert_eq!(state.feedback.as_deref(), Some("30 is less than the secret number"));
        assert_eq!(state.trials_remaining, 9);
        assert_eq!(state.player_guess, "30");

        let state = guess(&mut game, state, "70");
        assert_eq!(state.feedback.as_deref(), Some("70 is greater than the secret number"));
        assert_eq!(state.trials_remaining, 8);
    }

    #[test]
    fn test_win_on_first_guess_scores_90() {
        let (mut game, state) = started(42);

        let state = guess(&mut game, state, "42");

        assert_eq!(state.feedback.as_deref(), Some("You win! Score: 90"));
        assert_eq!(state.trials_remaining, 9);
        assert_eq!(state.phase, RoundPhase::Won);
        assert_eq!(game.is_terminal(&state), Some(GameResult::Won { score: 90 }));
    }

    #[test]
    fn test_win_on_last_guess_is_not_a_loss() {
        let (mut game, mut state) = started(7);

        for _ in 0..9 {
            state = guess(&mut game, state, "8");
        }
        assert_eq!(state.trials_remaining, 1);

        let state = guess(&mut game, state, "7");
        assert_eq!(state.feedback.as_deref(), Some("You win! Score: 0"));
        assert_eq!(state.trials_remaining, 0);
        assert_eq!(state.phase, RoundPhase::Won);
    }

    #[test]
    fn test_loss_reveals_secret() {
        let (mut game, mut state) = started(1);

        for _ in 0..10 {
            state = guess(&mut game, state, "99");
        }

        assert_eq!(state.feedback.as_deref(), Some("You lost. The secret number was 1"));
        assert_eq!(state.trials_remaining, 0);
        assert_eq!(state.phase, RoundPhase::Lost);
        assert!(state.new_game_enabled());
        assert_eq!(game.is_terminal(&state), Some(GameResult::Lost { secret: 1 }));
    }

    #[test]
    fn test_submit_before_start_is_noop() {
        let mut game = GuessingGame::new(FixedEntropy(3));
        let state = game.apply(GameState::new(), Event::update_guess("3"));

        let after = game.apply(state.clone(), Event::SubmitGuess);

        assert_eq!(after, state);
        assert!(!game.is_legal(&state, &Event::SubmitGuess));
    }

    #[test]
    fn test_submit_after_win_is_noop() {
        let (mut game, state) = started(3);
        let won = guess(&mut game, state, "3");

        let after = game.apply(won.clone(), Event::SubmitGuess);

        assert_eq!(after, won);
    }

    #[test]
    fn test_non_numeric_guess_is_a_miss() {
        let (mut game, state) = started(0);

        let state = guess(&mut game, state, "abc");

        assert_eq!(state.trials_remaining, 9);
        assert_eq!(state.phase, RoundPhase::InProgress);
        assert_eq!(state.feedback.as_deref(), Some("\"abc\" is not a number"));
    }

    #[test]
    fn test_negative_zero_feedback() {
        let (mut game, state) = started(10);

        let state = guess(&mut game, state, "-0");

        assert_eq!(state.feedback.as_deref(), Some("0 is less than the secret number"));
    }

    #[test]
    fn test_hex_guess_is_not_a_number() {
        let (mut game, state) = started(26);

        let state = guess(&mut game, state, "0x1A");

        assert_eq!(state.feedback.as_deref(), Some("\"0x1A\" is not a number"));
        assert_eq!(state.phase, RoundPhase::InProgress);
        assert_eq!(state.trials_remaining, 9);
    }

    #[test]
    fn test_empty_guess_never_matches_zero() {
        let (mut game, state) = started(0);

        let state = game.apply(state, Event::SubmitGuess);

        assert_eq!(state.trials_remaining, 9);
        assert_eq!(state.phase, RoundPhase::InProgress);
    }

    #[test]
    fn test_restart_mid_round() {
        let mut game = GuessingGame::new(crate::core::rng::SequenceEntropy::new([10, 20]));
        let state = game.apply(GameState::new(), Event::StartGame);
        let state = game.apply(state, Event::update_guess("5"));
        let state = game.apply(state, Event::SubmitGuess);
        assert_eq!(state.trials_remaining, 9);

        let state = game.apply(state, Event::StartGame);

        assert_eq!(state.secret_number, Some(20));
        assert_eq!(state.trials_remaining, 10);
        assert_eq!(state.player_guess, "");
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new()
            .with_secret_range(1, 4)
            .with_max_trials(2)
            .with_points_per_trial(50);
        let mut game = GuessingGame::with_config(config, FixedEntropy(2)).unwrap();

        let state = game.apply(GameState::new(), Event::StartGame);
        assert_eq!(state.trials_remaining, 2);

        let state = game.apply(state, Event::update_guess("2"));
        let state = game.apply(state, Event::SubmitGuess);
        assert_eq!(state.feedback.as_deref(), Some("You win! Score: 50"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::new().with_max_trials(0);
        let result = GuessingGame::with_config(config, FixedEntropy(0));
        assert_eq!(result.unwrap_err(), ConfigError::NoTrials);
    }

    #[test]
    fn test_overflowing_score_config_rejected() {
        let config = GameConfig::new().with_max_trials(u32::MAX);
        let result = GuessingGame::with_config(config, FixedEntropy(5));
        assert!(matches!(result, Err(ConfigError::ScoreOverflow { .. })));
    }

    #[test]
    fn test_win_with_largest_trial_budget() {
        let max_trials = u32::MAX / 10;
        let config = GameConfig::new().with_max_trials(max_trials);
        let mut game = GuessingGame::with_config(config, FixedEntropy(5)).unwrap();

        let state = game.apply(GameState::new(), Event::StartGame);
        let state = guess(&mut game, state, "5");

        let expected = format!("You win! Score: {}", (max_trials - 1) * 10);
        assert_eq!(state.feedback.as_deref(), Some(expected.as_str()));
        assert_eq!(state.trials_remaining, max_trials - 1);
    }

    #[test]
    fn test_judge_ordering() {
        let config = GameConfig::default();

        assert_eq!(
            judge(Guess::parse("4"), 4, 0, &config),
            Verdict::Correct { score: 0 }
        );
        assert_eq!(
            judge(Guess::parse("5"), 4, 0, &config),
            Verdict::OutOfTrials { secret: 4 }
        );
        assert_eq!(
            judge(Guess::parse("5"), 4, 3, &config),
            Verdict::TooHigh(Guess::Number(5.0))
        );
    }
}
