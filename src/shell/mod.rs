//! Thin presentation shell around the state machine.
//!
//! The shell gates controls, refuses empty guesses, and renders state.
//! It never decides game outcomes.

pub mod command;
pub mod session;
pub mod settings;
pub mod view;

pub use command::Command;
pub use session::{Session, ShellError, EMPTY_GUESS_NOTICE};
pub use settings::{LogFormat, ShellSettings};
pub use view::View;
