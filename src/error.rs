//! Error types shared by the clock engine and the command session

use thiserror::Error;

/// Errors raised by the clock engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    /// The periodic loop was already started on this clock
    #[error("clock has already been started")]
    AlreadyStarted,
}

/// Errors raised while parsing a console command
///
/// The display text is what the session shows back to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Invalid input: {0:?}")]
    Malformed(String),
}
