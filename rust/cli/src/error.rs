//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the error to an exit code after the handler has reported it on stderr.

use std::fmt;

use bjlite_engine::errors::GameError;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (history files, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The round engine rejected an operation
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bjlite_engine::engine::Phase;
    use bjlite_engine::errors::Action;
    use std::error::Error;

    #[test]
    fn engine_errors_keep_their_message_and_source() {
        let e: CliError = GameError::InvalidTransition {
            action: Action::Hit,
            phase: Phase::Idle,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "Engine error: Cannot hit while the round is idle"
        );
        assert!(e.source().is_some());
    }

    #[test]
    fn io_errors_convert() {
        let e: CliError = std::io::Error::other("disk full").into();
        assert!(matches!(e, CliError::Io(_)));
        assert!(e.to_string().starts_with("I/O error"));
    }

    #[test]
    fn input_errors_have_no_source() {
        let e = CliError::InvalidInput("rounds must be >= 1".into());
        assert!(e.source().is_none());
        assert_eq!(e.to_string(), "Invalid input: rounds must be >= 1");
    }
}
