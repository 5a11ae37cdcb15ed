//! Input parsing for the interactive `play` loop.

/// What the player typed at the turn prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    Hit,
    Stand,
    Quit,
    /// Unrecognized input with a message to show before asking again
    Invalid(String),
}

/// Parse a turn command (case-insensitive): `h`/`hit`, `s`/`stand`, `q`/`quit`.
///
/// ```rust
/// # use bjlite_cli::validation::{parse_turn_input, TurnInput};
/// assert_eq!(parse_turn_input("H"), TurnInput::Hit);
/// assert_eq!(parse_turn_input(" stand "), TurnInput::Stand);
/// assert!(matches!(parse_turn_input("double"), TurnInput::Invalid(_)));
/// ```
pub fn parse_turn_input(input: &str) -> TurnInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => TurnInput::Invalid("Empty input. Please enter 'H' or 'S'".to_string()),
        "h" | "hit" => TurnInput::Hit,
        "s" | "stand" => TurnInput::Stand,
        "q" | "quit" => TurnInput::Quit,
        other => TurnInput::Invalid(format!(
            "Unrecognized action '{}'. Please enter 'H' or 'S' (or 'Q' to quit)",
            other
        )),
    }
}

/// Answer to "Play another round?". Anything other than yes ends the session.
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
