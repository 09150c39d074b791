//! Error codes for the scorekeeper crate.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in structured failures handed back to callers.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in `ProblemDetails::code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Frame and roll validation
    /// Frame sequence is not exactly frames 1..=10
    MalformedFrameSequence,
    /// Roll symbol outside the roll alphabet
    IllegalRollValue,
    /// Rolls in a frame contradict each other
    InconsistentRollState,

    // Game setup
    /// Fewer players than a game needs
    NotEnoughPlayers,
    /// Same player listed twice
    DuplicatePlayer,
    /// Blank player name
    InvalidPlayerName,
    /// General validation error
    ValidationError,
    /// Input could not be decoded
    InvalidInput,

    // Resource Not Found
    /// Player not part of the game
    PlayerNotFound,
    /// Frame number outside 1..=10
    FrameNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedFrameSequence => "MALFORMED_FRAME_SEQUENCE",
            Self::IllegalRollValue => "ILLEGAL_ROLL_VALUE",
            Self::InconsistentRollState => "INCONSISTENT_ROLL_STATE",

            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidInput => "INVALID_INPUT",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::FrameNotFound => "FRAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
