//! Error types for the layers around the rules engine.
//!
//! The engine itself never errors: illegal and late submissions are answered
//! with `MoveResult` codes. The types here cover untrusted input (shape and
//! color names), position setup, move sources and arena configuration.

use derive_more::{Display, Error, From};

use crate::core::{Color, Shape};

/// An unrecognized shape name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown shape {input:?} (expected circle, plus, wave, square or star)")]
pub struct ParseShapeError {
    /// The rejected text.
    pub input: String,
}

impl ParseShapeError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// An unrecognized color name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown color {input:?} (expected white or black)")]
pub struct ParseColorError {
    /// The rejected text.
    pub input: String,
}

impl ParseColorError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// A constructed position placed a piece off the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{color} {shape} placed off the board at ({x}, {y})")]
pub struct SetupError {
    pub color: Color,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

/// A move source failed to produce a move.
#[derive(Debug, Display, Error, From)]
pub enum SourceError {
    /// The bot executable could not be started.
    #[display("failed to start bot {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Reading from or writing to the source failed.
    #[display("move source I/O failed: {source}")]
    #[from]
    Io { source: std::io::Error },

    /// The bot did not answer within the configured time.
    #[display("bot {program} did not answer within {millis} ms")]
    Timeout { program: String, millis: u64 },

    /// The bot's answer was not a well-formed move.
    #[display("malformed bot reply {output:?}: {source}")]
    Malformed {
        output: String,
        source: serde_json::Error,
    },

    /// The interactive input stream ended.
    #[display("input closed before a move was entered")]
    InputClosed,

    /// The source was asked to move with no legal moves available.
    #[display("no legal moves to choose from")]
    NoLegalMoves,
}

/// Arena configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
