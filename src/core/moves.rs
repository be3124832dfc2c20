//! Move requests and their outcomes.
//!
//! A `Move` names a piece by (color, shape) and the cell it should land on.
//! The engine answers every submission with a `MoveResponse`: one of five
//! result codes plus a human-readable explanation.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::shape::Shape;

/// A request to move one piece to an orthogonally adjacent cell.
///
/// ```
/// use stack_escape::core::{Color, Move, Shape};
///
/// let mv = Move::new(Color::White, Shape::Circle, 0, 1);
/// assert_eq!(mv.target(), (0, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Color,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(player: Color, shape: Shape, x: i8, y: i8) -> Self {
        Self { player, shape, x, y }
    }

    /// The destination cell.
    #[must_use]
    pub const fn target(&self) -> (i8, i8) {
        (self.x, self.y)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> ({}, {})", self.player, self.shape, self.x, self.y)
    }
}

/// Result code of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveResult {
    /// The move was not legal; nothing changed.
    MoveFailure,
    /// The move was applied and the game continues.
    MoveSuccess,
    WinWhite,
    WinBlack,
    /// The game was already decided; nothing changed.
    AlreadyOver,
}

impl MoveResult {
    /// The win code for `color`.
    #[must_use]
    pub const fn win(color: Color) -> Self {
        match color {
            Color::White => MoveResult::WinWhite,
            Color::Black => MoveResult::WinBlack,
        }
    }

    /// The winner, if this is a win code.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            MoveResult::WinWhite => Some(Color::White),
            MoveResult::WinBlack => Some(Color::Black),
            _ => None,
        }
    }

    /// Whether the game is over after this result.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MoveResult::MoveFailure | MoveResult::MoveSuccess)
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            MoveResult::MoveFailure => "move_failure",
            MoveResult::MoveSuccess => "move_success",
            MoveResult::WinWhite => "win_white",
            MoveResult::WinBlack => "win_black",
            MoveResult::AlreadyOver => "already_over",
        };
        f.write_str(code)
    }
}

/// Result code plus explanation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub result: MoveResult,
    pub message: String,
}

impl MoveResponse {
    /// Create a response.
    #[must_use]
    pub fn new(result: MoveResult, message: impl Into<String>) -> Self {
        Self {
            result,
            message: message.into(),
        }
    }
}

/// A submitted move and how the engine answered it.
///
/// Used for:
/// - Replay/debugging
/// - Post-game inspection by arena drivers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position in the log (starts at 0).
    pub sequence: u32,

    /// The move as submitted.
    pub mv: Move,

    /// The engine's answer.
    pub response: MoveResponse,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(sequence: u32, mv: Move, response: MoveResponse) -> Self {
        Self {
            sequence,
            mv,
            response,
        }
    }
}
