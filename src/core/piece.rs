//! A single piece and its placement.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::shape::Shape;

/// A piece on the board.
///
/// `height` is the number of pieces that shared the piece's cell at the
/// moment it arrived there (itself included). It is never updated when
/// other pieces later land on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub height: u8,
}

impl Piece {
    /// Create an unstacked piece.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, x: i8, y: i8) -> Self {
        Self {
            color,
            shape,
            x,
            y,
            height: 1,
        }
    }

    /// The piece's cell.
    #[must_use]
    pub const fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Whether this piece shares a cell with `other`.
    #[must_use]
    pub fn shares_cell(&self, other: &Piece) -> bool {
        self.position() == other.position()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} at ({}, {}) height {}",
            self.color, self.shape, self.x, self.y, self.height
        )
    }
}
