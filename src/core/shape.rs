//! Piece shapes.
//!
//! A shape is the permanent name of a piece within its color. Shapes carry
//! no movement behavior; every piece moves the same way.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseShapeError;

/// One of the five piece identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Plus,
    Wave,
    Square,
    Star,
}

impl Shape {
    /// All shapes in enumeration order. Starting columns follow this order.
    pub const ALL: [Shape; 5] = [Shape::Circle, Shape::Plus, Shape::Wave, Shape::Square, Shape::Star];

    /// Position in `Shape::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Shape::Circle => 0,
            Shape::Plus => 1,
            Shape::Wave => 2,
            Shape::Square => 3,
            Shape::Star => 4,
        }
    }

    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Plus => "plus",
            Shape::Wave => "wave",
            Shape::Square => "square",
            Shape::Star => "star",
        }
    }

    /// Display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Shape::Circle => 'o',
            Shape::Plus => '+',
            Shape::Wave => '~',
            Shape::Square => '▣',
            Shape::Star => '*',
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == wanted)
            .ok_or_else(|| ParseShapeError::new(s))
    }
}
