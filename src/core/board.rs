//! Board state: ten pieces, five per color.
//!
//! ## Layout
//!
//! `(0, 0)` is the lower-left corner from white's side. On-board cells have
//! `x` in `[0, 4]` and `y` in `[0, 6]`. White starts on row 0 with shapes in
//! enumeration order at `x = 0..4`; black starts on row 6 mirrored, so its
//! circle sits at `x = 4`.
//!
//! ## Ownership
//!
//! The board owns every `Piece`. Queries hand out shared references or
//! copies; only the rules module relocates pieces.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{Color, ColorMap};
use super::piece::Piece;
use super::shape::Shape;

/// Number of columns.
pub const WIDTH: i8 = 5;

/// Number of rows.
pub const HEIGHT: i8 = 7;

/// Whether `(x, y)` is a cell of the board.
#[must_use]
pub fn on_board(x: i8, y: i8) -> bool {
    (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y)
}

/// Pieces sharing one cell. Stacks rarely exceed a few pieces.
pub type Stack = SmallVec<[Piece; 4]>;

/// Positions of all ten pieces.
///
/// The 2x5 structure is fixed by the type: one slot per color and shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pieces: ColorMap<[Piece; 5]>,
}

impl BoardState {
    /// The fixed starting layout.
    #[must_use]
    pub fn starting() -> Self {
        let pieces = ColorMap::new(|color| {
            Shape::ALL.map(|shape| {
                let column = shape.index() as i8;
                let x = match color {
                    Color::White => column,
                    Color::Black => WIDTH - 1 - column,
                };
                Piece::new(color, shape, x, color.home_row())
            })
        });

        Self { pieces }
    }

    /// Get a piece by its identity.
    #[must_use]
    pub fn piece(&self, color: Color, shape: Shape) -> &Piece {
        &self.pieces[color][shape.index()]
    }

    /// Iterate over all pieces, white first, each color in shape order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flat_map(|(_, row)| row.iter())
    }

    /// Copy of every piece.
    #[must_use]
    pub fn all_pieces(&self) -> Vec<Piece> {
        self.iter().copied().collect()
    }

    /// Pieces of both colors occupying `(x, y)`.
    #[must_use]
    pub fn pieces_at(&self, x: i8, y: i8) -> Stack {
        self.iter().filter(|p| p.position() == (x, y)).copied().collect()
    }

    /// Number of pieces occupying `(x, y)`.
    #[must_use]
    pub fn count_at(&self, x: i8, y: i8) -> usize {
        self.iter().filter(|p| p.position() == (x, y)).count()
    }

    /// Whether another piece on the same cell sits strictly higher.
    #[must_use]
    pub fn is_covered(&self, piece: &Piece) -> bool {
        self.iter()
            .any(|other| other.shares_cell(piece) && other.height > piece.height)
    }

    /// The highest piece on `(x, y)`, if any.
    ///
    /// Equal heights can occur because heights are fixed at arrival; the
    /// first piece in enumeration order wins such a tie.
    #[must_use]
    pub fn top_piece(&self, x: i8, y: i8) -> Option<Piece> {
        self.iter()
            .filter(|p| p.position() == (x, y))
            .fold(None, |best: Option<&Piece>, p| match best {
                Some(b) if b.height >= p.height => Some(b),
                _ => Some(p),
            })
            .copied()
    }

    /// Move a piece and recompute its height from the new occupancy.
    ///
    /// Only the moved piece's height changes. Returns the new height.
    pub(crate) fn relocate(&mut self, color: Color, shape: Shape, x: i8, y: i8) -> u8 {
        let slot = &mut self.pieces[color][shape.index()];
        slot.x = x;
        slot.y = y;

        let height = self.count_at(x, y) as u8;
        self.pieces[color][shape.index()].height = height;
        height
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::starting()
    }
}
