//! Legal move generation.
//!
//! Every piece moves one step orthogonally. A piece may land on any cell
//! regardless of what is stacked there; what stops a piece from moving is
//! another piece sitting higher on its own cell. Each color may also step
//! one row past its far edge, which is an escape.
//!
//! Output order is deterministic: candidate pieces in shape order, then the
//! four directions in `DIRECTIONS` order.

use smallvec::SmallVec;

use crate::core::{BoardState, Color, Move, Piece, Shape, WIDTH};

use super::turn::TurnObligation;

/// Unit steps, in enumeration order.
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rows a piece of `color` may land on, including its escape row.
#[must_use]
pub fn target_rows(color: Color) -> std::ops::RangeInclusive<i8> {
    let (home, escape) = (color.home_row(), color.escape_row());
    home.min(escape)..=home.max(escape)
}

/// In-range destinations for a piece, ignoring coverage and turn order.
#[must_use]
pub fn destinations(piece: &Piece) -> SmallVec<[(i8, i8); 4]> {
    let rows = target_rows(piece.color);
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| (piece.x + dx, piece.y + dy))
        .filter(|&(x, y)| (0..WIDTH).contains(&x) && rows.contains(&y))
        .collect()
}

/// Legal moves under `obligation`.
///
/// `guard` is the piece that made the most recent move. On a free move the
/// active player may not move that piece again; a forced response ignores
/// the guard.
#[must_use]
pub fn legal_moves(
    board: &BoardState,
    obligation: TurnObligation,
    guard: Option<(Color, Shape)>,
) -> Vec<Move> {
    let player = obligation.player;
    let candidates: SmallVec<[Shape; 5]> = match obligation.required {
        Some(shape) => SmallVec::from_slice(&[shape]),
        None => SmallVec::from_slice(&Shape::ALL),
    };

    let mut moves = Vec::new();
    for shape in candidates {
        if obligation.required.is_none() && guard == Some((player, shape)) {
            continue;
        }

        let piece = board.piece(player, shape);
        if board.is_covered(piece) {
            continue;
        }

        moves.extend(
            destinations(piece)
                .into_iter()
                .map(|(x, y)| Move::new(player, shape, x, y)),
        );
    }
    moves
}

/// Whether `color` has any move at all on a free turn with no guard.
#[must_use]
pub fn can_move(board: &BoardState, color: Color) -> bool {
    !legal_moves(board, TurnObligation::free(color), None).is_empty()
}
