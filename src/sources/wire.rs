//! JSON documents exchanged with bot executables.
//!
//! A bot receives one `BotInput` on stdin per move:
//!
//! ```json
//! {
//!   "board": {"white": {"circle": {"x": 0, "y": 0, "height": 1}, ...}, "black": {...}},
//!   "player": "white",
//!   "valid": {"circle": [{"x": 1, "y": 0}, {"x": 0, "y": 1}], "plus": [], ...},
//!   "responding": false,
//!   "prev": null
//! }
//! ```
//!
//! and answers with a `BotReply` on stdout: `{"shape": "wave", "x": 2, "y": 1}`.
//! `prev` is the shape the bot must move when `responding`, otherwise the
//! shape it may not move (or null).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{BoardState, Color, Move, Shape};

use super::MoveRequest;

/// One piece's placement on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceJson {
    pub x: i8,
    pub y: i8,
    pub height: u8,
}

/// A destination cell on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellJson {
    pub x: i8,
    pub y: i8,
}

/// Board keyed by color, then shape.
pub type BoardJson = BTreeMap<Color, BTreeMap<Shape, PieceJson>>;

/// Legal destinations keyed by shape. Every shape is present.
pub type MovesJson = BTreeMap<Shape, Vec<CellJson>>;

/// Encode the board.
#[must_use]
pub fn board_json(board: &BoardState) -> BoardJson {
    let mut out = BoardJson::new();
    for piece in board.iter() {
        out.entry(piece.color).or_default().insert(
            piece.shape,
            PieceJson {
                x: piece.x,
                y: piece.y,
                height: piece.height,
            },
        );
    }
    out
}

/// Group legal moves by shape.
#[must_use]
pub fn moves_json(legal: &[Move]) -> MovesJson {
    let mut out: MovesJson = Shape::ALL.into_iter().map(|s| (s, Vec::new())).collect();
    for mv in legal {
        out.entry(mv.shape)
            .or_default()
            .push(CellJson { x: mv.x, y: mv.y });
    }
    out
}

/// Request document written to a bot's stdin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInput {
    pub board: BoardJson,
    pub player: Color,
    pub valid: MovesJson,
    pub responding: bool,
    pub prev: Option<Shape>,
}

impl BotInput {
    /// Build the document for a request.
    #[must_use]
    pub fn from_request(request: &MoveRequest<'_>) -> Self {
        Self {
            board: board_json(request.board),
            player: request.player(),
            valid: moves_json(request.legal),
            responding: request.obligation.responding,
            prev: request.obligation.shape,
        }
    }
}

/// Reply document read from a bot's stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl BotReply {
    /// The move this reply names for `player`.
    #[must_use]
    pub fn into_move(self, player: Color) -> Move {
        Move::new(player, self.shape, self.x, self.y)
    }
}
