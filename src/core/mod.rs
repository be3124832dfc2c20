//! Core data model: colors, shapes, pieces, the board, moves, RNG.
//!
//! Nothing in this module knows the movement or turn rules; those live in
//! `rules`.

pub mod board;
pub mod color;
pub mod moves;
pub mod piece;
pub mod rng;
pub mod shape;

pub use board::{on_board, BoardState, Stack, HEIGHT, WIDTH};
pub use color::{Color, ColorMap};
pub use moves::{Move, MoveRecord, MoveResponse, MoveResult};
pub use piece::Piece;
pub use rng::GameRng;
pub use shape::Shape;
