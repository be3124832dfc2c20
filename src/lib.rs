//! # stack-escape
//!
//! Rules engine and match runner for a two-player stacking escape game on a
//! 5×7 grid.
//!
//! Each side has five pieces, one per shape. Pieces step one cell
//! orthogonally and may land on other pieces, forming stacks; a piece with
//! anything above it cannot move. A free move by one player forces the
//! opponent to answer with the piece of the same shape. Getting a piece past
//! the far edge wins; so does leaving the opponent with no move at all.
//!
//! ## Design Principles
//!
//! 1. **The engine never errors**: illegal or late submissions are answered
//!    with a `MoveResult` code and leave the position untouched.
//!
//! 2. **Move selection is external**: the engine answers queries and applies
//!    moves. Humans, random players and bot processes all sit behind the
//!    `MoveSource` trait.
//!
//! 3. **Cheap copies**: the board is a fixed array of ten pieces and the move
//!    log is an `im::Vector`, so snapshots cost next to nothing.
//!
//! ## Modules
//!
//! - `core`: colors, shapes, pieces, board, moves, RNG
//! - `rules`: move generation, turn order, move resolution, move log
//! - `sources`: the `MoveSource` trait and its implementations
//! - `arena`: game driver, series, tournaments, configuration
//! - `error`: error types for the layers around the engine

pub mod arena;
pub mod core;
pub mod error;
pub mod rules;
pub mod sources;

// Re-export commonly used types
pub use crate::core::{
    BoardState, Color, ColorMap, GameRng, Move, MoveRecord, MoveResponse, MoveResult, Piece,
    Shape, HEIGHT, WIDTH,
};

pub use crate::rules::{Game, GameBuilder, MoveLog, ObligationView, TurnObligation, WinReason};

pub use crate::sources::{HumanSource, MoveRequest, MoveSource, ProcessSource, RandomSource};

pub use crate::arena::{
    play_game, run_series, run_tournament, ArenaConfig, Ending, GameReport, SourceSpec, Standing,
};

pub use crate::error::{ConfigError, ParseColorError, ParseShapeError, SetupError, SourceError};
