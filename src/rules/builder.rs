//! Builder for games that start from a constructed position.
//!
//! Pieces are placed one at a time onto the starting layout. A placed piece
//! gets its height exactly as a move would assign it: the number of pieces
//! on the cell once it arrives. Placement order therefore decides stacking.
//!
//! ```
//! use stack_escape::core::{Color, Shape};
//! use stack_escape::rules::{GameBuilder, TurnObligation};
//!
//! let game = GameBuilder::new()
//!     .place(Color::White, Shape::Wave, 2, 3)
//!     .place(Color::Black, Shape::Wave, 2, 3)
//!     .obligation(TurnObligation::free(Color::White))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.board().piece(Color::Black, Shape::Wave).height, 2);
//! ```

use tracing::debug;

use crate::core::{on_board, BoardState, Color, Shape};
use crate::error::SetupError;

use super::game::Game;
use super::turn::{TurnObligation, TurnOrder};

/// Builder for a `Game` from a constructed position.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    placements: Vec<(Color, Shape, i8, i8)>,
    obligation: TurnObligation,
    last_moved: Option<(Color, Shape)>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
            obligation: TurnObligation::free(Color::White),
            last_moved: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a piece to `(x, y)`, after any earlier placements.
    #[must_use]
    pub fn place(mut self, color: Color, shape: Shape, x: i8, y: i8) -> Self {
        self.placements.push((color, shape, x, y));
        self
    }

    /// Set the obligation the game starts with.
    #[must_use]
    pub fn obligation(mut self, obligation: TurnObligation) -> Self {
        self.obligation = obligation;
        self
    }

    /// Set the piece considered to have moved last.
    #[must_use]
    pub fn last_moved(mut self, color: Color, shape: Shape) -> Self {
        self.last_moved = Some((color, shape));
        self
    }

    /// Build the game.
    ///
    /// The position is settled before it is returned, so a blockaded
    /// position comes back already decided.
    pub fn build(self) -> Result<Game, SetupError> {
        let mut board = BoardState::starting();
        for (color, shape, x, y) in self.placements {
            if !on_board(x, y) {
                return Err(SetupError { color, shape, x, y });
            }
            let height = board.relocate(color, shape, x, y);
            debug!(%color, %shape, x, y, height, "Placed piece");
        }

        Ok(Game::from_parts(
            board,
            TurnOrder::with_state(self.obligation, self.last_moved),
        ))
    }
}
