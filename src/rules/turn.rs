//! Turn-order state machine.
//!
//! Turns alternate between a free move and a forced response:
//!
//! 1. The active player makes a free move with shape `S`.
//! 2. The opponent must respond by moving their own `S`.
//! 3. The responder then makes a free move, and the cycle repeats.
//!
//! A free move may not reuse the piece the same player moved last. After
//! every applied move the machine checks for a blockade (a color with no
//! move at all), then runs the skip cascade: while the current obligation
//! has no legal move, a forced response drops its requirement and a stuck
//! free move passes to the opponent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoardState, Color, Move, Shape};

use super::movegen::{can_move, legal_moves};

/// Upper bound on skip-cascade adjustments after a single move.
///
/// Only the requirement and the active player toggle, so a position that
/// passed the blockade check settles within two steps.
pub const MAX_CASCADE_STEPS: usize = 4;

/// Who must move, and whether a particular shape is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnObligation {
    /// The player to move.
    pub player: Color,

    /// `Some` on a forced response, `None` on a free move.
    pub required: Option<Shape>,
}

impl TurnObligation {
    /// A free move for `player`.
    #[must_use]
    pub const fn free(player: Color) -> Self {
        Self {
            player,
            required: None,
        }
    }

    /// A forced response: `player` must move `shape`.
    #[must_use]
    pub const fn forced(player: Color, shape: Shape) -> Self {
        Self {
            player,
            required: Some(shape),
        }
    }

    /// Whether this is a forced response.
    #[must_use]
    pub const fn is_forced(&self) -> bool {
        self.required.is_some()
    }
}

impl std::fmt::Display for TurnObligation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.required {
            Some(shape) => write!(f, "{} must move {}", self.player, shape),
            None => write!(f, "{} moves freely", self.player),
        }
    }
}

/// The obligation as presented to move sources.
///
/// `shape` is the required shape when `responding`, otherwise the shape the
/// player may not move this turn (if any).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationView {
    pub player: Color,
    pub responding: bool,
    pub shape: Option<Shape>,
}

/// What happened to the turn order after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Play continues; `cascade_steps` obligations were skipped.
    Continue { cascade_steps: usize },
    /// `loser` has no move of any kind.
    Blockade { loser: Color },
}

/// The first color, in enumeration order, with no move on a free turn.
#[must_use]
pub fn blockaded_color(board: &BoardState) -> Option<Color> {
    Color::ALL.into_iter().find(|&color| !can_move(board, color))
}

/// Obligation plus double-move guard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    obligation: TurnObligation,
    last_moved: Option<(Color, Shape)>,
}

impl TurnOrder {
    /// White to move freely, nothing guarded.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(TurnObligation::free(Color::White), None)
    }

    /// Resume from an explicit obligation and guard.
    #[must_use]
    pub fn with_state(obligation: TurnObligation, last_moved: Option<(Color, Shape)>) -> Self {
        Self {
            obligation,
            last_moved,
        }
    }

    /// The current obligation.
    #[must_use]
    pub fn obligation(&self) -> TurnObligation {
        self.obligation
    }

    /// The piece that made the most recent move.
    #[must_use]
    pub fn last_moved(&self) -> Option<(Color, Shape)> {
        self.last_moved
    }

    /// The shape the active player may not pick on a free move.
    #[must_use]
    pub fn guarded_shape(&self) -> Option<Shape> {
        match (self.obligation.required, self.last_moved) {
            (None, Some((color, shape))) if color == self.obligation.player => Some(shape),
            _ => None,
        }
    }

    /// Obligation in the shape move sources consume.
    #[must_use]
    pub fn view(&self) -> ObligationView {
        ObligationView {
            player: self.obligation.player,
            responding: self.obligation.is_forced(),
            shape: self.obligation.required.or(self.guarded_shape()),
        }
    }

    /// Legal moves under the current obligation.
    #[must_use]
    pub fn legal_moves(&self, board: &BoardState) -> Vec<Move> {
        legal_moves(board, self.obligation, self.last_moved)
    }

    /// Advance after `mover` successfully moved `shape` without escaping.
    pub(crate) fn advance(&mut self, board: &BoardState, mover: Color, shape: Shape) -> Advance {
        let consumed = self.obligation;
        self.last_moved = Some((mover, shape));
        self.obligation = if consumed.is_forced() {
            TurnObligation::free(mover)
        } else {
            TurnObligation::forced(mover.other(), shape)
        };

        self.settle(board)
    }

    /// Blockade check, then skip cascade.
    pub(crate) fn settle(&mut self, board: &BoardState) -> Advance {
        if let Some(loser) = blockaded_color(board) {
            return Advance::Blockade { loser };
        }

        Advance::Continue {
            cascade_steps: self.cascade(board),
        }
    }

    fn cascade(&mut self, board: &BoardState) -> usize {
        let mut steps = 0;
        while steps < MAX_CASCADE_STEPS && self.legal_moves(board).is_empty() {
            let stuck = self.obligation;
            self.obligation = if stuck.is_forced() {
                TurnObligation::free(stuck.player)
            } else {
                TurnObligation::free(stuck.player.other())
            };
            steps += 1;
            debug!(from = %stuck, to = %self.obligation, step = steps, "Skipped stuck obligation");
        }
        steps
    }
}

impl Default for TurnOrder {
    fn default() -> Self {
        Self::new()
    }
}
