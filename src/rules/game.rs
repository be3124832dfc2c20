//! The game: board, turn order, winner and move log behind one API.
//!
//! Callers ask for `legal_moves`, pick one (externally), and `submit` it.
//! `submit` validates against the generator, moves the piece, detects an
//! escape or a blockade, advances the turn order and logs the outcome.
//! Once a winner is set the board never changes again.
//!
//! The game is a single-writer state machine. Sharing one across threads
//! requires the owner to serialize every `submit`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{on_board, BoardState, Color, Move, MoveResponse, MoveResult, Shape};

use super::log::MoveLog;
use super::turn::{Advance, ObligationView, TurnObligation, TurnOrder};

/// How a game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The winner moved a piece past the far edge.
    Escape,
    /// The loser had no move of any kind.
    Blockade,
}

/// A single game.
#[derive(Clone, Debug)]
pub struct Game {
    board: BoardState,
    turn: TurnOrder,
    winner: Option<Color>,
    win_reason: Option<WinReason>,
    log: MoveLog,
    cascade_steps: usize,
}

impl Game {
    /// A new game from the starting layout, white to move freely.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(BoardState::starting(), TurnOrder::new())
    }

    /// A game from an arbitrary position. The position is settled the way a
    /// move would leave it: blockades are decided and stuck obligations
    /// skipped.
    pub(crate) fn from_parts(board: BoardState, turn: TurnOrder) -> Self {
        let mut game = Self {
            board,
            turn,
            winner: None,
            win_reason: None,
            log: MoveLog::new(),
            cascade_steps: 0,
        };

        match game.turn.settle(&game.board) {
            Advance::Blockade { loser } => game.decide(loser.other(), WinReason::Blockade),
            Advance::Continue { cascade_steps } => game.cascade_steps = cascade_steps,
        }
        game
    }

    // === Queries ===

    /// The current obligation.
    #[must_use]
    pub fn obligation(&self) -> TurnObligation {
        self.turn.obligation()
    }

    /// Active player, whether responding, and the required or guarded shape.
    #[must_use]
    pub fn current_obligation(&self) -> ObligationView {
        self.turn.view()
    }

    /// The piece that made the most recent move.
    #[must_use]
    pub fn last_moved(&self) -> Option<(Color, Shape)> {
        self.turn.last_moved()
    }

    /// Legal moves under the current obligation. Empty once decided.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.turn.legal_moves(&self.board)
    }

    /// Borrow the live board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Independent copy of the board.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardState {
        self.board.clone()
    }

    /// The winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// How the game was decided.
    #[must_use]
    pub fn win_reason(&self) -> Option<WinReason> {
        self.win_reason
    }

    /// Whether the game is decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every submission so far.
    #[must_use]
    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    /// Obligations skipped after the most recent applied move.
    #[must_use]
    pub fn cascade_steps(&self) -> usize {
        self.cascade_steps
    }

    // === Submission ===

    /// Submit a move. Every call is logged.
    pub fn submit(&mut self, mv: Move) -> MoveResponse {
        let response = self.resolve(mv);
        debug!(%mv, result = %response.result, "Move submitted");
        self.log.push(mv, response.clone());
        response
    }

    fn resolve(&mut self, mv: Move) -> MoveResponse {
        if let Some(winner) = self.winner {
            return MoveResponse::new(
                MoveResult::AlreadyOver,
                format!("Game has already finished! Team {winner} won"),
            );
        }

        if !self.turn.legal_moves(&self.board).contains(&mv) {
            return MoveResponse::new(MoveResult::MoveFailure, "not a valid move!");
        }

        let height = self.board.relocate(mv.player, mv.shape, mv.x, mv.y);
        debug!(%mv, height, "Piece moved");

        if !on_board(mv.x, mv.y) {
            self.decide(mv.player, WinReason::Escape);
            info!(winner = %mv.player, "Piece escaped");
            return MoveResponse::new(
                MoveResult::win(mv.player),
                format!("team {} has won by moving a piece off the board!", mv.player),
            );
        }

        match self.turn.advance(&self.board, mv.player, mv.shape) {
            Advance::Blockade { loser } => {
                let winner = loser.other();
                self.decide(winner, WinReason::Blockade);
                info!(%winner, %loser, "Blockade");
                MoveResponse::new(
                    MoveResult::win(winner),
                    format!("Team {winner} has won by blocking the other team from moving!"),
                )
            }
            Advance::Continue { cascade_steps } => {
                self.cascade_steps = cascade_steps;
                MoveResponse::new(MoveResult::MoveSuccess, "")
            }
        }
    }

    fn decide(&mut self, winner: Color, reason: WinReason) {
        self.winner = Some(winner);
        self.win_reason = Some(reason);
        self.cascade_steps = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
