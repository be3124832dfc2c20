//! Move sources: anything that can pick a move for the active player.
//!
//! The engine never asks for moves itself. Drivers in `arena` build a
//! `MoveRequest` from the live game, hand it to the side's `MoveSource`, and
//! submit whatever comes back. A source failing (a crashed bot, closed
//! input) is the driver's problem; the engine only ever sees `Move`s.
//!
//! ## Implementations
//!
//! - `RandomSource`: uniform choice from the legal moves
//! - `HumanSource`: line-based prompt on any reader/writer pair
//! - `ProcessSource`: external bot executable speaking JSON over stdio

pub mod human;
pub mod process;
pub mod random;
pub mod wire;

pub use human::HumanSource;
pub use process::ProcessSource;
pub use random::RandomSource;
pub use wire::{BotInput, BotReply};

use crate::core::{BoardState, Color, Move};
use crate::error::SourceError;
use crate::rules::ObligationView;

/// Everything a source sees when asked to move.
#[derive(Clone, Copy, Debug)]
pub struct MoveRequest<'a> {
    /// The position.
    pub board: &'a BoardState,

    /// Legal moves under the current obligation.
    pub legal: &'a [Move],

    /// Who moves, and under which restriction.
    pub obligation: ObligationView,
}

impl MoveRequest<'_> {
    /// The player to move.
    #[must_use]
    pub fn player(&self) -> Color {
        self.obligation.player
    }
}

/// A capability that produces one move for the active player.
pub trait MoveSource {
    /// Display name, used in logs and reports.
    fn name(&self) -> &str;

    /// Choose a move.
    ///
    /// Sources should pick from `request.legal`, but the engine validates
    /// whatever is returned.
    fn choose_move(&mut self, request: &MoveRequest<'_>) -> Result<Move, SourceError>;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&mut self, request: &MoveRequest<'_>) -> Result<Move, SourceError> {
        (**self).choose_move(request)
    }
}
