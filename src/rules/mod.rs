//! Rules: move generation, turn order, move resolution, move log.
//!
//! `Game` is the entry point. The free functions in `movegen` and the
//! `TurnOrder` machine are public so bots and tests can reason about
//! hypothetical positions without a `Game`.

pub mod builder;
pub mod game;
pub mod log;
pub mod movegen;
pub mod turn;

pub use builder::GameBuilder;
pub use game::{Game, WinReason};
pub use log::MoveLog;
pub use movegen::{can_move, destinations, legal_moves, DIRECTIONS};
pub use turn::{
    blockaded_color, Advance, ObligationView, TurnObligation, TurnOrder, MAX_CASCADE_STEPS,
};
