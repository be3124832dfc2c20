//! Single-game driver.
//!
//! The driver owns the loop the engine deliberately leaves out: ask the
//! active side's source for a move, submit it, repeat. Forfeits and the
//! move limit are orchestration policy; the engine knows nothing of them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Color, ColorMap, MoveResult};
use crate::rules::{Game, MoveLog, WinReason};
use crate::sources::{MoveRequest, MoveSource};

use super::config::ArenaConfig;

/// How a driven game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The winner moved a piece off the far edge.
    Escape(Color),
    /// The winner left the loser without moves.
    Blockade(Color),
    /// A side's source failed or kept submitting illegal moves.
    Forfeit { loser: Color, reason: String },
    /// The submission limit was reached.
    MoveLimit,
}

impl Ending {
    /// The winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            Ending::Escape(color) | Ending::Blockade(color) => Some(*color),
            Ending::Forfeit { loser, .. } => Some(loser.other()),
            Ending::MoveLimit => None,
        }
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ending::Escape(color) => write!(f, "{color} escaped"),
            Ending::Blockade(color) => write!(f, "{color} blockaded {}", color.other()),
            Ending::Forfeit { loser, reason } => write!(f, "{loser} forfeited: {reason}"),
            Ending::MoveLimit => write!(f, "move limit reached"),
        }
    }
}

/// Outcome of one driven game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameReport {
    /// Name of the white source.
    pub white: String,

    /// Name of the black source.
    pub black: String,

    /// How the game ended.
    pub ending: Ending,

    /// Submissions made, legal or not.
    pub submissions: usize,

    /// The engine's log of every submission.
    pub log: MoveLog,
}

impl GameReport {
    /// The winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.ending.winner()
    }
}

/// Play one game between two sources.
pub fn play_game(
    white: &mut dyn MoveSource,
    black: &mut dyn MoveSource,
    config: &ArenaConfig,
) -> GameReport {
    let mut game = Game::new();
    let mut invalid_streak: ColorMap<usize> = ColorMap::default();
    let mut submissions = 0;

    let ending = loop {
        if let Some(winner) = game.winner() {
            break match game.win_reason() {
                Some(WinReason::Blockade) => Ending::Blockade(winner),
                _ => Ending::Escape(winner),
            };
        }
        if submissions >= config.max_moves {
            break Ending::MoveLimit;
        }

        let legal = game.legal_moves();
        let obligation = game.current_obligation();
        let player = obligation.player;
        let request = MoveRequest {
            board: game.board(),
            legal: &legal,
            obligation,
        };

        let source: &mut dyn MoveSource = match player {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let mv = match source.choose_move(&request) {
            Ok(mv) => mv,
            Err(e) => {
                warn!(%player, source = source.name(), error = %e, "Move source failed; forfeiting");
                break Ending::Forfeit {
                    loser: player,
                    reason: e.to_string(),
                };
            }
        };

        let response = game.submit(mv);
        submissions += 1;

        if response.result == MoveResult::MoveFailure {
            invalid_streak[player] += 1;
            debug!(%player, %mv, streak = invalid_streak[player], "Illegal move submitted");
            if invalid_streak[player] >= config.max_invalid_moves {
                warn!(%player, source = source.name(), "Too many invalid moves; forfeiting");
                break Ending::Forfeit {
                    loser: player,
                    reason: format!("{} consecutive invalid moves", invalid_streak[player]),
                };
            }
        } else {
            invalid_streak[player] = 0;
        }
    };

    let report = GameReport {
        white: white.name().to_string(),
        black: black.name().to_string(),
        ending,
        submissions,
        log: game.move_log().clone(),
    };
    info!(
        white = %report.white,
        black = %report.black,
        ending = %report.ending,
        submissions,
        "Game finished"
    );
    report
}
