//! Win/loss bookkeeping for series and tournaments.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// One entrant's record, split by the color it played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Entrant name.
    pub name: String,

    /// Games played as white.
    pub white_games: u32,

    /// Games won as white.
    pub white_wins: u32,

    /// Games played as black.
    pub black_games: u32,

    /// Games won as black.
    pub black_wins: u32,
}

fn rate(wins: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(games)
    }
}

impl Standing {
    /// An empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Count a finished game played as `color`.
    pub fn record(&mut self, color: Color, winner: Option<Color>) {
        let won = winner == Some(color);
        match color {
            Color::White => {
                self.white_games += 1;
                self.white_wins += u32::from(won);
            }
            Color::Black => {
                self.black_games += 1;
                self.black_wins += u32::from(won);
            }
        }
    }

    /// Total games played.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.white_games + self.black_games
    }

    /// Total games won.
    #[must_use]
    pub fn wins(&self) -> u32 {
        self.white_wins + self.black_wins
    }

    /// Win rate when moving first.
    #[must_use]
    pub fn white_rate(&self) -> f64 {
        rate(self.white_wins, self.white_games)
    }

    /// Win rate when moving second.
    #[must_use]
    pub fn black_rate(&self) -> f64 {
        rate(self.black_wins, self.black_games)
    }

    /// Win rate over all games.
    #[must_use]
    pub fn overall_rate(&self) -> f64 {
        rate(self.wins(), self.games())
    }
}

/// Standings sorted by `key`, best first. Ties keep entry order.
#[must_use]
pub fn ranked_by(standings: &[Standing], key: impl Fn(&Standing) -> f64) -> Vec<&Standing> {
    let mut ranked: Vec<&Standing> = standings.iter().collect();
    ranked.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
