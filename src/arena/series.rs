//! Head-to-head series and round-robin tournaments.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::info;

use crate::core::{Color, GameRng};

use super::config::ArenaConfig;
use super::driver::play_game;
use super::entrant::SourceSpec;
use super::stats::{ranked_by, Standing};

/// Results of a two-entrant series.
#[derive(Clone, Debug, Serialize)]
pub struct SeriesReport {
    /// Records for the first and second entrant.
    pub standings: [Standing; 2],

    /// Games that ended without a winner.
    pub undecided: u32,
}

/// Play `games` games with `a` as white, then `games` with `b` as white.
pub fn run_series(a: &SourceSpec, b: &SourceSpec, games: usize, config: &ArenaConfig) -> SeriesReport {
    let mut rng = GameRng::new(config.seed);
    let mut standings = [Standing::new(a.name()), Standing::new(b.name())];
    let mut undecided = 0;

    for (white_idx, black_idx) in [(0, 1), (1, 0)] {
        let specs = [a, b];
        for _ in 0..games {
            let mut white = specs[white_idx].build(config, &mut rng);
            let mut black = specs[black_idx].build(config, &mut rng);
            let winner = play_game(white.as_mut(), black.as_mut(), config).winner();

            standings[white_idx].record(Color::White, winner);
            standings[black_idx].record(Color::Black, winner);
            if winner.is_none() {
                undecided += 1;
            }
        }
    }

    info!(
        a = %standings[0].name,
        a_wins = standings[0].wins(),
        b = %standings[1].name,
        b_wins = standings[1].wins(),
        undecided,
        "Series finished"
    );
    SeriesReport { standings, undecided }
}

/// Results of a round robin.
#[derive(Clone, Debug)]
pub struct TournamentReport {
    /// One record per entrant, in entry order.
    pub standings: Vec<Standing>,

    results: FxHashMap<(usize, usize), Option<Color>>,
}

impl TournamentReport {
    /// Winner of the game with entrant `white` against entrant `black`.
    ///
    /// `None` when the pairing was not played; `Some(None)` when it ended
    /// undecided.
    #[must_use]
    pub fn result(&self, white: usize, black: usize) -> Option<Option<Color>> {
        self.results.get(&(white, black)).copied()
    }

    /// Number of games played.
    #[must_use]
    pub fn games(&self) -> usize {
        self.results.len()
    }

    /// Entrants by overall win rate, best first.
    #[must_use]
    pub fn rankings(&self) -> Vec<&Standing> {
        ranked_by(&self.standings, Standing::overall_rate)
    }

    /// Entrants by win rate as white, best first.
    #[must_use]
    pub fn white_rankings(&self) -> Vec<&Standing> {
        ranked_by(&self.standings, Standing::white_rate)
    }

    /// Entrants by win rate as black, best first.
    #[must_use]
    pub fn black_rankings(&self) -> Vec<&Standing> {
        ranked_by(&self.standings, Standing::black_rate)
    }
}

/// Every ordered pair of distinct entrants plays one game.
pub fn run_tournament(entrants: &[SourceSpec], config: &ArenaConfig) -> TournamentReport {
    let mut rng = GameRng::new(config.seed);
    let mut standings: Vec<Standing> = entrants.iter().map(|e| Standing::new(e.name())).collect();
    let mut results = FxHashMap::default();

    for (i, white_spec) in entrants.iter().enumerate() {
        for (j, black_spec) in entrants.iter().enumerate() {
            if i == j {
                continue;
            }
            let mut white = white_spec.build(config, &mut rng);
            let mut black = black_spec.build(config, &mut rng);
            let winner = play_game(white.as_mut(), black.as_mut(), config).winner();

            standings[i].record(Color::White, winner);
            standings[j].record(Color::Black, winner);
            results.insert((i, j), winner);
        }
    }

    info!(entrants = entrants.len(), games = results.len(), "Tournament finished");
    TournamentReport { standings, results }
}
