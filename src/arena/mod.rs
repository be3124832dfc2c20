//! Orchestration: driving games between move sources.
//!
//! - `driver`: one game, with forfeit and move-limit policy
//! - `entrant`: parse and build move sources from command-line names
//! - `series`: head-to-head series and round-robin tournaments
//! - `stats`: per-entrant win rates
//! - `config`: limits and seeds, loadable from TOML

pub mod config;
pub mod driver;
pub mod entrant;
pub mod series;
pub mod stats;

pub use config::ArenaConfig;
pub use driver::{play_game, Ending, GameReport};
pub use entrant::SourceSpec;
pub use series::{run_series, run_tournament, SeriesReport, TournamentReport};
pub use stats::{ranked_by, Standing};
