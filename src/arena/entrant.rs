//! Command-line descriptions of move sources.

use std::path::PathBuf;
use std::str::FromStr;

use crate::core::GameRng;
use crate::sources::{HumanSource, MoveSource, ProcessSource, RandomSource};

use super::config::ArenaConfig;

/// How to build a move source for each game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSpec {
    /// A human at the terminal.
    Human,
    /// Uniform random choice.
    Random,
    /// An external bot executable.
    Process(PathBuf),
}

impl SourceSpec {
    /// Display name used in reports.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            SourceSpec::Human => "human".to_string(),
            SourceSpec::Random => "random".to_string(),
            SourceSpec::Process(path) => path.display().to_string(),
        }
    }

    /// Build a fresh source. Random sources take a fork of `rng`.
    pub fn build(&self, config: &ArenaConfig, rng: &mut GameRng) -> Box<dyn MoveSource> {
        match self {
            SourceSpec::Human => Box::new(HumanSource::stdio(self.name())),
            SourceSpec::Random => Box::new(RandomSource::new(self.name(), rng.fork())),
            SourceSpec::Process(path) => Box::new(ProcessSource::new(path, config.bot_timeout())),
        }
    }
}

impl FromStr for SourceSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "human" => SourceSpec::Human,
            "random" => SourceSpec::Random,
            path => SourceSpec::Process(PathBuf::from(path)),
        })
    }
}

impl std::fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
