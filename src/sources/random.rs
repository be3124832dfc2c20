//! Uniform random move source.

use tracing::debug;

use crate::core::{GameRng, Move};
use crate::error::SourceError;

use super::{MoveRequest, MoveSource};

/// Selects uniformly from the legal moves.
#[derive(Clone, Debug)]
pub struct RandomSource {
    name: String,
    rng: GameRng,
}

impl RandomSource {
    /// Create a random source with its own seeded stream.
    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Create a random source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new("random", GameRng::new(seed))
    }
}

impl MoveSource for RandomSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, request: &MoveRequest<'_>) -> Result<Move, SourceError> {
        let mv = self
            .rng
            .choose(request.legal)
            .copied()
            .ok_or(SourceError::NoLegalMoves)?;
        debug!(source = %self.name, %mv, "Random move chosen");
        Ok(mv)
    }
}
