//! Append-only record of submissions.
//!
//! The log is never consulted for rules decisions. It is backed by
//! `im::Vector` so arena drivers can take O(1) copies mid-game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveRecord, MoveResponse, MoveResult};

/// Every submitted move with the engine's answer, in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vector<MoveRecord>,
}

impl MoveLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission.
    pub(crate) fn push(&mut self, mv: Move, response: MoveResponse) {
        let sequence = self.records.len() as u32;
        self.records.push_back(MoveRecord::new(sequence, mv, response));
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was submitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Records whose move was applied (successes and wins).
    pub fn applied(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter().filter(|r| {
            !matches!(
                r.response.result,
                MoveResult::MoveFailure | MoveResult::AlreadyOver
            )
        })
    }
}
