//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
///
/// Reset at the start of every search; never consulted by the search itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,

    /// Terminal positions scored.
    pub leaves: u64,

    /// Alpha and beta cut-offs taken.
    pub cutoffs: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Interior (non-terminal) positions visited.
    #[must_use]
    pub fn interior_nodes(&self) -> u64 {
        self.nodes - self.leaves
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of interior nodes whose remaining moves were cut off.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        let interior = self.interior_nodes();
        if interior == 0 {
            0.0
        } else {
            self.cutoffs as f64 / interior as f64
        }
    }
}
