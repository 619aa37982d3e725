//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use super::order::MoveOrder;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Alpha-beta pruning (default: on).
    /// Off runs plain minimax over the whole tree; the result is the same,
    /// only more nodes are visited.
    pub pruning: bool,

    /// Order in which moves are tried at every node.
    /// Decides which of several equally good moves is returned.
    pub move_order: MoveOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            move_order: MoveOrder::RowMajor,
        }
    }
}

impl SearchConfig {
    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Create a new config that searches the full tree without cut-offs.
    pub fn without_pruning(self) -> Self {
        self.with_pruning(false)
    }

    /// Create a new config with a custom move order.
    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }

    /// Create a new config with a seeded shuffled move order.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_move_order(MoveOrder::Shuffled { seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(config.pruning);
        assert_eq!(config.move_order, MoveOrder::RowMajor);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().without_pruning().with_seed(123);

        assert!(!config.pruning);
        assert_eq!(config.move_order, MoveOrder::Shuffled { seed: 123 });
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
