//! Move enumeration order used by the search.
//!
//! The search breaks ties between equally good moves in favor of the one
//! enumerated first, so the order fully determines which optimal move is
//! returned. Both orders are fixed for the lifetime of a `Minimax`.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Move, CELLS};
use crate::rules::MoveList;

/// How legal moves are enumerated at every node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOrder {
    /// (0,0), (0,1), ... (2,2).
    #[default]
    RowMajor,
    /// A permutation of the nine cells drawn once from a ChaCha8 stream
    /// seeded with `seed`. Same seed, same permutation.
    Shuffled { seed: u64 },
}

impl MoveOrder {
    /// Cell indices in enumeration order.
    #[must_use]
    pub fn permutation(self) -> [u8; CELLS] {
        let mut order = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        if let MoveOrder::Shuffled { seed } = self {
            order.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        }
        order
    }
}

/// Empty cells of `board`, visited in `permutation` order.
pub(crate) fn ordered_moves(board: &Board, permutation: &[u8; CELLS]) -> MoveList {
    permutation
        .iter()
        .map(|&i| Move::from_index(i))
        .filter(|&mv| board.get(mv) == Some(Cell::Empty))
        .collect()
}
