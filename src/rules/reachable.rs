//! Enumeration of every position reachable under legal play.

use rustc_hash::FxHashSet;

use crate::core::Board;

use super::state::{apply_move, initial_board, is_terminal, legal_moves};

/// Number of distinct boards reachable from the empty board, terminal
/// positions included.
pub const REACHABLE_COUNT: usize = 5478;

/// Every board reachable from `initial_board()` by legal alternating play
/// that stops as soon as a position is terminal.
#[must_use]
pub fn reachable_boards() -> FxHashSet<Board> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![initial_board()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board) {
            continue;
        }
        for mv in legal_moves(&board) {
            if let Ok(child) = apply_move(&board, mv) {
                stack.push(child);
            }
        }
    }

    seen
}
