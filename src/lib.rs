//! # ttt-solver
//!
//! Optimal play for 3x3 tic-tac-toe by exhaustive minimax search with
//! alpha-beta pruning.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: A `Board` is a `Copy` value. Applying a move
//!    returns a new board; the search never needs undo bookkeeping.
//!
//! 2. **Derived State**: Whose turn it is and whether the game is over are
//!    computed from the board, never stored beside it.
//!
//! 3. **Deterministic Search**: Moves are enumerated in a fixed order, so
//!    the same board and configuration always give the same move.
//!
//! ## Modules
//!
//! - `core`: Players, cells, moves, boards, errors
//! - `rules`: Turn order, legal moves, move application, win detection,
//!   scoring
//! - `search`: Minimax with alpha-beta pruning
//!
//! ## Example
//!
//! ```
//! use ttt_solver::{apply_move, best_move, initial_board, is_terminal, outcome, Outcome};
//!
//! let mut board = initial_board();
//! while let Some(mv) = best_move(&board) {
//!     board = apply_move(&board, mv).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(outcome(&board), Outcome::Draw);
//! ```

pub mod core;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, InvalidMoveError, Move, ParseBoardError, Player};

pub use crate::rules::{
    apply_move, initial_board, is_full, is_terminal, legal_moves, outcome, reachable_boards,
    turn_owner, utility, winner, Outcome,
};

pub use crate::search::{best_move, Minimax, MoveOrder, SearchConfig, SearchStats};
