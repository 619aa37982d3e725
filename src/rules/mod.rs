//! Tic-tac-toe rules: the state model.
//!
//! Free functions over `&Board`:
//! - Whose turn it is (`turn_owner`)
//! - Legal moves and their application (`legal_moves`, `apply_move`)
//! - Game end and scoring (`winner`, `is_full`, `is_terminal`, `outcome`,
//!   `utility`)
//!
//! None of them mutate their input or keep state between calls.

pub mod outcome;
pub mod reachable;
pub mod state;

pub use outcome::Outcome;
pub use reachable::{reachable_boards, REACHABLE_COUNT};
pub use state::{
    apply_move, initial_board, is_full, is_terminal, legal_moves, outcome, turn_owner, utility,
    winner, MoveList, WINNING_LINES,
};
