//! Adversarial search for tic-tac-toe.
//!
//! ## Overview
//!
//! Depth-unbounded minimax with alpha-beta pruning. The full game tree is
//! small enough that every search runs to terminal positions; there is no
//! depth limit, heuristic evaluation or transposition table.
//!
//! ## Usage
//!
//! ```rust
//! use ttt_solver::core::Move;
//! use ttt_solver::rules::{apply_move, initial_board};
//! use ttt_solver::search::{best_move, Minimax, SearchConfig};
//!
//! let board = apply_move(&initial_board(), Move::new(1, 1)).unwrap();
//! let reply = best_move(&board).unwrap();
//! assert_ne!(reply, Move::new(1, 1));
//!
//! // Plain minimax, for comparison
//! let mut search = Minimax::new(SearchConfig::default().without_pruning());
//! assert_eq!(search.evaluate(&board), 0);
//! println!("visited {} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod order;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{best_move, Minimax};
pub use order::MoveOrder;
pub use stats::SearchStats;
