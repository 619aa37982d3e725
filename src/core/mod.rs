//! Core value types: players, cells, moves, boards, errors.
//!
//! Everything here is a plain value. Game rules that interpret these
//! values live in `rules`.

pub mod board;
pub mod error;
pub mod player;

pub use board::{Board, Move, CELLS, SIZE};
pub use error::{InvalidMoveError, ParseBoardError};
pub use player::{Cell, Player};
