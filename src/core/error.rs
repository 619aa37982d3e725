//! Error types.
//!
//! `InvalidMoveError` is the only error the rules can raise. It is always
//! returned to the immediate caller, who is expected to pick another move.
//! `ParseBoardError` covers the board text form.

use thiserror::Error;

/// A move that cannot be applied to a particular board.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("invalid move: cell ({row}, {col}) is out of range (must be 0-2)")]
    OutOfRange { row: u8, col: u8 },
}

/// Failure to parse a board from its text form.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("board string has wrong length: expected 9 cells, got {got} in '{context}'")]
    Length { got: usize, context: String },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    Character {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    PieceCounts { x_count: usize, o_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_messages() {
        let err = InvalidMoveError::Occupied { row: 1, col: 2 };
        assert_eq!(err.to_string(), "invalid move: cell (1, 2) is already occupied");

        let err = InvalidMoveError::OutOfRange { row: 3, col: 0 };
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseBoardError::PieceCounts { x_count: 1, o_count: 3 };
        assert_eq!(
            err.to_string(),
            "invalid piece counts: X=1, O=3 (must be equal or X ahead by 1)"
        );
    }
}
