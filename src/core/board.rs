//! Board and move representation.
//!
//! A `Board` is a 3x3 grid of `Cell`s with value semantics: it is `Copy`,
//! and nothing in the crate mutates a board once it has been handed out.
//! Applying a move builds a new board (see `rules::apply_move`).
//!
//! ## Text form
//!
//! Boards parse from and print to a compact row-major form, one character
//! per cell:
//!
//! ```
//! use ttt_solver::core::{Board, Player};
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! assert_eq!(board.count(Player::X), 2);
//! assert_eq!(board.to_string(), "XX.\nOO.\n...");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseBoardError;
use super::player::{Cell, Player};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A (row, col) pair, 0-based.
///
/// Whether a move is legal depends on the board it is applied to; a `Move`
/// may even point outside the grid, in which case `rules::apply_move`
/// rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Move for a row-major cell index: `index / 3`, `index % 3`.
    ///
    /// ```
    /// use ttt_solver::core::Move;
    ///
    /// assert_eq!(Move::from_index(5), Move::new(1, 2));
    /// ```
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Self {
            row: index / SIZE as u8,
            col: index % SIZE as u8,
        }
    }

    /// Row-major cell index. Only meaningful for in-range moves.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    /// Whether both coordinates lie on the board.
    #[inline]
    #[must_use]
    pub const fn in_range(self) -> bool {
        (self.row as usize) < SIZE && (self.col as usize) < SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 tic-tac-toe board.
///
/// Invariant: the number of `X` marks equals the number of `O` marks or
/// exceeds it by exactly one. Every constructor enforces this, and
/// `rules::apply_move` preserves it. Deserialization goes through
/// `Board::from_cells` as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[Cell; 3]; 3]", into = "[[Cell; 3]; 3]")]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// The all-empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from a grid of cells, checking the piece-count invariant.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Result<Self, ParseBoardError> {
        let board = Self { cells };
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        if x_count == o_count || x_count == o_count + 1 {
            Ok(board)
        } else {
            Err(ParseBoardError::PieceCounts { x_count, o_count })
        }
    }

    /// Contents of the cell at `mv`, or `None` if `mv` is off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, mv: Move) -> Option<Cell> {
        if mv.in_range() {
            Some(self.cells[mv.row as usize][mv.col as usize])
        } else {
            None
        }
    }

    /// Iterate over `(Move, Cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        (0..CELLS as u8).map(move |i| {
            let mv = Move::from_index(i);
            (mv, self.cells[mv.row as usize][mv.col as usize])
        })
    }

    /// Number of marks `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Mark(player))
            .count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    /// Copy of this board with `player`'s mark at `mv`.
    ///
    /// The caller guarantees `mv` is in range, the cell is empty and it is
    /// `player`'s turn.
    #[must_use]
    pub(crate) fn with_mark(mut self, mv: Move, player: Player) -> Self {
        debug_assert!(self.get(mv) == Some(Cell::Empty));
        self.cells[mv.row as usize][mv.col as usize] = Cell::Mark(player);
        self
    }
}

impl TryFrom<[[Cell; SIZE]; SIZE]> for Board {
    type Error = ParseBoardError;

    fn try_from(cells: [[Cell; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [[Cell; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse nine cell characters in row-major order. Whitespace and the
    /// separators `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        let mut got = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            let cell = Cell::from_symbol(c).ok_or_else(|| ParseBoardError::Character {
                character: c,
                position: got,
                context: s.to_string(),
            })?;
            if got < CELLS {
                cells[got / SIZE][got % SIZE] = cell;
            }
            got += 1;
        }

        if got != CELLS {
            return Err(ParseBoardError::Length {
                got,
                context: s.to_string(),
            });
        }

        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
