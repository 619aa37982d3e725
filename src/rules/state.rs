//! Tic-tac-toe rules over immutable boards.
//!
//! Every function here is a pure function of the board it is given. Turn
//! order is not stored anywhere: it is derived from the mark counts, so a
//! board alone fully determines whose move it is.

use smallvec::SmallVec;

use crate::core::{Board, Cell, InvalidMoveError, Move, Player, CELLS};

use super::outcome::Outcome;

/// Legal moves of a position, in row-major order.
pub type MoveList = SmallVec<[Move; CELLS]>;

/// The eight lines, in scan order: rows top to bottom, columns left to
/// right, then the main and anti diagonal.
pub const WINNING_LINES: [[Move; 3]; 8] = [
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// The empty starting board.
#[must_use]
pub const fn initial_board() -> Board {
    Board::new()
}

/// The player to move: `X` when the mark counts are equal, `O` otherwise.
#[must_use]
pub fn turn_owner(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// All empty cells, row-major. Empty on a full board.
///
/// Callers that only need a set of moves should not rely on the order;
/// the search does, to make tie-breaking reproducible.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(mv, _)| mv)
        .collect()
}

/// The board after the player to move marks `mv`.
///
/// Fails if `mv` is off the board or the cell is already taken. The input
/// board is never modified.
///
/// ```
/// use ttt_solver::core::{Cell, Move, Player};
/// use ttt_solver::rules::{apply_move, initial_board};
///
/// let board = initial_board();
/// let next = apply_move(&board, Move::new(1, 1)).unwrap();
/// assert_eq!(next.get(Move::new(1, 1)), Some(Cell::Mark(Player::X)));
/// assert_eq!(board, initial_board());
/// assert!(apply_move(&next, Move::new(1, 1)).is_err());
/// ```
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    match board.get(mv) {
        None => Err(InvalidMoveError::OutOfRange {
            row: mv.row,
            col: mv.col,
        }),
        Some(Cell::Mark(_)) => Err(InvalidMoveError::Occupied {
            row: mv.row,
            col: mv.col,
        }),
        Some(Cell::Empty) => Ok(board.with_mark(mv, turn_owner(board))),
    }
}

/// The owner of the first complete line in `WINNING_LINES` order.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let p = board.get(a).and_then(Cell::player)?;
        let mark = Some(Cell::Mark(p));
        (board.get(b) == mark && board.get(c) == mark).then_some(p)
    })
}

/// True iff no cell is empty.
#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

/// True iff someone has won or the board is full.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Status of the game on this board.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(p) => Outcome::Win(p),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// +1 if `X` has won, -1 if `O` has won, 0 for a draw.
///
/// `None` on non-terminal boards; only call this on terminal boards.
#[must_use]
pub fn utility(board: &Board) -> Option<i32> {
    outcome(board).utility()
}
