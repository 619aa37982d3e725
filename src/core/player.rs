//! Players and cell contents.
//!
//! ## Player
//!
//! The two marks of tic-tac-toe. `X` always moves first and is the
//! maximizing side for scoring; `O` is the minimizing side.
//!
//! ## Cell
//!
//! A board square: empty or holding one player's mark.

use serde::{Deserialize, Serialize};

/// One of the two players, identified by their mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first; maximizes utility.
    X,
    /// Moves second; minimizes utility.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    ///
    /// ```
    /// use ttt_solver::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility sign of a win by this player: +1 for `X`, -1 for `O`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Whether this player maximizes utility.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::X)
    }

    /// Character used in the compact board text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player whose mark occupies this cell, if any.
    #[inline]
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(p) => Some(p),
        }
    }

    /// Character used in the compact board text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(p) => p.symbol(),
        }
    }

    /// Parse a single cell character. Accepts `X`, `O` (any case) and
    /// `.`, `-`, `_` for empty.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Mark(Player::X)),
            'O' | 'o' => Some(Cell::Mark(Player::O)),
            '.' | '-' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Mark(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        for p in Player::ALL {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_player_sign() {
        assert_eq!(Player::X.sign(), 1);
        assert_eq!(Player::O.sign(), -1);
        assert!(Player::X.is_maximizer());
        assert!(!Player::O.is_maximizer());
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_symbol('x'), Some(Cell::Mark(Player::X)));
        assert_eq!(Cell::from_symbol('O'), Some(Cell::Mark(Player::O)));
        assert_eq!(Cell::from_symbol('_'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('7'), None);

        for c in [Cell::Empty, Cell::Mark(Player::X), Cell::Mark(Player::O)] {
            assert_eq!(Cell::from_symbol(c.symbol()), Some(c));
        }
    }

    #[test]
    fn test_cell_player() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::from(Player::O).player(), Some(Player::O));
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Cell::Mark(Player::X)).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Cell::Mark(Player::X));
    }
}
