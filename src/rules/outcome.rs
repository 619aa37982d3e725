//! Game outcome, derived from a board.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Status of a game. Never stored; always recomputed with
/// `rules::outcome`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Neither player has a line and empty cells remain.
    InProgress,
    /// The player completed a line.
    Win(Player),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(p),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    /// Utility of a finished game from `X`'s point of view.
    #[must_use]
    pub const fn utility(self) -> Option<i32> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(p) => Some(p.sign()),
            Outcome::Draw => Some(0),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(p) => write!(f, "{} wins", p),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
