//! Minimax search with alpha-beta pruning.
//!
//! Two cooperating value functions walk the game tree to terminal
//! positions:
//! - `max_value`: `X` to move, keeps a running maximum and raises alpha
//! - `min_value`: `O` to move, keeps a running minimum and lowers beta
//!
//! Each recursive call receives the caller's current `[alpha, beta]`
//! window. Once `beta <= alpha` the remaining siblings cannot change the
//! result and are skipped. Pruning changes how many nodes are visited,
//! never the value of a position.
//!
//! Nothing is cached between calls: every search is a fresh walk over
//! boards that live on the call stack.

use std::time::Instant;

use tracing::debug;

use crate::core::{Board, Move, Player, CELLS};
use crate::rules::{is_terminal, turn_owner, utility, MoveList};

use super::config::SearchConfig;
use super::order::ordered_moves;
use super::stats::SearchStats;

/// Bound above every utility.
const INF: i32 = i32::MAX;

/// Search context.
///
/// Owns the configuration, the move order derived from it, and the
/// statistics of the most recent search.
#[derive(Clone, Debug)]
pub struct Minimax {
    /// Search configuration.
    config: SearchConfig,

    /// Cell indices in enumeration order.
    permutation: [u8; CELLS],

    /// Statistics of the last search.
    stats: SearchStats,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Minimax {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            permutation: config.move_order.permutation(),
            config,
            stats: SearchStats::default(),
        }
    }

    /// Optimal move for the player to move, assuming optimal replies.
    ///
    /// Among equally good moves the first one in enumeration order wins.
    /// Returns `None` on a terminal board.
    pub fn search(&mut self, board: &Board) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        if is_terminal(board) {
            debug!(board = %board, "search on terminal board, no move");
            return None;
        }

        self.stats.nodes += 1;
        let mover = turn_owner(board);
        let mut alpha = -INF;
        let mut beta = INF;
        let mut best: Option<(Move, i32)> = None;

        for mv in self.moves(board) {
            let child = board.with_mark(mv, mover);
            let value = if mover.is_maximizer() {
                self.min_value(&child, alpha, INF)
            } else {
                self.max_value(&child, -INF, beta)
            };

            let improves = match best {
                None => true,
                Some((_, best_value)) if mover.is_maximizer() => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((mv, value));
                // Later siblings only need to prove they beat this value.
                if self.config.pruning {
                    if mover.is_maximizer() {
                        alpha = value;
                    } else {
                        beta = value;
                    }
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let (mv, value) = best?;
        debug!(
            player = %mover,
            best = %mv,
            value,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search complete"
        );
        Some(mv)
    }

    /// Game-theoretic value of `board` under optimal play by both sides:
    /// +1 `X` wins, -1 `O` wins, 0 draw.
    pub fn evaluate(&mut self, board: &Board) -> i32 {
        let start = Instant::now();
        self.stats.reset();

        let value = match turn_owner(board) {
            Player::X => self.max_value(board, -INF, INF),
            Player::O => self.min_value(board, -INF, INF),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        value
    }

    /// Exact value of every legal move, in enumeration order.
    ///
    /// Each child is searched with a full window, so values of losing moves
    /// are exact rather than bounds. Empty on a terminal board.
    pub fn root_values(&mut self, board: &Board) -> Vec<(Move, i32)> {
        let start = Instant::now();
        self.stats.reset();

        if is_terminal(board) {
            return Vec::new();
        }

        self.stats.nodes += 1;
        let mover = turn_owner(board);
        let values = self
            .moves(board)
            .into_iter()
            .map(|mv| {
                let child = board.with_mark(mv, mover);
                let value = match mover {
                    Player::X => self.min_value(&child, -INF, INF),
                    Player::O => self.max_value(&child, -INF, INF),
                };
                (mv, value)
            })
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        values
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn moves(&self, board: &Board) -> MoveList {
        ordered_moves(board, &self.permutation)
    }

    /// Value of a position with `X` to move.
    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;
        if let Some(u) = utility(board) {
            self.stats.leaves += 1;
            return u;
        }
        debug_assert_eq!(turn_owner(board), Player::X);

        let mut value = -INF;
        for mv in self.moves(board) {
            let child = board.with_mark(mv, Player::X);
            value = value.max(self.min_value(&child, alpha, beta));
            alpha = alpha.max(value);
            if self.config.pruning && beta <= alpha {
                // Beta cut-off
                self.stats.cutoffs += 1;
                break;
            }
        }
        value
    }

    /// Value of a position with `O` to move.
    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if let Some(u) = utility(board) {
            self.stats.leaves += 1;
            return u;
        }
        debug_assert_eq!(turn_owner(board), Player::O);

        let mut value = INF;
        for mv in self.moves(board) {
            let child = board.with_mark(mv, Player::O);
            value = value.min(self.max_value(&child, alpha, beta));
            beta = beta.min(value);
            if self.config.pruning && beta <= alpha {
                // Alpha cut-off
                self.stats.cutoffs += 1;
                break;
            }
        }
        value
    }
}

/// Optimal move for the player to move, using the default configuration
/// (alpha-beta pruning, row-major move order).
///
/// Returns `None` if the board is terminal.
///
/// ```
/// use ttt_solver::core::{Board, Move};
/// use ttt_solver::search::best_move;
///
/// let board: Board = "XX. OO. ...".parse().unwrap();
/// assert_eq!(best_move(&board), Some(Move::new(0, 2)));
/// ```
#[must_use]
pub fn best_move(board: &Board) -> Option<Move> {
    Minimax::default().search(board)
}
