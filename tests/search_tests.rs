//! Search integration tests.

use proptest::prelude::*;
use ttt_solver::core::{Board, Move, Player};
use ttt_solver::rules::{
    apply_move, initial_board, is_terminal, legal_moves, outcome, reachable_boards, turn_owner,
    Outcome,
};
use ttt_solver::search::{best_move, Minimax, MoveOrder, SearchConfig};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn full_minimax() -> Minimax {
    Minimax::new(SearchConfig::default().without_pruning())
}

/// Both sides play `best_move` until the game ends.
fn self_play(mut board: Board) -> Board {
    while let Some(mv) = best_move(&board) {
        board = apply_move(&board, mv).unwrap();
    }
    board
}

/// Every game where `searcher` plays `best_move` and the other side tries
/// every legal reply. Calls `check` on each final board.
fn against_all_replies(board: Board, searcher: Player, check: &mut impl FnMut(&Board)) {
    if is_terminal(&board) {
        check(&board);
        return;
    }
    if turn_owner(&board) == searcher {
        let mv = best_move(&board).unwrap();
        against_all_replies(apply_move(&board, mv).unwrap(), searcher, check);
    } else {
        for mv in legal_moves(&board) {
            against_all_replies(apply_move(&board, mv).unwrap(), searcher, check);
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_completes_own_row() {
    let b = board("XX. OO. ...");
    assert_eq!(turn_owner(&b), Player::X);
    assert_eq!(best_move(&b), Some(Move::new(0, 2)));
}

#[test]
fn test_blocks_opponent_row() {
    let b = board("X.. OO. ..X");
    assert_eq!(turn_owner(&b), Player::X);
    assert_eq!(best_move(&b), Some(Move::new(1, 2)));
}

#[test]
fn test_opening_is_corner_or_center() {
    let corners_and_center = [
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(1, 1),
        Move::new(2, 0),
        Move::new(2, 2),
    ];
    let opening = best_move(&initial_board()).unwrap();
    assert!(corners_and_center.contains(&opening), "opened with {}", opening);
}

#[test]
fn test_optimal_play_draws() {
    let end = self_play(initial_board());
    assert_eq!(outcome(&end), Outcome::Draw);
}

#[test]
fn test_optimal_play_draws_after_any_reply() {
    let opening = best_move(&initial_board()).unwrap();
    let after_x = apply_move(&initial_board(), opening).unwrap();

    for reply in legal_moves(&after_x) {
        let after_o = apply_move(&after_x, reply).unwrap();
        let end = self_play(after_o);
        // O's reply may be a mistake; X must never lose from here.
        assert_ne!(outcome(&end), Outcome::Win(Player::O), "after O at {}", reply);
    }
}

#[test]
fn test_terminal_board_has_no_move() {
    assert_eq!(best_move(&board("XOX XOO OXX")), None);
    assert_eq!(best_move(&board("OO. XXX ...")), None);
}

// =============================================================================
// Optimality
// =============================================================================

#[test]
fn test_x_never_loses() {
    let mut games = 0;
    against_all_replies(initial_board(), Player::X, &mut |end: &Board| {
        games += 1;
        assert_ne!(outcome(end), Outcome::Win(Player::O), "X lost:\n{}", end);
    });
    assert!(games > 0);
}

#[test]
fn test_o_never_loses() {
    let mut games = 0;
    against_all_replies(initial_board(), Player::O, &mut |end: &Board| {
        games += 1;
        assert_ne!(outcome(end), Outcome::Win(Player::X), "O lost:\n{}", end);
    });
    assert!(games > 0);
}

#[test]
fn test_best_move_is_optimal_everywhere() {
    let mut pruned = Minimax::default();
    let mut full = full_minimax();

    for b in reachable_boards() {
        let best = pruned.search(&b);
        if is_terminal(&b) {
            assert_eq!(best, None);
            continue;
        }

        let mv = best.unwrap();
        let value = full.evaluate(&b);
        let child = apply_move(&b, mv).unwrap();
        assert_eq!(full.evaluate(&child), value, "suboptimal {} on\n{}", mv, b);
    }
}

#[test]
fn test_pruning_preserves_value_everywhere() {
    let mut pruned = Minimax::default();
    let mut full = full_minimax();

    for b in reachable_boards() {
        assert_eq!(pruned.evaluate(&b), full.evaluate(&b), "on\n{}", b);
    }
}

#[test]
fn test_pruned_and_full_pick_same_move() {
    // Same move order and first-wins tie-breaking: identical choices.
    let mut pruned = Minimax::default();
    let mut full = full_minimax();

    for b in reachable_boards() {
        assert_eq!(pruned.search(&b), full.search(&b), "on\n{}", b);
    }
}

#[test]
fn test_root_values_match_best_move() {
    let mut search = Minimax::default();
    let b = board("X.. .O. ...");

    let values = search.root_values(&b);
    let best = search.search(&b).unwrap();

    let best_value = values.iter().map(|&(_, v)| v).max().unwrap();
    let first_best = values.iter().find(|&&(_, v)| v == best_value).unwrap().0;
    assert_eq!(best, first_best);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_repeated_search_same_result() {
    let mut search = Minimax::default();
    let b = board("X.. .O. ..X");

    let first = search.search(&b);
    let first_stats = search.stats().nodes;
    let second = search.search(&b);

    assert_eq!(first, second);
    assert_eq!(first_stats, search.stats().nodes);
}

#[test]
fn test_seeded_orders_agree_on_value() {
    let mut reference = Minimax::default();
    for seed in [1, 2, 3, 42, 12345] {
        let config = SearchConfig::default().with_move_order(MoveOrder::Shuffled { seed });
        let mut search = Minimax::new(config);

        for b in [initial_board(), board("X.. .O. ..X"), board("XO. ... ...")] {
            let mv = search.search(&b).unwrap();
            let child = apply_move(&b, mv).unwrap();
            assert_eq!(reference.evaluate(&child), reference.evaluate(&b), "seed {}", seed);
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pruning_never_changes_value(indices in prop::collection::vec(0u8..9, 0..9)) {
        let mut b = initial_board();
        for &i in &indices {
            if is_terminal(&b) {
                break;
            }
            if let Ok(next) = apply_move(&b, Move::from_index(i)) {
                b = next;
            }
        }

        let mut pruned = Minimax::default();
        let mut full = full_minimax();
        prop_assert_eq!(pruned.evaluate(&b), full.evaluate(&b));
        prop_assert!(pruned.stats().nodes <= full.stats().nodes);
    }

    #[test]
    fn prop_search_does_not_touch_board(indices in prop::collection::vec(0u8..9, 0..9)) {
        let mut b = initial_board();
        for &i in &indices {
            if is_terminal(&b) {
                break;
            }
            if let Ok(next) = apply_move(&b, Move::from_index(i)) {
                b = next;
            }
        }

        let copy = b;
        let mv = best_move(&b);
        prop_assert_eq!(b, copy);
        prop_assert_eq!(mv.is_none(), is_terminal(&b));
    }
}
