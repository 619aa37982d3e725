use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ttt_solver::{initial_board, Board, Minimax, SearchConfig};

fn bench_empty_board(c: &mut Criterion) {
    let board = initial_board();

    c.bench_function("alpha_beta_empty_board", |b| {
        let mut search = Minimax::default();
        b.iter(|| search.search(black_box(&board)))
    });

    c.bench_function("minimax_empty_board", |b| {
        let mut search = Minimax::new(SearchConfig::default().without_pruning());
        b.iter(|| search.search(black_box(&board)))
    });
}

fn bench_midgame(c: &mut Criterion) {
    let board: Board = "X.. .O. ..X".parse().unwrap();

    c.bench_function("alpha_beta_midgame", |b| {
        let mut search = Minimax::default();
        b.iter(|| search.search(black_box(&board)))
    });
}

criterion_group!(benches, bench_empty_board, bench_midgame);
criterion_main!(benches);
