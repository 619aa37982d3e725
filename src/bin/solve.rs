//! One-shot solver: reads a board, prints the optimal move.
//!
//! ```text
//! solve --board "XX. OO. ..."
//! solve --board "X........" --no-pruning --json
//! RUST_LOG=debug solve --board "........."
//! ```

use std::error::Error;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use ttt_solver::{outcome, turn_owner, Board, Minimax, Move, Outcome, Player, SearchConfig, SearchStats};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Optimal tic-tac-toe move by minimax search")]
struct Args {
    /// Board as nine cells in row-major order: X, O, or . for empty.
    /// Whitespace and '|' separators are ignored.
    #[arg(long, default_value = ".........")]
    board: String,

    /// Search the full tree without alpha-beta cut-offs
    #[arg(long)]
    no_pruning: bool,

    /// Enumerate moves in a shuffled order drawn from this seed
    /// (row-major when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    best_move: Option<Move>,
    value: i32,
    stats: SearchStats,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let board: Board = args.board.parse()?;

    let mut config = SearchConfig::default().with_pruning(!args.no_pruning);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut search = Minimax::new(config);
    let value = search.evaluate(&board);
    let best_move = search.search(&board);

    let report = Report {
        board,
        to_move: turn_owner(&board),
        outcome: outcome(&board),
        best_move,
        value,
        stats: search.stats().clone(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.board);
    match report.best_move {
        Some(mv) => println!(
            "{} to move: best {} (cell {}), value {}",
            report.to_move,
            mv,
            mv.index(),
            report.value
        ),
        None => println!("game over: {}", report.outcome),
    }
    println!(
        "{} nodes, {} leaves, {} cut-offs ({:.1}% of interior nodes) in {} us",
        report.stats.nodes,
        report.stats.leaves,
        report.stats.cutoffs,
        report.stats.cutoff_rate() * 100.0,
        report.stats.time_us
    );
    Ok(())
}
