//! Benchmarks for best-move selection.
//!
//! The empty board is the worst case for exhaustive search; the midgame
//! position measures the pruned tree typical of play against a human.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench minimax
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use parlor_core::{Board, Player};
use parlor_minimax::best_move;

fn bench_best_move_empty(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("best_move_empty", |b| {
        b.iter(|| best_move(hint::black_box(&board), Player::X));
    });
}

fn bench_best_move_midgame(c: &mut Criterion) {
    let mut board = Board::new();
    board.place(4, Player::X);
    board.place(0, Player::O);
    board.place(8, Player::X);
    c.bench_function("best_move_midgame", |b| {
        b.iter(|| best_move(hint::black_box(&board), Player::O));
    });
}

criterion_group!(benches, bench_best_move_empty, bench_best_move_midgame);
criterion_main!(benches);
