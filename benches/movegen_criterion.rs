use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use parlor_chess::board::piece::Color;
use parlor_chess::board::square::Square;
use parlor_chess::engines::engine_heuristic::HeuristicEngine;
use parlor_chess::engines::engine_trait::Engine;
use parlor_chess::game::game_state::GameState;
use parlor_chess::rules::legality::all_valid_moves;

/// A few plies into an open game so sliders have real mobility.
fn midgame_state() -> GameState {
    let mut state = GameState::new();
    let script = [
        ((6u8, 4u8), (4u8, 4u8)), // e4
        ((1, 4), (3, 4)),         // e5
        ((7, 6), (5, 5)),         // Nf3
        ((0, 1), (2, 2)),         // Nc6
        ((7, 5), (3, 1)),         // Bb5
        ((1, 0), (2, 0)),         // a6
    ];
    for (from, to) in script {
        state
            .make_move(Square::at(from.0, from.1), Square::at(to.0, to.1))
            .expect("scripted opening should be legal");
    }
    state
}

fn bench_legal_move_generation(c: &mut Criterion) {
    let start = GameState::new();
    let midgame = midgame_state();

    let mut group = c.benchmark_group("legal_move_generation");
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(all_valid_moves(black_box(start.board()), Color::White)))
    });
    group.bench_function("midgame", |b| {
        b.iter(|| black_box(all_valid_moves(black_box(midgame.board()), Color::White)))
    });
    group.finish();
}

fn bench_heuristic_selection(c: &mut Criterion) {
    let midgame = midgame_state();
    let moves = midgame.all_valid_moves(Color::Black);
    let mut engine = HeuristicEngine::seeded(1234);

    c.bench_function("heuristic_select_move_midgame", |b| {
        b.iter(|| black_box(engine.select_move(&midgame, Color::Black, black_box(&moves))))
    });
}

criterion_group!(benches, bench_legal_move_generation, bench_heuristic_selection);
criterion_main!(benches);
