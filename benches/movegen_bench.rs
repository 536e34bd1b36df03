use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use havoc_chess::games::chess::Chessboard;
use havoc_chess::games::Color;

fn movegen_bench(c: &mut Criterion) {
    let board = Chessboard::startpos();
    c.bench_function("candidate moves from startpos", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            for (from, piece) in board.occupied_squares() {
                black_box(board.candidate_moves(from, piece, &mut rng));
            }
        })
    });
    c.bench_function("legal moves from startpos", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            for (from, _) in board.occupied_squares() {
                black_box(board.legal_moves(from, &mut rng));
            }
        })
    });
    c.bench_function("status from startpos", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(board.status_for(Color::White, &mut rng)))
    });
}

criterion_group!(benches, movegen_bench);
criterion_main!(benches);
