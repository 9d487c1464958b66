use criterion::*;

use corner_othello::{Board, Player, Position};
use corner_player::minimax;

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    let opening = Board::new().apply_move(Position::from_coords(2, 3).unwrap(), Player::Black);

    for depth in 1..6u8 {
        group.bench_with_input(BenchmarkId::new("pruned", depth), &depth, |b, &depth| {
            b.iter(|| minimax::search(black_box(opening), depth))
        });
    }

    for depth in 1..4u8 {
        group.bench_with_input(BenchmarkId::new("unpruned", depth), &depth, |b, &depth| {
            b.iter(|| minimax::search_unpruned(black_box(opening), depth))
        });
    }

    group.finish();
}

criterion_group!(search, criterion_search);
criterion_main!(search);
