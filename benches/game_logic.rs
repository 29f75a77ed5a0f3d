use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match_three::core::{find_hint, find_matches, resolve, Board, TileSource};
use match_three::types::Pos;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_8x8", |b| {
        let mut tiles = TileSource::new(6, 12345);
        b.iter(|| Board::generate(black_box(8), &mut tiles))
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let mut tiles = TileSource::new(6, 12345);
    let board = Board::generate(8, &mut tiles);

    c.bench_function("find_matches_settled_8x8", |b| {
        b.iter(|| find_matches(black_box(&board)))
    });
}

fn bench_find_hint(c: &mut Criterion) {
    let mut tiles = TileSource::new(6, 12345);
    let mut board = Board::generate(8, &mut tiles);

    c.bench_function("find_hint_8x8", |b| b.iter(|| find_hint(black_box(&mut board))));
}

fn bench_resolve(c: &mut Criterion) {
    // A board with one playable swap; each iteration replays the committed
    // swap and resolves the resulting cascade.
    let mut tiles = TileSource::new(6, 12345);
    let board = Board::generate(8, &mut tiles);
    let swap = {
        let mut probe = board.clone();
        find_hint(&mut probe).expect("seed 12345 board has a legal move")
    };

    c.bench_function("resolve_cascade_8x8", |b| {
        b.iter(|| {
            let mut working = board.clone();
            let mut refill = TileSource::new(6, 777);
            working.swap(black_box(swap.0), black_box(swap.1));
            resolve(&mut working, &mut refill).unwrap()
        })
    });
}

fn bench_swap(c: &mut Criterion) {
    let mut tiles = TileSource::new(6, 12345);
    let mut board = Board::generate(8, &mut tiles);

    c.bench_function("swap_pair", |b| {
        b.iter(|| board.swap(black_box(Pos::new(3, 3)), black_box(Pos::new(3, 4))))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_find_matches,
    bench_find_hint,
    bench_resolve,
    bench_swap
);
criterion_main!(benches);
