use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use saper_core::{Board, GameConfig, MineLayout, RandomLayoutGenerator};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (size, mines) in [(6, 6), (8, 12), (10, 15), (100, 1500)] {
        let config = GameConfig::new(size, mines).expect("valid preset");
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                Board::generate(black_box(config), RandomLayoutGenerator::new(seed))
            })
        });
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    // a single corner mine leaves one zero region spanning the whole board
    let layout = MineLayout::from_mine_coords(200, &[(199, 199)]).expect("valid layout");
    let fresh = Board::from_layout(layout);

    c.bench_function("cascade_200x200", |b| {
        b.iter(|| {
            let mut board = fresh.clone();
            board.reveal(black_box((0, 0))).expect("in bounds")
        })
    });
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
