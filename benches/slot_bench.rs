use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fruit_slot::{
    slot::{play_batch, Symbol},
    draw, evaluate, OsRandomSource,
};

fn bench_draw(c: &mut Criterion) {
    let source = OsRandomSource;
    c.bench_function("draw_3", |b| b.iter(|| draw(&source, black_box(3))));
    c.bench_function("play_batch", |b| b.iter(|| play_batch(&source)));
}

fn bench_evaluate(c: &mut Criterion) {
    let miss = [Symbol::Cherry, Symbol::Lemon, Symbol::Orange];
    let hit = [Symbol::Grape, Symbol::Grape, Symbol::Watermelon];
    c.bench_function("evaluate_no_repeat", |b| b.iter(|| evaluate(black_box(&miss))));
    c.bench_function("evaluate_repeat", |b| b.iter(|| evaluate(black_box(&hit))));
}

criterion_group!(benches, bench_draw, bench_evaluate);
criterion_main!(benches);
