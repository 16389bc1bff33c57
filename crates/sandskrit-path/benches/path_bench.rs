use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sandskrit_path::{LineConfig, PathBuilder};

fn spiral_benchmark(c: &mut Criterion) {
    c.bench_function("spiral-out-100-turns", |b| {
        b.iter(|| {
            let mut builder = PathBuilder::new(0.0, 0.0);
            builder
                .add_spiral_out(black_box(100.0), black_box(100.0), 0.0)
                .unwrap();
            builder.len()
        })
    });
}

fn text_benchmark(c: &mut Criterion) {
    let lines = vec![
        LineConfig::new("Welcome to", 10.0),
        LineConfig::new("SandSkrit", 18.0),
        LineConfig::new("continuous path", 10.0),
        LineConfig::new("text for sand", 10.0),
    ];
    c.bench_function("lines-of-text", |b| {
        b.iter(|| {
            let mut builder = PathBuilder::new(0.0, 0.0).with_boundary_radius(100.0);
            builder.add_lines_of_text(black_box(&lines), 1.4).unwrap();
            builder.len()
        })
    });
}

fn thr_benchmark(c: &mut Criterion) {
    let mut builder = PathBuilder::new(0.0, 0.0);
    builder.add_spiral_out(100.0, 50.0, 0.0).unwrap();
    c.bench_function("thr-export", |b| b.iter(|| builder.to_thr().unwrap()));
}

criterion_group!(benches, spiral_benchmark, text_benchmark, thr_benchmark);
criterion_main!(benches);
