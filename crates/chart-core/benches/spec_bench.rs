use chart_core::{LineChart, Point, SeriesCollection, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_collection(series: usize, n: usize) -> SeriesCollection {
    let mut data = SeriesCollection::empty();
    for s in 0..series {
        let points = (0..n).map(|i| {
            let x = i as f64;
            Point::new(x, (x * 0.01 + s as f64).sin() * 10.0)
        });
        data.push(format!("s{s}"), points);
    }
    data
}

fn bench_build_spec(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_spec");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("4x{n}"), |b| {
            let chart = LineChart::new(build_collection(4, n));
            b.iter(|| black_box(chart.build_spec(Size::new(800, 500))));
        });
        group.bench_function(format!("4x{n}_json"), |b| {
            let spec = LineChart::new(build_collection(4, n)).build_spec(Size::new(800, 500));
            b.iter(|| black_box(spec.to_json().expect("serialize")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_spec);
criterion_main!(benches);
