use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use measure_core::{Measurement, Record, RecordSet, SeriesBuilder};

fn gen_records(n: usize) -> RecordSet {
    (0..n)
        .map(|i| {
            let t = i as f64;
            // slow downward drift with weekly wobble
            let w = 82.0 - t * 0.01 + (t * 0.9).sin() * 0.4;
            let day = format!("{:04}-{:02}-{:02}", 2000 + i / 336, (i / 28) % 12 + 1, i % 28 + 1);
            Record::new(day, w, w + 10.0, 58.0, 28.5)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_build");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let set = gen_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &set, |b, set| {
            b.iter(|| {
                let builder = SeriesBuilder::new(set);
                black_box(builder.build_all(&Measurement::ALL));
            });
        });
    }
    group.finish();
}

fn bench_to_json(c: &mut Criterion) {
    let set = gen_records(10_000);
    let cfg = SeriesBuilder::new(&set).build(Measurement::Weight);
    c.bench_function("to_json_n10000", |b| b.iter(|| black_box(serde_json::to_string(&cfg).unwrap())));
}

criterion_group!(benches, bench_build, bench_to_json);
criterion_main!(benches);
