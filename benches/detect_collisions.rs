use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use proxorbit::{
    detect_collisions, Extrapolate, MonitorParams, ProximityMonitor, SyntheticGenerator,
};

/// Pairwise scan only, on pre-extrapolated sets of growing size.
fn bench_detection_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_collisions/objects");

    for count in [4usize, 16, 64] {
        let set = SyntheticGenerator::new(count, 7).generate().extrapolated(18);
        group.bench_with_input(BenchmarkId::from_parameter(count), &set, |b, set| {
            b.iter(|| black_box(detect_collisions(black_box(set), 350.0)))
        });
    }
    group.finish();
}

/// Generation, extrapolation, detection and scoring for the default scenario.
fn bench_full_run(c: &mut Criterion) {
    let monitor = ProximityMonitor::new(MonitorParams::default());

    c.bench_function("monitor/default_run", |b| {
        b.iter(|| black_box(monitor.run().ok()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_detection_scaling, bench_full_run
);
criterion_main!(benches);
