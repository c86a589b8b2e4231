//! Pipeline Benchmarks
//!
//! # Running Benchmarks
//! ```bash
//! cargo bench --package face-analyzer --bench pipeline
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use face_analyzer::{FaceInput, FeatureAnalyzer};
use test_support::{landmark_confidences, FaceBuilder};

fn bench_single_face(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Elements(1));

    let analyzer = FeatureAnalyzer::default();
    let face = FaceInput::new(FaceBuilder::new().eye_tilt(6.0).build())
        .with_confidences(landmark_confidences(20));

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(&face))))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(analyzer.analyze_parallel(black_box(&face))))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_batch");
    let analyzer = FeatureAnalyzer::default();

    for size in [8usize, 64, 256] {
        let faces: Vec<FaceInput> = (0..size)
            .map(|i| {
                let ratio = 0.2 + 0.2 * (i as f32 / size as f32);
                FaceInput::new(FaceBuilder::new().nose_ratio(ratio).build())
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &faces, |b, faces| {
            b.iter(|| black_box(analyzer.analyze_batch(black_box(faces))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_face, bench_batch);
criterion_main!(benches);
