use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use deepauth_core::samples::{AI_SAMPLE_TEXT, HUMAN_SAMPLE_TEXT};
use deepauth_engine::{AnalysisEngine, EngineConfig, TextSignals, generate_heatmap};

fn bench_heatmap_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap_generation");

    for score in [15.0, 50.0, 95.0] {
        group.bench_with_input(BenchmarkId::from_parameter(score), &score, |b, &score| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| generate_heatmap(black_box(score), &mut rng));
        });
    }

    group.finish();
}

fn bench_text_signals(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_signals");

    group.bench_function("ai_sample", |b| {
        b.iter(|| TextSignals::detect(black_box(AI_SAMPLE_TEXT)))
    });
    group.bench_function("human_sample", |b| {
        b.iter(|| TextSignals::detect(black_box(HUMAN_SAMPLE_TEXT)))
    });

    group.finish();
}

fn bench_text_analysis_without_delay(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build tokio runtime");
    let engine = AnalysisEngine::seeded(7).with_config(EngineConfig::instant());

    c.bench_function("analyze_text_instant", |b| {
        b.iter(|| runtime.block_on(engine.analyze_text(black_box(HUMAN_SAMPLE_TEXT))))
    });
}

criterion_group!(
    benches,
    bench_heatmap_generation,
    bench_text_signals,
    bench_text_analysis_without_delay
);
criterion_main!(benches);
