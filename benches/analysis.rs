//! Benchmarks for chatstat analysis and output operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- tokenize`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstat::config::{AnalysisConfig, ReportConfig};
use chatstat::core::output::{to_json, to_text};
use chatstat::core::{Aggregator, Tokenizer, analyze_corpus, analyze_str, rank};
use chatstat::corpus::Corpus;

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 4] = ["Alice", "Bob", "Zoë", "Иван"];

const LINES: [&str; 6] = [
    "Hello @bob, are we still on for lunch tomorrow?",
    "haha yes!! see you at noon",
    "Привет, как дела? Всё хорошо",
    "sent a photo.",
    "I can't believe the build finally passes",
    "sent an attachment.",
];

fn generate_export_json(count: usize) -> String {
    let mut messages = Vec::with_capacity(count);
    for i in 0..count {
        let sender = SENDERS[i % SENDERS.len()];
        let actor = SENDERS[(i + 1) % SENDERS.len()];
        let timestamp = 1705314600000i64 + (i as i64 * 60000);
        let body = if i % 7 == 0 {
            format!(
                r#""sticker": {{"uri": "messages/stickers_used/{}_n_{}.png"}}"#,
                i,
                1000 + i % 13
            )
        } else {
            format!(r#""content": "{} {}""#, LINES[i % LINES.len()], i)
        };
        let reactions = if i % 3 == 0 {
            format!(r#", "reactions": [{{"reaction": "❤", "actor": "{}"}}]"#, actor)
        } else {
            String::new()
        };
        messages.push(format!(
            r#"{{"sender_name": "{}", "timestamp_ms": {}, {}{}, "type": "Generic"}}"#,
            sender, timestamp, body, reactions
        ));
    }
    let participants: Vec<String> = SENDERS
        .iter()
        .map(|s| format!(r#"{{"name": "{}"}}"#, s))
        .collect();
    format!(
        r#"{{"participants": [{}], "messages": [{}]}}"#,
        participants.join(", "),
        messages.join(",\n")
    )
}

fn generate_corpus(count: usize) -> Corpus {
    Corpus::from_json_str(&generate_export_json(count)).unwrap()
}

// =============================================================================
// Tokenizer Benchmarks
// =============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let tokenizer = Tokenizer::default();

    for line in [LINES[0], LINES[2], LINES[4]] {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(line.len()), line, |b, line| {
            b.iter(|| black_box(tokenizer.tokenize(black_box(line))));
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let analysis = Aggregator::new(AnalysisConfig::default()).analyze(black_box(corpus));
                black_box(analysis)
            });
        });
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [1_000_usize, 10_000, 50_000] {
        let analysis = Aggregator::new(AnalysisConfig::default()).analyze(&generate_corpus(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &analysis, |b, analysis| {
            b.iter(|| black_box(rank(black_box(analysis))));
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let ranked = analyze_corpus(generate_corpus(10_000), &AnalysisConfig::default());
    let config = ReportConfig::new().with_top(10);

    group.bench_function("text", |b| {
        b.iter(|| black_box(to_text(black_box(&ranked), &config)));
    });
    group.bench_function("json", |b| {
        b.iter(|| black_box(to_json(black_box(&ranked), &config).unwrap()));
    });
    group.finish();
}

// =============================================================================
// Full Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1_000_usize, 10_000] {
        let json = generate_export_json(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                let ranked = analyze_str(black_box(json), &AnalysisConfig::default()).unwrap();
                black_box(ranked)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_tokenize,
    bench_aggregate,
    bench_rank,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
