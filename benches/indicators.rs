#[path = "../tests/fixtures/mod.rs"]
mod fixtures;

use crate::fixtures::{closes, highs, load_reference_ohlcvs, lows, opens};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ohlc_ta::{Bb, BbConfig, Ichimoku, IndicatorConfig, IndicatorConfigBuilder, Macd, MacdConfig, Rsi, RsiConfig};
use std::{hint::black_box, num::NonZero, time::Duration};

fn nz(n: usize) -> NonZero<usize> {
    NonZero::new(n).expect("non zero value")
}

fn batch_benchmarks(c: &mut Criterion) {
    let bars = load_reference_ohlcvs();
    let close = closes(&bars);
    let (open, high, low) = (opens(&bars), highs(&bars), lows(&bars));

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(bars.len() as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("bb20", |b| {
        let bb = Bb::new(BbConfig::default_20());
        b.iter(|| black_box(bb.compute(black_box(&close))));
    });
    group.bench_function("bb200", |b| {
        let bb = Bb::new(BbConfig::builder().length(nz(200)).build());
        b.iter(|| black_box(bb.compute(black_box(&close))));
    });
    group.bench_function("macd_12_26_9", |b| {
        let macd = Macd::new(MacdConfig::default_12_26_9());
        b.iter(|| black_box(macd.compute(black_box(&close))));
    });
    group.bench_function("rsi14", |b| {
        let rsi = Rsi::new(RsiConfig::default_14());
        b.iter(|| black_box(rsi.compute(black_box(&close))));
    });
    group.bench_function("rsi140", |b| {
        let rsi = Rsi::new(RsiConfig::builder().length(nz(140)).build());
        b.iter(|| black_box(rsi.compute(black_box(&close))));
    });
    group.bench_function("ichimoku", |b| {
        let ichimoku = Ichimoku::new();
        b.iter(|| {
            black_box(
                ichimoku
                    .compute(
                        black_box(&open),
                        black_box(&high),
                        black_box(&low),
                        black_box(&close),
                    )
                    .expect("fixture series are aligned"),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, batch_benchmarks);
criterion_main!(benches);
