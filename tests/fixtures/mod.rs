#![allow(dead_code)]

use serde::{Deserialize, de::DeserializeOwned};

/// OHLCV bar parsed from the fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Single-value reference row; an empty cell is a "no value" marker.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub open_time: u64,
    pub expected: Option<f64>,
}

/// Reference BB row: middle band plus the three envelope pairs.
#[derive(Debug, Deserialize)]
pub struct RefBbRow {
    pub open_time: u64,
    pub middle: Option<f64>,
    pub upper1: Option<f64>,
    pub lower1: Option<f64>,
    pub upper2: Option<f64>,
    pub lower2: Option<f64>,
    pub upper3: Option<f64>,
    pub lower3: Option<f64>,
}

/// Reference MACD row; all five series are defined at every index.
#[derive(Debug, Deserialize)]
pub struct RefMacdRow {
    pub open_time: u64,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub histogram_positive: f64,
    pub histogram_negative: f64,
}

/// Reference Ichimoku row.
#[derive(Debug, Deserialize)]
pub struct RefIchimokuRow {
    pub open_time: u64,
    pub kijun: Option<f64>,
    pub tenkan: Option<f64>,
    pub senkou_span1: Option<f64>,
    pub senkou_span2: Option<f64>,
    pub chikou_span: Option<f64>,
}

const OHLCV_PATH: &str = "tests/fixtures/data/ohlcv.csv";

/// Load the fixture OHLCV bars.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

/// Load single-value reference data (RSI).
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Load BB reference data.
pub fn load_bb_ref(path: &str) -> Vec<RefBbRow> {
    load_records(path, "invalid BB reference record")
}

/// Load MACD reference data.
pub fn load_macd_ref(path: &str) -> Vec<RefMacdRow> {
    load_records(path, "invalid MACD reference record")
}

/// Load Ichimoku reference data.
pub fn load_ichimoku_ref(path: &str) -> Vec<RefIchimokuRow> {
    load_records(path, "invalid Ichimoku reference record")
}

pub fn closes(bars: &[RefBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

pub fn highs(bars: &[RefBar]) -> Vec<f64> {
    bars.iter().map(|b| b.high).collect()
}

pub fn lows(bars: &[RefBar]) -> Vec<f64> {
    bars.iter().map(|b| b.low).collect()
}

pub fn opens(bars: &[RefBar]) -> Vec<f64> {
    bars.iter().map(|b| b.open).collect()
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Assert an optional value matches a reference cell: both markers, or both
/// values within tolerance.
pub fn assert_opt_near(
    actual: Option<f64>,
    expected: Option<f64>,
    tolerance: f64,
    context: &str,
) {
    match (actual, expected) {
        (None, None) => {}
        (Some(a), Some(e)) => assert_near(a, e, tolerance, context),
        (a, e) => panic!("{context}: marker mismatch: expected {e:?}, got {a:?}"),
    }
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
