use std::{fmt::Display, num::NonZero};

use crate::{IndicatorConfig, IndicatorConfigBuilder, Price, Series, ema::ema};

/// Configuration for the Relative Strength Index ([`Rsi`]) indicator.
///
/// # Example
///
/// ```
/// use ohlc_ta::RsiConfig;
/// use std::num::NonZero;
/// # use ohlc_ta::{IndicatorConfig, IndicatorConfigBuilder};
///
/// let config = RsiConfig::builder()
///     .length(NonZero::new(14).unwrap())
///     .build();
/// assert_eq!(config.length(), 14);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct RsiConfig {
    length: usize,
}

impl IndicatorConfig for RsiConfig {
    type Builder = RsiConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        RsiConfigBuilder::new()
    }
}

impl RsiConfig {
    /// EMA span (number of bars).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// RSI(14) — Wilder's recommended daily setting.
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn default_14() -> Self {
        Self::builder().length(NonZero::new(14).unwrap()).build()
    }
}

impl Display for RsiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RsiConfig({})", self.length)
    }
}

/// Builder for [`RsiConfig`].
///
/// Length must be set before calling
/// [`build`](IndicatorConfigBuilder::build).
pub struct RsiConfigBuilder {
    length: Option<usize>,
}

impl RsiConfigBuilder {
    fn new() -> Self {
        Self { length: None }
    }

    /// Sets the EMA span.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length.replace(length.get());
        self
    }
}

impl IndicatorConfigBuilder<RsiConfig> for RsiConfigBuilder {
    #[inline]
    fn build(self) -> RsiConfig {
        RsiConfig {
            length: self.length.expect("length is required"),
        }
    }
}

/// Relative Strength Index (RSI), exponentially smoothed variant.
///
/// Measures the balance of recent gains against recent losses on a 0–100
/// scale. Close-to-close changes are partitioned by strict sign — a flat
/// bar belongs to neither side — masked to zero on the opposite side, and
/// smoothed with the non-adjusted EMA:
///
/// ```text
/// rs  = ema(gains, length) / ema(losses, length)
/// rsi = 100 − 100 / (1 + rs)
/// ```
///
/// Index 0 has no previous close to diff against and is always `None`.
///
/// # Division by zero
///
/// IEEE semantics are propagated rather than clamped: with no losses in
/// memory `rs` is `+inf` and the RSI saturates to exactly `100.0`; with
/// neither gains nor losses (an entirely flat history) `rs` is `NaN` and so
/// is the RSI, carried inside `Some(..)`. Both cases are covered by tests.
///
/// # Example
///
/// ```
/// use ohlc_ta::{Rsi, RsiConfig};
///
/// let rsi = Rsi::new(RsiConfig::default_14());
/// let close: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i)).collect();
///
/// let out = rsi.compute(&close);
/// assert_eq!(out[0], None);
/// // Gains only: saturated at 100.
/// assert!(out[1..].iter().all(|v| *v == Some(100.0)));
/// ```
#[derive(Clone, Debug)]
pub struct Rsi {
    config: RsiConfig,
}

impl Rsi {
    /// Creates a new indicator from the given config.
    #[must_use]
    pub fn new(config: RsiConfig) -> Self {
        Self { config }
    }

    /// Computes the RSI series over the close series.
    ///
    /// Output length equals input length; index 0 is `None`.
    #[must_use]
    pub fn compute(&self, close: &[Price]) -> Series {
        if close.len() < 2 {
            return vec![None; close.len()];
        }

        let mut gains = Vec::with_capacity(close.len() - 1);
        let mut losses = Vec::with_capacity(close.len() - 1);
        for pair in close.windows(2) {
            let change = pair[1] - pair[0];
            gains.push(if change > 0.0 { change } else { 0.0 });
            losses.push(if change < 0.0 { -change } else { 0.0 });
        }

        let up_avg = ema(&gains, self.config.length);
        let down_avg = ema(&losses, self.config.length);

        let mut out: Series = Vec::with_capacity(close.len());
        out.push(None);
        out.extend(up_avg.iter().zip(&down_avg).map(|(up, down)| {
            let rs = up / down;
            Some(100.0 - 100.0 / (1.0 + rs))
        }));

        out
    }
}

impl Display for Rsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RSI({})", self.config.length)
    }
}
