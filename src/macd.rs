use std::{fmt::Display, num::NonZero};

use crate::{IndicatorConfig, IndicatorConfigBuilder, Price, ema::ema};

/// Configuration for the Moving Average Convergence/Divergence ([`Macd`])
/// indicator.
///
/// Three EMA spans: short, long, and signal. The builder defaults to the
/// conventional 12/26/9 setting; each span can be overridden individually.
///
/// # Example
///
/// ```
/// use ohlc_ta::MacdConfig;
/// use std::num::NonZero;
/// # use ohlc_ta::{IndicatorConfig, IndicatorConfigBuilder};
///
/// let config = MacdConfig::builder()
///     .short(NonZero::new(5).unwrap())
///     .long(NonZero::new(35).unwrap())
///     .build();
///
/// assert_eq!(config.short(), 5);
/// assert_eq!(config.long(), 35);
/// assert_eq!(config.signal(), 9);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct MacdConfig {
    short: usize,
    long: usize,
    signal: usize,
}

impl IndicatorConfig for MacdConfig {
    type Builder = MacdConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        MacdConfigBuilder::new()
    }
}

impl MacdConfig {
    /// Short EMA span.
    #[inline]
    #[must_use]
    pub fn short(&self) -> usize {
        self.short
    }

    /// Long EMA span.
    #[inline]
    #[must_use]
    pub fn long(&self) -> usize {
        self.long
    }

    /// Signal-line EMA span.
    #[inline]
    #[must_use]
    pub fn signal(&self) -> usize {
        self.signal
    }

    /// MACD(12, 26, 9) — the conventional setting.
    #[must_use]
    pub fn default_12_26_9() -> Self {
        Self::builder().build()
    }
}

impl Display for MacdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MacdConfig({}, {}, {})", self.short, self.long, self.signal)
    }
}

/// Builder for [`MacdConfig`].
///
/// Defaults: short = 12, long = 26, signal = 9.
pub struct MacdConfigBuilder {
    short: usize,
    long: usize,
    signal: usize,
}

impl MacdConfigBuilder {
    fn new() -> Self {
        Self {
            short: 12,
            long: 26,
            signal: 9,
        }
    }

    /// Sets the short EMA span.
    #[inline]
    #[must_use]
    pub fn short(mut self, span: NonZero<usize>) -> Self {
        self.short = span.get();
        self
    }

    /// Sets the long EMA span.
    #[inline]
    #[must_use]
    pub fn long(mut self, span: NonZero<usize>) -> Self {
        self.long = span.get();
        self
    }

    /// Sets the signal-line EMA span.
    #[inline]
    #[must_use]
    pub fn signal(mut self, span: NonZero<usize>) -> Self {
        self.signal = span.get();
        self
    }
}

impl IndicatorConfigBuilder<MacdConfig> for MacdConfigBuilder {
    #[inline]
    fn build(self) -> MacdConfig {
        MacdConfig {
            short: self.short,
            long: self.long,
            signal: self.signal,
        }
    }
}

/// MACD output: the oscillator line, its signal line, and the histogram
/// with its sign split.
///
/// All five series are plain `Vec<Price>`: under the non-adjusted EMA
/// recurrence every index from 0 onward is defined, so no missing-value
/// marker is needed. Lengths equal the input length.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    macd: Vec<Price>,
    signal: Vec<Price>,
    histogram: Vec<Price>,
    histogram_positive: Vec<Price>,
    histogram_negative: Vec<Price>,
}

impl MacdSeries {
    /// MACD line: `ema(close, short) − ema(close, long)`.
    #[inline]
    #[must_use]
    pub fn macd(&self) -> &[Price] {
        &self.macd
    }

    /// Signal line: EMA of the MACD line.
    #[inline]
    #[must_use]
    pub fn signal(&self) -> &[Price] {
        &self.signal
    }

    /// Histogram: `macd − signal`.
    #[inline]
    #[must_use]
    pub fn histogram(&self) -> &[Price] {
        &self.histogram
    }

    /// Positive part of the histogram; zero where the histogram is not
    /// strictly positive.
    #[inline]
    #[must_use]
    pub fn histogram_positive(&self) -> &[Price] {
        &self.histogram_positive
    }

    /// Negative part of the histogram; zero where the histogram is not
    /// strictly negative.
    #[inline]
    #[must_use]
    pub fn histogram_negative(&self) -> &[Price] {
        &self.histogram_negative
    }
}

/// Moving Average Convergence/Divergence (MACD).
///
/// A momentum oscillator: the difference of a short and a long EMA, with an
/// EMA signal line over that difference. The histogram (MACD − signal) is
/// additionally split into its positive and negative parts, the form
/// charting front-ends plot as two-colour bars.
///
/// MACD/signal golden cross is the classic buy signal, dead cross the sell
/// signal.
///
/// # Example
///
/// ```
/// use ohlc_ta::{Macd, MacdConfig};
///
/// let macd = Macd::new(MacdConfig::default_12_26_9());
/// let close: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i)).collect();
///
/// let out = macd.compute(&close);
/// // Rising prices keep the short EMA above the long one.
/// assert!(out.macd()[1..].iter().all(|&v| v > 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct Macd {
    config: MacdConfig,
}

impl Macd {
    /// Creates a new indicator from the given config.
    #[must_use]
    pub fn new(config: MacdConfig) -> Self {
        Self { config }
    }

    /// Computes all five MACD series over the close series.
    #[must_use]
    pub fn compute(&self, close: &[Price]) -> MacdSeries {
        let ema_short = ema(close, self.config.short);
        let ema_long = ema(close, self.config.long);

        let macd: Vec<Price> = ema_short
            .iter()
            .zip(&ema_long)
            .map(|(s, l)| s - l)
            .collect();
        let signal = ema(&macd, self.config.signal);

        let histogram: Vec<Price> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();
        let histogram_positive = histogram.iter().map(|&h| if h > 0.0 { h } else { 0.0 }).collect();
        let histogram_negative = histogram.iter().map(|&h| if h < 0.0 { h } else { 0.0 }).collect();

        MacdSeries {
            macd,
            signal,
            histogram,
            histogram_positive,
            histogram_negative,
        }
    }
}

impl Display for Macd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MACD({}, {}, {})",
            self.config.short, self.config.long, self.config.signal
        )
    }
}
