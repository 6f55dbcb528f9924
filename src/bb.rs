use std::{fmt::Display, num::NonZero};

use crate::{IndicatorConfig, IndicatorConfigBuilder, Price, Series, rolling};

/// Configuration for the Bollinger Bands ([`Bb`]) indicator.
///
/// # Example
///
/// ```
/// use ohlc_ta::BbConfig;
/// use std::num::NonZero;
/// # use ohlc_ta::{IndicatorConfig, IndicatorConfigBuilder};
///
/// let config = BbConfig::builder()
///     .length(NonZero::new(20).unwrap())
///     .build();
///
/// assert_eq!(config.length(), 20);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BbConfig {
    length: usize,
}

impl IndicatorConfig for BbConfig {
    type Builder = BbConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        BbConfigBuilder::new()
    }
}

impl BbConfig {
    /// Window length (number of bars).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// BB(20) — the standard Bollinger Bands setting.
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn default_20() -> Self {
        Self::builder().length(NonZero::new(20).unwrap()).build()
    }
}

impl Display for BbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BbConfig({})", self.length)
    }
}

/// Builder for [`BbConfig`].
///
/// Length must be set before calling
/// [`build`](IndicatorConfigBuilder::build).
pub struct BbConfigBuilder {
    length: Option<usize>,
}

impl BbConfigBuilder {
    fn new() -> Self {
        Self { length: None }
    }

    /// Sets the rolling window length.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length.replace(length.get());
        self
    }
}

impl IndicatorConfigBuilder<BbConfig> for BbConfigBuilder {
    #[inline]
    fn build(self) -> BbConfig {
        BbConfig {
            length: self.length.expect("length is required"),
        }
    }
}

/// Bollinger Bands output: the middle band and three envelope pairs.
///
/// Every series is aligned index-for-index with the input close series.
/// The first `length − 1` indices are `None` in all seven series.
///
/// ```text
/// upper_k = MA + k × σ
/// middle  = MA
/// lower_k = MA − k × σ        k ∈ {1, 2, 3}
/// ```
///
/// `σ` is the sample standard deviation of the trailing window. Prices fall
/// inside ±1σ about 68% of the time, ±2σ about 95%, ±3σ about 99.7%.
#[derive(Debug, Clone, PartialEq)]
pub struct BbSeries {
    middle: Series,
    upper1: Series,
    lower1: Series,
    upper2: Series,
    lower2: Series,
    upper3: Series,
    lower3: Series,
}

impl BbSeries {
    /// Middle band: rolling mean of the window.
    #[inline]
    #[must_use]
    pub fn middle(&self) -> &Series {
        &self.middle
    }

    /// Upper band at one standard deviation.
    #[inline]
    #[must_use]
    pub fn upper1(&self) -> &Series {
        &self.upper1
    }

    /// Lower band at one standard deviation.
    #[inline]
    #[must_use]
    pub fn lower1(&self) -> &Series {
        &self.lower1
    }

    /// Upper band at two standard deviations.
    #[inline]
    #[must_use]
    pub fn upper2(&self) -> &Series {
        &self.upper2
    }

    /// Lower band at two standard deviations.
    #[inline]
    #[must_use]
    pub fn lower2(&self) -> &Series {
        &self.lower2
    }

    /// Upper band at three standard deviations.
    #[inline]
    #[must_use]
    pub fn upper3(&self) -> &Series {
        &self.upper3
    }

    /// Lower band at three standard deviations.
    #[inline]
    #[must_use]
    pub fn lower3(&self) -> &Series {
        &self.lower3
    }
}

/// Bollinger Bands (BB).
///
/// A volatility indicator: a rolling mean with envelope bands offset by one,
/// two, and three sample standard deviations of the trailing window.
///
/// The window scan carries a running sum and sum of squares, so the whole
/// computation is a single O(N) pass. The only non-constant per-index
/// operation is `sqrt`, which is unavoidable.
///
/// With `length == 1` the sample deviation is undefined; the band series
/// are all `None` while the middle band equals the input.
///
/// # Example
///
/// ```
/// use ohlc_ta::{Bb, BbConfig};
///
/// let bb = Bb::new(BbConfig::default_20());
/// let close: Vec<f64> = (0..40).map(f64::from).collect();
///
/// let bands = bb.compute(&close);
/// assert_eq!(bands.middle().len(), close.len());
/// assert!(bands.upper2()[18].is_none()); // window not yet full
/// assert!(bands.upper2()[19].is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Bb {
    config: BbConfig,
}

impl Bb {
    /// Creates a new indicator from the given config.
    #[must_use]
    pub fn new(config: BbConfig) -> Self {
        Self { config }
    }

    /// Computes all seven band series over the close series.
    ///
    /// Output lengths equal the input length; indices with fewer than
    /// `length` trailing values are `None`.
    #[must_use]
    pub fn compute(&self, close: &[Price]) -> BbSeries {
        let (mean, std) = rolling::mean_and_std(close, self.config.length);

        let band = |k: f64| -> (Series, Series) {
            mean.iter()
                .zip(&std)
                .map(|(m, s)| match (m, s) {
                    (Some(m), Some(s)) => (Some(k.mul_add(*s, *m)), Some(k.mul_add(-(*s), *m))),
                    _ => (None, None),
                })
                .unzip()
        };

        let (upper1, lower1) = band(1.0);
        let (upper2, lower2) = band(2.0);
        let (upper3, lower3) = band(3.0);

        BbSeries {
            middle: mean,
            upper1,
            lower1,
            upper2,
            lower2,
            upper3,
            lower3,
        }
    }
}

impl Display for Bb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BB({})", self.config.length)
    }
}
