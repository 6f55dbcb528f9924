use std::fmt::Display;

use crate::{Error, Price, Series, rolling, series};

/// Ichimoku output: the five lines of the Ichimoku Kinko Hyo chart.
///
/// Every series has the same length as the input and is `None` where its
/// window is underfull or where a shift vacated the index.
#[derive(Debug, Clone, PartialEq)]
pub struct IchimokuSeries {
    kijun: Series,
    tenkan: Series,
    senkou_span1: Series,
    senkou_span2: Series,
    chikou_span: Series,
}

impl IchimokuSeries {
    /// Base line: midpoint of the 26-bar high/low range.
    #[inline]
    #[must_use]
    pub fn kijun(&self) -> &Series {
        &self.kijun
    }

    /// Conversion line: midpoint of the 9-bar high/low range.
    #[inline]
    #[must_use]
    pub fn tenkan(&self) -> &Series {
        &self.tenkan
    }

    /// Leading span A: midpoint of kijun and tenkan, shifted 26 bars
    /// forward.
    #[inline]
    #[must_use]
    pub fn senkou_span1(&self) -> &Series {
        &self.senkou_span1
    }

    /// Leading span B: midpoint of the 52-bar high/low range, shifted 26
    /// bars forward.
    #[inline]
    #[must_use]
    pub fn senkou_span2(&self) -> &Series {
        &self.senkou_span2
    }

    /// Lagging span: the close shifted 26 bars backward.
    #[inline]
    #[must_use]
    pub fn chikou_span(&self) -> &Series {
        &self.chikou_span
    }
}

/// Ichimoku Kinko Hyo.
///
/// Multi-horizon high/low midpoint lines with the classic fixed parameters:
/// 9 (tenkan), 26 (kijun and both shifts), 52 (senkou span B). The
/// parameters are part of the chart's definition, so there is no config
/// type.
///
/// # Shift policy
///
/// The senkou spans conceptually project 26 bars past the end of the input.
/// This implementation truncates to the input index range: the first 26
/// indices of each span are `None` and the trailing 26 projections are
/// discarded, so output length always equals input length. The chikou span
/// likewise has `None` at its trailing 26 indices, where no future close
/// exists.
///
/// # Example
///
/// ```
/// use ohlc_ta::Ichimoku;
///
/// let n = 80;
/// let high: Vec<f64> = (0..n).map(|i| 101.0 + f64::from(i)).collect();
/// let low: Vec<f64> = (0..n).map(|i| 99.0 + f64::from(i)).collect();
/// let close: Vec<f64> = (0..n).map(|i| 100.0 + f64::from(i)).collect();
/// let open = close.clone();
///
/// let lines = Ichimoku::new().compute(&open, &high, &low, &close)?;
/// assert_eq!(lines.chikou_span()[0], Some(close[26]));
/// # Ok::<(), ohlc_ta::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Ichimoku;

impl Ichimoku {
    /// Tenkan (conversion line) window.
    pub const TENKAN_LENGTH: usize = 9;
    /// Kijun (base line) window.
    pub const KIJUN_LENGTH: usize = 26;
    /// Senkou span B window.
    pub const SENKOU_SPAN2_LENGTH: usize = 52;
    /// Forward shift of the senkou spans and backward shift of the chikou
    /// span.
    pub const SHIFT: usize = 26;

    /// Creates the indicator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the five Ichimoku lines.
    ///
    /// The four inputs must be index-aligned series of equal length.
    /// `open` feeds no computation; it is accepted and validated for call
    /// symmetry with OHLC feeds.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the slices differ in length.
    pub fn compute(
        &self,
        open: &[Price],
        high: &[Price],
        low: &[Price],
        close: &[Price],
    ) -> Result<IchimokuSeries, Error> {
        if open.len() != close.len() || high.len() != close.len() || low.len() != close.len() {
            return Err(Error::LengthMismatch {
                open: open.len(),
                high: high.len(),
                low: low.len(),
                close: close.len(),
            });
        }

        let kijun = range_midpoint(high, low, Self::KIJUN_LENGTH);
        let tenkan = range_midpoint(high, low, Self::TENKAN_LENGTH);

        let senkou_span1_raw: Series = kijun
            .iter()
            .zip(&tenkan)
            .map(|(k, t)| match (k, t) {
                (Some(k), Some(t)) => Some(f64::midpoint(*k, *t)),
                _ => None,
            })
            .collect();
        let senkou_span1 = series::shift_forward(&senkou_span1_raw, Self::SHIFT);

        let senkou_span2_raw = range_midpoint(high, low, Self::SENKOU_SPAN2_LENGTH);
        let senkou_span2 = series::shift_forward(&senkou_span2_raw, Self::SHIFT);

        let close_series: Series = close.iter().copied().map(Some).collect();
        let chikou_span = series::shift_backward(&close_series, Self::SHIFT);

        Ok(IchimokuSeries {
            kijun,
            tenkan,
            senkou_span1,
            senkou_span2,
            chikou_span,
        })
    }
}

impl Display for Ichimoku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ichimoku({}, {}, {})",
            Self::TENKAN_LENGTH,
            Self::KIJUN_LENGTH,
            Self::SENKOU_SPAN2_LENGTH
        )
    }
}

/// Midpoint of the rolling high maximum and low minimum over `period` bars.
fn range_midpoint(high: &[Price], low: &[Price], period: usize) -> Series {
    rolling::max(high, period)
        .iter()
        .zip(&rolling::min(low, period))
        .map(|(max, min)| match (max, min) {
            (Some(max), Some(min)) => Some(f64::midpoint(*max, *min)),
            _ => None,
        })
        .collect()
}
