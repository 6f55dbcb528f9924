//! Batch technical analysis indicators for Rust.
//!
//! Four indicators — Bollinger Bands ([`Bb`]), MACD ([`Macd`]), RSI
//! ([`Rsi`]), and Ichimoku Kinko Hyo ([`Ichimoku`]) — computed one-shot
//! over whole price series. Each call takes ordered, chronological slices
//! of `f64` prices and returns derived series of the same length, aligned
//! index-for-index with the input.
//!
//! Indices where a value is undefined — a rolling window not yet full, no
//! previous close to diff against, an index vacated by the Ichimoku shift —
//! carry `None`. MACD output is defined from index 0 onward and is returned
//! as plain `Vec<f64>`.
//!
//! The indicators are pure: they never mutate their inputs, hold no state
//! between calls, and recomputation over identical input is bit-identical.
//! Sourcing and aligning the price data, and rendering or acting on the
//! output, are the caller's concern.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::{Bb, BbConfig};
//!
//! let close: Vec<f64> = (0..40).map(f64::from).collect();
//! let bands = Bb::new(BbConfig::default_20()).compute(&close);
//!
//! assert_eq!(bands.middle().len(), close.len());
//! assert!(bands.upper2()[19].is_some());
//! ```

mod bb;
mod ema;
mod error;
mod ichimoku;
mod indicator;
mod macd;
mod rolling;
mod rsi;
mod series;

pub use crate::error::Error;
pub use crate::indicator::{IndicatorConfig, IndicatorConfigBuilder};
pub use crate::series::{Price, Series};

pub use crate::bb::{Bb, BbConfig, BbConfigBuilder, BbSeries};
pub use crate::ichimoku::{Ichimoku, IchimokuSeries};
pub use crate::macd::{Macd, MacdConfig, MacdConfigBuilder, MacdSeries};
pub use crate::rsi::{Rsi, RsiConfig, RsiConfigBuilder};

#[cfg(test)]
mod test_util;

#[cfg(test)]
mod alignment {
    use super::{
        Bb, BbConfig, Ichimoku, IndicatorConfig, IndicatorConfigBuilder, Macd, MacdConfig, Price,
        Rsi, RsiConfig,
    };
    use crate::test_util::nz;

    /// Every indicator returns series of the same length as its input,
    /// whatever the input size.
    #[test]
    fn all_outputs_align_with_input() {
        for n in [0_usize, 1, 5, 30, 100] {
            #[allow(clippy::cast_precision_loss)]
            let close: Vec<Price> = (0..n).map(|i| 100.0 + (i as f64).sin()).collect();
            let high: Vec<Price> = close.iter().map(|c| c + 1.0).collect();
            let low: Vec<Price> = close.iter().map(|c| c - 1.0).collect();

            let bands = Bb::new(BbConfig::builder().length(nz(5)).build()).compute(&close);
            assert_eq!(bands.middle().len(), n);

            let macd = Macd::new(MacdConfig::default_12_26_9()).compute(&close);
            assert_eq!(macd.histogram().len(), n);

            let rsi = Rsi::new(RsiConfig::default_14()).compute(&close);
            assert_eq!(rsi.len(), n);

            let lines = Ichimoku::new()
                .compute(&close, &high, &low, &close)
                .unwrap();
            assert_eq!(lines.senkou_span2().len(), n);
        }
    }
}
