use crate::Price;

/// Exponential moving average with span `n`, non-adjusted variant.
///
/// Smoothing factor `α = 2 / (n + 1)`; `ema[0] = x[0]`,
/// `ema[i] = α·x[i] + (1 − α)·ema[i−1]`. Defined from index 0 onward with
/// no warm-up markers — the seed is the first observation itself, not an
/// SMA, so there is no convergence gate.
///
/// Implemented as a left-to-right fold carrying one scalar via a single
/// fused multiply-add per element.
pub(crate) fn ema(values: &[Price], span: usize) -> Vec<Price> {
    debug_assert!(span > 0, "span must be positive");

    #[allow(clippy::cast_precision_loss)]
    let alpha = 2.0 / (span + 1) as f64;

    let mut out = Vec::with_capacity(values.len());
    let mut previous = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(previous);

    for &value in &values[1..] {
        previous = alpha.mul_add(value - previous, previous);
        out.push(previous);
    }

    out
}
