/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// An indicator output series, aligned index-for-index with its input.
///
/// `None` marks an index where the value is undefined: not enough trailing
/// history to fill the window, no previous close to diff against, or a
/// boundary vacated by a shift. Non-finite values produced by arithmetic
/// (`inf`, `NaN`) are values, not markers, and appear inside `Some(..)`.
pub type Series = Vec<Option<Price>>;

/// Reindexes `values` forward by `offset`: `out[i] = values[i - offset]`.
///
/// The first `offset` indices become `None`; the trailing `offset` input
/// values fall past the index range and are discarded. Output length equals
/// input length.
pub(crate) fn shift_forward(values: &Series, offset: usize) -> Series {
    let mut out: Series = vec![None; values.len()];
    for i in offset..values.len() {
        out[i] = values[i - offset];
    }
    out
}

/// Reindexes `values` backward by `offset`: `out[i] = values[i + offset]`.
///
/// The trailing `offset` indices become `None`. Output length equals input
/// length.
pub(crate) fn shift_backward(values: &Series, offset: usize) -> Series {
    let mut out: Series = vec![None; values.len()];
    for i in 0..values.len().saturating_sub(offset) {
        out[i] = values[i + offset];
    }
    out
}
