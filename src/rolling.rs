use crate::{Price, Series};
use std::collections::VecDeque;

/// Rolling arithmetic mean and sample standard deviation over a trailing
/// window of `period` values, inclusive of the current index.
///
/// Indices with fewer than `period` trailing values are `None` in both
/// outputs. The deviation uses the sample (n − 1) divisor; with
/// `period == 1` it is undefined, so the deviation series is all `None`
/// while the mean is still produced.
///
/// Maintained incrementally via a running sum and sum of squares. The
/// add/subtract updates may accumulate FP rounding drift over very long
/// runs, negligible for typical window sizes on financial data.
pub(crate) fn mean_and_std(values: &[Price], period: usize) -> (Series, Series) {
    debug_assert!(period > 0, "period must be positive");

    let mut mean: Series = vec![None; values.len()];
    let mut std: Series = vec![None; values.len()];

    #[allow(clippy::cast_precision_loss)]
    let n = period as f64;
    let mut sum = 0.0;
    let mut sum_of_squares = 0.0;

    for (i, &value) in values.iter().enumerate() {
        sum += value;
        sum_of_squares += value * value;

        if i >= period {
            let old = values[i - period];
            sum -= old;
            sum_of_squares -= old * old;
        }

        if i + 1 >= period {
            let avg = sum / n;
            mean[i] = Some(avg);

            if period > 1 {
                // Sample variance = (Σx² − (Σx)²/n) / (n − 1), clamped at
                // zero against rounding on near-constant windows.
                let variance = (sum_of_squares - sum * avg) / (n - 1.0);
                std[i] = Some(variance.max(0.0).sqrt());
            }
        }
    }

    (mean, std)
}

/// Rolling maximum over a trailing window of `period` values, inclusive.
///
/// Monotonic index deque: amortized O(1) per element, no per-index rescan.
pub(crate) fn max(values: &[Price], period: usize) -> Series {
    extremum(values, period, |candidate, incumbent| candidate >= incumbent)
}

/// Rolling minimum over a trailing window of `period` values, inclusive.
pub(crate) fn min(values: &[Price], period: usize) -> Series {
    extremum(values, period, |candidate, incumbent| candidate <= incumbent)
}

fn extremum(values: &[Price], period: usize, dominates: impl Fn(Price, Price) -> bool) -> Series {
    debug_assert!(period > 0, "period must be positive");

    let mut out: Series = vec![None; values.len()];
    // Indices whose values form a monotonic sequence; front is the window
    // extremum.
    let mut deque: VecDeque<usize> = VecDeque::with_capacity(period);

    for (i, &value) in values.iter().enumerate() {
        while deque
            .back()
            .is_some_and(|&j| dominates(value, values[j]))
        {
            deque.pop_back();
        }
        deque.push_back(i);

        if deque.front().is_some_and(|&j| j + period <= i) {
            deque.pop_front();
        }

        if i + 1 >= period {
            out[i] = deque.front().map(|&j| values[j]);
        }
    }

    out
}
