use thiserror::Error;

/// Errors reported by batch indicator computations.
///
/// Window underflow is not an error: an input shorter than the window
/// produces a series of `None` markers. The only failure mode is input the
/// computation cannot interpret at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input series that must be index-aligned differ in length.
    #[error("input series length mismatch: open={open}, high={high}, low={low}, close={close}")]
    LengthMismatch {
        /// Length of the `open` series.
        open: usize,
        /// Length of the `high` series.
        high: usize,
        /// Length of the `low` series.
        low: usize,
        /// Length of the `close` series.
        close: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_names_all_four_lengths() {
        let err = Error::LengthMismatch {
            open: 4,
            high: 4,
            low: 3,
            close: 4,
        };
        assert_eq!(
            err.to_string(),
            "input series length mismatch: open=4, high=4, low=3, close=4"
        );
    }
}
