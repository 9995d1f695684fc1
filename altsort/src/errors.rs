//! Definition of errors.

use std::ops::RangeInclusive;

use thiserror::Error;

/// A specialized Result type for altsort.
pub type Result<T, E = AltsortError> = std::result::Result<T, E>;

/// The error type for altsort.
///
/// Every variant is fatal: the pipeline stops and the error is reported to the caller.
/// Recoverable input problems are [`ValidationError`](crate::input::ValidationError)s and never
/// leave the input reader.
#[derive(Debug, Error)]
pub enum AltsortError {
    /// The input ended before a valid value was read.
    #[error("Failed to read value")]
    InputExhausted,

    /// The error variant for [`GenerationError`].
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The error variant for [`rand::Error`].
    #[error(transparent)]
    Rand(#[from] rand::Error),

    /// The error variant for [`std::io::Error`].
    #[error(transparent)]
    StdIo(#[from] std::io::Error),
}

impl AltsortError {
    pub(crate) fn generation(count: usize, range: &RangeInclusive<usize>) -> Self {
        Self::Generation(GenerationError {
            count,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Error used when a range holds fewer distinct values than requested.
#[derive(Debug, Error)]
#[error("Can't generate {count} unique numbers in the range from {min} to {max}")]
pub struct GenerationError {
    /// Number of requested values.
    pub(crate) count: usize,

    /// Lower bound of the range.
    pub(crate) min: usize,

    /// Upper bound of the range.
    pub(crate) max: usize,
}

impl GenerationError {
    /// Returns the number of requested values.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the range the values were requested from.
    pub const fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}
