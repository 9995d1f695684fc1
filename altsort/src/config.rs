//! Compiled-in limits and generation settings.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Minimum length of a generated array.
pub const MIN_ARRAY_SIZE: usize = 1;

/// Maximum length of a generated array.
pub const MAX_ARRAY_SIZE: usize = 256;

/// Minimum number of arrays a user may request.
pub const MIN_NUM_ARRAYS: usize = 0;

/// Maximum number of arrays a user may request.
pub const MAX_NUM_ARRAYS: usize = 100;

// Array sizes are pairwise distinct, so the size range must hold at least as many values as the
// largest possible number of arrays.
const _: () = assert!(MIN_ARRAY_SIZE <= MAX_ARRAY_SIZE);
const _: () = assert!(MIN_NUM_ARRAYS <= MAX_NUM_ARRAYS);
const _: () = assert!(MAX_NUM_ARRAYS <= MAX_ARRAY_SIZE - MIN_ARRAY_SIZE + 1);

/// Returns the inclusive range of array lengths.
pub const fn array_size_range() -> RangeInclusive<usize> {
    MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE
}

/// Returns the inclusive range of accepted array counts.
pub const fn num_arrays_range() -> RangeInclusive<usize> {
    MIN_NUM_ARRAYS..=MAX_NUM_ARRAYS
}

/// Strategy for drawing distinct array sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeStrategy {
    /// Draws uniformly from the range and discards values already drawn.
    #[default]
    Rejection,

    /// Shuffles the whole range and takes a prefix.
    Shuffle,
}

impl FromStr for SizeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rejection" => Ok(Self::Rejection),
            "shuffle" => Ok(Self::Shuffle),
            _ => Err(format!(
                "{s} is not a size strategy (expected `rejection` or `shuffle`)"
            )),
        }
    }
}

impl fmt::Display for SizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rejection => write!(f, "rejection"),
            Self::Shuffle => write!(f, "shuffle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            SizeStrategy::Rejection,
            "rejection".parse::<SizeStrategy>().unwrap()
        );
        assert_eq!(
            SizeStrategy::Shuffle,
            "shuffle".parse::<SizeStrategy>().unwrap()
        );
        assert!("Shuffle".parse::<SizeStrategy>().is_err());
        assert!("".parse::<SizeStrategy>().is_err());
    }

    #[test]
    fn test_strategy_display_parses_back() {
        for strategy in [SizeStrategy::Rejection, SizeStrategy::Shuffle] {
            assert_eq!(strategy, strategy.to_string().parse().unwrap());
        }
    }
}
