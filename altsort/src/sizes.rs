//! Generator of pairwise distinct array sizes.

use std::ops::RangeInclusive;

use hashbrown::HashSet;
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::SizeStrategy;
use crate::errors::{AltsortError, Result};

/// Generates `n` pairwise distinct integers within `range`.
///
/// The order of the result is the order in which the values were drawn, so it only depends on
/// the state of `rng`.
///
/// # Arguments
///
///  - `n`: Number of values.
///  - `range`: Inclusive range the values are drawn from.
///  - `strategy`: How the values are drawn.
///  - `rng`: Source of randomness.
///
/// # Errors
///
/// [`AltsortError::Generation`] is returned when `range` holds fewer than `n` values.
pub fn generate_unique_sizes<R>(
    n: usize,
    range: &RangeInclusive<usize>,
    strategy: SizeStrategy,
    rng: &mut R,
) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    let available = range
        .end()
        .checked_sub(*range.start())
        .map_or(0, |d| d.saturating_add(1));
    if available < n {
        return Err(AltsortError::generation(n, range));
    }
    if n == 0 {
        return Ok(vec![]);
    }

    let sizes = match strategy {
        SizeStrategy::Rejection => draw_with_rejection(n, range, rng),
        SizeStrategy::Shuffle => draw_with_shuffle(n, range, rng),
    };
    debug!(?strategy, ?sizes, "generated array sizes");
    Ok(sizes)
}

fn draw_with_rejection<R>(n: usize, range: &RangeInclusive<usize>, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let dist = Uniform::new_inclusive(*range.start(), *range.end());
    let mut used = HashSet::with_capacity(n);
    let mut sizes = Vec::with_capacity(n);
    while sizes.len() != n {
        let size = dist.sample(rng);
        if used.insert(size) {
            sizes.push(size);
        }
    }
    sizes
}

fn draw_with_shuffle<R>(n: usize, range: &RangeInclusive<usize>, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut candidates: Vec<usize> = range.clone().collect();
    let (picked, _) = candidates.partial_shuffle(rng, n);
    picked.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const STRATEGIES: [SizeStrategy; 2] = [SizeStrategy::Rejection, SizeStrategy::Shuffle];

    fn assert_distinct_within(sizes: &[usize], range: &RangeInclusive<usize>) {
        let set: HashSet<_> = sizes.iter().collect();
        assert_eq!(sizes.len(), set.len(), "{sizes:?}");
        assert!(sizes.iter().all(|s| range.contains(s)), "{sizes:?}");
    }

    #[test]
    fn test_generate_every_count() {
        let range = 1..=256;
        for strategy in STRATEGIES {
            let mut rng = StdRng::seed_from_u64(0);
            for n in 0..=100 {
                let sizes = generate_unique_sizes(n, &range, strategy, &mut rng).unwrap();
                assert_eq!(n, sizes.len());
                assert_distinct_within(&sizes, &range);
            }
        }
    }

    #[test]
    fn test_generate_whole_range() {
        let range = 3..=12;
        for strategy in STRATEGIES {
            let mut rng = StdRng::seed_from_u64(1);
            let mut sizes = generate_unique_sizes(10, &range, strategy, &mut rng).unwrap();
            sizes.sort_unstable();
            assert_eq!((3..=12).collect::<Vec<_>>(), sizes);
        }
    }

    #[test]
    fn test_generate_zero_from_empty_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let range = 5..=4;
        let mut rng = StdRng::seed_from_u64(2);
        let sizes = generate_unique_sizes(0, &range, SizeStrategy::Rejection, &mut rng).unwrap();
        assert!(sizes.is_empty());
    }

    #[test]
    fn test_generate_too_many() {
        let range = 1..=4;
        for strategy in STRATEGIES {
            let mut rng = StdRng::seed_from_u64(3);
            let result = generate_unique_sizes(5, &range, strategy, &mut rng);
            match &result {
                Err(AltsortError::Generation(e)) => {
                    assert_eq!(5, e.count());
                    assert_eq!(1..=4, e.range());
                }
                _ => panic!("unexpected result: {result:?}"),
            }
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let range = 1..=256;
        for strategy in STRATEGIES {
            let a = generate_unique_sizes(50, &range, strategy, &mut StdRng::seed_from_u64(7));
            let b = generate_unique_sizes(50, &range, strategy, &mut StdRng::seed_from_u64(7));
            assert_eq!(a.unwrap(), b.unwrap());
        }
    }
}
