//! Generator of arrays filled with random values.

use rand::Rng;
use tracing::info;

use crate::collection::ArrayCollection;

/// Builds one array per entry of `sizes`, in the same order.
///
/// Every cell is drawn independently over the full range of `i32`.
pub fn generate_arrays<R>(sizes: &[usize], rng: &mut R) -> ArrayCollection
where
    R: Rng + ?Sized,
{
    let arrays: Vec<Vec<i32>> = sizes
        .iter()
        .map(|&size| (0..size).map(|_| rng.gen::<i32>()).collect())
        .collect();
    info!(num_arrays = sizes.len(), "generated arrays");
    ArrayCollection::from_arrays(arrays)
}
