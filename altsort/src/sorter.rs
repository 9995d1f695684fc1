//! Sorter that alternates the direction by ordinal number.

use tracing::info;

use crate::collection::ArrayCollection;

/// Sort direction of a single array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Non-decreasing.
    Ascending,

    /// Non-increasing.
    Descending,
}

impl SortOrder {
    /// Returns the direction for the array at the 1-based ordinal number `ordinal`.
    ///
    /// Even ordinals are sorted ascending, odd ones descending.
    pub const fn for_ordinal(ordinal: usize) -> Self {
        if ordinal % 2 == 0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Sorts `values` in place in this direction.
    pub fn sort(self, values: &mut [i32]) {
        match self {
            Self::Ascending => values.sort_unstable(),
            Self::Descending => values.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}

/// Sorts every array of the collection in place, in the direction given by
/// [`SortOrder::for_ordinal`].
pub fn sort_alternating(arrays: &mut ArrayCollection) {
    for (i, values) in arrays.arrays_mut().iter_mut().enumerate() {
        SortOrder::for_ordinal(i + 1).sort(values);
    }
    info!(num_arrays = arrays.len(), "sorted arrays");
}
