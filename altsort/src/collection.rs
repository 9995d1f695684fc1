//! Ordered collection of integer arrays.

use std::io::Write;
use std::ops::Index;

use crate::printer;

/// Ordered collection of integer arrays.
///
/// The position of an array is significant: the array at index `i` has the 1-based ordinal
/// number `i + 1`, which decides its sort direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayCollection {
    arrays: Vec<Vec<i32>>,
}

impl ArrayCollection {
    /// Creates a collection holding the given arrays in order.
    pub const fn from_arrays(arrays: Vec<Vec<i32>>) -> Self {
        Self { arrays }
    }

    /// Returns the number of arrays.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Checks if the collection holds no arrays.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Returns a slice of the arrays.
    #[inline(always)]
    pub fn arrays(&self) -> &[Vec<i32>] {
        &self.arrays
    }

    pub(crate) fn arrays_mut(&mut self) -> &mut [Vec<i32>] {
        &mut self.arrays
    }

    /// Returns an iterator over the arrays in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<i32>> {
        self.arrays.iter()
    }

    /// Consumes the collection and returns the arrays.
    pub fn into_arrays(self) -> Vec<Vec<i32>> {
        self.arrays
    }

    /// Writes the collection in the dump format of [`printer::write_arrays`].
    ///
    /// # Errors
    ///
    /// [`std::io::Error`] is returned when writing fails.
    pub fn write<W>(&self, wtr: W) -> std::io::Result<()>
    where
        W: Write,
    {
        printer::write_arrays(wtr, self.arrays())
    }
}

impl Index<usize> for ArrayCollection {
    type Output = [i32];

    fn index(&self, index: usize) -> &Self::Output {
        &self.arrays[index]
    }
}

impl<'a> IntoIterator for &'a ArrayCollection {
    type Item = &'a Vec<i32>;
    type IntoIter = std::slice::Iter<'a, Vec<i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
