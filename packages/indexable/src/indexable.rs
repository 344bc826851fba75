//! The contract every container implements.

use crate::{
    index::Index,
    range::{
        Range,
        RangeIter,
    },
};


/// Container addressable by an `N`-dimensional index within reported
/// inclusive bounds.
///
/// Indexing outside of what `is_index_valid` accepts is a caller bug and
/// panics.
pub trait BoundedIndexable<const N: usize> {
    type Item;

    /// Extent per axis, never negative.
    fn dimensions(&self) -> Index<N>;

    /// Inclusive lower bound per axis.
    fn lower_bounds(&self) -> Index<N>;

    /// Inclusive upper bound per axis. Always `lower + dimensions - 1`.
    fn upper_bounds(&self) -> Index<N> {
        self.lower_bounds() + self.dimensions() - Index::ONE
    }

    fn length(&self, axis: usize) -> i32 {
        self.dimensions()[axis]
    }

    fn lower_bound(&self, axis: usize) -> i32 {
        self.lower_bounds()[axis]
    }

    fn upper_bound(&self, axis: usize) -> i32 {
        self.upper_bounds()[axis]
    }

    fn is_index_valid(&self, index: Index<N>) -> bool {
        index.is_within(self.lower_bounds(), self.upper_bounds())
    }

    fn get(&self, index: Index<N>) -> Self::Item;

    fn set(&mut self, index: Index<N>, val: Self::Item);

    /// Every index within bounds together with its value, X varying
    /// fastest.
    fn entries(&self) -> Entries<'_, Self, N>
    where
        Self: Sized,
    {
        Entries {
            indexable: self,
            indices: Range::of_bounds(self).iter(),
        }
    }
}

/// Panic with a descriptive message unless `indexable` accepts `index`.
pub(crate) fn assert_index_valid<I, const N: usize>(
    indexable: &I,
    index: Index<N>,
)
where
    I: BoundedIndexable<N> + ?Sized,
{
    assert!(
        indexable.is_index_valid(index),
        "index {:?} out of range (bounds {:?}..={:?})",
        index,
        indexable.lower_bounds(),
        indexable.upper_bounds(),
    );
}


/// See `BoundedIndexable::entries`.
#[derive(Debug, Clone)]
pub struct Entries<'a, I, const N: usize> {
    indexable: &'a I,
    indices: RangeIter<N>,
}

impl<'a, I, const N: usize> Iterator for Entries<'a, I, N>
where
    I: BoundedIndexable<N>,
{
    type Item = (Index<N>, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        self.indices
            .next()
            .map(|index| (index, self.indexable.get(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a, I, const N: usize> ExactSizeIterator for Entries<'a, I, N>
where
    I: BoundedIndexable<N>,
{}
