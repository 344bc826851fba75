//! Row-major enumeration of a rectangular region.

use crate::{
    index::Index,
    indexable::BoundedIndexable,
};


/// Every index in `[start, start + dimensions)`, X varying fastest.
///
/// Restartable: each call to `iter` begins again from `start`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Range<const N: usize> {
    pub start: Index<N>,
    pub dimensions: Index<N>,
}

impl<const N: usize> Range<N> {
    /// Panics if any dimension is negative.
    pub fn new(start: Index<N>, dimensions: Index<N>) -> Self {
        assert!(
            dimensions.all_ge(Index::ZERO),
            "negative range dimensions {:?}",
            dimensions,
        );
        Range { start, dimensions }
    }

    /// Range starting at zero.
    pub fn from_dimensions(dimensions: Index<N>) -> Self {
        Range::new(Index::ZERO, dimensions)
    }

    /// The full bounds of an indexable.
    pub fn of_bounds<I>(indexable: &I) -> Self
    where
        I: BoundedIndexable<N> + ?Sized,
    {
        Range::new(indexable.lower_bounds(), indexable.dimensions())
    }

    pub fn len(&self) -> usize {
        self.dimensions.volume()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: Index<N>) -> bool {
        index.all_ge(self.start)
            && (index - self.start).all_lt(self.dimensions)
    }

    pub fn iter(&self) -> RangeIter<N> {
        RangeIter {
            start: self.start,
            dimensions: self.dimensions,
            cursor: Index::ZERO,
            remaining: self.len(),
        }
    }
}

impl<'a, const N: usize> IntoIterator for &'a Range<N> {
    type Item = Index<N>;
    type IntoIter = RangeIter<N>;

    fn into_iter(self) -> RangeIter<N> {
        self.iter()
    }
}

impl<const N: usize> IntoIterator for Range<N> {
    type Item = Index<N>;
    type IntoIter = RangeIter<N>;

    fn into_iter(self) -> RangeIter<N> {
        self.iter()
    }
}


/// See `Range::iter`.
#[derive(Debug, Clone)]
pub struct RangeIter<const N: usize> {
    start: Index<N>,
    dimensions: Index<N>,
    // offset from start of the next index to yield
    cursor: Index<N>,
    remaining: usize,
}

impl<const N: usize> Iterator for RangeIter<N> {
    type Item = Index<N>;

    fn next(&mut self) -> Option<Index<N>> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.start + self.cursor;
        self.remaining -= 1;

        for axis in 0..N {
            self.cursor.0[axis] += 1;
            if self.cursor.0[axis] < self.dimensions.0[axis] {
                break;
            }
            self.cursor.0[axis] = 0;
        }

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for RangeIter<N> {}


#[test]
fn test_range_order() {
    use crate::index::idx2;

    let range = Range::new(idx2(0, 0), idx2(2, 3));
    let expected = vec![
        idx2(0, 0),
        idx2(1, 0),
        idx2(0, 1),
        idx2(1, 1),
        idx2(0, 2),
        idx2(1, 2),
    ];
    assert_eq!(range.iter().collect::<Vec<_>>(), expected);
    // restartable
    assert_eq!(range.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_range_offset_start_and_empty() {
    use crate::index::{idx1, idx3};

    let range = Range::new(idx3(-1, 5, 2), idx3(2, 1, 2));
    assert_eq!(
        range.into_iter().collect::<Vec<_>>(),
        vec![
            idx3(-1, 5, 2),
            idx3(0, 5, 2),
            idx3(-1, 5, 3),
            idx3(0, 5, 3),
        ],
    );
    assert!(range.contains(idx3(0, 5, 3)));
    assert!(!range.contains(idx3(1, 5, 3)));

    let empty = Range::new(idx1(4), idx1(0));
    assert!(empty.is_empty());
    assert_eq!(empty.iter().next(), None);
}

#[test]
#[should_panic]
fn test_range_negative_dimensions_panics() {
    use crate::index::idx2;

    Range::new(idx2(0, 0), idx2(1, -1));
}
