//! Fixed-size arrays over flat storage.

use crate::{
    index::Index,
    indexable::{
        BoundedIndexable,
        assert_index_valid,
    },
    range::{
        Range,
        RangeIter,
    },
};
use std::ops;


/// Array of constant shape, stored flat with X varying fastest.
///
/// Bounds may start anywhere, but default to zero.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FixedArray<T, const N: usize> {
    lower: Index<N>,
    dimensions: Index<N>,
    elems: Box<[T]>,
}

pub type FixedArray1D<T> = FixedArray<T, 1>;
pub type FixedArray2D<T> = FixedArray<T, 2>;
pub type FixedArray3D<T> = FixedArray<T, 3>;
pub type FixedArray4D<T> = FixedArray<T, 4>;

impl<T, const N: usize> FixedArray<T, N> {
    /// Construct zero-bounded with default values.
    ///
    /// Panics if any dimension is negative.
    pub fn new(dimensions: Index<N>) -> Self
    where
        T: Default,
    {
        Self::from_fn(Index::ZERO, dimensions, |_| T::default())
    }

    /// Construct zero-bounded with clones of `val`.
    pub fn filled(dimensions: Index<N>, val: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(Index::ZERO, dimensions, |_| val.clone())
    }

    /// Construct by calling `f` with each index in row-major order.
    ///
    /// Panics if any dimension is negative.
    pub fn from_fn<F>(lower: Index<N>, dimensions: Index<N>, mut f: F) -> Self
    where
        F: FnMut(Index<N>) -> T,
    {
        let elems = Range::new(lower, dimensions)
            .iter()
            .map(|index| f(index))
            .collect();
        FixedArray { lower, dimensions, elems }
    }

    /// Wrap flat row-major storage.
    ///
    /// Panics if `elems` has the wrong length for `dimensions`.
    pub fn from_vec(lower: Index<N>, dimensions: Index<N>, elems: Vec<T>) -> Self {
        assert!(
            dimensions.all_ge(Index::ZERO),
            "negative dimensions {:?}",
            dimensions,
        );
        assert_eq!(
            elems.len(),
            dimensions.volume(),
            "flat storage length does not match dimensions {:?}",
            dimensions,
        );
        FixedArray {
            lower,
            dimensions,
            elems: elems.into_boxed_slice(),
        }
    }

    /// Move the bounds so they start at `lower`, keeping contents.
    pub fn with_lower_bounds(self, lower: Index<N>) -> Self {
        FixedArray { lower, ..self }
    }

    pub fn dimensions(&self) -> Index<N> {
        self.dimensions
    }

    pub fn lower_bounds(&self) -> Index<N> {
        self.lower
    }

    pub fn upper_bounds(&self) -> Index<N> {
        self.lower + self.dimensions - Index::ONE
    }

    pub fn contains(&self, index: Index<N>) -> bool {
        index.is_within(self.lower, self.upper_bounds())
    }

    /// Flat position of `index`, or `None` if out of bounds.
    pub fn flat_index(&self, index: Index<N>) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let mut flat = 0;
        let mut stride = 1;
        for axis in 0..N {
            flat += (index.0[axis] - self.lower.0[axis]) as usize * stride;
            stride *= self.dimensions.0[axis] as usize;
        }
        Some(flat)
    }

    pub fn get_ref(&self, index: Index<N>) -> Option<&T> {
        self.flat_index(index).map(|i| &self.elems[i])
    }

    pub fn get_ref_mut(&mut self, index: Index<N>) -> Option<&mut T> {
        self.flat_index(index).map(move |i| &mut self.elems[i])
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Every index with a reference to its element, X varying fastest.
    pub fn iter(&self) -> impl Iterator<Item=(Index<N>, &T)> + '_ {
        self.indices().zip(self.elems.iter())
    }

    /// Every index with its element, consuming the array.
    pub fn into_entries(self) -> impl Iterator<Item=(Index<N>, T)> {
        self.indices().zip(self.elems.into_vec())
    }

    /// Every index in bounds, X varying fastest.
    pub fn indices(&self) -> RangeIter<N> {
        Range::new(self.lower, self.dimensions).iter()
    }

    /// Apply `f` to every element, keeping shape and bounds.
    pub fn map<B, F>(self, f: F) -> FixedArray<B, N>
    where
        F: FnMut(T) -> B,
    {
        FixedArray {
            lower: self.lower,
            dimensions: self.dimensions,
            elems: self.elems.into_vec().into_iter().map(f).collect(),
        }
    }

    fn expect_flat_index(&self, index: Index<N>) -> usize {
        match self.flat_index(index) {
            Some(i) => i,
            None => panic!(
                "index {:?} out of range (bounds {:?}..={:?})",
                index,
                self.lower,
                self.upper_bounds(),
            ),
        }
    }
}

impl<T, const N: usize> ops::Index<Index<N>> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, index: Index<N>) -> &T {
        let i = self.expect_flat_index(index);
        &self.elems[i]
    }
}

impl<T, const N: usize> ops::IndexMut<Index<N>> for FixedArray<T, N> {
    fn index_mut(&mut self, index: Index<N>) -> &mut T {
        let i = self.expect_flat_index(index);
        &mut self.elems[i]
    }
}

impl<T: Clone, const N: usize> BoundedIndexable<N> for FixedArray<T, N> {
    type Item = T;

    fn dimensions(&self) -> Index<N> {
        self.dimensions
    }

    fn lower_bounds(&self) -> Index<N> {
        self.lower
    }

    fn get(&self, index: Index<N>) -> T {
        assert_index_valid(self, index);
        self[index].clone()
    }

    fn set(&mut self, index: Index<N>, val: T) {
        assert_index_valid(self, index);
        self[index] = val;
    }
}


#[test]
fn test_fixed_row_major_layout() {
    use crate::index::idx2;

    let array = FixedArray::from_fn(idx2(0, 0), idx2(3, 2), |i| i.x() + 10 * i.y());
    assert_eq!(array.as_slice(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(array[idx2(2, 1)], 12);
    assert_eq!(array.flat_index(idx2(1, 1)), Some(4));
    assert_eq!(array.flat_index(idx2(3, 0)), None);
}

#[test]
fn test_fixed_non_zero_bounds() {
    use crate::index::idx3;

    let mut array = FixedArray::<u8, 3>::new(idx3(2, 2, 2))
        .with_lower_bounds(idx3(-1, 4, 0));
    assert_eq!(BoundedIndexable::upper_bounds(&array), idx3(0, 5, 1));
    assert!(array.is_index_valid(idx3(-1, 5, 1)));
    assert!(!array.is_index_valid(idx3(1, 5, 1)));

    array.set(idx3(0, 4, 1), 9);
    assert_eq!(array.get(idx3(0, 4, 1)), 9);
    assert_eq!(array.entries().filter(|&(_, v)| v == 9).count(), 1);
    assert_eq!(array.entries().count(), 8);
}

#[test]
#[should_panic]
fn test_fixed_out_of_bounds_get_panics() {
    use crate::index::idx1;

    let array = FixedArray::filled(idx1(4), 'a');
    array.get(idx1(4));
}

#[test]
#[should_panic]
fn test_fixed_negative_dimensions_panics() {
    use crate::index::idx2;

    FixedArray::<u8, 2>::new(idx2(-1, 3));
}
