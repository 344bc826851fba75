//! Arrays which grow toward positive infinity on demand.

use crate::{
    index::Index,
    indexable::BoundedIndexable,
    fixed::FixedArray,
    growth::{
        DynamicArrayConfig,
        grown_length,
    },
};
use std::mem::replace;
use tracing::*;


/// Array with a lower bound of zero on every axis which reallocates itself
/// larger whenever an index beyond its current storage is written.
///
/// Reading an index which is valid but not yet materialized yields
/// `T::default()` without growing. `set`, `get_mut`, and `ensure`
/// materialize. Reported bounds are those of the current storage.
#[derive(Debug, Clone)]
pub struct DynamicArray<T, const N: usize> {
    storage: FixedArray<T, N>,
    config: DynamicArrayConfig<N>,
}

pub type DynamicArray1D<T> = DynamicArray<T, 1>;
pub type DynamicArray2D<T> = DynamicArray<T, 2>;

impl<T: Default, const N: usize> DynamicArray<T, N> {
    /// Construct with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DynamicArrayConfig::new())
    }

    /// Construct with the given initial dimensions and no maximum.
    pub fn with_dimensions(dimensions: Index<N>) -> Self {
        Self::with_config(
            DynamicArrayConfig::new().with_initial_dimensions(dimensions),
        )
    }

    /// Panics if the config is invalid.
    pub fn with_config(config: DynamicArrayConfig<N>) -> Self {
        config.validate();
        DynamicArray {
            storage: FixedArray::new(config.initial_dimensions),
            config,
        }
    }

    /// Grow if necessary so that `index` is materialized.
    ///
    /// Panics if `index` is invalid.
    pub fn ensure(&mut self, index: Index<N>) {
        if !self.storage.contains(index) {
            self.assert_valid(index);
            self.grow(index);
        }
    }

    /// Mutably reference the element at `index`, growing if necessary.
    ///
    /// Panics if `index` is invalid.
    pub fn get_mut(&mut self, index: Index<N>) -> &mut T {
        self.ensure(index);
        &mut self.storage[index]
    }

    fn grow(&mut self, index: Index<N>) {
        let old_dims = self.storage.dimensions();
        let mut new_dims = old_dims;
        for axis in 0..N {
            let required = index[axis] as i64 + 1;
            new_dims[axis] = grown_length(
                old_dims[axis],
                required,
                self.config.max_length(axis),
            )
                .unwrap_or_else(|| unreachable!(
                    "validated index {:?} does not fit in grown storage {:?}",
                    index,
                    old_dims,
                ));
        }
        debug!(?old_dims, ?new_dims, "growing dynamic array");

        // growth is one-directional, so coordinates carry over unchanged
        let old = replace(&mut self.storage, FixedArray::new(new_dims));
        for (i, val) in old.into_entries() {
            self.storage[i] = val;
        }
    }
}

impl<T, const N: usize> DynamicArray<T, N> {
    pub fn config(&self) -> &DynamicArrayConfig<N> {
        &self.config
    }

    pub fn current_dimensions(&self) -> Index<N> {
        self.storage.dimensions()
    }

    pub fn current_lower_bounds(&self) -> Index<N> {
        Index::ZERO
    }

    pub fn current_upper_bounds(&self) -> Index<N> {
        self.storage.upper_bounds()
    }

    pub fn current_length(&self, axis: usize) -> i32 {
        self.current_dimensions()[axis]
    }

    pub fn current_lower_bound(&self, axis: usize) -> i32 {
        self.current_lower_bounds()[axis]
    }

    pub fn current_upper_bound(&self, axis: usize) -> i32 {
        self.current_upper_bounds()[axis]
    }

    /// Whether `index` lies within current storage.
    pub fn is_materialized(&self, index: Index<N>) -> bool {
        self.storage.contains(index)
    }

    /// Reference the element at `index` if materialized.
    pub fn get_ref(&self, index: Index<N>) -> Option<&T> {
        self.storage.get_ref(index)
    }

    // non-negative and within the max dimensions, regardless of current
    // storage. without a max, an axis can be at most i32::MAX long.
    fn valid(&self, index: Index<N>) -> bool {
        index.all_ge(Index::ZERO)
            && index.all_lt(self.config.max_dimensions.unwrap_or(Index::MAX))
    }

    fn assert_valid(&self, index: Index<N>) {
        assert!(
            self.valid(index),
            "index {:?} out of range for dynamic array (max dimensions {:?})",
            index,
            self.config.max_dimensions,
        );
    }
}

impl<T: Default, const N: usize> Default for DynamicArray<T, N> {
    fn default() -> Self {
        DynamicArray::new()
    }
}

impl<T, const N: usize> BoundedIndexable<N> for DynamicArray<T, N>
where
    T: Clone + Default,
{
    type Item = T;

    fn dimensions(&self) -> Index<N> {
        self.current_dimensions()
    }

    fn lower_bounds(&self) -> Index<N> {
        self.current_lower_bounds()
    }

    fn is_index_valid(&self, index: Index<N>) -> bool {
        self.valid(index)
    }

    fn get(&self, index: Index<N>) -> T {
        match self.storage.get_ref(index) {
            Some(val) => val.clone(),
            None => {
                self.assert_valid(index);
                T::default()
            }
        }
    }

    fn set(&mut self, index: Index<N>, val: T) {
        *self.get_mut(index) = val;
    }
}


#[test]
fn test_dynamic_grows_by_doubling() {
    use crate::index::idx1;

    let mut array = DynamicArray1D::with_dimensions(idx1(16));
    assert_eq!(array.current_length(0), 16);
    array.set(idx1(16), 7u32);
    assert_eq!(array.current_length(0), 32);
    array.set(idx1(100), 8);
    assert_eq!(array.current_length(0), 128);
    assert_eq!(array.get(idx1(16)), 7);
    assert_eq!(array.get(idx1(100)), 8);
}

#[test]
fn test_dynamic_grows_axes_independently() {
    use crate::index::idx2;

    let mut array = DynamicArray2D::with_dimensions(idx2(4, 4));
    array.set(idx2(1, 2), 'a');
    array.set(idx2(9, 0), 'b');
    assert_eq!(array.current_dimensions(), idx2(16, 4));
    assert_eq!(array.current_upper_bounds(), idx2(15, 3));
    assert_eq!(array.get(idx2(1, 2)), 'a');
    assert_eq!(array.get(idx2(9, 0)), 'b');
}

#[test]
fn test_dynamic_zero_length_starts_at_four() {
    use crate::index::idx1;

    let mut array = DynamicArray1D::<u8>::with_dimensions(idx1(0));
    assert_eq!(array.current_length(0), 0);
    *array.get_mut(idx1(0)) = 3;
    assert_eq!(array.current_length(0), 4);
    assert_eq!(array.get(idx1(0)), 3);
}

#[test]
fn test_dynamic_read_beyond_storage_is_default() {
    use crate::index::idx2;

    let array = DynamicArray2D::<i64>::with_dimensions(idx2(2, 2));
    assert_eq!(array.get(idx2(50, 50)), 0);
    assert_eq!(array.current_dimensions(), idx2(2, 2));
    assert!(array.is_index_valid(idx2(50, 50)));
    assert!(!array.is_materialized(idx2(50, 50)));
}

#[test]
fn test_dynamic_respects_max() {
    use crate::index::idx1;

    let mut array = DynamicArray1D::with_config(
        DynamicArrayConfig::new()
            .with_initial_dimensions(idx1(16))
            .with_max_dimensions(idx1(20)),
    );
    array.set(idx1(19), 1u8);
    assert_eq!(array.current_length(0), 20);
    assert!(!array.is_index_valid(idx1(20)));
}

#[test]
#[should_panic]
fn test_dynamic_negative_index_panics() {
    use crate::index::idx1;

    let mut array = DynamicArray1D::<u8>::new();
    array.set(idx1(-1), 1);
}

#[test]
#[should_panic]
fn test_dynamic_beyond_max_panics() {
    use crate::index::idx2;

    let mut array = DynamicArray2D::<u8>::with_config(
        DynamicArrayConfig::new()
            .with_initial_dimensions(idx2(4, 4))
            .with_max_dimensions(idx2(8, 8)),
    );
    array.set(idx2(8, 0), 1);
}

#[test]
fn test_dynamic_unbounded_rejects_unrepresentable_index() {
    use crate::index::idx1;

    let array = DynamicArray1D::<u8>::with_dimensions(idx1(16));
    assert!(array.is_index_valid(idx1(i32::MAX - 1)));
    assert!(!array.is_index_valid(idx1(i32::MAX)));
}

#[test]
#[should_panic(expected = "out of range for dynamic array")]
fn test_dynamic_set_at_i32_max_panics() {
    use crate::index::idx1;

    let mut array = DynamicArray1D::<u8>::with_dimensions(idx1(16));
    array.set(idx1(i32::MAX), 1);
}

#[test]
#[should_panic(expected = "negative initial dimensions")]
fn test_dynamic_negative_initial_dimensions_panics() {
    use crate::index::idx2;

    DynamicArray2D::<u8>::with_dimensions(idx2(4, -1));
}
