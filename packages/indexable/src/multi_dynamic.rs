//! Arrays which grow in both directions on demand.

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


/// Array which accepts any coordinate, including negative ones, and
/// reallocates itself larger whenever an index beyond its current storage
/// is written.
///
/// Logical zero sits at an origin offset into the storage, initially the
/// middle of each axis. Growth re-centers the occupied span within the new
/// storage, shifting every existing element by the change in origin offset.
///
/// As with `DynamicArray`, reads of valid but unmaterialized indices yield
/// `T::default()` without growing.
#[derive(Debug, Clone)]
pub struct MultiDynamicArray<T, const N: usize> {
    // lower bounds of storage are the negated origin offset
    storage: FixedArray<T, N>,
    config: DynamicArrayConfig<N>,
}

pub type MultiDynamicArray1D<T> = MultiDynamicArray<T, 1>;
pub type MultiDynamicArray3D<T> = MultiDynamicArray<T, 3>;
pub type MultiDynamicArray4D<T> = MultiDynamicArray<T, 4>;

/// Storage layout of one axis after growth.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct AxisGrowth {
    length: i32,
    origin: i32,
}

impl<T: Default, const N: usize> MultiDynamicArray<T, N> {
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
        let origin = config.initial_dimensions / 2;
        MultiDynamicArray {
            storage: FixedArray::new(config.initial_dimensions)
                .with_lower_bounds(-origin),
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
        let old_origin = self.origin_offset();
        let mut new_dims = old_dims;
        let mut new_origin = old_origin;
        for axis in 0..N {
            let growth = self
                .axis_growth(axis, index[axis])
                .unwrap_or_else(|| unreachable!(
                    "validated index {:?} does not fit in grown storage {:?}",
                    index,
                    old_dims,
                ));
            new_dims[axis] = growth.length;
            new_origin[axis] = growth.origin;
        }
        let offset = new_origin - old_origin;
        debug!(
            ?old_dims,
            ?new_dims,
            ?old_origin,
            ?new_origin,
            "growing multidirectional dynamic array",
        );

        // move every element from its old storage slot to that slot plus
        // offset, working in zero-based slot space
        let old = replace(&mut self.storage, FixedArray::new(Index::ZERO));
        let mut slots = FixedArray::new(new_dims);
        for (i, val) in old.into_entries() {
            let old_slot = i + old_origin;
            slots[old_slot + offset] = val;
        }
        self.storage = slots.with_lower_bounds(-new_origin);
    }
}

impl<T, const N: usize> MultiDynamicArray<T, N> {
    pub fn config(&self) -> &DynamicArrayConfig<N> {
        &self.config
    }

    /// Number of storage slots preceding logical zero, per axis.
    pub fn origin_offset(&self) -> Index<N> {
        -self.storage.lower_bounds()
    }

    pub fn current_dimensions(&self) -> Index<N> {
        self.storage.dimensions()
    }

    pub fn current_lower_bounds(&self) -> Index<N> {
        self.storage.lower_bounds()
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

    /// Layout of `axis` once it holds `coord`, or `None` if that would
    /// exceed the max length or push the storage bounds outside of `i32`.
    fn axis_growth(&self, axis: usize, coord: i32) -> Option<AxisGrowth> {
        let length = self.storage.dimensions()[axis];
        let origin = -self.storage.lower_bounds()[axis];
        let coord = coord as i64;

        // span of logical coordinates which must fit afterwards
        let (span_min, span_max) =
            if length == 0 {
                (coord, coord)
            } else {
                let lower = -origin as i64;
                let upper = lower + length as i64 - 1;
                if coord >= lower && coord <= upper {
                    return Some(AxisGrowth { length, origin });
                }
                (lower.min(coord), upper.max(coord))
            };
        let span = span_max - span_min + 1;

        let new_length = grown_length(length, span, self.config.max_length(axis))?;
        let slack = new_length as i64 - span;

        // the origin offset is the negated lower bound, so the lower bound
        // stays above i32::MIN, and the upper bound must not pass i32::MAX
        let lowest = i32::MIN as i64 + 1;
        let highest = i32::MAX as i64 - new_length as i64 + 1;
        let new_lower = (span_min - slack / 2).max(lowest).min(highest);
        if new_lower > span_min || new_lower + new_length as i64 - 1 < span_max {
            return None;
        }
        Some(AxisGrowth {
            length: new_length,
            origin: i32::try_from(-new_lower).ok()?,
        })
    }

    fn valid(&self, index: Index<N>) -> bool {
        (0..N).all(|axis| self.axis_growth(axis, index[axis]).is_some())
    }

    fn assert_valid(&self, index: Index<N>) {
        assert!(
            self.valid(index),
            "index {:?} cannot fit in dynamic array with bounds {:?}..={:?} \
            (max dimensions {:?})",
            index,
            self.current_lower_bounds(),
            self.current_upper_bounds(),
            self.config.max_dimensions,
        );
    }
}

impl<T: Default, const N: usize> Default for MultiDynamicArray<T, N> {
    fn default() -> Self {
        MultiDynamicArray::new()
    }
}

impl<T, const N: usize> BoundedIndexable<N> for MultiDynamicArray<T, N>
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
fn test_multi_initial_origin_is_centered() {
    use crate::index::idx3;

    let array = MultiDynamicArray3D::<u8>::with_dimensions(idx3(8, 5, 0));
    assert_eq!(array.origin_offset(), idx3(4, 2, 0));
    assert_eq!(array.current_lower_bounds(), idx3(-4, -2, 0));
    assert_eq!(array.current_upper_bounds(), idx3(3, 2, -1));
}

#[test]
fn test_multi_grows_low_side_and_keeps_values() {
    use crate::index::idx1;

    let mut array = MultiDynamicArray1D::with_dimensions(idx1(8));
    for i in -4..4 {
        array.set(idx1(i), i * 10);
    }
    array.set(idx1(-5), -50);
    assert_eq!(array.current_length(0), 16);
    assert!(array.current_lower_bound(0) <= -5);
    assert!(array.current_upper_bound(0) >= 3);
    for i in -5..4 {
        assert_eq!(array.get(idx1(i)), i * 10);
    }
}

#[test]
fn test_multi_recenters_on_high_side_growth() {
    use crate::index::idx1;

    let mut array = MultiDynamicArray1D::with_dimensions(idx1(4));
    array.set(idx1(-2), 'a');
    array.set(idx1(1), 'b');
    // span [-2, 9] needs 12 slots, so 16 with 4 slack split evenly
    array.set(idx1(9), 'c');
    assert_eq!(array.current_length(0), 16);
    assert_eq!(array.origin_offset(), idx1(4));
    assert_eq!(array.current_lower_bound(0), -4);
    assert_eq!(array.get(idx1(-2)), 'a');
    assert_eq!(array.get(idx1(1)), 'b');
    assert_eq!(array.get(idx1(9)), 'c');
}

#[test]
fn test_multi_4d_round_trip() {
    use crate::index::idx4;

    let mut array = MultiDynamicArray4D::with_dimensions(idx4(2, 2, 2, 2));
    let points = [
        idx4(0, 0, 0, 0),
        idx4(-3, 7, 1, -1),
        idx4(12, -9, -4, 5),
        idx4(-1, -1, -1, -1),
    ];
    for (n, &p) in points.iter().enumerate() {
        array.set(p, n as u16 + 1);
    }
    for (n, &p) in points.iter().enumerate() {
        assert_eq!(array.get(p), n as u16 + 1, "at {:?}", p);
    }
    let upper = BoundedIndexable::upper_bounds(&array);
    assert_eq!(upper - array.current_lower_bounds() + Index::ONE, array.current_dimensions());
}

#[test]
fn test_multi_max_dimensions() {
    use crate::index::idx1;

    let array = MultiDynamicArray1D::<u8>::with_config(
        DynamicArrayConfig::new()
            .with_initial_dimensions(idx1(4))
            .with_max_dimensions(idx1(10)),
    );
    // current span is [-2, 1]
    assert!(array.is_index_valid(idx1(7)));
    assert!(!array.is_index_valid(idx1(8)));
    assert!(array.is_index_valid(idx1(-8)));
    assert!(!array.is_index_valid(idx1(-9)));
}

#[test]
#[should_panic]
fn test_multi_beyond_max_panics() {
    use crate::index::idx1;

    let mut array = MultiDynamicArray1D::<u8>::with_config(
        DynamicArrayConfig::new()
            .with_initial_dimensions(idx1(4))
            .with_max_dimensions(idx1(10)),
    );
    array.set(idx1(8), 1);
}

#[test]
fn test_multi_unbounded_rejects_unrepresentable_index() {
    use crate::index::idx1;

    let array = MultiDynamicArray1D::<u8>::with_dimensions(idx1(16));
    assert!(!array.is_index_valid(idx1(i32::MIN)));
    assert!(!array.is_index_valid(idx1(i32::MAX)));
    assert!(array.is_index_valid(idx1(-100_000)));

    // an empty axis still cannot place its origin at -i32::MIN
    let empty = MultiDynamicArray1D::<u8>::with_dimensions(idx1(0));
    assert!(!empty.is_index_valid(idx1(i32::MIN)));
    assert!(empty.is_index_valid(idx1(i32::MIN + 1)));
}

#[test]
#[should_panic(expected = "cannot fit in dynamic array")]
fn test_multi_set_at_i32_min_panics() {
    use crate::index::idx1;

    let mut array = MultiDynamicArray1D::<u8>::with_dimensions(idx1(16));
    array.set(idx1(i32::MIN), 1);
}

#[test]
#[should_panic(expected = "negative initial dimensions")]
fn test_multi_negative_initial_dimensions_panics() {
    use crate::index::idx3;

    MultiDynamicArray3D::<u8>::with_dimensions(idx3(2, -1, 2));
}
