//! Sizing policy shared by the dynamic arrays.

use crate::index::Index;


/// Default initial length of every axis of a dynamic array.
pub const DEFAULT_LENGTH: i32 = 16;

/// Length growth starts doubling from when an axis is empty.
pub const MIN_GROWTH_LENGTH: i32 = 4;


/// Construction-time configuration of a dynamic array.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DynamicArrayConfig<const N: usize> {
    /// Backing dimensions allocated up front.
    pub initial_dimensions: Index<N>,
    /// Per-axis cap on backing dimensions. `None` is unbounded.
    pub max_dimensions: Option<Index<N>>,
}

impl<const N: usize> DynamicArrayConfig<N> {
    pub fn new() -> Self {
        DynamicArrayConfig {
            initial_dimensions: Index::splat(DEFAULT_LENGTH),
            max_dimensions: None,
        }
    }

    pub fn with_initial_dimensions(self, initial_dimensions: Index<N>) -> Self {
        DynamicArrayConfig { initial_dimensions, ..self }
    }

    pub fn with_max_dimensions(self, max_dimensions: Index<N>) -> Self {
        DynamicArrayConfig {
            max_dimensions: Some(max_dimensions),
            ..self
        }
    }

    /// Panics unless initial dimensions are non-negative and within the max.
    pub(crate) fn validate(&self) {
        assert!(
            self.initial_dimensions.all_ge(Index::ZERO),
            "negative initial dimensions {:?}",
            self.initial_dimensions,
        );
        if let Some(max) = self.max_dimensions {
            assert!(
                max.all_ge(Index::ZERO),
                "negative max dimensions {:?}",
                max,
            );
            assert!(
                self.initial_dimensions.all_le(max),
                "initial dimensions {:?} exceed max dimensions {:?}",
                self.initial_dimensions,
                max,
            );
        }
    }

    pub(crate) fn max_length(&self, axis: usize) -> Option<i32> {
        self.max_dimensions.map(|max| max[axis])
    }
}

impl<const N: usize> Default for DynamicArrayConfig<N> {
    fn default() -> Self {
        DynamicArrayConfig::new()
    }
}


/// Length an axis of length `current` must grow to so that it holds at
/// least `required` slots.
///
/// Doubles from `current`, or from `MIN_GROWTH_LENGTH` if `current` is
/// zero, then clamps to `max`. Returns `None` if even the clamped length is
/// too small. Never returns less than `current`.
pub fn grown_length(current: i32, required: i64, max: Option<i32>) -> Option<i32> {
    if required <= current as i64 {
        return Some(current);
    }
    let mut len = if current == 0 { MIN_GROWTH_LENGTH as i64 } else { current as i64 };
    while len < required {
        len *= 2;
    }
    let cap = max.map(i64::from).unwrap_or(i32::MAX as i64);
    let len = len.min(cap);
    if len < required {
        None
    } else {
        Some(len as i32)
    }
}


#[test]
fn test_grown_length_doubling_law() {
    assert_eq!(grown_length(16, 17, None), Some(32));
    assert_eq!(grown_length(16, 33, None), Some(64));
    assert_eq!(grown_length(16, 16, None), Some(16));
    assert_eq!(grown_length(3, 4, None), Some(6));
    assert_eq!(grown_length(0, 1, None), Some(4));
    assert_eq!(grown_length(0, 5, None), Some(8));
}

#[test]
fn test_grown_length_clamps_to_max() {
    assert_eq!(grown_length(16, 17, Some(20)), Some(20));
    assert_eq!(grown_length(16, 21, Some(20)), None);
    assert_eq!(grown_length(16, 17, Some(16)), None);
}

#[test]
#[should_panic]
fn test_config_rejects_initial_above_max() {
    use crate::index::idx2;

    DynamicArrayConfig::new()
        .with_initial_dimensions(idx2(8, 8))
        .with_max_dimensions(idx2(8, 4))
        .validate();
}

#[test]
#[should_panic(expected = "negative initial dimensions")]
fn test_config_rejects_negative_initial() {
    use crate::index::idx3;

    DynamicArrayConfig::new()
        .with_initial_dimensions(idx3(1, -2, 1))
        .validate();
}
