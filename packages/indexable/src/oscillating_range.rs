//! Serpentine enumeration of a rectangular region.

use crate::{
    axis::Axis,
    index::Index,
};


/// Every index in `[start, start + dimensions)`, visited such that each
/// step moves by one along exactly one axis.
///
/// `order` lists axes from innermost (fastest) to outermost. An axis
/// reverses its direction every time the next-outer axis advances, so a
/// sequential consumer never has to jump back across the region.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct OscillatingRange<const N: usize> {
    pub start: Index<N>,
    pub dimensions: Index<N>,
    order: [usize; N],
}

impl<const N: usize> OscillatingRange<N> {
    /// Oscillating range with X innermost.
    pub fn new(start: Index<N>, dimensions: Index<N>) -> Self {
        let mut order = [0; N];
        for (i, axis) in order.iter_mut().enumerate() {
            *axis = i;
        }
        Self::build(start, dimensions, order)
    }

    /// Oscillating range with a custom axis order, innermost first.
    ///
    /// Panics if `order` is not a permutation of the first `N` axes.
    pub fn with_order(
        start: Index<N>,
        dimensions: Index<N>,
        order: [Axis; N],
    ) -> Self {
        Self::build(start, dimensions, order.map(Axis::to_usize))
    }

    fn build(start: Index<N>, dimensions: Index<N>, order: [usize; N]) -> Self {
        assert!(
            dimensions.all_ge(Index::ZERO),
            "negative range dimensions {:?}",
            dimensions,
        );
        let mut seen = [false; N];
        for &axis in &order {
            assert!(axis < N, "axis {} out of range for rank {}", axis, N);
            assert!(!seen[axis], "axis order {:?} is not a permutation", order);
            seen[axis] = true;
        }
        OscillatingRange { start, dimensions, order }
    }

    pub fn order(&self) -> [Axis; N] {
        self.order.map(|axis| match Axis::from_usize(axis) {
            Some(axis) => axis,
            None => unreachable!("validated axis order contains {}", axis),
        })
    }

    pub fn len(&self) -> usize {
        self.dimensions.volume()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> OscillatingRangeIter<N> {
        OscillatingRangeIter {
            start: self.start,
            dimensions: self.dimensions,
            order: self.order,
            cursor: Index::ZERO,
            forward: [true; N],
            remaining: self.len(),
        }
    }
}

impl<'a, const N: usize> IntoIterator for &'a OscillatingRange<N> {
    type Item = Index<N>;
    type IntoIter = OscillatingRangeIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> IntoIterator for OscillatingRange<N> {
    type Item = Index<N>;
    type IntoIter = OscillatingRangeIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// See `OscillatingRange::iter`.
#[derive(Debug, Clone)]
pub struct OscillatingRangeIter<const N: usize> {
    start: Index<N>,
    dimensions: Index<N>,
    order: [usize; N],
    cursor: Index<N>,
    forward: [bool; N],
    remaining: usize,
}

impl<const N: usize> Iterator for OscillatingRangeIter<N> {
    type Item = Index<N>;

    fn next(&mut self) -> Option<Index<N>> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.start + self.cursor;
        self.remaining -= 1;

        for &axis in &self.order {
            let step = if self.forward[axis] { 1 } else { -1 };
            let next = self.cursor.0[axis] + step;
            if next >= 0 && next < self.dimensions.0[axis] {
                self.cursor.0[axis] = next;
                break;
            }
            // pinned at an edge, turn around and let the next axis step
            self.forward[axis] = !self.forward[axis];
        }

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for OscillatingRangeIter<N> {}


#[test]
fn test_oscillating_2d() {
    use crate::index::idx2;

    let range = OscillatingRange::new(idx2(0, 0), idx2(3, 2));
    assert_eq!(
        range.iter().collect::<Vec<_>>(),
        vec![
            idx2(0, 0),
            idx2(1, 0),
            idx2(2, 0),
            idx2(2, 1),
            idx2(1, 1),
            idx2(0, 1),
        ],
    );
}

#[test]
fn test_oscillating_custom_order() {
    use crate::index::idx2;

    let range = OscillatingRange::with_order(
        idx2(10, 20),
        idx2(2, 3),
        [Axis::Y, Axis::X],
    );
    assert_eq!(range.order(), [Axis::Y, Axis::X]);
    assert_eq!(
        range.iter().collect::<Vec<_>>(),
        vec![
            idx2(10, 20),
            idx2(10, 21),
            idx2(10, 22),
            idx2(11, 22),
            idx2(11, 21),
            idx2(11, 20),
        ],
    );
}

#[test]
fn test_oscillating_3d_unit_steps_cover_region() {
    use crate::{
        index::idx3,
        range::Range,
    };
    use std::collections::HashSet;

    let range = OscillatingRange::new(idx3(-1, 0, 2), idx3(3, 4, 2));
    let visited = range.iter().collect::<Vec<_>>();
    assert_eq!(visited.len(), 24);

    for pair in visited.windows(2) {
        let diff = pair[1] - pair[0];
        let moved = diff.0.iter().map(|n| n.abs()).sum::<i32>();
        assert_eq!(moved, 1, "{:?} -> {:?}", pair[0], pair[1]);
    }

    let expected = Range::new(idx3(-1, 0, 2), idx3(3, 4, 2))
        .iter()
        .collect::<HashSet<_>>();
    assert_eq!(visited.into_iter().collect::<HashSet<_>>(), expected);
}

#[test]
#[should_panic]
fn test_oscillating_rejects_non_permutation() {
    use crate::index::idx2;

    OscillatingRange::with_order(idx2(0, 0), idx2(1, 1), [Axis::X, Axis::X]);
}
