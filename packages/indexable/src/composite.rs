//! Grids of same-shaped sub-arrays presented as one array.

use crate::{
    index::Index,
    indexable::{
        BoundedIndexable,
        assert_index_valid,
    },
    fixed::FixedArray,
};
use std::{
    cell::RefCell,
    rc::Rc,
};
use tracing::*;


/// Handle to a sub-array which may be referenced by several composites.
///
/// Composites never own their sub-arrays exclusively. Mutating the same
/// sub-array through two composites at once panics on the `RefCell`.
pub type Shared<A> = Rc<RefCell<A>>;

/// Wrap an array so it can be placed in composites.
pub fn shared<A>(array: A) -> Shared<A> {
    Rc::new(RefCell::new(array))
}

/// Panic unless every sub-array in `grid` has the same dimensions and zero
/// lower bounds, returning those dimensions.
pub(crate) fn uniform_sub_dimensions<A, const N: usize>(
    grid: &FixedArray<Shared<A>, N>,
) -> Index<N>
where
    A: BoundedIndexable<N>,
{
    assert!(!grid.is_empty(), "composite grid is empty");
    assert!(
        grid.lower_bounds() == Index::ZERO,
        "composite grid lower bounds {:?} are not zero",
        grid.lower_bounds(),
    );
    let first = grid.as_slice()[0].borrow().dimensions();
    for (grid_coord, sub) in grid.iter() {
        let sub = sub.borrow();
        assert!(
            sub.dimensions() == first && sub.lower_bounds() == Index::ZERO,
            "sub-arrays must all be same dimensions and zero-bounded, but \
            sub-array at {:?} has bounds {:?}..={:?} (expected dimensions {:?})",
            grid_coord,
            sub.lower_bounds(),
            sub.upper_bounds(),
            first,
        );
    }
    first
}


/// Array made of a rectangular grid of sub-arrays.
///
/// A logical index is shifted by `origin_offset` and split by division into
/// the coordinate of a sub-array in the grid and a local index within it.
/// Reads and writes go through to the sub-arrays.
#[derive(Debug)]
pub struct CompositeArray<A, const N: usize> {
    grid: FixedArray<Shared<A>, N>,
    sub_dimensions: Index<N>,
    origin_offset: Index<N>,
}

/// Clones share the same sub-arrays.
impl<A, const N: usize> Clone for CompositeArray<A, N> {
    fn clone(&self) -> Self {
        CompositeArray {
            grid: self.grid.clone(),
            sub_dimensions: self.sub_dimensions,
            origin_offset: self.origin_offset,
        }
    }
}

pub type CompositeArray2D<A> = CompositeArray<A, 2>;
pub type CompositeArray3D<A> = CompositeArray<A, 3>;

impl<A, const N: usize> CompositeArray<A, N>
where
    A: BoundedIndexable<N>,
{
    /// Construct from a zero-bounded grid of sub-arrays.
    ///
    /// Panics if the grid is empty or its sub-arrays are not all the same
    /// dimensions with zero lower bounds.
    pub fn new(grid: FixedArray<Shared<A>, N>, origin_offset: Index<N>) -> Self {
        let sub_dimensions = uniform_sub_dimensions(&grid);
        trace!(
            grid_dims=?grid.dimensions(),
            ?sub_dimensions,
            ?origin_offset,
            "constructing composite array",
        );
        CompositeArray {
            grid,
            sub_dimensions,
            origin_offset,
        }
    }

    /// Split a valid logical index into (grid coordinate, local index).
    ///
    /// Panics if `index` is invalid.
    pub fn resolve(&self, index: Index<N>) -> (Index<N>, Index<N>) {
        assert_index_valid(self, index);
        let shifted = self.origin_offset + index;
        let grid_coord = shifted.zip_with(self.sub_dimensions, i32::div_euclid);
        let local = shifted - self.sub_dimensions * grid_coord;
        (grid_coord, local)
    }
}

impl<A, const N: usize> CompositeArray<A, N> {
    pub fn grid(&self) -> &FixedArray<Shared<A>, N> {
        &self.grid
    }

    pub fn grid_dimensions(&self) -> Index<N> {
        self.grid.dimensions()
    }

    pub fn sub_dimensions(&self) -> Index<N> {
        self.sub_dimensions
    }

    pub fn origin_offset(&self) -> Index<N> {
        self.origin_offset
    }

    /// Handle to the sub-array at a grid coordinate.
    ///
    /// Panics if out of the grid.
    pub fn sub_array(&self, grid_coord: Index<N>) -> &Shared<A> {
        &self.grid[grid_coord]
    }
}

impl<A, const N: usize> BoundedIndexable<N> for CompositeArray<A, N>
where
    A: BoundedIndexable<N>,
{
    type Item = A::Item;

    fn dimensions(&self) -> Index<N> {
        self.sub_dimensions * self.grid.dimensions()
    }

    fn lower_bounds(&self) -> Index<N> {
        -self.origin_offset
    }

    fn get(&self, index: Index<N>) -> A::Item {
        let (grid_coord, local) = self.resolve(index);
        self.grid[grid_coord].borrow().get(local)
    }

    fn set(&mut self, index: Index<N>, val: A::Item) {
        let (grid_coord, local) = self.resolve(index);
        self.grid[grid_coord].borrow_mut().set(local, val);
    }
}


#[cfg(test)]
fn test_grid(
    grid_dims: Index<2>,
    sub_dims: Index<2>,
) -> FixedArray<Shared<FixedArray<i32, 2>>, 2> {
    FixedArray::from_fn(Index::ZERO, grid_dims, |_| shared(FixedArray::new(sub_dims)))
}

#[test]
fn test_composite_bounds() {
    use crate::index::idx2;

    let composite = CompositeArray::new(test_grid(idx2(3, 2), idx2(4, 5)), idx2(4, 0));
    assert_eq!(composite.dimensions(), idx2(12, 10));
    assert_eq!(composite.lower_bounds(), idx2(-4, 0));
    assert_eq!(composite.upper_bounds(), idx2(7, 9));
}

#[test]
fn test_composite_resolve() {
    use crate::index::idx2;

    let composite = CompositeArray::new(test_grid(idx2(3, 3), idx2(4, 4)), idx2(4, 4));
    assert_eq!(composite.resolve(idx2(-4, -4)), (idx2(0, 0), idx2(0, 0)));
    assert_eq!(composite.resolve(idx2(-1, 0)), (idx2(0, 1), idx2(3, 0)));
    assert_eq!(composite.resolve(idx2(4, 3)), (idx2(2, 1), idx2(0, 3)));
    assert_eq!(composite.resolve(idx2(7, 7)), (idx2(2, 2), idx2(3, 3)));
}

#[test]
fn test_composite_writes_reach_sub_arrays() {
    use crate::index::idx2;

    let grid = test_grid(idx2(2, 2), idx2(3, 3));
    let corner = grid[idx2(1, 0)].clone();
    let mut composite = CompositeArray::new(grid, idx2(0, 0));
    composite.set(idx2(4, 1), 42);
    assert_eq!(corner.borrow().get(idx2(1, 1)), 42);

    corner.borrow_mut().set(idx2(2, 2), 7);
    assert_eq!(composite.get(idx2(5, 2)), 7);
}

#[test]
#[should_panic]
fn test_composite_rejects_mismatched_sub_arrays() {
    use crate::index::idx2;

    let mut grid = test_grid(idx2(2, 1), idx2(3, 3));
    grid[idx2(1, 0)] = shared(FixedArray::new(idx2(3, 4)));
    CompositeArray::new(grid, idx2(0, 0));
}

#[test]
#[should_panic]
fn test_composite_rejects_offset_sub_arrays() {
    use crate::index::idx2;

    let mut grid = test_grid(idx2(2, 1), idx2(3, 3));
    grid[idx2(0, 0)] = shared(FixedArray::new(idx2(3, 3)).with_lower_bounds(idx2(1, 0)));
    CompositeArray::new(grid, idx2(0, 0));
}

#[test]
#[should_panic]
fn test_composite_out_of_bounds_panics() {
    use crate::index::idx2;

    let composite = CompositeArray::new(test_grid(idx2(2, 2), idx2(2, 2)), idx2(1, 1));
    composite.get(idx2(3, 0));
}

#[test]
#[should_panic(expected = "composite grid is empty")]
fn test_composite_rejects_empty_grid() {
    use crate::index::idx2;

    CompositeArray::new(test_grid(idx2(0, 2), idx2(3, 3)), idx2(0, 0));
}

#[test]
#[should_panic(expected = "are not zero")]
fn test_composite_rejects_offset_grid() {
    use crate::index::idx2;

    let grid = test_grid(idx2(2, 2), idx2(3, 3)).with_lower_bounds(idx2(1, 0));
    CompositeArray::new(grid, idx2(0, 0));
}
