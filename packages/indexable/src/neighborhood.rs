//! A center array together with its 26 immediate neighbors.

use crate::{
    index::{
        Index3D,
        idx3,
    },
    indexable::{
        BoundedIndexable,
        assert_index_valid,
    },
    fixed::FixedArray,
    composite::{
        Shared,
        uniform_sub_dimensions,
    },
};
use tracing::*;


/// 3x3x3 composite whose center cell's zero is the composite's zero.
///
/// Coordinates below the center on some axis route to the previous
/// neighbor on that axis, coordinates above it to the next. Unlike
/// `CompositeArray`, resolution classifies each axis by comparison rather
/// than dividing, since only immediate neighbors are addressable.
#[derive(Debug)]
pub struct Composite3x3x3<A> {
    // grid coordinates are neighbor offset + 1
    grid: FixedArray<Shared<A>, 3>,
    sub_dimensions: Index3D,
}

/// Clones share the same sub-arrays.
impl<A> Clone for Composite3x3x3<A> {
    fn clone(&self) -> Self {
        Composite3x3x3 {
            grid: self.grid.clone(),
            sub_dimensions: self.sub_dimensions,
        }
    }
}

impl<A> Composite3x3x3<A>
where
    A: BoundedIndexable<3>,
{
    /// Construct from a zero-bounded 3x3x3 grid.
    ///
    /// Panics if the grid is not 3x3x3 or its sub-arrays are not all the same
    /// dimensions with zero lower bounds.
    pub fn new(grid: FixedArray<Shared<A>, 3>) -> Self {
        assert!(
            grid.dimensions() == idx3(3, 3, 3),
            "neighborhood grid dimensions {:?} are not 3x3x3",
            grid.dimensions(),
        );
        let sub_dimensions = uniform_sub_dimensions(&grid);
        trace!(?sub_dimensions, "constructing 3x3x3 composite");
        Composite3x3x3 {
            grid,
            sub_dimensions,
        }
    }

    /// Construct by calling `f` with each neighbor offset, each component in
    /// `-1..=1`, `<0,0,0>` being the center.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Index3D) -> Shared<A>,
    {
        Self::new(FixedArray::from_fn(
            Index3D::ZERO,
            idx3(3, 3, 3),
            |grid_coord| f(grid_coord - Index3D::ONE),
        ))
    }

    /// Split a valid logical index into (grid coordinate, local index).
    ///
    /// Panics if `index` is invalid.
    pub fn resolve(&self, index: Index3D) -> (Index3D, Index3D) {
        assert_index_valid(self, index);
        let mut grid_coord = Index3D::ZERO;
        let mut local = Index3D::ZERO;
        for axis in 0..3 {
            let len = self.sub_dimensions[axis];
            let n = index[axis];
            grid_coord[axis] =
                if n < 0 { 0 }
                else if n > len - 1 { 2 }
                else { 1 };
            local[axis] = ((n % len) + len) % len;
        }
        (grid_coord, local)
    }
}

impl<A> Composite3x3x3<A> {
    pub fn grid(&self) -> &FixedArray<Shared<A>, 3> {
        &self.grid
    }

    pub fn sub_dimensions(&self) -> Index3D {
        self.sub_dimensions
    }

    /// Equal to the sub-array dimensions.
    pub fn origin_offset(&self) -> Index3D {
        self.sub_dimensions
    }

    /// Handle to the neighbor at `offset`, each component in `-1..=1`.
    ///
    /// Panics if `offset` is out of that range.
    pub fn neighbor(&self, offset: Index3D) -> &Shared<A> {
        &self.grid[offset + Index3D::ONE]
    }

    pub fn center(&self) -> &Shared<A> {
        self.neighbor(Index3D::ZERO)
    }
}

impl<A> BoundedIndexable<3> for Composite3x3x3<A>
where
    A: BoundedIndexable<3>,
{
    type Item = A::Item;

    fn dimensions(&self) -> Index3D {
        self.sub_dimensions * 3
    }

    fn lower_bounds(&self) -> Index3D {
        -self.sub_dimensions
    }

    fn get(&self, index: Index3D) -> A::Item {
        let (grid_coord, local) = self.resolve(index);
        self.grid[grid_coord].borrow().get(local)
    }

    fn set(&mut self, index: Index3D, val: A::Item) {
        let (grid_coord, local) = self.resolve(index);
        self.grid[grid_coord].borrow_mut().set(local, val);
    }
}


#[cfg(test)]
fn test_neighborhood() -> Composite3x3x3<FixedArray<i32, 3>> {
    use crate::composite::shared;

    Composite3x3x3::from_fn(|_| shared(FixedArray::new(idx3(4, 4, 4))))
}

#[test]
fn test_neighbor_routing() {
    let composite = test_neighborhood();
    assert_eq!(composite.resolve(idx3(-1, 0, 0)), (idx3(0, 1, 1), idx3(3, 0, 0)));
    assert_eq!(composite.resolve(idx3(4, 0, 0)), (idx3(2, 1, 1), idx3(0, 0, 0)));
    assert_eq!(composite.resolve(idx3(-4, 7, 2)), (idx3(0, 2, 1), idx3(0, 3, 2)));
    assert_eq!(composite.lower_bounds(), idx3(-4, -4, -4));
    assert_eq!(composite.upper_bounds(), idx3(7, 7, 7));
}

#[test]
fn test_neighbor_writes_reach_cells() {
    let mut composite = test_neighborhood();
    composite.set(idx3(-1, 5, 0), 9);
    let cell = composite.neighbor(idx3(-1, 1, 0));
    assert_eq!(cell.borrow().get(idx3(3, 1, 0)), 9);

    composite.center().borrow_mut().set(idx3(2, 2, 2), 5);
    assert_eq!(composite.get(idx3(2, 2, 2)), 5);
}

#[test]
fn test_neighbor_matches_general_composite() {
    use crate::{
        composite::CompositeArray,
        range::Range,
    };

    let mut composite = test_neighborhood();
    let general = CompositeArray::new(composite.grid().clone(), composite.origin_offset());
    for (n, index) in Range::of_bounds(&composite).iter().enumerate() {
        assert_eq!(composite.resolve(index), general.resolve(index));
        composite.set(index, n as i32);
    }
    for (n, index) in Range::of_bounds(&general).iter().enumerate() {
        assert_eq!(general.get(index), n as i32);
    }
}

#[test]
#[should_panic]
fn test_neighbor_rejects_out_of_window() {
    let composite = test_neighborhood();
    composite.get(idx3(8, 0, 0));
}

#[test]
#[should_panic(expected = "are not 3x3x3")]
fn test_neighbor_rejects_wrong_grid_shape() {
    use crate::composite::shared;

    let grid = FixedArray::from_fn(
        Index3D::ZERO,
        idx3(3, 3, 2),
        |_| shared(FixedArray::<i32, 3>::new(idx3(4, 4, 4))),
    );
    Composite3x3x3::new(grid);
}
