mod common;

use indexable::*;
use pretty_assertions::assert_eq;


fn grid_of<const N: usize>(
    grid_dims: Index<N>,
    sub_dims: Index<N>,
) -> FixedArray<Shared<FixedArray<u32, N>>, N> {
    FixedArray::from_fn(
        Index::ZERO,
        grid_dims,
        |_| shared(FixedArray::new(sub_dims)),
    )
}

#[test]
fn every_coordinate_round_trips_and_reaches_its_sub_array() {
    common::init_logging();

    let sub_dims = idx3(3, 2, 4);
    let grid_dims = idx3(2, 3, 2);
    let mut composite = CompositeArray::new(grid_of(grid_dims, sub_dims), idx3(3, 2, 0));
    assert_eq!(composite.dimensions(), idx3(6, 6, 8));
    assert_eq!(composite.lower_bounds(), idx3(-3, -2, 0));

    let bounds = Range::of_bounds(&composite);
    for (n, index) in bounds.iter().enumerate() {
        composite.set(index, n as u32);
    }
    for (n, index) in bounds.iter().enumerate() {
        assert_eq!(composite.get(index), n as u32);

        let (grid_coord, local) = composite.resolve(index);
        assert!(local.all_ge(Index::ZERO) && local.all_lt(sub_dims));
        let direct = composite.sub_array(grid_coord).borrow().get(local);
        assert_eq!(direct, n as u32);
    }

    // no two logical coordinates alias one slot
    let total: usize = composite
        .grid()
        .iter()
        .map(|(_, sub)| sub.borrow().len())
        .sum();
    assert_eq!(total, bounds.len());
}

#[test]
fn entries_enumerate_row_major() {
    let mut composite = CompositeArray::new(grid_of(idx2(2, 1), idx2(2, 2)), idx2(0, 0));
    for (n, index) in Range::of_bounds(&composite).iter().enumerate() {
        composite.set(index, n as u32 * 10);
    }
    assert_eq!(
        composite.entries().collect::<Vec<_>>(),
        vec![
            (idx2(0, 0), 0),
            (idx2(1, 0), 10),
            (idx2(2, 0), 20),
            (idx2(3, 0), 30),
            (idx2(0, 1), 40),
            (idx2(1, 1), 50),
            (idx2(2, 1), 60),
            (idx2(3, 1), 70),
        ],
    );
}

#[test]
fn composites_share_sub_arrays() {
    let grid = grid_of(idx3(3, 3, 3), idx3(4, 4, 4));
    let mut neighborhood = Composite3x3x3::new(grid.clone());
    let general = CompositeArray::new(grid, idx3(4, 4, 4));

    neighborhood.set(idx3(-1, 0, 0), 11);
    neighborhood.set(idx3(4, 0, 0), 22);
    assert_eq!(general.get(idx3(-1, 0, 0)), 11);
    assert_eq!(general.get(idx3(4, 0, 0)), 22);

    assert_eq!(neighborhood.resolve(idx3(-1, 0, 0)), (idx3(0, 1, 1), idx3(3, 0, 0)));
    assert_eq!(neighborhood.resolve(idx3(4, 0, 0)), (idx3(2, 1, 1), idx3(0, 0, 0)));
    assert_eq!(
        neighborhood.neighbor(idx3(-1, 0, 0)).borrow().get(idx3(3, 0, 0)),
        11,
    );
    assert_eq!(
        neighborhood.neighbor(idx3(1, 0, 0)).borrow().get(idx3(0, 0, 0)),
        22,
    );
}

#[test]
fn composite_of_dynamic_arrays() {
    // dynamic sub-arrays must not grow while in a composite, so give them
    // their full size up front
    let mut composite = CompositeArray::new(
        FixedArray::from_fn(
            Index::ZERO,
            idx2(2, 2),
            |_| shared(DynamicArray2D::<u8>::with_dimensions(idx2(4, 4))),
        ),
        idx2(4, 4),
    );
    composite.set(idx2(-4, 3), 1);
    composite.set(idx2(3, -1), 2);
    assert_eq!(composite.get(idx2(-4, 3)), 1);
    assert_eq!(composite.get(idx2(3, -1)), 2);
    assert_eq!(composite.sub_array(idx2(1, 0)).borrow().get(idx2(3, 3)), 2);
}

#[test]
fn nested_composites() {
    let inner = || {
        shared(CompositeArray::new(grid_of(idx2(2, 2), idx2(2, 2)), idx2(0, 0)))
    };
    let mut outer = CompositeArray::new(
        FixedArray::from_fn(Index::ZERO, idx2(2, 1), |_| inner()),
        idx2(0, 0),
    );
    assert_eq!(outer.dimensions(), idx2(8, 4));
    outer.set(idx2(5, 3), 9);
    assert_eq!(outer.get(idx2(5, 3)), 9);
    assert_eq!(
        outer.sub_array(idx2(1, 0)).borrow().get(idx2(1, 3)),
        9,
    );
}
