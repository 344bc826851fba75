mod common;

use indexable::*;
use std::collections::HashMap;
use rand::{
    Rng,
    SeedableRng,
};
use rand_pcg::Pcg32;


fn assert_bounds_consistent<A, const N: usize>(array: &A)
where
    A: BoundedIndexable<N>,
{
    assert_eq!(
        array.upper_bounds() - array.lower_bounds() + Index::ONE,
        array.dimensions(),
    );
    for axis in 0..N {
        assert!(array.length(axis) >= 0);
        assert_eq!(
            array.upper_bound(axis) - array.lower_bound(axis) + 1,
            array.length(axis),
        );
    }
    for index in Range::of_bounds(array).iter() {
        assert!(array.is_index_valid(index), "{:?} in bounds but invalid", index);
    }
}

#[test]
fn unidirectional_round_trip_after_growth() {
    common::init_logging();

    let mut rng = Pcg32::seed_from_u64(0x5eed);
    let mut array = DynamicArray2D::with_dimensions(idx2(2, 2));
    let mut expected = HashMap::new();

    for step in 0..500u32 {
        let index = idx2(rng.gen_range(0..40), rng.gen_range(0..40));
        array.set(index, step);
        expected.insert(index, step);

        if step % 50 == 0 {
            assert_bounds_consistent(&array);
            for (&index, &val) in &expected {
                assert_eq!(array.get(index), val, "at {:?}", index);
            }
        }
    }

    for (&index, &val) in &expected {
        assert_eq!(array.get(index), val, "at {:?}", index);
    }
    for (index, val) in array.entries() {
        assert_eq!(val, expected.get(&index).copied().unwrap_or(0));
    }
}

#[test]
fn multidirectional_round_trip_after_growth() {
    common::init_logging();

    let mut rng = Pcg32::seed_from_u64(0xfeed);
    let mut array = MultiDynamicArray3D::with_dimensions(idx3(1, 2, 3));
    let mut expected = HashMap::new();

    for step in 0..400i64 {
        // widening spread so growth keeps triggering on both sides
        let spread = 2 + step as i32 / 10;
        let index = idx3(
            rng.gen_range(-spread..=spread),
            rng.gen_range(-spread..=spread),
            rng.gen_range(-spread..=spread),
        );
        array.set(index, step);
        expected.insert(index, step);

        if step % 40 == 0 {
            assert_bounds_consistent(&array);
            for (&index, &val) in &expected {
                assert_eq!(array.get(index), val, "at {:?}", index);
            }
        }
    }

    for (&index, &val) in &expected {
        assert_eq!(array.get(index), val, "at {:?}", index);
    }
}

#[test]
fn multidirectional_1d_alternating_sides() {
    let mut array = MultiDynamicArray1D::with_dimensions(idx1(2));
    for n in 0..100 {
        let i = if n % 2 == 0 { n } else { -n };
        array.set(idx1(i), i);
        for m in 0..=n {
            let j = if m % 2 == 0 { m } else { -m };
            assert_eq!(array.get(idx1(j)), j);
        }
        assert_bounds_consistent(&array);
    }
}

#[test]
fn growth_doubling_law() {
    for initial in [1, 3, 4, 16, 17] {
        let mut array = DynamicArray1D::<u8>::with_dimensions(idx1(initial));
        array.set(idx1(initial), 1);
        assert_eq!(array.current_length(0), initial * 2);
    }

    let mut array = DynamicArray1D::<u8>::with_dimensions(idx1(0));
    array.set(idx1(9), 1);
    assert_eq!(array.current_length(0), 16);

    // length never shrinks
    let mut array = DynamicArray1D::<u8>::with_dimensions(idx1(8));
    let mut prev = array.current_length(0);
    for i in [3, 30, 2, 64, 0, 200] {
        array.set(idx1(i), 1);
        assert!(array.current_length(0) >= prev);
        prev = array.current_length(0);
    }
}

#[test]
fn reading_does_not_grow() {
    let array = MultiDynamicArray4D::<u32>::with_dimensions(idx4(2, 2, 2, 2));
    assert_eq!(array.get(idx4(-100, 100, 0, 7)), 0);
    assert_eq!(array.current_dimensions(), idx4(2, 2, 2, 2));
}

#[test]
fn get_mut_materializes() {
    let mut array = DynamicArray2D::<Vec<u8>>::with_dimensions(idx2(1, 1));
    array.get_mut(idx2(5, 0)).push(3);
    array.get_mut(idx2(5, 0)).push(4);
    assert!(array.is_materialized(idx2(5, 0)));
    assert_eq!(array.get(idx2(5, 0)), vec![3, 4]);
}
