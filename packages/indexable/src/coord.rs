//! Splitting global coordinates into chunk and local parts.
//!
//! Space is tiled by chunks of some `extent`. A _global coordinate_ (gc)
//! identifies a cell anywhere. It lies in the chunk with _chunk coordinate_
//! (cc) `floor(gc / extent)`, at _local coordinate_ (lc) `gc - cc * extent`,
//! which is always between zero (inclusive) and `extent` (exclusive).
//! Floor semantics mean negative global coordinates land in negative chunks
//! with non-negative local coordinates.

use crate::index::Index;


fn validate_extent<const N: usize>(extent: Index<N>) {
    assert!(extent.all_gt(Index::ZERO), "chunk extent {:?} not positive", extent);
}

/// Get chunk coordinate part of global coordinate.
pub fn gc_get_cc<const N: usize>(gc: Index<N>, extent: Index<N>) -> Index<N> {
    validate_extent(extent);
    gc.zip_with(extent, i32::div_euclid)
}

/// Get local coordinate part of global coordinate.
pub fn gc_get_lc<const N: usize>(gc: Index<N>, extent: Index<N>) -> Index<N> {
    validate_extent(extent);
    gc.zip_with(extent, i32::rem_euclid)
}

/// Split global coordinate into chunk coordinate and local coordinate.
pub fn gc_split<const N: usize>(
    gc: Index<N>,
    extent: Index<N>,
) -> (Index<N>, Index<N>) {
    (gc_get_cc(gc, extent), gc_get_lc(gc, extent))
}

/// Combine chunk coordinate and local coordinate into global coordinate.
///
/// Panics if the local coordinate is out of range.
pub fn cc_lc_to_gc<const N: usize>(
    cc: Index<N>,
    lc: Index<N>,
    extent: Index<N>,
) -> Index<N> {
    validate_extent(extent);
    assert!(
        lc.all_ge(Index::ZERO) && lc.all_lt(extent),
        "local coordinate {:?} out of range for extent {:?}",
        lc,
        extent,
    );
    cc * extent + lc
}


#[test]
fn test_coord_splitting_joining() {
    use crate::index::idx3;

    let extent = idx3(4, 8, 4);
    for x in -10..10 {
        for y in -20..20 {
            for z in -10..10 {
                let gc = idx3(x, y, z);
                let (cc, lc) = gc_split(gc, extent);
                assert!(lc.all_ge(Index::ZERO) && lc.all_lt(extent));
                assert_eq!(gc, cc_lc_to_gc(cc, lc, extent));
            }
        }
    }
}

#[test]
fn test_negative_coords_floor() {
    use crate::index::idx2;

    assert_eq!(gc_split(idx2(-1, -16), idx2(16, 16)), (idx2(-1, -1), idx2(15, 0)));
    assert_eq!(gc_split(idx2(15, 16), idx2(16, 16)), (idx2(0, 1), idx2(15, 0)));
}
