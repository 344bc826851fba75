use indexable::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;


#[test]
fn range_is_deterministic_and_restartable() {
    let range = Range::new(idx2(0, 0), idx2(2, 3));
    let expected = vec![
        idx2(0, 0),
        idx2(1, 0),
        idx2(0, 1),
        idx2(1, 1),
        idx2(0, 2),
        idx2(1, 2),
    ];
    assert_eq!(range.iter().collect::<Vec<_>>(), expected);
    assert_eq!((&range).into_iter().collect::<Vec<_>>(), expected);
    assert_eq!(range.iter().len(), 6);
}

#[test]
fn range_4d_outer_axis_slowest() {
    let range = Range::new(idx4(0, 0, 0, 0), idx4(2, 2, 2, 2));
    let visited = range.iter().collect::<Vec<_>>();
    assert_eq!(visited.len(), 16);
    assert_eq!(visited[1], idx4(1, 0, 0, 0));
    assert_eq!(visited[2], idx4(0, 1, 0, 0));
    assert_eq!(visited[4], idx4(0, 0, 1, 0));
    assert_eq!(visited[8], idx4(0, 0, 0, 1));
    assert_eq!(visited[15], idx4(1, 1, 1, 1));
}

#[test]
fn oscillating_range_covers_same_set_as_range() {
    for order in [
        [Axis::X, Axis::Y, Axis::Z],
        [Axis::Z, Axis::X, Axis::Y],
        [Axis::Y, Axis::Z, Axis::X],
    ] {
        let start = idx3(-2, 1, 0);
        let dims = idx3(3, 2, 4);
        let oscillating = OscillatingRange::with_order(start, dims, order);
        let visited = oscillating.iter().collect::<Vec<_>>();
        assert_eq!(visited.len(), 24);
        assert_eq!(visited[0], start);

        let unique = visited.iter().copied().collect::<HashSet<_>>();
        let all = Range::new(start, dims).iter().collect::<HashSet<_>>();
        assert_eq!(unique, all);

        for pair in visited.windows(2) {
            let diff = pair[1] - pair[0];
            assert_eq!(diff.0.iter().map(|n| n.abs()).sum::<i32>(), 1);
        }
        // restartable
        assert_eq!(oscillating.iter().collect::<Vec<_>>(), visited);
    }
}

#[test]
fn spiral_covers_rings_exactly_once() {
    let origin = idx2(-7, 3);
    for rings in 0..6 {
        let coords = Spiral2D::bounded(origin, rings).iter().collect::<Vec<_>>();
        let side = 2 * rings as i32 + 1;
        assert_eq!(coords.len() as i32, side * side);
        assert_eq!(coords[0], origin);

        let unique = coords.iter().copied().collect::<HashSet<_>>();
        assert_eq!(unique.len(), coords.len());

        let square = Range::new(origin - rings as i32, Index::splat(side))
            .iter()
            .collect::<HashSet<_>>();
        assert_eq!(unique, square);
    }
}

#[test]
fn spiral_first_ring() {
    let coords = Spiral2D::bounded(idx2(0, 0), 1).iter().collect::<Vec<_>>();
    assert_eq!(
        coords,
        vec![
            idx2(0, 0),
            idx2(1, 0),
            idx2(1, 1),
            idx2(0, 1),
            idx2(-1, 1),
            idx2(-1, 0),
            idx2(-1, -1),
            idx2(0, -1),
            idx2(1, -1),
        ],
    );
}

#[test]
fn spiral_unbounded_continues_past_any_ring() {
    let spiral = Spiral2D::new(idx2(0, 0));
    let far = spiral.iter().nth(10_000).expect("spiral is infinite");
    assert!(far.x().abs().max(far.y().abs()) > 40);
}

#[test]
fn range_feeds_an_indexable() {
    // a collaborator filling every coordinate of a container through the
    // contract
    let mut array = FixedArray::<i32, 3>::new(idx3(3, 3, 3)).with_lower_bounds(idx3(-1, -1, -1));
    for index in Range::of_bounds(&array).iter() {
        array.set(index, index.x() + index.y() * 3 + index.z() * 9);
    }
    assert_eq!(
        array.entries().map(|(_, v)| v).collect::<Vec<_>>(),
        (-13..=13).collect::<Vec<_>>(),
    );
}
