//! Closest-first enumeration of a plane.

use crate::index::{
    Index2D,
    idx2,
};


// right, up, left, down
const DIRECTIONS: [Index2D; 4] = [
    idx2(1, 0),
    idx2(0, 1),
    idx2(-1, 0),
    idx2(0, -1),
];


/// Square spiral outward from `origin`.
///
/// Yields the origin, then every coordinate at Chebyshev distance 1, then
/// distance 2, and so on. Finite if a ring count is given, otherwise
/// infinite. Each call to `iter` starts over from the origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Spiral2D {
    pub origin: Index2D,
    pub rings: Option<u32>,
}

impl Spiral2D {
    /// Infinite spiral.
    pub fn new(origin: Index2D) -> Self {
        Spiral2D { origin, rings: None }
    }

    /// Spiral covering `rings` rings around the origin.
    pub fn bounded(origin: Index2D, rings: u32) -> Self {
        Spiral2D { origin, rings: Some(rings) }
    }

    /// Number of coordinates yielded, or `None` if infinite.
    pub fn len(&self) -> Option<u64> {
        self.rings.map(|rings| {
            let side = 2 * rings as u64 + 1;
            side * side
        })
    }

    pub fn iter(&self) -> Spiral2DIter {
        Spiral2DIter {
            origin: self.origin,
            offset: idx2(0, 0),
            direction: 0,
            segment_len: 1,
            segment_step: 0,
            segments_at_len: 0,
            remaining: self.len(),
        }
    }
}

impl<'a> IntoIterator for &'a Spiral2D {
    type Item = Index2D;
    type IntoIter = Spiral2DIter;

    fn into_iter(self) -> Spiral2DIter {
        self.iter()
    }
}

impl IntoIterator for Spiral2D {
    type Item = Index2D;
    type IntoIter = Spiral2DIter;

    fn into_iter(self) -> Spiral2DIter {
        self.iter()
    }
}


/// See `Spiral2D::iter`.
///
/// Walks segments of length 1, 1, 2, 2, 3, 3, ... turning left after each.
#[derive(Debug, Clone)]
pub struct Spiral2DIter {
    origin: Index2D,
    offset: Index2D,
    direction: usize,
    segment_len: i32,
    segment_step: i32,
    segments_at_len: u8,
    remaining: Option<u64>,
}

impl Iterator for Spiral2DIter {
    type Item = Index2D;

    fn next(&mut self) -> Option<Index2D> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let out = self.origin + self.offset;

        self.offset = self.offset + DIRECTIONS[self.direction];
        self.segment_step += 1;
        if self.segment_step == self.segment_len {
            self.segment_step = 0;
            self.direction = (self.direction + 1) % DIRECTIONS.len();
            self.segments_at_len += 1;
            if self.segments_at_len == 2 {
                self.segments_at_len = 0;
                self.segment_len += 1;
            }
        }

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => match usize::try_from(n) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
            None => (usize::MAX, None),
        }
    }
}


#[test]
fn test_spiral_one_ring() {
    use std::collections::HashSet;

    let spiral = Spiral2D::bounded(idx2(0, 0), 1);
    let coords = spiral.iter().collect::<Vec<_>>();
    assert_eq!(coords.len(), 9);
    assert_eq!(coords[0], idx2(0, 0));

    let unique = coords.iter().copied().collect::<HashSet<_>>();
    assert_eq!(unique.len(), 9);
    for c in coords {
        assert!(c.x().abs() <= 1 && c.y().abs() <= 1, "{:?}", c);
    }
}

#[test]
fn test_spiral_rings_in_order() {
    let origin = idx2(5, -3);
    let spiral = Spiral2D::bounded(origin, 4);
    let mut prev_ring = 0;
    let mut count = 0;
    for c in &spiral {
        let d = c - origin;
        let ring = d.x().abs().max(d.y().abs());
        assert!(ring >= prev_ring, "ring went backwards at {:?}", c);
        assert!(ring <= 4);
        prev_ring = ring;
        count += 1;
    }
    assert_eq!(count, 81);
}

#[test]
fn test_spiral_infinite_restarts() {
    let spiral = Spiral2D::new(idx2(0, 0));
    let first = spiral.iter().take(30).collect::<Vec<_>>();
    let second = spiral.iter().take(30).collect::<Vec<_>>();
    assert_eq!(first, second);
    assert_eq!(&first[..3], &[idx2(0, 0), idx2(1, 0), idx2(1, 1)]);
    assert_eq!(spiral.len(), None);
}
