use crate::{
    index::{
        Index3D,
        idx3,
    },
    indexable::BoundedIndexable,
    range::Range,
    composite::{
        Shared,
        shared,
    },
    neighborhood::Composite3x3x3,
    coord::gc_split,
};
use std::collections::hash_map::{
    self as hmap,
    HashMap,
};
use slab::Slab;
use tracing::*;


/// Set of loaded chunk arrays.
///
/// Serves 3 purposes:
///
/// - Tracks the set of chunks which are currently loaded, each being a
///   zero-bounded array of the same extent.
/// - Assigns each loaded chunk a chunk index (ci), which may be reused if the
///   chunk is unloaded. Guaranteed to assign indexes with precisely the
///   behavior of a `slab::Slab`.
/// - Assembles 3x3x3 neighborhoods of loaded chunks without copying chunk
///   data, and routes global coordinates to the owning chunk.
#[derive(Debug)]
pub struct LoadedChunks<A> {
    hmap: HashMap<Index3D, usize>,
    slab: Slab<(Index3D, Shared<A>)>,
    extent: Option<Index3D>,
}

impl<A> LoadedChunks<A>
where
    A: BoundedIndexable<3>,
{
    /// Construct a new empty set of loaded chunks.
    pub fn new() -> Self {
        LoadedChunks {
            hmap: HashMap::new(),
            slab: Slab::new(),
            extent: None,
        }
    }

    /// Add a chunk to the set of loaded chunks, and get its assigned chunk
    /// index (ci).
    ///
    /// Panics if already present, if the chunk is not zero-bounded, or if its
    /// dimensions differ from currently loaded chunks.
    pub fn add(&mut self, cc: Index3D, chunk: A) -> usize {
        self.add_shared(cc, shared(chunk))
    }

    /// Like `add`, but for a chunk the caller keeps a handle to.
    pub fn add_shared(&mut self, cc: Index3D, chunk: Shared<A>) -> usize {
        let hmap_entry =
            match self.hmap.entry(cc) {
                hmap::Entry::Vacant(vacant) => vacant,
                hmap::Entry::Occupied(_) => panic!("chunk {:?} already loaded", cc),
            };

        {
            let chunk = chunk.borrow();
            assert!(
                chunk.lower_bounds() == Index3D::ZERO,
                "chunk lower bounds {:?} are not zero",
                chunk.lower_bounds(),
            );
            let extent = *self.extent.get_or_insert(chunk.dimensions());
            assert!(
                chunk.dimensions() == extent,
                "chunk dimensions {:?} differ from loaded chunk extent {:?}",
                chunk.dimensions(),
                extent,
            );
        }

        let ci = self.slab.insert((cc, chunk));
        hmap_entry.insert(ci);
        debug!(?cc, ci, "loaded chunk");
        ci
    }

    /// Remove a chunk from the set of loaded chunks. Its chunk index may be
    /// reused for following `add` transactions.
    ///
    /// Panics if not present.
    pub fn remove(&mut self, cc: Index3D) -> (usize, Shared<A>) {
        let ci = self.hmap
            .remove(&cc)
            .unwrap_or_else(|| panic!("chunk {:?} not loaded", cc));
        let (cc2, chunk) = self.slab.remove(ci);
        debug_assert_eq!(cc, cc2);
        if self.slab.is_empty() {
            self.extent = None;
        }
        debug!(?cc, ci, "unloaded chunk");
        (ci, chunk)
    }

    /// Assemble the chunk at `cc` and its 26 neighbors into one composite
    /// centered on `cc`, or `None` unless all 27 are loaded.
    pub fn neighborhood(&self, cc: Index3D) -> Option<Composite3x3x3<A>> {
        for offset in Range::new(-Index3D::ONE, idx3(3, 3, 3)).iter() {
            if !self.contains(cc + offset) {
                return None;
            }
        }
        Some(Composite3x3x3::from_fn(|offset| self.hmap
            .get(&(cc + offset))
            .map(|&ci| self.slab[ci].1.clone())
            .unwrap_or_else(|| unreachable!("neighbor checked loaded"))))
    }

    /// Read the value at a global coordinate, or `None` if its chunk is not
    /// loaded.
    pub fn get_global(&self, gc: Index3D) -> Option<A::Item> {
        let extent = self.extent?;
        let (cc, lc) = gc_split(gc, extent);
        self.get(cc).map(|chunk| chunk.borrow().get(lc))
    }

    /// Write the value at a global coordinate.
    ///
    /// Panics if its chunk is not loaded.
    pub fn set_global(&mut self, gc: Index3D, val: A::Item) {
        let extent = self.extent
            .unwrap_or_else(|| panic!("chunk containing {:?} not loaded", gc));
        let (cc, lc) = gc_split(gc, extent);
        let chunk = self.get(cc)
            .unwrap_or_else(|| panic!("chunk {:?} containing {:?} not loaded", cc, gc));
        chunk.borrow_mut().set(lc, val);
    }
}

impl<A> LoadedChunks<A> {
    /// Dimensions shared by all loaded chunks. Set by the first chunk added
    /// to an empty set, cleared once the set is empty again.
    pub fn extent(&self) -> Option<Index3D> {
        self.extent
    }

    /// Perform a cc -> ci lookup.
    pub fn ci(&self, cc: Index3D) -> Option<usize> {
        self.hmap.get(&cc).copied()
    }

    pub fn contains(&self, cc: Index3D) -> bool {
        self.hmap.contains_key(&cc)
    }

    pub fn get(&self, cc: Index3D) -> Option<&Shared<A>> {
        self.ci(cc).map(|ci| &self.slab[ci].1)
    }

    /// Get by ci, along with its cc.
    pub fn get_by_ci(&self, ci: usize) -> Option<(Index3D, &Shared<A>)> {
        self.slab.get(ci).map(|&(cc, ref chunk)| (cc, chunk))
    }

    pub fn len(&self) -> usize {
        self.slab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slab.is_empty()
    }

    /// Iterate through the cc, ci, and handle of all loaded chunks.
    pub fn iter(&self) -> impl Iterator<Item=(Index3D, usize, &Shared<A>)> + '_ {
        self.slab
            .iter()
            .map(|(ci, &(cc, ref chunk))| (cc, ci, chunk))
    }
}

impl<A> Default for LoadedChunks<A>
where
    A: BoundedIndexable<3>,
{
    fn default() -> Self {
        LoadedChunks::new()
    }
}


#[cfg(test)]
fn load_cube(
    chunks: &mut LoadedChunks<crate::fixed::FixedArray<u8, 3>>,
    center: Index3D,
) {
    use crate::fixed::FixedArray;

    for offset in Range::new(-Index3D::ONE, idx3(3, 3, 3)).iter() {
        chunks.add(center + offset, FixedArray::new(idx3(4, 4, 4)));
    }
}

#[test]
fn test_chunk_indices_reused() {
    use crate::fixed::FixedArray;

    let mut chunks = LoadedChunks::new();
    let a = chunks.add(idx3(0, 0, 0), FixedArray::<u8, 3>::new(idx3(2, 2, 2)));
    let b = chunks.add(idx3(1, 0, 0), FixedArray::new(idx3(2, 2, 2)));
    assert_ne!(a, b);
    assert_eq!(chunks.remove(idx3(0, 0, 0)).0, a);
    assert_eq!(chunks.add(idx3(5, 5, 5), FixedArray::new(idx3(2, 2, 2))), a);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks.get_by_ci(a).map(|(cc, _)| cc), Some(idx3(5, 5, 5)));
}

#[test]
fn test_neighborhood_requires_all_neighbors() {
    let mut chunks = LoadedChunks::new();
    load_cube(&mut chunks, idx3(0, 0, 0));
    assert!(chunks.neighborhood(idx3(0, 0, 0)).is_some());
    assert!(chunks.neighborhood(idx3(1, 0, 0)).is_none());

    chunks.remove(idx3(1, 1, 1));
    assert!(chunks.neighborhood(idx3(0, 0, 0)).is_none());
}

#[test]
fn test_neighborhood_shares_chunk_data() {
    let mut chunks = LoadedChunks::new();
    load_cube(&mut chunks, idx3(2, 0, -1));
    chunks.set_global(idx3(7, 1, -5), 3);

    let mut composite = chunks
        .neighborhood(idx3(2, 0, -1))
        .expect("neighborhood loaded");
    // global <7,1,-5> is local <-1,1,-1> relative to chunk <2,0,-1>
    assert_eq!(composite.get(idx3(-1, 1, -1)), 3);

    composite.set(idx3(4, 0, 0), 8);
    assert_eq!(chunks.get_global(idx3(12, 0, -4)), Some(8));
    assert_eq!(chunks.get_global(idx3(100, 0, 0)), None);
}

#[test]
#[should_panic]
fn test_chunk_extent_mismatch_panics() {
    use crate::fixed::FixedArray;

    let mut chunks = LoadedChunks::new();
    chunks.add(idx3(0, 0, 0), FixedArray::<u8, 3>::new(idx3(2, 2, 2)));
    chunks.add(idx3(1, 0, 0), FixedArray::new(idx3(2, 2, 3)));
}

#[test]
#[should_panic]
fn test_double_load_panics() {
    use crate::fixed::FixedArray;

    let mut chunks = LoadedChunks::new();
    chunks.add(idx3(0, 0, 0), FixedArray::<u8, 3>::new(idx3(2, 2, 2)));
    chunks.add(idx3(0, 0, 0), FixedArray::new(idx3(2, 2, 2)));
}

#[test]
fn test_extent_resets_once_empty() {
    use crate::fixed::FixedArray;

    let mut chunks = LoadedChunks::new();
    chunks.add(idx3(0, 0, 0), FixedArray::<u8, 3>::new(idx3(2, 2, 2)));
    chunks.add(idx3(1, 0, 0), FixedArray::new(idx3(2, 2, 2)));
    chunks.remove(idx3(0, 0, 0));
    assert_eq!(chunks.extent(), Some(idx3(2, 2, 2)));
    chunks.remove(idx3(1, 0, 0));
    assert_eq!(chunks.extent(), None);

    chunks.add(idx3(0, 0, 0), FixedArray::new(idx3(4, 4, 4)));
    assert_eq!(chunks.extent(), Some(idx3(4, 4, 4)));
    assert_eq!(chunks.get_global(idx3(3, 3, 3)), Some(0));
}
