//! N-dimensional indexable containers for voxel world storage.
//!
//! Basic example:
//!
//! ```
//! use indexable::{
//!     BoundedIndexable,
//!     MultiDynamicArray3D,
//!     FixedArray,
//!     Composite3x3x3,
//!     Spiral2D,
//!     shared,
//!     idx2,
//!     idx3,
//! };
//!
//! // an array which accepts any coordinate and grows to fit
//! let mut heights = MultiDynamicArray3D::<u16>::new();
//! heights.set(idx3(-40, 3, 100), 7);
//! assert_eq!(heights.get(idx3(-40, 3, 100)), 7);
//! assert_eq!(heights.get(idx3(2, 2, 2)), 0);
//!
//! // a chunk and its 26 neighbors, addressed as one array
//! let mut window = Composite3x3x3::from_fn(|_| {
//!     shared(FixedArray::<u8, 3>::new(idx3(16, 16, 16)))
//! });
//! window.set(idx3(-1, 0, 16), 1);
//! assert_eq!(
//!     window.neighbor(idx3(-1, 0, 1)).borrow().get(idx3(15, 0, 0)),
//!     1,
//! );
//!
//! // closest-first visiting order
//! let order = Spiral2D::bounded(idx2(0, 0), 1).iter().collect::<Vec<_>>();
//! assert_eq!(order.len(), 9);
//! ```
//!
//! ## indices
//!
//! An `Index<N>` is `N` signed 32-bit coordinates, X first, then Y, Z, and W.
//! Every container reports its bounds as `dimensions`, `lower_bounds`, and
//! inclusive `upper_bounds`, with `upper = lower + dimensions - 1`.
//! Row-major order always means X varies fastest.
//!
//! ## fixed and dynamic arrays
//!
//! A `FixedArray` is flat storage of a constant shape. A `DynamicArray`
//! starts at zero and grows toward positive infinity when written beyond its
//! storage, doubling each axis as needed. A `MultiDynamicArray` also accepts
//! negative coordinates by keeping logical zero at a floating origin offset
//! into its storage, re-centering whenever it grows. Both dynamic arrays
//! report the bounds of their current storage and read unmaterialized
//! coordinates as the default value.
//!
//! ## composites
//!
//! A `CompositeArray` presents a grid of same-shaped, zero-bounded sub-arrays
//! as one array, routing each index to a sub-array by division. A
//! `Composite3x3x3` is the neighbor-window case, centered on the middle
//! cell. Sub-arrays are held through `Shared` handles, so one chunk may sit
//! in many composites at once, and writes through a composite are visible on
//! the chunk itself. None of this is thread-safe.
//!
//! ## contract violations
//!
//! Indexing outside of what a container accepts, or constructing one from
//! inconsistent parts, is a caller bug and panics.

mod axis;
mod index;
mod indexable;
mod fixed;
mod growth;
mod dynamic;
mod multi_dynamic;
mod composite;
mod neighborhood;
mod range;
mod oscillating_range;
mod spiral;
mod coord;
mod loaded;


pub use self::{
    axis::{
        NUM_AXES,
        AXES,
        NUM_POLES,
        POLES,
        NUM_SIGNS,
        SIGNS,
        Axis,
        Pole,
        Sign,
    },
    index::{
        Index,
        Index1D,
        Index2D,
        Index3D,
        Index4D,
        Orthant,
        idx1,
        idx2,
        idx3,
        idx4,
    },
    indexable::{
        BoundedIndexable,
        Entries,
    },
    fixed::{
        FixedArray,
        FixedArray1D,
        FixedArray2D,
        FixedArray3D,
        FixedArray4D,
    },
    growth::{
        DEFAULT_LENGTH,
        MIN_GROWTH_LENGTH,
        DynamicArrayConfig,
        grown_length,
    },
    dynamic::{
        DynamicArray,
        DynamicArray1D,
        DynamicArray2D,
    },
    multi_dynamic::{
        MultiDynamicArray,
        MultiDynamicArray1D,
        MultiDynamicArray3D,
        MultiDynamicArray4D,
    },
    composite::{
        Shared,
        shared,
        CompositeArray,
        CompositeArray2D,
        CompositeArray3D,
    },
    neighborhood::Composite3x3x3,
    range::{
        Range,
        RangeIter,
    },
    oscillating_range::{
        OscillatingRange,
        OscillatingRangeIter,
    },
    spiral::{
        Spiral2D,
        Spiral2DIter,
    },
    coord::{
        gc_get_cc,
        gc_get_lc,
        gc_split,
        cc_lc_to_gc,
    },
    loaded::LoadedChunks,
};
