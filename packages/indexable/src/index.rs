//! N-dimensional integer coordinates.

use crate::axis::{
    Axis,
    Pole,
    Sign,
};
use std::{
    ops::{
        self,
        Add,
        Sub,
        Mul,
        Div,
        Rem,
        Neg,
        Shl,
        Shr,
    },
    fmt,
};
use vek::*;


/// Coordinate in an `N`-dimensional integer space, `N` between 1 and 4.
///
/// Components are ordered X, Y, Z, W. Arithmetic operators are
/// componentwise. Accessing an axis at or beyond `N` panics.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Index<const N: usize>(pub [i32; N]);

pub type Index1D = Index<1>;
pub type Index2D = Index<2>;
pub type Index3D = Index<3>;
pub type Index4D = Index<4>;


/// Construct a 1D index.
pub const fn idx1(x: i32) -> Index1D {
    Index([x])
}

/// Construct a 2D index.
pub const fn idx2(x: i32, y: i32) -> Index2D {
    Index([x, y])
}

/// Construct a 3D index.
pub const fn idx3(x: i32, y: i32, z: i32) -> Index3D {
    Index([x, y, z])
}

/// Construct a 4D index.
pub const fn idx4(x: i32, y: i32, z: i32, w: i32) -> Index4D {
    Index([x, y, z, w])
}


impl<const N: usize> Index<N> {
    pub const RANK: usize = N;

    pub const ZERO: Self = Index([0; N]);

    pub const ONE: Self = Index([1; N]);

    pub const MIN: Self = Index([i32::MIN; N]);

    pub const MAX: Self = Index([i32::MAX; N]);

    pub const fn new(components: [i32; N]) -> Self {
        Index(components)
    }

    /// Every component set to `n`.
    pub const fn splat(n: i32) -> Self {
        Index([n; N])
    }

    pub const fn rank(self) -> usize {
        N
    }

    pub fn x(self) -> i32 {
        self[Axis::X]
    }

    pub fn y(self) -> i32 {
        self[Axis::Y]
    }

    pub fn z(self) -> i32 {
        self[Axis::Z]
    }

    pub fn w(self) -> i32 {
        self[Axis::W]
    }

    /// Copy with one component replaced.
    pub fn with<A: Into<usize>>(mut self, axis: A, n: i32) -> Self {
        let axis = axis.into();
        assert!(axis < N, "axis {} out of range for rank {}", axis, N);
        self.0[axis] = n;
        self
    }

    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(i32) -> i32,
    {
        Index(self.0.map(f))
    }

    pub fn zip_with<F>(self, rhs: Self, mut f: F) -> Self
    where
        F: FnMut(i32, i32) -> i32,
    {
        let mut out = self;
        for i in 0..N {
            out.0[i] = f(self.0[i], rhs.0[i]);
        }
        out
    }

    /// Componentwise minimum.
    pub fn min(self, rhs: Self) -> Self {
        self.zip_with(rhs, i32::min)
    }

    /// Componentwise maximum.
    pub fn max(self, rhs: Self) -> Self {
        self.zip_with(rhs, i32::max)
    }

    pub fn all<F>(self, f: F) -> bool
    where
        F: FnMut(&i32) -> bool,
    {
        self.0.iter().all(f)
    }

    pub fn all_ge(self, rhs: Self) -> bool {
        (0..N).all(|i| self.0[i] >= rhs.0[i])
    }

    pub fn all_gt(self, rhs: Self) -> bool {
        (0..N).all(|i| self.0[i] > rhs.0[i])
    }

    pub fn all_le(self, rhs: Self) -> bool {
        (0..N).all(|i| self.0[i] <= rhs.0[i])
    }

    pub fn all_lt(self, rhs: Self) -> bool {
        (0..N).all(|i| self.0[i] < rhs.0[i])
    }

    /// Whether `lower <= self <= upper` componentwise.
    pub fn is_within(self, lower: Self, upper: Self) -> bool {
        self.all_ge(lower) && self.all_le(upper)
    }

    /// Number of coordinates in a region of these dimensions.
    ///
    /// Panics if any component is negative.
    pub fn volume(self) -> usize {
        self.0
            .iter()
            .map(|&n| usize::try_from(n)
                .unwrap_or_else(|_| panic!("negative dimension in {:?}", self)))
            .product()
    }

    /// Sign of each component of `self - origin`.
    pub fn signs_from(self, origin: Self) -> [Sign; N] {
        let mut signs = [Sign::Zero; N];
        for i in 0..N {
            signs[i] = Sign::of_i32(self.0[i].cmp(&origin.0[i]) as i32);
        }
        signs
    }

    /// The orthant around `origin` this index lies in.
    pub fn orthant(self, origin: Self) -> Orthant<N> {
        Orthant::of(self, origin)
    }
}

impl<const N: usize> Default for Index<N> {
    fn default() -> Self {
        Index::ZERO
    }
}

impl<const N: usize> ops::Index<usize> for Index<N> {
    type Output = i32;

    fn index(&self, i: usize) -> &i32 {
        assert!(i < N, "axis {} out of range for rank {}", i, N);
        &self.0[i]
    }
}

impl<const N: usize> ops::IndexMut<usize> for Index<N> {
    fn index_mut(&mut self, i: usize) -> &mut i32 {
        assert!(i < N, "axis {} out of range for rank {}", i, N);
        &mut self.0[i]
    }
}

impl<const N: usize> ops::Index<Axis> for Index<N> {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        &self[axis.to_usize()]
    }
}

impl<const N: usize> ops::IndexMut<Axis> for Index<N> {
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        &mut self[axis.to_usize()]
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> usize {
        axis.to_usize()
    }
}

macro_rules! impl_componentwise_op {
    ($trait:ident, $method:ident, $op:tt)=>{
        impl<const N: usize> $trait for Index<N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl<const N: usize> $trait<i32> for Index<N> {
            type Output = Self;

            fn $method(self, rhs: i32) -> Self {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_componentwise_op!(Add, add, +);
impl_componentwise_op!(Sub, sub, -);
impl_componentwise_op!(Mul, mul, *);
impl_componentwise_op!(Div, div, /);
impl_componentwise_op!(Rem, rem, %);

impl<const N: usize> Shl<u32> for Index<N> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        self.map(|a| a << rhs)
    }
}

impl<const N: usize> Shr<u32> for Index<N> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        self.map(|a| a >> rhs)
    }
}

impl<const N: usize> Neg for Index<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<const N: usize> From<[i32; N]> for Index<N> {
    fn from(components: [i32; N]) -> Self {
        Index(components)
    }
}

impl<const N: usize> From<Index<N>> for [i32; N] {
    fn from(index: Index<N>) -> Self {
        index.0
    }
}

impl From<Vec2<i32>> for Index2D {
    fn from(v: Vec2<i32>) -> Self {
        idx2(v.x, v.y)
    }
}

impl From<Index2D> for Vec2<i32> {
    fn from(i: Index2D) -> Self {
        Vec2::new(i.0[0], i.0[1])
    }
}

impl From<Vec3<i32>> for Index3D {
    fn from(v: Vec3<i32>) -> Self {
        idx3(v.x, v.y, v.z)
    }
}

impl From<Index3D> for Vec3<i32> {
    fn from(i: Index3D) -> Self {
        Vec3::new(i.0[0], i.0[1], i.0[2])
    }
}

impl From<Vec4<i32>> for Index4D {
    fn from(v: Vec4<i32>) -> Self {
        idx4(v.x, v.y, v.z, v.w)
    }
}

impl From<Index4D> for Vec4<i32> {
    fn from(i: Index4D) -> Self {
        Vec4::new(i.0[0], i.0[1], i.0[2], i.0[3])
    }
}

macro_rules! impl_fmt_index {
    ($t:ident, $fstr:literal)=>{
        impl<const N: usize> fmt::$t for Index<N> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("<")?;
                for (i, n) in self.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, $fstr, n)?;
                }
                f.write_str(">")
            }
        }
    };
}
impl_fmt_index!(Debug, "{}");
impl_fmt_index!(Display, "{}");
impl_fmt_index!(LowerHex, "{:x}");
impl_fmt_index!(UpperHex, "{:X}");


/// One of the `2^N` orthants around some origin.
///
/// A component equal to the origin's counts as `Pos`, so every index lies in
/// exactly one orthant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Orthant<const N: usize>(pub [Pole; N]);

impl<const N: usize> Orthant<N> {
    pub fn of(index: Index<N>, origin: Index<N>) -> Self {
        let mut poles = [Pole::Pos; N];
        for i in 0..N {
            if index.0[i] < origin.0[i] {
                poles[i] = Pole::Neg;
            }
        }
        Orthant(poles)
    }

    pub fn contains(self, index: Index<N>, origin: Index<N>) -> bool {
        Orthant::of(index, origin) == self
    }

    /// The unit direction of this orthant, `-1` or `1` per axis.
    pub fn to_index(self) -> Index<N> {
        Index(self.0.map(Pole::to_int))
    }

    /// All orthants, X varying fastest, starting from all-negative.
    pub fn all() -> impl Iterator<Item=Self> {
        (0..1usize << N)
            .map(|bits| {
                let mut poles = [Pole::Neg; N];
                for i in 0..N {
                    if bits & (1 << i) != 0 {
                        poles[i] = Pole::Pos;
                    }
                }
                Orthant(poles)
            })
    }
}


#[test]
fn test_componentwise_arithmetic() {
    let a = idx3(1, -2, 7);
    let b = idx3(3, 5, -2);
    assert_eq!(a + b, idx3(4, 3, 5));
    assert_eq!(a - b, idx3(-2, -7, 9));
    assert_eq!(a * b, idx3(3, -10, -14));
    assert_eq!(idx3(7, -7, 9) / idx3(2, 2, 3), idx3(3, -3, 3));
    assert_eq!(idx3(7, -7, 9) % idx3(2, 2, 4), idx3(1, -1, 1));
    assert_eq!(a * 2, idx3(2, -4, 14));
    assert_eq!(idx2(9, -9) / 3, idx2(3, -3));
    assert_eq!(idx2(3, 1) << 2, idx2(12, 4));
    assert_eq!(idx2(12, -8) >> 2, idx2(3, -2));
    assert_eq!(-a, idx3(-1, 2, -7));
}

#[test]
fn test_axis_access() {
    let i = idx4(1, 2, 3, 4);
    assert_eq!((i.x(), i.y(), i.z(), i.w()), (1, 2, 3, 4));
    assert_eq!(i[Axis::Z], 3);
    assert_eq!(i[1], 2);
    assert_eq!(i.with(Axis::W, 9), idx4(1, 2, 3, 9));
}

#[test]
#[should_panic]
fn test_axis_out_of_rank_panics() {
    let _ = idx2(1, 2).z();
}

#[test]
fn test_constants_and_volume() {
    assert_eq!(Index3D::ZERO, idx3(0, 0, 0));
    assert_eq!(Index2D::MAX, idx2(i32::MAX, i32::MAX));
    assert_eq!(Index1D::MIN, idx1(i32::MIN));
    assert_eq!(idx3(2, 3, 4).volume(), 24);
    assert_eq!(idx2(0, 3).volume(), 0);
}

#[test]
fn test_orthant_classification() {
    let origin = idx2(0, 0);
    assert_eq!(idx2(3, -1).orthant(origin), Orthant([Pole::Pos, Pole::Neg]));
    assert_eq!(idx2(0, 0).orthant(origin), Orthant([Pole::Pos, Pole::Pos]));
    assert!(Orthant([Pole::Neg, Pole::Neg]).contains(idx2(-1, -5), origin));
    assert_eq!(Orthant::<3>::all().count(), 8);
    assert_eq!(
        idx3(5, 1, -4).signs_from(idx3(1, 1, 1)),
        [Sign::Pos, Sign::Zero, Sign::Neg],
    );
}

#[test]
fn test_vek_conversions() {
    let v = Vec3::new(4, -5, 6);
    let i = Index3D::from(v);
    assert_eq!(i, idx3(4, -5, 6));
    assert_eq!(Vec3::<i32>::from(i), v);
    assert_eq!(format!("{:?}", i), "<4,-5,6>");
}
