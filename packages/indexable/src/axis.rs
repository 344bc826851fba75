//! Named axes and per-axis sign classification.

use std::{
    ops::Neg,
    convert::TryFrom,
};


macro_rules! axis_enum {
    (
        $name:ident,
        $num_constant:ident = $num:expr,
        $all_constant:ident,
        ($(
            $variant:ident,
        )*),
    )=>{
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(u8)]
        pub enum $name {$(
            $variant,
        )*}

        pub const $num_constant: usize = $num;

        pub const $all_constant: [$name; $num_constant] = [$(
            $name::$variant,
        )*];

        impl $name {
            /// Position of this variant in declaration order.
            pub const fn to_usize(self) -> usize {
                self as usize
            }

            pub const fn from_usize(n: usize) -> Option<Self> {
                if n < $num_constant {
                    Some($all_constant[n])
                } else {
                    None
                }
            }
        }
    };
}

axis_enum!(
    Axis,
    NUM_AXES = 4,
    AXES,
    (
        X,
        Y,
        Z,
        W,
    ),
);

macro_rules! scalarlike_axis_enum {
    (
        $name:ident,
        $num_constant:ident = $num:expr,
        $all_constant:ident,
        ($(
            $pos:ident
                = ($int:expr)
                = -$neg:ident,
        )*),
    )=>{
        axis_enum!(
            $name,
            $num_constant = $num,
            $all_constant,
            ($(
                $pos,
            )*),
        );

        impl $name {
            pub const fn to_int(self) -> i32 {
                match self {$(
                    $name::$pos => $int,
                )*}
            }

            pub const fn from_int(int: i32) -> Option<Self> {
                match int {
                    $(
                        $int => Some($name::$pos),
                    )*
                    _ => None
                }
            }

            pub const fn neg(self) -> Self {
                match self {$(
                    $name::$pos => $name::$neg,
                )*}
            }
        }

        impl From<$name> for i32 {
            fn from(n: $name) -> i32 {
                n.to_int()
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ();

            fn try_from(int: i32) -> Result<Self, ()> {
                Self::from_int(int).ok_or(())
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                $name::neg(self)
            }
        }
    };
}

scalarlike_axis_enum!(
    Pole,
    NUM_POLES = 2,
    POLES,
    (
        Neg = (-1) = -Pos,
        Pos = (1) = -Neg,
    ),
);

scalarlike_axis_enum!(
    Sign,
    NUM_SIGNS = 3,
    SIGNS,
    (
        Neg = (-1) = -Pos,
        Zero = (0) = -Zero,
        Pos = (1) = -Neg,
    ),
);

impl Sign {
    pub const fn of_i32(n: i32) -> Self {
        if n > 0 {
            Sign::Pos
        } else if n < 0 {
            Sign::Neg
        } else {
            Sign::Zero
        }
    }
}

impl From<Pole> for Sign {
    fn from(pole: Pole) -> Self {
        match pole {
            Pole::Pos => Sign::Pos,
            Pole::Neg => Sign::Neg,
        }
    }
}


#[test]
fn test_axis_usize_round_trip() {
    for axis in AXES {
        assert_eq!(Axis::from_usize(axis.to_usize()), Some(axis));
    }
    assert_eq!(Axis::from_usize(NUM_AXES), None);
}

#[test]
fn test_sign_of_and_neg() {
    assert_eq!(Sign::of_i32(-7), Sign::Neg);
    assert_eq!(Sign::of_i32(0), Sign::Zero);
    assert_eq!(Sign::of_i32(3), Sign::Pos);
    assert_eq!(-Sign::Neg, Sign::Pos);
    assert_eq!(-Sign::Zero, Sign::Zero);
    assert_eq!(Sign::from(Pole::Neg).to_int(), -1);
    assert_eq!(Pole::try_from(0), Err(()));
    assert_eq!(POLES.map(i32::from), [-1, 1]);
    assert_eq!(SIGNS.len(), NUM_SIGNS);
}
