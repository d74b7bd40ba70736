use std::fmt::Debug;
use std::ops::Add;

/// Numeric type usable as an edge weight or capacity.
///
/// `INFINITY` marks unreachable distances and unbounded capacities: the IEEE
/// infinity for floats and the maximum value for integers.
pub trait Scalar: Copy + PartialOrd + Add<Output = Self> + Debug {
    const ZERO: Self;
    const INFINITY: Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;
            }

            impl Weighted for $t {
                type Weight = $t;

                #[inline]
                fn weight(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const INFINITY: Self = <$t>::INFINITY;
            }

            impl Weighted for $t {
                type Weight = $t;

                #[inline]
                fn weight(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

/// Edge payload carrying a weight.
///
/// Bare numbers are their own weight, so `AdjacencyList<_, u32>` is a
/// weighted graph without a wrapper type.
pub trait Weighted {
    type Weight: Scalar;

    fn weight(&self) -> Self::Weight;
}

/// Edge payload carrying a capacity.
pub trait Capacitated {
    type Capacity: Scalar;

    fn capacity(&self) -> Self::Capacity;
}

impl_scalar_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_scalar_float!(f32, f64);
