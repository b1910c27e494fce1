use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar component type of [`Vec2`](crate::Vec2) and [`Vec3`](crate::Vec3).
///
/// Sealed: implemented for `f32` and `f64` only, so a vector over any other
/// scalar does not compile.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + FromStr
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// Default tolerance of `is_almost_zero`.
    const ALMOST_ZERO: Self;

    fn sqrt(self) -> Self;
    /// Sign bit test. True for `-0.0` and negative NaNs.
    fn is_sign_negative(self) -> bool;
}

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("geovec needs either the `std` or the `libm` feature for float intrinsics");

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const ALMOST_ZERO: Self = 0.01;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $suffix>](self) }
            #[inline] fn is_sign_negative(self) -> bool { <$t>::is_sign_negative(self) }
        }
        }
    };
}

impl_scalar_float!(f32, f32);
impl_scalar_float!(f64, f64);
