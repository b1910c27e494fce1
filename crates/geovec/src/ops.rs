//! Component-wise operator impls shared by `Vec2` and `Vec3`.
//!
//! Division is unchecked: a zero divisor follows IEEE-754 and yields
//! infinities or NaN.

macro_rules! impl_componentwise_ops {
    ($V:ident { $($f:ident),+ }) => {
        impl_componentwise_ops!(@binop $V { $($f),+ } Add add AddAssign add_assign +);
        impl_componentwise_ops!(@binop $V { $($f),+ } Sub sub SubAssign sub_assign -);
        impl_componentwise_ops!(@binop $V { $($f),+ } Mul mul MulAssign mul_assign *);
        impl_componentwise_ops!(@binop $V { $($f),+ } Div div DivAssign div_assign /);

        impl<S: $crate::Scalar> core::ops::Neg for $V<S> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        // Scalar * vector (commutative)
        impl core::ops::Mul<$V<f64>> for f64 {
            type Output = $V<f64>;
            #[inline]
            fn mul(self, rhs: $V<f64>) -> $V<f64> {
                rhs * self
            }
        }

        impl core::ops::Mul<$V<f32>> for f32 {
            type Output = $V<f32>;
            #[inline]
            fn mul(self, rhs: $V<f32>) -> $V<f32> {
                rhs * self
            }
        }
    };

    (@binop $V:ident { $($f:ident),+ } $Op:ident $op:ident $OpAssign:ident $op_assign:ident $tok:tt) => {
        impl<S: $crate::Scalar> core::ops::$Op for $V<S> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self { $($f: self.$f $tok rhs.$f),+ }
            }
        }

        impl<S: $crate::Scalar> core::ops::$Op<S> for $V<S> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: S) -> Self {
                Self { $($f: self.$f $tok rhs),+ }
            }
        }

        impl<S: $crate::Scalar> core::ops::$OpAssign for $V<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = core::ops::$Op::$op(*self, rhs);
            }
        }

        impl<S: $crate::Scalar> core::ops::$OpAssign<S> for $V<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = core::ops::$Op::$op(*self, rhs);
            }
        }
    };
}
