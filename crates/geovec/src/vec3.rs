//! Three-component vector and its canonical binary operations.
//!
//! [`dot`], [`cross`] and [`distance`] are the canonical implementations;
//! the methods of the same name on [`Vec3`] delegate to them.

use crate::Scalar;

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

/// Canonical dot product.
#[inline]
pub fn dot<S: Scalar>(lhs: Vec3<S>, rhs: Vec3<S>) -> S {
    lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z
}

/// Canonical right-handed cross product.
#[inline]
pub fn cross<S: Scalar>(lhs: Vec3<S>, rhs: Vec3<S>) -> Vec3<S> {
    Vec3::new(
        lhs.y * rhs.z - lhs.z * rhs.y,
        lhs.z * rhs.x - lhs.x * rhs.z,
        lhs.x * rhs.y - lhs.y * rhs.x,
    )
}

/// Canonical distance, `|lhs - rhs|`.
#[inline]
pub fn distance<S: Scalar>(lhs: Vec3<S>, rhs: Vec3<S>) -> S {
    (lhs - rhs).length()
}

impl<S: Scalar> Vec3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self { Self { x, y, z } }

    #[inline]
    pub fn zero() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn splat(v: S) -> Self { Self::new(v, v, v) }

    #[inline]
    pub fn x() -> Self { Self::new(S::ONE, S::ZERO, S::ZERO) }

    #[inline]
    pub fn y() -> Self { Self::new(S::ZERO, S::ONE, S::ZERO) }

    #[inline]
    pub fn z() -> Self { Self::new(S::ZERO, S::ZERO, S::ONE) }

    #[inline]
    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == S::ZERO && self.y == S::ZERO && self.z == S::ZERO
    }

    #[inline]
    pub fn is_any_zero(self) -> bool {
        self.x == S::ZERO || self.y == S::ZERO || self.z == S::ZERO
    }

    /// True iff every component lies in `(-tolerance, tolerance)`.
    /// `None` means [`Scalar::ALMOST_ZERO`].
    #[inline]
    pub fn is_almost_zero(self, tolerance: impl Into<Option<S>>) -> bool {
        let tol = tolerance.into().unwrap_or(S::ALMOST_ZERO);
        let within = |c: S| c > -tol && c < tol;
        within(self.x) && within(self.y) && within(self.z)
    }

    #[inline]
    pub fn dot(self, rhs: impl Into<Self>) -> S { dot(self, rhs.into()) }

    #[inline]
    pub fn cross(self, rhs: impl Into<Self>) -> Self { cross(self, rhs.into()) }

    #[inline]
    pub fn distance(self, rhs: impl Into<Self>) -> S { distance(self, rhs.into()) }

    #[inline]
    pub fn lengthsqr(self) -> S { self.x * self.x + self.y * self.y + self.z * self.z }

    #[inline]
    pub fn length(self) -> S { self.lengthsqr().sqrt() }

    /// Squared length of the projection onto the xy plane.
    #[inline]
    pub fn lengthsqr_xy(self) -> S { self.x * self.x + self.y * self.y }

    #[inline]
    pub fn lengthsqr_xz(self) -> S { self.x * self.x + self.z * self.z }

    #[inline]
    pub fn lengthsqr_yz(self) -> S { self.y * self.y + self.z * self.z }

    #[inline]
    pub fn length_xy(self) -> S { self.lengthsqr_xy().sqrt() }

    #[inline]
    pub fn length_xz(self) -> S { self.lengthsqr_xz().sqrt() }

    #[inline]
    pub fn length_yz(self) -> S { self.lengthsqr_yz().sqrt() }

    /// Unit vector in the same direction. The zero vector yields NaN.
    #[inline]
    pub fn normalize(self) -> Self { self / self.length() }

    #[inline]
    pub fn normalize_this(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    #[inline]
    pub fn is_perpendicular(self, v: impl Into<Self>) -> bool {
        self.dot(v) == S::ZERO
    }

    /// `self x v`, orthogonal to both. Collinear inputs give the zero vector.
    #[inline]
    pub fn perpendicular(self, v: impl Into<Self>) -> Self { self.cross(v) }

    #[inline]
    pub fn perpendicular_this(&mut self, v: impl Into<Self>) -> &mut Self {
        *self = self.cross(v);
        self
    }

    #[inline]
    pub fn is_opposite(self, v: impl Into<Self>) -> bool {
        let v = v.into();
        self.x == -v.x && self.y == -v.y && self.z == -v.z
    }

    #[inline]
    pub fn opposite(self) -> Self { -self }

    #[inline]
    pub fn opposite_this(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Exact test `x * v.y == y * v.x && z * v.x == x * v.z`.
    ///
    /// Only the xy and xz ratios are compared. When both x components are
    /// zero the yz ratio is not checked, so `(0, 1, 2)` and `(0, 2, 1)`
    /// report collinear.
    #[inline]
    pub fn is_collinear(self, v: impl Into<Self>) -> bool {
        let v = v.into();
        self.x * v.y == self.y * v.x && self.z * v.x == self.x * v.z
    }

    /// Collinear and every component pair has differing sign bits
    /// (`0.0` against `-0.0` counts as differing).
    #[inline]
    pub fn is_anticollinear(self, v: impl Into<Self>) -> bool {
        let v = v.into();
        self.is_collinear(v)
            && self.x.is_sign_negative() != v.x.is_sign_negative()
            && self.y.is_sign_negative() != v.y.is_sign_negative()
            && self.z.is_sign_negative() != v.z.is_sign_negative()
    }

    #[inline]
    pub fn collinear(self, a: S) -> Self { self * a }

    #[inline]
    pub fn collinear_this(&mut self, a: S) -> &mut Self {
        *self *= a;
        self
    }

    #[inline]
    pub fn anticollinear(self, a: S) -> Self { self * -a }

    #[inline]
    pub fn anticollinear_this(&mut self, a: S) -> &mut Self {
        *self *= -a;
        self
    }

    #[inline]
    pub fn to_array(self) -> [S; 3] { [self.x, self.y, self.z] }

    #[inline]
    pub fn as_array(&self) -> &[S; 3] {
        // SAFETY: #[repr(C)] with three fields of the same type `S`, no padding.
        unsafe { &*(self as *const Self as *const [S; 3]) }
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [S; 3] {
        // SAFETY: see `as_array`.
        unsafe { &mut *(self as *mut Self as *mut [S; 3]) }
    }

    /// Pointer to `x`, valid for reading three contiguous scalars.
    #[inline]
    pub fn as_ptr(&self) -> *const S { self.as_array().as_ptr() }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut S { self.as_mut_array().as_mut_ptr() }
}

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self { Self::zero() }
}

impl<S: Scalar> From<&Vec3<S>> for Vec3<S> {
    #[inline]
    fn from(v: &Vec3<S>) -> Self { *v }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(v: Vec3<S>) -> Self { v.to_array() }
}

impl<S: Scalar> AsRef<[S]> for Vec3<S> {
    fn as_ref(&self) -> &[S] { self.as_array() }
}

impl_componentwise_ops!(Vec3 { x, y, z });
