//! Two-component vector and its canonical binary operations.
//!
//! [`dot`] and [`distance`] are the canonical implementations; the methods of
//! the same name on [`Vec2`] delegate to them.

use crate::Scalar;

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}

/// Canonical dot product.
#[inline]
pub fn dot<S: Scalar>(lhs: Vec2<S>, rhs: Vec2<S>) -> S {
    lhs.x * rhs.x + lhs.y * rhs.y
}

/// Canonical distance, `|lhs - rhs|`.
#[inline]
pub fn distance<S: Scalar>(lhs: Vec2<S>, rhs: Vec2<S>) -> S {
    (lhs - rhs).length()
}

impl<S: Scalar> Vec2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO)
    }

    /// Broadcast one scalar to both components.
    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(S::ONE, S::ZERO)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(S::ZERO, S::ONE)
    }

    #[inline]
    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }

    /// True iff both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == S::ZERO && self.y == S::ZERO
    }

    #[inline]
    pub fn is_any_zero(self) -> bool {
        self.x == S::ZERO || self.y == S::ZERO
    }

    /// True iff every component lies in `(-tolerance, tolerance)`.
    ///
    /// `None` uses [`Scalar::ALMOST_ZERO`] (0.01). A negative tolerance makes
    /// this always false.
    #[inline]
    pub fn is_almost_zero(self, tolerance: impl Into<Option<S>>) -> bool {
        let tol = tolerance.into().unwrap_or(S::ALMOST_ZERO);
        self.x > -tol && self.x < tol && self.y > -tol && self.y < tol
    }

    #[inline]
    pub fn dot(self, rhs: impl Into<Self>) -> S {
        dot(self, rhs.into())
    }

    #[inline]
    pub fn distance(self, rhs: impl Into<Self>) -> S {
        distance(self, rhs.into())
    }

    /// Squared length, no square root.
    #[inline]
    pub fn lengthsqr(self) -> S {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> S {
        self.lengthsqr().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Unguarded: the zero vector yields NaN components. Check
    /// [`is_zero`](Self::is_zero) first if that matters.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    #[inline]
    pub fn normalize_this(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Exact test `dot(v) == 0`.
    #[inline]
    pub fn is_perpendicular(self, v: impl Into<Self>) -> bool {
        self.dot(v) == S::ZERO
    }

    #[inline]
    pub fn is_opposite(self, v: impl Into<Self>) -> bool {
        let v = v.into();
        self.x == -v.x && self.y == -v.y
    }

    #[inline]
    pub fn opposite(self) -> Self {
        -self
    }

    #[inline]
    pub fn opposite_this(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Exact test `x * v.y == y * v.x`. Same or opposite direction both count.
    #[inline]
    pub fn is_collinear(self, v: impl Into<Self>) -> bool {
        let v = v.into();
        self.x * v.y == self.y * v.x
    }

    /// Collinear and every component pair has differing sign bits.
    ///
    /// Compares sign bits, so `0.0` and `-0.0` count as opposite signs.
    #[inline]
    pub fn is_anticollinear(self, v: impl Into<Self>) -> bool {
        let v = v.into();
        self.is_collinear(v)
            && self.x.is_sign_negative() != v.x.is_sign_negative()
            && self.y.is_sign_negative() != v.y.is_sign_negative()
    }

    /// Scale by `a`. A negative `a` gives an anticollinear vector.
    #[inline]
    pub fn collinear(self, a: S) -> Self {
        self * a
    }

    #[inline]
    pub fn collinear_this(&mut self, a: S) -> &mut Self {
        *self *= a;
        self
    }

    /// Scale by `-a`.
    #[inline]
    pub fn anticollinear(self, a: S) -> Self {
        self * -a
    }

    #[inline]
    pub fn anticollinear_this(&mut self, a: S) -> &mut Self {
        *self *= -a;
        self
    }

    #[inline]
    pub fn to_array(self) -> [S; 2] {
        [self.x, self.y]
    }

    /// Components as a contiguous `[x, y]` array.
    #[inline]
    pub fn as_array(&self) -> &[S; 2] {
        // SAFETY: #[repr(C)] with two fields of the same type `S`, no padding.
        unsafe { &*(self as *const Self as *const [S; 2]) }
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [S; 2] {
        // SAFETY: see `as_array`.
        unsafe { &mut *(self as *mut Self as *mut [S; 2]) }
    }

    /// Pointer to `x`, valid for reading two contiguous scalars.
    #[inline]
    pub fn as_ptr(&self) -> *const S {
        self.as_array().as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut S {
        self.as_mut_array().as_mut_ptr()
    }
}

impl<S: Scalar> Default for Vec2<S> {
    fn default() -> Self {
        Self::zero()
    }
}

// `v.dot(&w)` works via Into.
impl<S: Scalar> From<&Vec2<S>> for Vec2<S> {
    #[inline]
    fn from(v: &Vec2<S>) -> Self {
        *v
    }
}

impl<S: Scalar> From<[S; 2]> for Vec2<S> {
    fn from(a: [S; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl<S: Scalar> From<Vec2<S>> for [S; 2] {
    fn from(v: Vec2<S>) -> Self {
        v.to_array()
    }
}

impl<S: Scalar> AsRef<[S]> for Vec2<S> {
    fn as_ref(&self) -> &[S] {
        self.as_array()
    }
}

impl_componentwise_ops!(Vec2 { x, y });
