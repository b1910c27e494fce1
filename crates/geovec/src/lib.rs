//! geovec — fixed-size 2D and 3D vectors for graphics and physics code
//!
//! Plain `Copy` value types over `f32` or `f64` with component-wise
//! arithmetic, lengths, dot/cross products and exact geometric predicates.
//!
//! # Design principles
//! - One generic implementation over the sealed `Scalar` trait (f32, f64)
//! - `#[repr(C)]` so a vector is a flat `[S; 2]` / `[S; 3]` for graphics APIs
//! - Binary operations have one canonical free function (`vec3::cross`) that
//!   the method of the same name delegates to
//! - IEEE-754 all the way down: division by zero and normalizing the zero
//!   vector produce infinities or NaN, never an error

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[macro_use]
mod ops;

mod error;
mod scalar;
mod text;
pub mod vec2;
pub mod vec3;

pub use error::ParseVectorError;
pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::Vec3;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2<f32>);
    impl_pod!(Vec2<f64>);
    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_match_methods() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(vec3::dot(a, b), a.dot(b));
        assert_eq!(vec3::cross(a, b), a.cross(b));
        assert_eq!(vec3::distance(a, b), a.distance(b));

        let c = Vec2::new(1.0f32, 2.0);
        let d = Vec2::new(3.0f32, -1.0);
        assert_eq!(vec2::dot(c, d), c.dot(d));
        assert_eq!(vec2::distance(c, d), c.distance(d));
    }

    #[test]
    fn default_is_zero() {
        assert!(Vec2::<f32>::default().is_zero());
        assert!(Vec3::<f64>::default().is_zero());
    }

    #[test]
    fn values_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Vec2<f32>>();
        assert_send_sync::<Vec3<f64>>();
    }
}
