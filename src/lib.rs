//! Rotation of points in 3D space around an arbitrary axis using quaternions.
//!
//! The free functions below mirror the methods on [`Vec3`] and
//! [`Quaternion`] one to one, for callers that prefer a flat namespace.
//!
//! ```
//! use roto::{rotate, Vec3};
//!
//! let p = rotate(Vec3::new(1.0, 0.0, 0.0), 90.0, Vec3::new(0.0, 0.0, 1.0)).unwrap();
//! assert!((p - Vec3::new(0.0, 1.0, 0.0)).magnitude() < 1e-12);
//! ```

mod angle;
mod rotate;
pub mod vector;
pub mod quaternion;
pub mod error;
pub mod config;

pub use crate::angle::{deg2rad, rad2deg};
pub use crate::error::{RotoError, RotoResult, ConfigError};
pub use crate::quaternion::Quaternion;
pub use crate::rotate::{rotate, rotate_x, rotate_y, rotate_z};
pub use crate::vector::{Vec3, Point3};

pub fn info() -> &'static str {
    "roto - rotates a given point around an arbitrary defined axis"
}

pub fn vector_cross_product(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

pub fn vector_dot_product(v0: Vec3, v1: Vec3) -> f64 {
    v0.dot(v1)
}

pub fn vector_sum(v0: Vec3, v1: Vec3) -> Vec3 {
    v0 + v1
}

pub fn vector_scaling(scale: f64, v: Vec3) -> Vec3 {
    v.scaled(scale)
}

pub fn vector_magnitude(v: Vec3) -> f64 {
    v.magnitude()
}

/// Fails with [`RotoError::DegenerateVector`] for the zero vector.
pub fn vector_normalized(v: Vec3) -> RotoResult<Vec3> {
    v.normalized()
}

pub fn angle_between_2_vectors_rad(a: Vec3, b: Vec3) -> RotoResult<f64> {
    a.angle_to_rad(b)
}

pub fn angle_between_2_vectors_deg(a: Vec3, b: Vec3) -> RotoResult<f64> {
    a.angle_to_deg(b)
}

pub fn quaternion_dot_product(q0: Quaternion, q1: Quaternion) -> f64 {
    q0.dot(q1)
}

/// Hamilton product `q0 ∘ q1`.
pub fn quaternion_product(q0: Quaternion, q1: Quaternion) -> Quaternion {
    q0.product(q1)
}

pub fn quaternion_magnitude(q: Quaternion) -> f64 {
    q.magnitude()
}

/// Conjugate of `q`; see [`Quaternion::inverse`].
pub fn quaternion_inverse(q: Quaternion) -> Quaternion {
    q.inverse()
}

/// `axis` must be a unit vector and `phi` is in radians.
pub fn quaternion_rotor(axis: Vec3, phi: f64) -> Quaternion {
    Quaternion::rotor(axis, phi)
}


#[test]
fn flat_api_matches_methods() {
    let u = Vec3::new(4.0, 3.0, 6.0);
    let v = Vec3::new(2.0, 9.0, 3.0);

    assert_eq!(vector_cross_product(u, v), Vec3::new(-45.0, 0.0, 30.0));
    assert_eq!(vector_dot_product(u, v), 53.0);
    assert_eq!(vector_sum(u, v), Vec3::new(6.0, 12.0, 9.0));
    assert_eq!(vector_scaling(-1.0, u), -u);
    assert!((vector_magnitude(Vec3::new(2.0, 3.0, 6.0)) - 7.0).abs() < 1e-15);
    assert_eq!(vector_normalized(Vec3::new(0.0, 0.0, -4.0)), Ok(-Vec3::unit_z()));
    assert!(vector_normalized(Vec3::zero()).is_err());
    assert!((angle_between_2_vectors_deg(Vec3::unit_x(), Vec3::unit_z()).unwrap() - 90.0).abs() < 1e-12);
    assert!(angle_between_2_vectors_rad(Vec3::zero(), u).is_err());

    let q0 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q1 = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(quaternion_dot_product(q0, q1), 70.0);
    assert_eq!(quaternion_product(q0, q1), q0 * q1);
    assert_eq!(quaternion_magnitude(Quaternion::new(1.0, 1.0, 1.0, 1.0)), 2.0);
    assert_eq!(quaternion_inverse(quaternion_inverse(q0)), q0);
    assert_eq!(quaternion_rotor(Vec3::unit_x(), 0.0), Quaternion::identity());
}

#[test]
fn info_describes_library() {
    assert_eq!(info(), "roto - rotates a given point around an arbitrary defined axis");
}
