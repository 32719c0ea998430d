use std::ops::Mul;
use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::vector::{Vec3, Point3};

/// Scalar part `s` and vector part `v`, i.e. `s + xi + yj + zk`.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, Pod, Zeroable)]
pub struct Quaternion {
    pub s: f64,
    pub v: Vec3,
}
impl Quaternion {
    pub const fn new(s: f64, xi: f64, yj: f64, zk: f64) -> Self {
        Self {
            s,
            v: Vec3::new(xi, yj, zk),
        }
    }

    pub const fn from_parts(s: f64, v: Vec3) -> Self {
        Self { s, v }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Lifts a point into quaternion space with a zero scalar part.
    pub const fn pure(point: Point3) -> Self {
        Self::from_parts(0.0, point)
    }

    /// Rotation by `phi` radians around `axis`.
    ///
    /// `axis` must already be a unit vector; it is not normalized here.
    pub fn rotor(axis: Vec3, phi: f64) -> Self {
        let half = phi / 2.0;
        Self::from_parts(half.cos(), axis * half.sin())
    }

    pub fn vector_part(&self) -> Vec3 {
        self.v
    }

    pub fn dot(&self, other: Quaternion) -> f64 {
        self.s*other.s + self.v.dot(other.v)
    }

    pub fn magnitude(&self) -> f64 {
        (self.s*self.s + self.v.magnitude_sq()).sqrt()
    }

    /// Hamilton product `self ∘ other`. Not commutative.
    pub fn product(&self, other: Quaternion) -> Self {
        let s = self.s * other.s - self.v.dot(other.v);
        let v = other.v * self.s + self.v * other.s + self.v.cross(other.v);
        Self::from_parts(s, v)
    }

    /// The conjugate. Equal to the multiplicative inverse only for unit
    /// quaternions, which is what [`Quaternion::rotor`] builds.
    pub fn inverse(&self) -> Self {
        Self::from_parts(self.s, -self.v)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.product(other)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        bytemuck::cast(arr)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(quat: Quaternion) -> [f64; 4] {
        bytemuck::cast(quat)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.s, self.v.x, self.v.y, self.v.z)
    }
}


#[test]
fn basis_products() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);

    assert_eq!(i * i, minus_one);
    assert_eq!(j * j, minus_one);
    assert_eq!(k * k, minus_one);
    assert_eq!(i * j, k);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
}

#[test]
fn product_is_not_commutative() {
    let q0 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q1 = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    assert_eq!(q0 * q1, Quaternion::new(-60.0, 12.0, 30.0, 24.0));
    assert_eq!(q1 * q0, Quaternion::new(-60.0, 20.0, 14.0, 32.0));
    assert!(q0 * q1 != q1 * q0);
}

#[test]
fn identity_is_neutral() {
    let q = Quaternion::new(0.5, -1.5, 2.0, 3.25);
    assert_eq!(Quaternion::identity() * q, q);
    assert_eq!(q * Quaternion::identity(), q);
}

#[test]
fn dot_and_magnitude() {
    let q0 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q1 = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    assert_eq!(q0.dot(q1), 70.0);
    assert_eq!(Quaternion::new(1.0, 1.0, 1.0, 1.0).magnitude(), 2.0);
    assert!((q0.magnitude() - q0.dot(q0).sqrt()).abs() < 1e-15);
}

#[test]
fn inverse_is_conjugate() {
    let q = Quaternion::new(1.0, 2.0, -3.0, 4.0);

    assert_eq!(q.inverse(), Quaternion::new(1.0, -2.0, 3.0, -4.0));
    assert_eq!(q.inverse().inverse(), q);
}

#[test]
fn rotor_has_unit_magnitude() {
    let axis = Vec3::new(1.0, -2.0, 0.5).normalized().unwrap();
    for phi in [0.0, 0.3, 1.0, 3.0, -2.2, 10.0] {
        let q = Quaternion::rotor(axis, phi);
        assert!((q.magnitude() - 1.0).abs() < 1e-12);

        let unit = q * q.inverse();
        assert!((unit.s - 1.0).abs() < 1e-12);
        assert!(unit.v.magnitude() < 1e-12);
    }
}

#[test]
fn rotor_components() {
    let q = Quaternion::rotor(Vec3::unit_z(), std::f64::consts::PI);
    assert!(q.s.abs() < 1e-15);
    assert_eq!(q.v.x, 0.0);
    assert_eq!(q.v.y, 0.0);
    assert_eq!(q.v.z, 1.0);
}

#[test]
fn array_layout() {
    let q: Quaternion = [1.0, 2.0, 3.0, 4.0].into();
    assert_eq!(q.s, 1.0);
    assert_eq!(q.vector_part(), Vec3::new(2.0, 3.0, 4.0));
    let arr: [f64; 4] = q.into();
    assert_eq!(arr, [1.0, 2.0, 3.0, 4.0]);
}
