use std::ops::{Neg, Add, AddAssign, Sub, Mul, Div};
use std::f64::consts::PI;
use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::{RotoError, RotoResult};

/// A position in space. Shares all arithmetic with [`Vec3`].
pub type Point3 = Vec3;

#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Euclidean length. Uses `hypot` so that components near the ends of
    /// the `f64` range neither overflow nor underflow when squared.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    pub fn magnitude_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, vec: Vec3) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(scale * self.x, scale * self.y, scale * self.z)
    }

    /// Unit vector with the same direction. A zero vector has no direction
    /// and is rejected instead of producing NaN components.
    pub fn normalized(&self) -> RotoResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(RotoError::degenerate("normalize"));
        }
        if !mag.is_finite() {
            return Err(RotoError::non_finite("normalize"));
        }
        Ok(Self::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Angle to `other` in radians, in `[0, π]`.
    ///
    /// Both vectors are normalized first and the cosine is clamped to
    /// `[-1, 1]` before `acos`, so nearly parallel or anti-parallel vectors
    /// give 0 or π rather than NaN.
    pub fn angle_to_rad(&self, other: Vec3) -> RotoResult<f64> {
        let a = self.normalized().map_err(|e| e.in_op("angle between vectors"))?;
        let b = other.normalized().map_err(|e| e.in_op("angle between vectors"))?;
        Ok(a.dot(b).clamp(-1.0, 1.0).acos())
    }

    pub fn angle_to_deg(&self, other: Vec3) -> RotoResult<f64> {
        Ok(self.angle_to_rad(other)? * 180.0 / PI)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        self.scaled(other)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        bytemuck::cast(arr)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> [f64; 3] {
        bytemuck::cast(vec)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}


#[test]
fn cross_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let cross = v.cross(v2);
    assert!(cross == Vec3::new(-45.0, 0.0, 30.0));
}

#[test]
fn cross_is_right_handed() {
    assert_eq!(Vec3::unit_x().cross(Vec3::unit_y()), Vec3::unit_z());
    assert_eq!(Vec3::unit_y().cross(Vec3::unit_x()), -Vec3::unit_z());
}

#[test]
fn dot_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let dot = v.dot(v2);
    assert!(dot == 53.0);
}

#[test]
fn sum_and_scale() {
    let v  = Vec3::new(1.0, -2.0, 3.5);
    let v2 = Vec3::new(0.5, 2.0, -1.0);

    assert_eq!(v + v2, Vec3::new(1.5, 0.0, 2.5));
    assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 7.0));
    assert_eq!(v / 2.0, Vec3::new(0.5, -1.0, 1.75));
    assert_eq!(v - v, Vec3::zero());
}

#[test]
fn magnitude_test() {
    assert!((Vec3::new(3.0, 4.0, 0.0).magnitude() - 5.0).abs() < 1e-15);
    assert!((Vec3::new(1.0, 2.0, 2.0).magnitude() - 3.0).abs() < 1e-15);
    assert_eq!(Vec3::unit_x().magnitude(), 1.0);
}

#[test]
fn normalized_has_unit_length() {
    let vecs = [
        Vec3::new(4.0, 3.0, 6.0),
        Vec3::new(-0.001, 0.0, 0.002),
        Vec3::new(1e6, -3e5, 42.0),
        Vec3::unit_y(),
    ];
    for v in vecs {
        let n = v.normalized().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert!(n.dot(v) > 0.0);
    }
}

#[test]
fn normalize_zero_vector_fails() {
    let err = Vec3::zero().normalized().unwrap_err();
    assert_eq!(err, RotoError::DegenerateVector { op: "normalize" });
}

#[test]
fn angle_between_axes() {
    let right = Vec3::unit_x().angle_to_rad(Vec3::unit_y()).unwrap();
    assert!((right - PI / 2.0).abs() < 1e-12);

    let opposite = Vec3::unit_z().angle_to_deg(-Vec3::unit_z()).unwrap();
    assert!((opposite - 180.0).abs() < 1e-12);

    let diag = Vec3::new(1.0, 1.0, 0.0).angle_to_deg(Vec3::unit_x()).unwrap();
    assert!((diag - 45.0).abs() < 1e-9);
}

#[test]
fn angle_between_parallel_vectors_is_not_nan() {
    let a = Vec3::new(0.1, 0.2, 0.3);
    for k in [3.0, 7.0, 1e3, 0.37] {
        let angle = a.angle_to_rad(a * k).unwrap();
        assert!(!angle.is_nan());
        assert!(angle.abs() < 1e-7);

        let back = a.angle_to_rad(a * -k).unwrap();
        assert!(!back.is_nan());
        assert!((back - PI).abs() < 1e-7);
    }
}

#[test]
fn angle_with_zero_vector_fails() {
    assert_eq!(
        Vec3::zero().angle_to_rad(Vec3::unit_x()),
        Err(RotoError::DegenerateVector { op: "angle between vectors" })
    );
    assert!(Vec3::unit_x().angle_to_deg(Vec3::zero()).is_err());
}

#[test]
fn extreme_magnitudes() {
    let huge = Vec3::new(1e200, -3e200, 2e200);
    assert!((huge.magnitude() / 1e200 - 14f64.sqrt()).abs() < 1e-12);
    let n = huge.normalized().unwrap();
    assert!((n.magnitude() - 1.0).abs() < 1e-12);
    assert_eq!(Vec3::new(1e200, 0.0, 0.0).normalized(), Ok(Vec3::unit_x()));

    let tiny = Vec3::new(1e-170, 0.0, 0.0);
    assert_eq!(tiny.magnitude(), 1e-170);
    assert_eq!(tiny.normalized(), Ok(Vec3::unit_x()));

    let angle = huge.angle_to_rad(huge).unwrap();
    assert!(angle.abs() < 1e-7);
    let right = tiny.angle_to_deg(Vec3::new(0.0, 1e-170, 0.0)).unwrap();
    assert!((right - 90.0).abs() < 1e-12);
    let mixed = huge.angle_to_rad(-tiny * 1e10).unwrap();
    assert!(!mixed.is_nan());
}

#[test]
fn non_finite_vectors_are_rejected() {
    let inf = Vec3::new(f64::INFINITY, 0.0, 0.0);
    let nan = Vec3::new(0.0, f64::NAN, 1.0);

    assert_eq!(inf.normalized(), Err(RotoError::NonFiniteVector { op: "normalize" }));
    assert!(nan.normalized().is_err());
    assert_eq!(
        nan.angle_to_rad(Vec3::unit_x()),
        Err(RotoError::NonFiniteVector { op: "angle between vectors" })
    );
}

#[test]
fn array_round_trip() {
    let v: Vec3 = [1.0, 2.0, 3.0].into();
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    let arr: [f64; 3] = v.into();
    assert_eq!(arr, [1.0, 2.0, 3.0]);

    let points = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
    let flat: &[f64] = bytemuck::cast_slice(&points);
    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}
