use crate::angle::deg2rad;
use crate::error::RotoResult;
use crate::quaternion::Quaternion;
use crate::vector::{Vec3, Point3};

/// Rotates `point` by `angle_deg` degrees around `axis`, counterclockwise
/// when the axis points toward the viewer.
///
/// The axis does not need to be a unit vector, but it must not be zero.
pub fn rotate(point: Point3, angle_deg: f64, axis: Vec3) -> RotoResult<Point3> {
    let axis = axis.normalized()?;
    Ok(rotate_unit(point, angle_deg, axis))
}

pub fn rotate_x(point: Point3, angle_deg: f64) -> Point3 {
    rotate_unit(point, angle_deg, Vec3::unit_x())
}

pub fn rotate_y(point: Point3, angle_deg: f64) -> Point3 {
    rotate_unit(point, angle_deg, Vec3::unit_y())
}

pub fn rotate_z(point: Point3, angle_deg: f64) -> Point3 {
    rotate_unit(point, angle_deg, Vec3::unit_z())
}

fn rotate_unit(point: Point3, angle_deg: f64, axis: Vec3) -> Point3 {
    let q = Quaternion::rotor(axis, deg2rad(angle_deg));
    let rotated = sandwich(q, Quaternion::pure(point));
    log::trace!("rotor {q}, residual scalar part {}", rotated.s);
    rotated.vector_part()
}

/// q ∘ p ∘ q⁻¹
fn sandwich(q: Quaternion, p: Quaternion) -> Quaternion {
    let invq = q.inverse();
    let qp = q.product(p);
    qp.product(invq)
}


#[cfg(test)]
fn assert_close(a: Vec3, b: Vec3) {
    assert!((a - b).magnitude() < 1e-9, "{a} != {b}");
}

#[cfg(test)]
const POINTS: [Vec3; 5] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, -2.5, 4.0),
    Vec3::new(3.0, 4.0, 5.0),
    Vec3::new(-7.25, 0.125, -1.5),
    Vec3::new(0.0, 0.0, 0.0),
];

#[cfg(test)]
const AXES: [Vec3; 5] = [
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-2.0, 0.5, 3.0),
    Vec3::new(0.0, -10.0, 0.0),
    Vec3::new(1e-3, 2e-3, -5e-4),
];

#[cfg(test)]
const ANGLES: [f64; 7] = [0.0, 1.0, 45.0, 90.0, 179.0, -123.4, 540.0];

#[test]
fn quarter_turn_about_z() {
    let p = rotate(Vec3::new(1.0, 0.0, 0.0), 90.0, Vec3::new(0.0, 0.0, 1.0)).unwrap();
    assert_close(p, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn quarter_turn_about_x() {
    let p = rotate(Vec3::new(0.0, 1.0, 0.0), 90.0, Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert_close(p, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn axis_length_does_not_matter() {
    let p = Vec3::new(3.0, 4.0, 5.0);
    let a = rotate(p, 33.0, Vec3::new(1.0, 2.0, 3.0)).unwrap();
    let b = rotate(p, 33.0, Vec3::new(10.0, 20.0, 30.0)).unwrap();
    assert_close(a, b);
}

#[test]
fn preserves_distance_from_origin() {
    for p in POINTS {
        for axis in AXES {
            for angle in ANGLES {
                let r = rotate(p, angle, axis).unwrap();
                assert!((r.magnitude() - p.magnitude()).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn zero_and_full_turn_are_identity() {
    for p in POINTS {
        for axis in AXES {
            assert_close(rotate(p, 0.0, axis).unwrap(), p);
            assert_close(rotate(p, 360.0, axis).unwrap(), p);
            assert_close(rotate(p, -720.0, axis).unwrap(), p);
        }
    }
}

#[test]
fn inverse_rotation_round_trips() {
    for p in POINTS {
        for axis in AXES {
            for angle in ANGLES {
                let there = rotate(p, angle, axis).unwrap();
                let back = rotate(there, -angle, axis).unwrap();
                assert_close(back, p);
            }
        }
    }
}

#[test]
fn points_on_the_axis_stay_put() {
    let axis = Vec3::new(1.0, 1.0, 1.0);
    let p = axis * 2.5;
    assert_close(rotate(p, 77.0, axis).unwrap(), p);
}

#[test]
fn axis_wrappers_match_rotate() {
    for p in POINTS {
        for angle in ANGLES {
            assert_eq!(rotate_x(p, angle), rotate(p, angle, Vec3::new(1.0, 0.0, 0.0)).unwrap());
            assert_eq!(rotate_y(p, angle), rotate(p, angle, Vec3::new(0.0, 1.0, 0.0)).unwrap());
            assert_eq!(rotate_z(p, angle), rotate(p, angle, Vec3::new(0.0, 0.0, 1.0)).unwrap());
        }
    }
}

#[test]
fn axis_wrappers_follow_right_hand_rule() {
    assert_close(rotate_x(Vec3::unit_y(), 90.0), Vec3::unit_z());
    assert_close(rotate_y(Vec3::unit_z(), 90.0), Vec3::unit_x());
    assert_close(rotate_z(Vec3::unit_x(), 90.0), Vec3::unit_y());
    assert_close(rotate_z(Vec3::unit_x(), -90.0), -Vec3::unit_y());
}

#[test]
fn zero_axis_is_rejected() {
    let err = rotate(Vec3::new(1.0, 2.0, 3.0), 45.0, Vec3::zero()).unwrap_err();
    assert_eq!(err, crate::error::RotoError::DegenerateVector { op: "normalize" });
}

#[test]
fn extreme_axis_lengths() {
    let p = Vec3::new(0.0, 1.0, 0.0);
    for axis in [Vec3::new(1e200, 0.0, 0.0), Vec3::new(1e-170, 0.0, 0.0)] {
        let r = rotate(p, 90.0, axis).unwrap();
        assert_close(r, Vec3::unit_z());
        assert!((r.magnitude() - 1.0).abs() < 1e-12);
    }
    let r = rotate(Vec3::new(3.0, 4.0, 5.0), 33.0, Vec3::new(1e300, -2e300, 5e299)).unwrap();
    assert_close(r, rotate(Vec3::new(3.0, 4.0, 5.0), 33.0, Vec3::new(1.0, -2.0, 0.5)).unwrap());
}

#[test]
fn non_finite_axis_is_rejected() {
    let err = rotate(Vec3::unit_x(), 30.0, Vec3::new(f64::INFINITY, 1.0, 0.0)).unwrap_err();
    assert_eq!(err, crate::error::RotoError::NonFiniteVector { op: "normalize" });
}

#[test]
fn sandwich_scalar_part_vanishes() {
    for p in POINTS {
        for axis in AXES {
            for angle in ANGLES {
                let q = Quaternion::rotor(axis.normalized().unwrap(), deg2rad(angle));
                let r = sandwich(q, Quaternion::pure(p));
                assert!(r.s.abs() < 1e-9);
            }
        }
    }
}

#[test]
fn agrees_with_cgmath() {
    use cgmath::{Deg, InnerSpace, Rotation, Rotation3, Vector3};

    for p in POINTS {
        for axis in AXES {
            for angle in ANGLES {
                let unit = Vector3::new(axis.x, axis.y, axis.z).normalize();
                let q = cgmath::Quaternion::<f64>::from_axis_angle(unit, Deg(angle));
                let expected = q.rotate_vector(Vector3::new(p.x, p.y, p.z));

                let r = rotate(p, angle, axis).unwrap();
                assert_close(r, Vec3::new(expected.x, expected.y, expected.z));
            }
        }
    }
}
