use std::f64::consts::PI;

pub fn deg2rad(angle_deg: f64) -> f64 {
    angle_deg * 2.0 * PI / 360.0
}

pub fn rad2deg(angle_rad: f64) -> f64 {
    angle_rad * 180.0 / PI
}


#[test]
fn half_and_full_turn() {
    assert!((deg2rad(180.0) - PI).abs() < 1e-15);
    assert!((deg2rad(360.0) - 2.0 * PI).abs() < 1e-15);
    assert!((deg2rad(-90.0) + PI / 2.0).abs() < 1e-15);
    assert_eq!(deg2rad(0.0), 0.0);
}

#[test]
fn rad2deg_undoes_deg2rad() {
    for deg in [0.0, 1.0, 45.0, 90.0, 137.5, -270.0, 720.0] {
        assert!((rad2deg(deg2rad(deg)) - deg).abs() < 1e-12);
    }
    assert!((rad2deg(PI) - 180.0).abs() < 1e-12);
}
