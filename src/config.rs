use std::fmt;

use crate::{
    error::{ConfigError, RotoResult},
    vector::{Vec3, Point3},
    rotate::{rotate, rotate_x, rotate_y, rotate_z},
};


/// Parsing states.
enum Parse {
    None,
    Point,
    Angle,
    Axis,
}
impl Parse {
    fn flag(&self) -> &'static str {
        match self {
            Parse::None  => "",
            Parse::Point => "-point",
            Parse::Angle => "-angle",
            Parse::Axis  => "-axis",
        }
    }
}


/// Rotation axis given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
    Custom(Vec3),
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
            Axis::Custom(v) => write!(f, "{v}"),
        }
    }
}


/// User defined configuration settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub point: Point3,
    pub angle: f64,
    pub axis:  Axis,
    pub info:  bool,
}
impl Config {
    /// Create a new Config with the specified command line arguments,
    /// not including the program name.
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser = Parse::None;
        let mut cfg    = Config::default();
        let mut point  = None;

        for arg in args.into_iter() {
            match parser {
                Parse::None => {
                    match arg.as_str() {
                        "-point" => parser = Parse::Point,
                        "-angle" => parser = Parse::Angle,
                        "-axis"  => parser = Parse::Axis,
                        "-info"  => cfg.info = true,
                        _ => {
                            return Err(
                                ConfigError::UnknownOption(arg)
                            );
                        }
                    }
                    continue;
                }
                Parse::Point => {
                    point = Some(parse_vec3(&arg)?);
                }
                Parse::Angle => {
                    cfg.angle = arg
                        .parse::<f64>()
                        .map_err(|_| ConfigError::InvalidAngle(arg.clone()))?;
                }
                Parse::Axis => {
                    cfg.axis = match arg.as_str() {
                        "x" | "X" => Axis::X,
                        "y" | "Y" => Axis::Y,
                        "z" | "Z" => Axis::Z,
                        _ => Axis::Custom(parse_vec3(&arg)?),
                    };
                }
            }
            parser = Parse::None;
        }
        if !matches!(parser, Parse::None) {
            return Err(
                ConfigError::MissingValue(parser.flag().to_string())
            );
        }
        match point {
            Some(p) => cfg.point = p,
            None if cfg.info => {},
            None => return Err(ConfigError::MissingPoint),
        }
        Ok(cfg)
    }

    /// Applies the configured rotation to the configured point.
    pub fn rotate(&self) -> RotoResult<Point3> {
        match self.axis {
            Axis::X => Ok(rotate_x(self.point, self.angle)),
            Axis::Y => Ok(rotate_y(self.point, self.angle)),
            Axis::Z => Ok(rotate_z(self.point, self.angle)),
            Axis::Custom(axis) => rotate(self.point, self.angle, axis),
        }
    }

    /// Produces the text the `roto` binary writes to stdout: the library
    /// description for `-info`, otherwise the rotated point.
    pub fn run(&self) -> RotoResult<String> {
        if self.info {
            return Ok(crate::info().to_string());
        }
        self.rotate().map(format_point)
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rPoint: {}
            \rAngle: {} deg
            \rAxis:  {}",
            self.point,
            self.angle,
            self.axis,
        )
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            point: Vec3::zero(),
            angle: 0.0,
            axis:  Axis::default(),
            info:  false,
        }
    }
}

/// Space separated `X Y Z`.
pub fn format_point(p: Point3) -> String {
    format!("{} {} {}", p.x, p.y, p.z)
}

/// Parses `X,Y,Z` into a vector.
fn parse_vec3(arg: &str) -> Result<Vec3, ConfigError> {
    let parts = arg
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| ConfigError::InvalidVector(arg.to_string()))?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ConfigError::InvalidVector(arg.to_string())),
    }
}


#[cfg(test)]
fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

#[test]
fn parse_full_command_line() {
    let cfg = Config::new(args("-point 1,2,3 -angle -45.5 -axis 0,1,-1")).unwrap();
    assert_eq!(cfg.point, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(cfg.angle, -45.5);
    assert_eq!(cfg.axis, Axis::Custom(Vec3::new(0.0, 1.0, -1.0)));
    assert!(!cfg.info);
}

#[test]
fn defaults_to_z_axis_and_zero_angle() {
    let cfg = Config::new(args("-point -1,0,0")).unwrap();
    assert_eq!(cfg.point, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(cfg.angle, 0.0);
    assert_eq!(cfg.axis, Axis::Z);
}

#[test]
fn named_axes() {
    assert_eq!(Config::new(args("-point 0,0,0 -axis x")).unwrap().axis, Axis::X);
    assert_eq!(Config::new(args("-point 0,0,0 -axis Y")).unwrap().axis, Axis::Y);
    assert_eq!(Config::new(args("-point 0,0,0 -axis z")).unwrap().axis, Axis::Z);
}

#[test]
fn info_does_not_need_a_point() {
    let cfg = Config::new(args("-info")).unwrap();
    assert!(cfg.info);
}

#[test]
fn parse_errors() {
    assert_eq!(Config::new(args("-angle 10")), Err(ConfigError::MissingPoint));
    assert_eq!(
        Config::new(args("-point 1,2")),
        Err(ConfigError::InvalidVector("1,2".into()))
    );
    assert_eq!(
        Config::new(args("-point 1,a,3")),
        Err(ConfigError::InvalidVector("1,a,3".into()))
    );
    assert_eq!(
        Config::new(args("-point 1,2,3 -angle ninety")),
        Err(ConfigError::InvalidAngle("ninety".into()))
    );
    assert_eq!(
        Config::new(args("-point 1,2,3 -angle")),
        Err(ConfigError::MissingValue("-angle".into()))
    );
    assert_eq!(
        Config::new(args("-point 1,2,3 -scale 2")),
        Err(ConfigError::UnknownOption("-scale".into()))
    );
}

#[test]
fn rotate_with_config() {
    let cfg = Config::new(args("-point 1,0,0 -angle 90 -axis z")).unwrap();
    let p = cfg.rotate().unwrap();
    assert!((p - Vec3::unit_y()).magnitude() < 1e-12);

    let cfg = Config::new(args("-point 0,1,0 -angle 90 -axis 2,0,0")).unwrap();
    let p = cfg.rotate().unwrap();
    assert!((p - Vec3::unit_z()).magnitude() < 1e-12);

    let cfg = Config::new(args("-point 1,1,1 -angle 10 -axis 0,0,0")).unwrap();
    assert!(cfg.rotate().is_err());
}

#[test]
fn format_point_is_space_separated() {
    assert_eq!(format_point(Vec3::new(1.0, -2.5, 0.0)), "1 -2.5 0");
    assert_eq!(format_point(Vec3::new(1e-3, 4.0, 1e20)), "0.001 4 100000000000000000000");
}

#[test]
fn run_output() {
    let cfg = Config::new(args("-point 3,-4,5 -angle 0 -axis x")).unwrap();
    assert_eq!(cfg.run(), Ok("3 -4 5".to_string()));

    let cfg = Config::new(args("-point 1,2,3 -angle 180 -axis 0,0,4")).unwrap();
    let out = cfg.run().unwrap();
    let coords = out
        .split(' ')
        .map(|s| s.parse::<f64>().unwrap())
        .collect::<Vec<f64>>();
    assert_eq!(coords.len(), 3);
    assert!((Vec3::new(coords[0], coords[1], coords[2]) - Vec3::new(-1.0, -2.0, 3.0)).magnitude() < 1e-12);

    let cfg = Config::new(args("-info")).unwrap();
    assert_eq!(cfg.run(), Ok(crate::info().to_string()));

    let cfg = Config::new(args("-point 1,1,1 -axis 0,0,0")).unwrap();
    assert_eq!(
        cfg.run(),
        Err(crate::error::RotoError::DegenerateVector { op: "normalize" })
    );
}
