//! Three-axis orientation of a die, in degrees.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rotation angles around the X, Y, and Z axes, in degrees.
///
/// Angles are not reduced: `x = 720.0` means two full turns, which a
/// renderer interpolating toward it shows as visible spin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation around the X axis.
    pub x: f64,
    /// Rotation around the Y axis.
    pub y: f64,
    /// Rotation around the Z axis.
    pub z: f64,
}

impl Orientation {
    /// The identity orientation (face 1 forward on a cube).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    /// Create an orientation from three angles.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Reduce every angle into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self {
            x: normalize_degrees(self.x),
            y: normalize_degrees(self.y),
            z: normalize_degrees(self.z),
        }
    }

    /// Render as a CSS transform value.
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            fmt_angle(self.x),
            fmt_angle(self.y),
            fmt_angle(self.z)
        )
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            fmt_angle(self.x),
            fmt_angle(self.y),
            fmt_angle(self.z)
        )
    }
}

/// Reduce an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    // adding 0.0 turns -0.0 into 0.0
    let reduced = angle.rem_euclid(360.0) + 0.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if reduced >= 360.0 { 0.0 } else { reduced }
}

/// Whole angles print without a fraction, others with two decimals.
fn fmt_angle(angle: f64) -> String {
    if angle.fract() == 0.0 {
        format!("{angle:.0}")
    } else {
        format!("{angle:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(900.0), 180.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn normalized_orientation() {
        let o = Orientation::new(1080.0, 1170.0, -45.0).normalized();
        assert_eq!(o, Orientation::new(0.0, 90.0, 315.0));
    }

    #[test]
    fn css_transform_whole_angles() {
        insta::assert_snapshot!(
            Orientation::new(0.0, 180.0, 0.0).css_transform(),
            @"rotateX(0deg) rotateY(180deg) rotateZ(0deg)"
        );
    }

    #[test]
    fn css_transform_fractional_angles() {
        insta::assert_snapshot!(
            Orientation::new(723.5, -2.25, 45.1).css_transform(),
            @"rotateX(723.50deg) rotateY(-2.25deg) rotateZ(45.10deg)"
        );
    }

    #[test]
    fn display() {
        assert_eq!(Orientation::new(90.0, 0.0, 0.0).to_string(), "(90, 0, 0)");
    }
}
