//! # Wall Panels
//!
//! A shear wall is a plan line segment with a scalar in-plane stiffness K
//! (kip/in). It resists force only along its own line, so its stiffness
//! splits into global components Kx = K·|cos θ| and Ky = K·|sin θ|.
//!
//! The signed offset to the center of rigidity is not stored here; it is
//! attached once the center is known, see [`crate::rigidity::PlacedWall`].

use serde::{Deserialize, Serialize};

use crate::errors::{LateralError, LateralResult};
use crate::geometry::{Axis, Point2, Segment};

/// Input for a single wall panel.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "W1",
///   "line": {"start": {"x": 0.0, "y": 0.0}, "end": {"x": 0.0, "y": 240.0}},
///   "stiffness": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPanel {
    /// Wall identifier, unique within its level
    pub id: String,

    /// Wall line from start to end (in)
    pub line: Segment,

    /// In-plane stiffness K (kip/in)
    pub stiffness: f64,
}

impl WallPanel {
    /// Create a wall from its endpoints and stiffness
    pub fn new(id: impl Into<String>, start: Point2, end: Point2, stiffness: f64) -> Self {
        WallPanel {
            id: id.into(),
            line: Segment::new(start, end),
            stiffness,
        }
    }

    /// Validate wall inputs.
    pub fn validate(&self) -> LateralResult<()> {
        if !(self.stiffness >= 0.0 && self.stiffness.is_finite()) {
            return Err(LateralError::invalid_input(
                format!("{}.stiffness", self.id),
                self.stiffness.to_string(),
                "Stiffness must be a finite, non-negative value",
            ));
        }
        if self.line.unit_vector().is_none() {
            return Err(LateralError::invalid_input(
                format!("{}.line", self.id),
                format!("{} - {}", self.line.start, self.line.end),
                "Wall has zero length",
            ));
        }
        Ok(())
    }

    /// Wall length (in)
    pub fn length(&self) -> f64 {
        self.line.length()
    }

    /// Midpoint of the wall line, used to locate the center of rigidity
    pub fn midpoint(&self) -> Point2 {
        self.line.midpoint()
    }

    /// Unit direction vector (start → end). Zero for a degenerate wall.
    pub fn unit_vector(&self) -> Point2 {
        self.line.unit_vector().unwrap_or(Point2::ORIGIN)
    }

    /// Angle from the global X-axis to the wall direction (radians)
    pub fn angle(&self) -> f64 {
        self.unit_vector().angle()
    }

    /// Stiffness resisting global X: K·|cos θ|
    pub fn kx(&self) -> f64 {
        self.stiffness * self.unit_vector().x.abs()
    }

    /// Stiffness resisting global Y: K·|sin θ|
    pub fn ky(&self) -> f64 {
        self.stiffness * self.unit_vector().y.abs()
    }

    /// Stiffness component along an axis
    pub fn k_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.kx(),
            Axis::Y => self.ky(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_components() {
        let wall = WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, 240.0), 100.0);
        assert_relative_eq!(wall.kx(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(wall.ky(), 100.0);
        assert_relative_eq!(wall.angle(), std::f64::consts::FRAC_PI_2);

        let reversed = WallPanel::new("A'", Point2::new(0.0, 240.0), Point2::new(0.0, 0.0), 100.0);
        assert_relative_eq!(reversed.ky(), 100.0);
    }

    #[test]
    fn test_diagonal_wall() {
        let wall = WallPanel::new("D", Point2::new(0.0, 0.0), Point2::new(30.0, 40.0), 50.0);
        assert_relative_eq!(wall.length(), 50.0);
        assert_relative_eq!(wall.kx(), 30.0);
        assert_relative_eq!(wall.ky(), 40.0);
        assert_relative_eq!(wall.k_along(Axis::Y), 40.0);
    }

    #[test]
    fn test_validate() {
        let zero = WallPanel::new("Z", Point2::new(1.0, 1.0), Point2::new(1.0, 1.0), 10.0);
        assert_eq!(zero.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let negative = WallPanel::new("N", Point2::ORIGIN, Point2::new(1.0, 0.0), -5.0);
        assert!(negative.validate().is_err());

        let nan = WallPanel::new("NaN", Point2::ORIGIN, Point2::new(1.0, 0.0), f64::NAN);
        assert!(nan.validate().is_err());
    }
}
