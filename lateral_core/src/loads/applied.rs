//! Applied story forces
//!
//! One load pattern's force set at a level, as produced by the ELF
//! collaborator: direct forces along X and Y, an accidental torsion, and the
//! point the direct forces act through (normally the center of mass).

use serde::{Deserialize, Serialize};

use crate::errors::{LateralError, LateralResult};
use crate::geometry::{Extents, Point2};

/// A load pattern's lateral force set at one level.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load_pattern": "Seismic X +Ecc",
///   "fx": 40.0,
///   "fy": 0.0,
///   "accidental_torsion": 0.0,
///   "point_of_application": {"x": 180.0, "y": 120.0}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedLoad {
    /// Load pattern name (must be in the pattern catalog)
    pub load_pattern: String,

    /// Direct force along X (kip)
    #[serde(default)]
    pub fx: f64,

    /// Direct force along Y (kip)
    #[serde(default)]
    pub fy: f64,

    /// Accidental torsion, counterclockwise positive (kip·in)
    #[serde(default)]
    pub accidental_torsion: f64,

    /// Where the direct forces act (in)
    pub point_of_application: Point2,
}

impl AppliedLoad {
    pub fn new(load_pattern: impl Into<String>, fx: f64, fy: f64, point_of_application: Point2) -> Self {
        AppliedLoad {
            load_pattern: load_pattern.into(),
            fx,
            fy,
            accidental_torsion: 0.0,
            point_of_application,
        }
    }

    /// Set the accidental torsion directly (builder pattern)
    pub fn with_accidental_torsion(mut self, torsion: f64) -> Self {
        self.accidental_torsion = torsion;
        self
    }

    /// Add the accidental torsion from shifting the point of application by
    /// `ratio` of the plan dimension perpendicular to each force component
    /// (ASCE 7-22 12.8.4.2 uses ±0.05).
    pub fn with_accidental_eccentricity(mut self, ratio: f64, extents: &Extents) -> Self {
        let ex = ratio * extents.width();
        let ey = ratio * extents.depth();
        self.accidental_torsion += -ey * self.fx + ex * self.fy;
        self
    }

    /// Direct force vector
    pub fn force(&self) -> Point2 {
        Point2::new(self.fx, self.fy)
    }

    /// Total torsion about `reference`, counterclockwise positive:
    /// `M = AccidentalT − Δy·Fx + Δx·Fy`, Δ = point of application − reference
    pub fn torsion_about(&self, reference: Point2) -> f64 {
        let delta = reference.to(self.point_of_application);
        self.accidental_torsion - delta.y * self.fx + delta.x * self.fy
    }

    /// Validate force inputs.
    pub fn validate(&self) -> LateralResult<()> {
        let values = [
            ("fx", self.fx),
            ("fy", self.fy),
            ("accidental_torsion", self.accidental_torsion),
            ("point_of_application.x", self.point_of_application.x),
            ("point_of_application.y", self.point_of_application.y),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(LateralError::invalid_input(
                    format!("{}.{}", self.load_pattern, field),
                    value.to_string(),
                    "Value must be finite",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_torsion_about_center_of_rigidity() {
        let load = AppliedLoad::new("Seismic X +Ecc", 40.0, 0.0, Point2::new(180.0, 120.0));
        assert_relative_eq!(load.torsion_about(Point2::new(216.0, 144.0)), 960.0);
    }

    #[test]
    fn test_torsion_includes_accidental() {
        let load = AppliedLoad::new("Seismic Y +Ecc", 0.0, 10.0, Point2::new(100.0, 0.0))
            .with_accidental_torsion(-50.0);
        // Δx = 100 → +1000, plus -50
        assert_relative_eq!(load.torsion_about(Point2::ORIGIN), 950.0);
    }

    #[test]
    fn test_accidental_eccentricity() {
        let extents = Extents::of(&[Point2::new(0.0, 0.0), Point2::new(360.0, 240.0)]).unwrap();
        let load = AppliedLoad::new("Seismic X +Ecc", 40.0, 0.0, Point2::ORIGIN)
            .with_accidental_eccentricity(0.05, &extents);
        // CM shifted +12 in Y: -12 * 40
        assert_relative_eq!(load.accidental_torsion, -480.0);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let load = AppliedLoad::new("p", f64::NAN, 0.0, Point2::ORIGIN);
        assert!(load.validate().is_err());
    }
}
