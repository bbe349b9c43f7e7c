//! # Stiffness & Center of Rigidity
//!
//! Three stages, each only constructible from the one before it:
//!
//! ```text
//! Vec<WallPanel> ──compute──▶ AxisStiffness     ΣKx, ΣKy
//!                ──locate_center──▶ RigidityCenter    CR = (ΣKy·x / ΣKy, ΣKx·y / ΣKx)
//!                ──into_diaphragm──▶ RigidDiaphragm   offsets, J = ΣK·offset²
//! ```
//!
//! A wall's Y-stiffness locates the X-coordinate of rigidity and vice versa,
//! since each wall resists force only along its own line.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::geometry::Point2;
//! use lateral_core::rigidity::RigidDiaphragm;
//! use lateral_core::wall::WallPanel;
//!
//! let walls = vec![
//!     WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, 240.0), 100.0),
//!     WallPanel::new("B", Point2::new(360.0, 0.0), Point2::new(360.0, 240.0), 150.0),
//!     WallPanel::new("C", Point2::new(0.0, 0.0), Point2::new(360.0, 0.0), 80.0),
//!     WallPanel::new("D", Point2::new(0.0, 240.0), Point2::new(360.0, 240.0), 120.0),
//! ];
//!
//! let diaphragm = RigidDiaphragm::solve("Level 2", walls).unwrap();
//! assert!((diaphragm.center().x - 216.0).abs() < 1e-9);
//! assert!((diaphragm.center().y - 144.0).abs() < 1e-9);
//! assert!((diaphragm.torsional_stiffness() - 10_540_800.0).abs() < 1e-3);
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::errors::{LateralError, LateralResult};
use crate::geometry::{Axis, Point2};
use crate::wall::WallPanel;

/// Stage 1: validated walls and their summed axis stiffness.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStiffness {
    level: String,
    walls: Vec<WallPanel>,
    kx: f64,
    ky: f64,
}

impl AxisStiffness {
    /// Sum wall stiffness components for a level.
    ///
    /// Fails with `DegenerateStiffness` when either axis sum is not positive,
    /// and with `InvalidInput` for bad or duplicate walls.
    pub fn compute(level: impl Into<String>, walls: Vec<WallPanel>) -> LateralResult<Self> {
        let level = level.into();

        let mut seen = HashSet::new();
        for wall in &walls {
            wall.validate()?;
            if !seen.insert(wall.id.as_str()) {
                return Err(LateralError::invalid_input(
                    format!("{level}.walls"),
                    &wall.id,
                    "Duplicate wall id",
                ));
            }
        }

        let kx: f64 = walls.iter().map(WallPanel::kx).sum();
        let ky: f64 = walls.iter().map(WallPanel::ky).sum();

        if !(kx > 0.0) {
            return Err(LateralError::degenerate_stiffness(level, Axis::X));
        }
        if !(ky > 0.0) {
            return Err(LateralError::degenerate_stiffness(level, Axis::Y));
        }

        tracing::debug!(level = %level, walls = walls.len(), kx, ky, "level stiffness");
        Ok(AxisStiffness { level, walls, kx, ky })
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn walls(&self) -> &[WallPanel] {
        &self.walls
    }

    /// ΣKx (kip/in)
    pub fn kx(&self) -> f64 {
        self.kx
    }

    /// ΣKy (kip/in)
    pub fn ky(&self) -> f64 {
        self.ky
    }

    /// Total stiffness along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.kx,
            Axis::Y => self.ky,
        }
    }

    /// Stage 2: stiffness-weighted centroid of the wall midpoints
    pub fn locate_center(self) -> RigidityCenter {
        let (sum_ky_x, sum_kx_y) = self.walls.iter().fold((0.0, 0.0), |(ax, ay), wall| {
            let mid = wall.midpoint();
            (ax + wall.ky() * mid.x, ay + wall.kx() * mid.y)
        });
        let center = Point2::new(sum_ky_x / self.ky, sum_kx_y / self.kx);

        tracing::debug!(level = %self.level, x = center.x, y = center.y, "center of rigidity");
        RigidityCenter { stiffness: self, center }
    }
}

/// Stage 2: axis stiffness plus the located center of rigidity.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidityCenter {
    stiffness: AxisStiffness,
    center: Point2,
}

impl RigidityCenter {
    pub fn stiffness(&self) -> &AxisStiffness {
        &self.stiffness
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Stage 3: attach each wall's signed offset and sum J = ΣK·offset²
    pub fn into_diaphragm(self) -> RigidDiaphragm {
        let center = self.center;
        let walls: Vec<PlacedWall> = self
            .stiffness
            .walls
            .iter()
            .map(|wall| PlacedWall {
                offset: wall.line.signed_distance_to(center),
                wall: wall.clone(),
            })
            .collect();

        let torsional_stiffness = walls
            .iter()
            .map(|w| w.wall.stiffness * w.offset * w.offset)
            .sum();

        tracing::debug!(level = %self.stiffness.level, j = torsional_stiffness, "torsional stiffness");
        RigidDiaphragm {
            level: self.stiffness.level,
            kx: self.stiffness.kx,
            ky: self.stiffness.ky,
            center,
            torsional_stiffness,
            walls,
        }
    }
}

/// A wall with its signed offset from the center of rigidity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWall {
    pub wall: WallPanel,

    /// Perpendicular distance from the extended wall line to the center of
    /// rigidity (in). Positive when the center lies left of the wall's
    /// start→end direction, negative when right, zero when colinear.
    pub offset: f64,
}

/// Stage 3: a fully solved rigid diaphragm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RigidDiaphragm {
    level: String,
    kx: f64,
    ky: f64,
    center: Point2,
    torsional_stiffness: f64,
    walls: Vec<PlacedWall>,
}

impl RigidDiaphragm {
    /// Run all three stages for a level
    pub fn solve(level: impl Into<String>, walls: Vec<WallPanel>) -> LateralResult<Self> {
        Ok(AxisStiffness::compute(level, walls)?.locate_center().into_diaphragm())
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// ΣKx (kip/in)
    pub fn kx(&self) -> f64 {
        self.kx
    }

    /// ΣKy (kip/in)
    pub fn ky(&self) -> f64 {
        self.ky
    }

    pub fn stiffness_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.kx,
            Axis::Y => self.ky,
        }
    }

    /// Center of rigidity
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// J = ΣK·offset² (kip·in)
    pub fn torsional_stiffness(&self) -> f64 {
        self.torsional_stiffness
    }

    pub fn walls(&self) -> &[PlacedWall] {
        &self.walls
    }

    /// Look up a placed wall by id
    pub fn wall(&self, id: &str) -> LateralResult<&PlacedWall> {
        self.walls
            .iter()
            .find(|w| w.wall.id == id)
            .ok_or_else(|| LateralError::not_found("Wall", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn scenario_walls() -> Vec<WallPanel> {
        vec![
            WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, 240.0), 100.0),
            WallPanel::new("B", Point2::new(360.0, 0.0), Point2::new(360.0, 240.0), 150.0),
            WallPanel::new("C", Point2::new(0.0, 0.0), Point2::new(360.0, 0.0), 80.0),
            WallPanel::new("D", Point2::new(0.0, 240.0), Point2::new(360.0, 240.0), 120.0),
        ]
    }

    #[test]
    fn test_axis_stiffness_sums() {
        let stiffness = AxisStiffness::compute("L2", scenario_walls()).unwrap();
        assert_relative_eq!(stiffness.kx(), 200.0, max_relative = 1e-9);
        assert_relative_eq!(stiffness.ky(), 250.0, max_relative = 1e-9);
        assert_relative_eq!(stiffness.along(Axis::Y), 250.0, max_relative = 1e-9);
    }

    #[test]
    fn test_center_of_rigidity() {
        let center = AxisStiffness::compute("L2", scenario_walls()).unwrap().locate_center();
        assert_relative_eq!(center.center().x, 216.0, max_relative = 1e-12);
        assert_relative_eq!(center.center().y, 144.0, max_relative = 1e-12);
    }

    #[test]
    fn test_offsets_and_torsional_stiffness() {
        let d = RigidDiaphragm::solve("L2", scenario_walls()).unwrap();
        let offsets: Vec<f64> = d.walls().iter().map(|w| w.offset).collect();
        let expected = [-216.0, 144.0, 144.0, -96.0];
        for (got, want) in offsets.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
        assert_relative_eq!(d.torsional_stiffness(), 10_540_800.0, max_relative = 1e-12);
    }

    #[test]
    fn test_no_x_walls_is_degenerate() {
        let walls = vec![
            WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, 240.0), 100.0),
            WallPanel::new("B", Point2::new(360.0, 0.0), Point2::new(360.0, 240.0), 150.0),
        ];
        let err = AxisStiffness::compute("L2", walls).unwrap_err();
        assert_eq!(err, LateralError::degenerate_stiffness("L2", Axis::X));
    }

    #[test]
    fn test_no_walls_is_degenerate() {
        let err = RigidDiaphragm::solve("Roof", Vec::new()).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_STIFFNESS");
    }

    #[test]
    fn test_duplicate_wall_ids() {
        let mut walls = scenario_walls();
        walls[1].id = "A".to_string();
        assert_eq!(
            AxisStiffness::compute("L2", walls).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_wall_through_center_has_zero_offset() {
        let mut walls = scenario_walls();
        // Y-direction wall on x = 216 with zero stiffness leaves CR unchanged
        walls.push(WallPanel::new("E", Point2::new(216.0, 0.0), Point2::new(216.0, 100.0), 0.0));
        let d = RigidDiaphragm::solve("L2", walls).unwrap();
        assert_eq!(d.wall("E").unwrap().offset, 0.0);
        assert!(d.wall("Z").is_err());
    }
}
