//! # Level Descriptors
//!
//! Per-story inputs supplied by the layout/mass collaborator: the plan
//! boundary polygon, seismic weight, and either a story height or a raw
//! elevation. Story heights can be back-resolved from elevations once with
//! [`resolve_story_heights`]; after that a `Level` is read-only.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::geometry::Point2;
//! use lateral_core::level::{Level, resolve_story_heights};
//!
//! let boundary = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(360.0, 0.0),
//!     Point2::new(360.0, 240.0),
//!     Point2::new(0.0, 240.0),
//! ];
//!
//! let mut levels = vec![
//!     Level::new("L2", boundary.clone()).with_elevation(120.0),
//!     Level::new("Roof", boundary).with_elevation(228.0),
//! ];
//! resolve_story_heights(&mut levels, 0.0).unwrap();
//!
//! assert_eq!(levels[0].story_height().unwrap(), 120.0);
//! assert_eq!(levels[1].story_height().unwrap(), 108.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{LateralError, LateralResult};
use crate::geometry::{self, Extents, Point2};

/// A single story of the building, described at its diaphragm.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Level 2",
///   "boundary": [{"x": 0.0, "y": 0.0}, {"x": 360.0, "y": 0.0},
///                {"x": 360.0, "y": 240.0}, {"x": 0.0, "y": 240.0}],
///   "seismic_weight": 250.0,
///   "elevation": 120.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Level identity (e.g., "Level 2", "Roof")
    pub name: String,

    /// Ordered boundary polygon vertices (in)
    pub boundary: Vec<Point2>,

    /// Seismic weight tributary to this diaphragm (kip)
    #[serde(default)]
    pub seismic_weight: f64,

    /// Raw elevation of the diaphragm (in), used to back-resolve story height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,

    /// Story height below this diaphragm (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_height: Option<f64>,

    /// Center of mass; the boundary centroid is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_of_mass: Option<Point2>,
}

impl Level {
    /// Create a level from its name and boundary polygon
    pub fn new(name: impl Into<String>, boundary: Vec<Point2>) -> Self {
        Level {
            name: name.into(),
            boundary,
            seismic_weight: 0.0,
            elevation: None,
            story_height: None,
            center_of_mass: None,
        }
    }

    /// Set the seismic weight (builder pattern)
    pub fn with_seismic_weight(mut self, weight: f64) -> Self {
        self.seismic_weight = weight;
        self
    }

    /// Set the raw elevation (builder pattern)
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Set the story height directly (builder pattern)
    pub fn with_story_height(mut self, height: f64) -> Self {
        self.story_height = Some(height);
        self
    }

    /// Set an explicit center of mass (builder pattern)
    pub fn with_center_of_mass(mut self, center: Point2) -> Self {
        self.center_of_mass = Some(center);
        self
    }

    /// Validate boundary and mass inputs.
    pub fn validate(&self) -> LateralResult<()> {
        if self.boundary.len() < 3 {
            return Err(LateralError::invalid_input(
                format!("{}.boundary", self.name),
                self.boundary.len().to_string(),
                "Boundary polygon needs at least 3 vertices",
            ));
        }
        if let Some(bad) = self.boundary.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(LateralError::invalid_input(
                format!("{}.boundary", self.name),
                bad.to_string(),
                "Boundary vertices must be finite",
            ));
        }
        if !self.seismic_weight.is_finite() || self.seismic_weight < 0.0 {
            return Err(LateralError::invalid_input(
                format!("{}.seismic_weight", self.name),
                self.seismic_weight.to_string(),
                "Seismic weight cannot be negative",
            ));
        }
        if let Some(h) = self.story_height {
            if !(h > 0.0 && h.is_finite()) {
                return Err(LateralError::invalid_input(
                    format!("{}.story_height", self.name),
                    h.to_string(),
                    "Story height must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Plan extents of the boundary
    pub fn extents(&self) -> LateralResult<Extents> {
        Extents::of(&self.boundary).ok_or_else(|| {
            LateralError::invalid_input(format!("{}.boundary", self.name), "[]", "Boundary is empty")
        })
    }

    /// Plan area enclosed by the boundary (in²)
    pub fn area(&self) -> f64 {
        geometry::signed_area(&self.boundary).abs()
    }

    /// Center of mass: the explicit value, or the boundary centroid
    pub fn center_of_mass(&self) -> LateralResult<Point2> {
        if let Some(c) = self.center_of_mass {
            return Ok(c);
        }
        geometry::centroid(&self.boundary).ok_or_else(|| {
            LateralError::invalid_input(format!("{}.boundary", self.name), "[]", "Boundary is empty")
        })
    }

    /// Story height, failing if it was never supplied or resolved
    pub fn story_height(&self) -> LateralResult<f64> {
        match self.story_height {
            Some(h) if h > 0.0 && h.is_finite() => Ok(h),
            Some(h) => Err(LateralError::invalid_input(
                format!("{}.story_height", self.name),
                h.to_string(),
                "Story height must be positive",
            )),
            None => Err(LateralError::invalid_input(
                format!("{}.story_height", self.name),
                "none",
                "Story height not set; supply it or resolve it from elevations",
            )),
        }
    }
}

/// Back-resolve story heights from elevations.
///
/// `levels` must be ordered bottom-to-top. Each level's height becomes its
/// elevation minus the elevation below it (the base elevation for the first
/// level). Levels that already carry a story height and no elevation are left
/// alone, but then every level above must also be explicit.
pub fn resolve_story_heights(levels: &mut [Level], base_elevation: f64) -> LateralResult<()> {
    let mut below = Some(base_elevation);

    for level in levels.iter_mut() {
        match (level.elevation, below) {
            (Some(elevation), Some(prev)) => {
                let height = elevation - prev;
                if !(height > 0.0 && height.is_finite()) {
                    return Err(LateralError::invalid_input(
                        format!("{}.elevation", level.name),
                        elevation.to_string(),
                        format!("Elevation must be above the level below ({prev})"),
                    ));
                }
                level.story_height = Some(height);
                below = Some(elevation);
            }
            (Some(elevation), None) => {
                return Err(LateralError::invalid_input(
                    format!("{}.elevation", level.name),
                    elevation.to_string(),
                    "Cannot resolve height: level below has no elevation",
                ));
            }
            (None, _) => {
                level.story_height()?;
                below = None;
            }
        }
        tracing::debug!(level = %level.name, story_height = ?level.story_height, "resolved story height");
    }
    Ok(())
}
