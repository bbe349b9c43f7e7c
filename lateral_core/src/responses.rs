//! # Response Payloads
//!
//! Concrete payloads stored in [`ResponseCollection`](crate::superposition::ResponseCollection)s:
//!
//! - [`WallShear`] - direct and torsional shear in a wall (kip)
//! - [`WallReaction`] - the wall's total shear as global force components and unit shear
//! - [`NodalDisplacement`] - rigid-body displacement of a plan point (in, rad)
//!
//! Shear signs follow the wall's own start→end direction: positive shear is
//! load delivered to the wall along that direction.

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;
use crate::superposition::Superimposable;

/// Shear delivered to a wall by the diaphragm (kip).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WallShear {
    /// Stiffness-proportional share of the direct story force
    pub direct: f64,
    /// Share of the torsion about the center of rigidity
    pub torsional: f64,
}

impl WallShear {
    /// Direct + torsional
    pub fn total(&self) -> f64 {
        self.direct + self.torsional
    }
}

impl Superimposable for WallShear {
    fn apply_load_factor(&self, factor: f64) -> Self {
        WallShear {
            direct: self.direct * factor,
            torsional: self.torsional * factor,
        }
    }

    fn superimpose(&self, other: &Self) -> Self {
        WallShear {
            direct: self.direct + other.direct,
            torsional: self.torsional + other.torsional,
        }
    }

    fn zip_fields(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        WallShear {
            direct: op(self.direct, other.direct),
            torsional: op(self.torsional, other.torsional),
        }
    }
}

/// Wall total shear resolved into global components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WallReaction {
    /// Global X component (kip)
    pub fx: f64,
    /// Global Y component (kip)
    pub fy: f64,
    /// Total shear per unit wall length (kip/in)
    pub unit_shear: f64,
}

impl Superimposable for WallReaction {
    fn apply_load_factor(&self, factor: f64) -> Self {
        WallReaction {
            fx: self.fx * factor,
            fy: self.fy * factor,
            unit_shear: self.unit_shear * factor,
        }
    }

    fn superimpose(&self, other: &Self) -> Self {
        WallReaction {
            fx: self.fx + other.fx,
            fy: self.fy + other.fy,
            unit_shear: self.unit_shear + other.unit_shear,
        }
    }

    fn zip_fields(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        WallReaction {
            fx: op(self.fx, other.fx),
            fy: op(self.fy, other.fy),
            unit_shear: op(self.unit_shear, other.unit_shear),
        }
    }
}

/// Displacement of a plan point on a rigid diaphragm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodalDisplacement {
    /// Along global X (in)
    pub ux: f64,
    /// Along global Y (in)
    pub uy: f64,
    /// Diaphragm rotation, counterclockwise positive (rad)
    pub rotation: f64,
}

impl NodalDisplacement {
    /// Displacement component along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.ux,
            Axis::Y => self.uy,
        }
    }
}

impl Superimposable for NodalDisplacement {
    fn apply_load_factor(&self, factor: f64) -> Self {
        NodalDisplacement {
            ux: self.ux * factor,
            uy: self.uy * factor,
            rotation: self.rotation * factor,
        }
    }

    fn superimpose(&self, other: &Self) -> Self {
        NodalDisplacement {
            ux: self.ux + other.ux,
            uy: self.uy + other.uy,
            rotation: self.rotation + other.rotation,
        }
    }

    fn zip_fields(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        NodalDisplacement {
            ux: op(self.ux, other.ux),
            uy: op(self.uy, other.uy),
            rotation: op(self.rotation, other.rotation),
        }
    }
}
