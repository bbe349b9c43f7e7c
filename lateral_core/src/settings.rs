//! # Analysis Settings
//!
//! Code parameters and tolerances that drive a lateral analysis run. Stored
//! in the project file next to the model; every field has a default so a
//! partial `settings` object deserializes cleanly.

use serde::{Deserialize, Serialize};

use crate::errors::{LateralError, LateralResult};

/// Global analysis settings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "deflection_amplification": 4.0,
///   "importance_factor": 1.0,
///   "irregularity_1a_ratio": 1.2,
///   "irregularity_1b_ratio": 1.4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Deflection amplification factor Cd (ASCE 7-22 Table 12.2-1)
    pub deflection_amplification: f64,

    /// Seismic importance factor Ie; amplified displacement is Cd·δ/Ie
    pub importance_factor: f64,

    /// max/avg drift ratio above which torsional irregularity 1a applies
    pub irregularity_1a_ratio: f64,

    /// max/avg drift ratio above which torsional irregularity 1b applies
    pub irregularity_1b_ratio: f64,

    /// Two boundary vertices closer than this are the same tracked point (in)
    pub point_tolerance: f64,

    /// Relative tolerance for ratio comparisons and zero checks
    pub numeric_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            deflection_amplification: 4.0,
            importance_factor: 1.0,
            irregularity_1a_ratio: 1.2,
            irregularity_1b_ratio: 1.4,
            point_tolerance: 1e-3,
            numeric_tolerance: 1e-9,
        }
    }
}

impl AnalysisSettings {
    /// Scale applied to elastic displacements of seismic patterns
    pub fn seismic_displacement_scale(&self) -> f64 {
        self.deflection_amplification / self.importance_factor
    }

    /// Validate settings.
    pub fn validate(&self) -> LateralResult<()> {
        let positive = [
            ("deflection_amplification", self.deflection_amplification),
            ("importance_factor", self.importance_factor),
            ("point_tolerance", self.point_tolerance),
            ("numeric_tolerance", self.numeric_tolerance),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(LateralError::invalid_input(field, value.to_string(), "Must be positive"));
            }
        }
        if !(self.irregularity_1a_ratio >= 1.0 && self.irregularity_1b_ratio >= self.irregularity_1a_ratio) {
            return Err(LateralError::invalid_input(
                "irregularity_1b_ratio",
                self.irregularity_1b_ratio.to_string(),
                format!(
                    "Irregularity ratios must satisfy 1.0 <= 1a ({}) <= 1b",
                    self.irregularity_1a_ratio
                ),
            ));
        }
        Ok(())
    }
}
