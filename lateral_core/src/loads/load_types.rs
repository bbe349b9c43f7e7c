//! Load pattern categories per ASCE 7-22
//!
//! Every named load pattern belongs to one structural category. Load cases
//! may only combine patterns of a single category, and the category decides
//! whether computed displacements are amplified by Cd.

use serde::{Deserialize, Serialize};

/// Structural category of a load pattern, after ASCE 7-22 Section 2
///
/// # Example
/// ```
/// use lateral_core::loads::LoadPatternCategory;
///
/// let cat = LoadPatternCategory::Seismic;
/// assert_eq!(cat.code(), "E");
/// assert!(cat.is_lateral());
/// assert!(cat.amplifies_deflection());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadPatternCategory {
    /// D - Dead load
    Dead,
    /// L - Live load
    Live,
    /// Lr - Roof live load
    LiveRoof,
    /// S - Snow load
    Snow,
    /// W - Wind load
    Wind,
    /// E - Seismic (earthquake) load
    Seismic,
    /// H - Lateral earth pressure
    SoilLateral,
}

impl LoadPatternCategory {
    /// All categories in standard order
    pub const ALL: [LoadPatternCategory; 7] = [
        LoadPatternCategory::Dead,
        LoadPatternCategory::Live,
        LoadPatternCategory::LiveRoof,
        LoadPatternCategory::Snow,
        LoadPatternCategory::Wind,
        LoadPatternCategory::Seismic,
        LoadPatternCategory::SoilLateral,
    ];

    /// Standard abbreviation code (D, L, Lr, S, W, E, H)
    pub fn code(&self) -> &'static str {
        match self {
            LoadPatternCategory::Dead => "D",
            LoadPatternCategory::Live => "L",
            LoadPatternCategory::LiveRoof => "Lr",
            LoadPatternCategory::Snow => "S",
            LoadPatternCategory::Wind => "W",
            LoadPatternCategory::Seismic => "E",
            LoadPatternCategory::SoilLateral => "H",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadPatternCategory::Dead => "Dead load",
            LoadPatternCategory::Live => "Live load",
            LoadPatternCategory::LiveRoof => "Roof live load",
            LoadPatternCategory::Snow => "Snow load",
            LoadPatternCategory::Wind => "Wind load",
            LoadPatternCategory::Seismic => "Seismic load",
            LoadPatternCategory::SoilLateral => "Lateral earth pressure",
        }
    }

    /// Whether patterns of this category load the diaphragm in plan
    pub fn is_lateral(&self) -> bool {
        matches!(
            self,
            LoadPatternCategory::Wind | LoadPatternCategory::Seismic | LoadPatternCategory::SoilLateral
        )
    }

    /// Whether elastic displacements are scaled by Cd/Ie (ASCE 7-22 12.8.6)
    pub fn amplifies_deflection(&self) -> bool {
        matches!(self, LoadPatternCategory::Seismic)
    }
}

impl std::fmt::Display for LoadPatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
