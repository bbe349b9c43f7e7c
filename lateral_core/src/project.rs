//! # Project Data Structures
//!
//! The `Project` struct is the root container for a lateral analysis.
//! Projects serialize to `.lat` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: AnalysisSettings (Cd, Ie, irregularity limits, tolerances)
//! ├── load_patterns: Vec<LoadPattern> (custom patterns on top of the standard set)
//! ├── load_cases: Vec<LoadCaseDef> (empty → standard seismic cases)
//! ├── base_elevation: Option<f64>
//! └── building: BuildingModel (levels, walls, applied loads)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("25-042"));
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_building, BuildingAnalysis, BuildingModel, LevelModel};
use crate::errors::LateralResult;
use crate::loads::{seismic_load_cases, LoadCase, LoadCaseDef, LoadPattern, PatternCatalog};
use crate::settings::AnalysisSettings;

/// Current schema version for .lat files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: AnalysisSettings,

    /// Patterns registered in addition to the standard seismic and wind set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_patterns: Vec<LoadPattern>,

    /// Load cases to superpose; the standard strength-level seismic cases
    /// are used when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_cases: Vec<LoadCaseDef>,

    /// Elevation story heights are measured from when levels give elevations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_elevation: Option<f64>,

    #[serde(default)]
    pub building: BuildingModel,
}

impl Project {
    /// Create a new empty project.
    ///
    /// ```rust
    /// use lateral_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert!(project.building.levels.is_empty());
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: AnalysisSettings::default(),
            load_patterns: Vec::new(),
            load_cases: Vec::new(),
            base_elevation: None,
            building: BuildingModel::default(),
        }
    }

    /// Append a level on top of the existing ones.
    pub fn add_level(&mut self, level: LevelModel) {
        self.building.levels.push(level);
        self.touch();
    }

    /// Remove a level by name, returning it if it existed.
    pub fn remove_level(&mut self, name: &str) -> Option<LevelModel> {
        let index = self.building.levels.iter().position(|m| m.level.name == name)?;
        self.touch();
        Some(self.building.levels.remove(index))
    }

    /// Add or replace a load case definition by name.
    pub fn set_load_case(&mut self, def: LoadCaseDef) {
        match self.load_cases.iter_mut().find(|c| c.name == def.name) {
            Some(existing) => *existing = def,
            None => self.load_cases.push(def),
        }
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Pattern catalog for this project.
    ///
    /// The shared standard catalog when no custom patterns are registered,
    /// otherwise the standard patterns plus the custom ones.
    pub fn catalog(&self) -> LateralResult<Arc<PatternCatalog>> {
        let standard = PatternCatalog::standard();
        if self.load_patterns.is_empty() {
            return Ok(standard);
        }
        let patterns = standard.patterns().into_iter().chain(self.load_patterns.iter().cloned());
        Ok(Arc::new(PatternCatalog::from_patterns(patterns)?))
    }

    /// Validated load cases against `catalog`
    pub fn load_cases(&self, catalog: &PatternCatalog) -> LateralResult<Vec<LoadCase>> {
        let defs = if self.load_cases.is_empty() {
            seismic_load_cases(1.0)
        } else {
            self.load_cases.clone()
        };
        defs.into_iter().map(|def| def.build(catalog)).collect()
    }

    /// Resolve story heights and run the full building analysis.
    pub fn analyze(&self) -> LateralResult<BuildingAnalysis> {
        let catalog = self.catalog()?;
        let load_cases = self.load_cases(&catalog)?;
        self.analyze_with(&catalog, &load_cases)
    }

    /// Run the building analysis with a catalog and load cases the caller
    /// already built, so they can be reused for reporting.
    pub fn analyze_with(&self, catalog: &PatternCatalog, load_cases: &[LoadCase]) -> LateralResult<BuildingAnalysis> {
        let mut building = self.building.clone();
        if let Some(base) = self.base_elevation {
            building.resolve_story_heights(base)?;
        }

        analyze_building(&building, load_cases, catalog, &self.settings)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}
