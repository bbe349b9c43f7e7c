//! Whole-building run: every level through the per-level pipeline, then the
//! two-pass drift computation and the torsional irregularity check.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::level::{LevelAnalysis, LevelModel};
use crate::drift::{self, DriftPoint, IrregularityCheck, IrregularityStatus};
use crate::errors::{LateralError, LateralResult};
use crate::level::{self as story, Level};
use crate::loads::{LoadCase, PatternCatalog};
use crate::settings::AnalysisSettings;

/// Levels of a building, ordered bottom-to-top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingModel {
    pub levels: Vec<LevelModel>,
}

impl BuildingModel {
    pub fn new(levels: Vec<LevelModel>) -> Self {
        BuildingModel { levels }
    }

    /// Fill in story heights from elevations, measured up from `base_elevation`
    pub fn resolve_story_heights(&mut self, base_elevation: f64) -> LateralResult<()> {
        let mut levels: Vec<Level> = self.levels.iter().map(|m| m.level.clone()).collect();
        story::resolve_story_heights(&mut levels, base_elevation)?;
        for (model, level) in self.levels.iter_mut().zip(levels) {
            model.level = level;
        }
        Ok(())
    }
}

/// Results of a whole-building run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingAnalysis {
    /// Per-level results, bottom-to-top
    pub levels: Vec<LevelAnalysis>,
    pub drifts: Vec<DriftPoint>,
    pub irregularities: Vec<IrregularityCheck>,
}

impl BuildingAnalysis {
    pub fn level(&self, name: &str) -> LateralResult<&LevelAnalysis> {
        self.levels
            .iter()
            .find(|l| l.level().name == name)
            .ok_or_else(|| LateralError::not_found("Level", name))
    }

    /// Checks that came out Type 1A or Type 1B
    pub fn irregular(&self) -> impl Iterator<Item = &IrregularityCheck> {
        self.irregularities
            .iter()
            .filter(|c| c.status != IrregularityStatus::Ok)
    }

    /// Most severe classification over all checks
    pub fn worst_irregularity(&self) -> IrregularityStatus {
        self.irregularities
            .iter()
            .map(|c| c.status)
            .max_by_key(|s| match s {
                IrregularityStatus::Ok => 0,
                IrregularityStatus::Type1A => 1,
                IrregularityStatus::Type1B => 2,
            })
            .unwrap_or(IrregularityStatus::Ok)
    }

    /// Largest story drift ratio and where it occurs
    pub fn max_drift(&self) -> Option<&DriftPoint> {
        self.drifts.iter().max_by(|a, b| a.drift.total_cmp(&b.drift))
    }
}

/// Analyze every level and check drift and torsional irregularity for
/// `load_cases`.
///
/// Levels are independent until the drift pass, so they are solved in
/// parallel. Every level must carry a story height by the time this runs.
pub fn analyze_building(
    model: &BuildingModel,
    load_cases: &[LoadCase],
    catalog: &PatternCatalog,
    settings: &AnalysisSettings,
) -> LateralResult<BuildingAnalysis> {
    settings.validate()?;
    if model.levels.is_empty() {
        return Err(LateralError::invalid_input("levels", "[]", "Building has no levels"));
    }

    tracing::info!(levels = model.levels.len(), load_cases = load_cases.len(), "analyzing building");

    let applied: HashSet<&str> = model
        .levels
        .iter()
        .flat_map(|m| m.loads.iter().map(|l| l.load_pattern.as_str()))
        .collect();
    for case in load_cases {
        if !case.factors().any(|(pattern, _)| applied.contains(pattern)) {
            tracing::warn!(load_case = case.name(), "load case matches no applied load pattern");
        }
    }

    let levels: Vec<LevelAnalysis> = model
        .levels
        .par_iter()
        .map(|m| LevelAnalysis::run(m, catalog, settings))
        .collect::<LateralResult<_>>()?;

    let displacements = levels
        .iter()
        .map(|l| l.displacement_points(load_cases))
        .collect::<LateralResult<Vec<_>>>()?;
    let drifts = drift::compute_drifts(&displacements)?;
    let irregularities = drift::check_torsional_irregularity(&drifts, load_cases, settings)?;

    let analysis = BuildingAnalysis {
        levels,
        drifts,
        irregularities,
    };
    tracing::info!(
        drift_points = analysis.drifts.len(),
        checks = analysis.irregularities.len(),
        worst = %analysis.worst_irregularity(),
        "building analysis complete"
    );
    Ok(analysis)
}
