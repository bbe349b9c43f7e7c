//! Load cases: factored combinations of load patterns
//!
//! A load case is an ordered map of load pattern → factor with a
//! predominant-direction tag. All patterns in a case must share one
//! category; a case mixing wind and seismic is rejected when it is built.
//!
//! ## Sign Convention
//!
//! Directional patterns are entered as positive forces. Reversal is
//! expressed with a negative factor (e.g. `-0.7 × Seismic X +Ecc`), the same
//! way uplift variants carry `-W`.

use serde::{Deserialize, Serialize};

use super::catalog::{self, PatternCatalog};
use super::load_types::LoadPatternCategory;
use crate::errors::{LateralError, LateralResult};
use crate::geometry::Axis;

/// Direction a load case predominantly acts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PredominantDirection {
    X,
    Y,
    #[default]
    Both,
}

impl PredominantDirection {
    /// Whether results along `axis` are governed by this direction
    pub fn includes(&self, axis: Axis) -> bool {
        match self {
            PredominantDirection::X => axis == Axis::X,
            PredominantDirection::Y => axis == Axis::Y,
            PredominantDirection::Both => true,
        }
    }
}

impl From<Axis> for PredominantDirection {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => PredominantDirection::X,
            Axis::Y => PredominantDirection::Y,
        }
    }
}

/// Unvalidated load case definition, as read from a project file.
///
/// # Example
/// ```
/// use lateral_core::loads::{LoadCaseDef, PatternCatalog, PredominantDirection};
///
/// let case = LoadCaseDef::new("0.7E X+", PredominantDirection::X)
///     .with_factor("Seismic X +Ecc", 0.7)
///     .build(&PatternCatalog::standard())
///     .unwrap();
///
/// assert_eq!(case.factor("Seismic X +Ecc"), Some(0.7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseDef {
    /// Load case identifier (e.g., "0.7E X+")
    pub name: String,

    #[serde(default)]
    pub direction: PredominantDirection,

    /// (load pattern, factor) in declaration order
    pub factors: Vec<(String, f64)>,
}

impl LoadCaseDef {
    pub fn new(name: impl Into<String>, direction: PredominantDirection) -> Self {
        LoadCaseDef {
            name: name.into(),
            direction,
            factors: Vec::new(),
        }
    }

    /// Add or replace a pattern factor (builder pattern)
    pub fn with_factor(mut self, load_pattern: impl Into<String>, factor: f64) -> Self {
        let load_pattern = load_pattern.into();
        match self.factors.iter_mut().find(|(p, _)| *p == load_pattern) {
            Some(entry) => entry.1 = factor,
            None => self.factors.push((load_pattern, factor)),
        }
        self
    }

    /// Validate against the catalog and freeze into a [`LoadCase`]
    pub fn build(self, catalog: &PatternCatalog) -> LateralResult<LoadCase> {
        if self.factors.is_empty() {
            return Err(LateralError::invalid_input(
                format!("{}.factors", self.name),
                "[]",
                "Load case has no load patterns",
            ));
        }

        let mut category: Option<LoadPatternCategory> = None;
        for (pattern, factor) in &self.factors {
            if !factor.is_finite() {
                return Err(LateralError::invalid_input(
                    format!("{}.{}", self.name, pattern),
                    factor.to_string(),
                    "Load factor must be finite",
                ));
            }
            let found = catalog.category(pattern)?;
            match category {
                None => category = Some(found),
                Some(expected) if expected != found => {
                    return Err(LateralError::mismatched_category(
                        &self.name,
                        expected.description(),
                        found.description(),
                    ));
                }
                Some(_) => {}
            }
        }

        let category = category.ok_or_else(|| {
            LateralError::invalid_input(format!("{}.factors", self.name), "[]", "Load case has no load patterns")
        })?;

        Ok(LoadCase {
            name: self.name,
            direction: self.direction,
            category,
            factors: self.factors,
        })
    }
}

/// A validated load case. Only obtainable through [`LoadCaseDef::build`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadCase {
    name: String,
    direction: PredominantDirection,
    category: LoadPatternCategory,
    factors: Vec<(String, f64)>,
}

impl LoadCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> PredominantDirection {
        self.direction
    }

    /// The single category shared by every pattern in this case
    pub fn category(&self) -> LoadPatternCategory {
        self.category
    }

    /// Factor for a pattern, `None` if the pattern is not part of this case
    pub fn factor(&self, load_pattern: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(p, _)| p == load_pattern)
            .map(|(_, f)| *f)
    }

    /// (pattern, factor) pairs in declaration order
    pub fn factors(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(p, f)| (p.as_str(), *f))
    }

    /// Back to an editable definition
    pub fn to_def(&self) -> LoadCaseDef {
        LoadCaseDef {
            name: self.name.clone(),
            direction: self.direction,
            factors: self.factors.clone(),
        }
    }
}

/// Standard seismic load cases over the four directional patterns.
///
/// For each pattern: `±factor × pattern` tagged with its own direction. Then
/// the orthogonal 100%/30% combinations (ASCE 7-22 12.5.3.1), tagged with the
/// 100% direction. `factor` is 0.7 for ASD strength level, 1.0 for LRFD.
pub fn seismic_load_cases(factor: f64) -> Vec<LoadCaseDef> {
    let directional = [
        (catalog::SEISMIC_X_POS, "X+Ecc", PredominantDirection::X),
        (catalog::SEISMIC_X_NEG, "X-Ecc", PredominantDirection::X),
        (catalog::SEISMIC_Y_POS, "Y+Ecc", PredominantDirection::Y),
        (catalog::SEISMIC_Y_NEG, "Y-Ecc", PredominantDirection::Y),
    ];

    let mut cases = Vec::new();
    for (pattern, label, direction) in directional {
        for sign in [1.0, -1.0] {
            let prefix = if sign > 0.0 { "+" } else { "-" };
            cases.push(
                LoadCaseDef::new(format!("{prefix}{factor}E {label}"), direction)
                    .with_factor(pattern, sign * factor),
            );
        }
    }

    let orthogonal = [
        (catalog::SEISMIC_X_POS, catalog::SEISMIC_Y_POS, "X+Ecc/Y+Ecc", PredominantDirection::X),
        (catalog::SEISMIC_X_NEG, catalog::SEISMIC_Y_NEG, "X-Ecc/Y-Ecc", PredominantDirection::X),
        (catalog::SEISMIC_Y_POS, catalog::SEISMIC_X_POS, "Y+Ecc/X+Ecc", PredominantDirection::Y),
        (catalog::SEISMIC_Y_NEG, catalog::SEISMIC_X_NEG, "Y-Ecc/X-Ecc", PredominantDirection::Y),
    ];
    for (primary, secondary, label, direction) in orthogonal {
        cases.push(
            LoadCaseDef::new(format!("{factor}E 100/30 {label}"), direction)
                .with_factor(primary, factor)
                .with_factor(secondary, 0.3 * factor),
        );
    }

    cases
}

/// Standard wind load cases: `±factor × Wind X` and `±factor × Wind Y`,
/// named like the seismic cases (`+0.6W X`).
pub fn wind_load_cases(factor: f64) -> Vec<LoadCaseDef> {
    [
        (catalog::WIND_X, "X", PredominantDirection::X),
        (catalog::WIND_Y, "Y", PredominantDirection::Y),
    ]
    .into_iter()
    .flat_map(|(pattern, label, direction)| {
        [1.0, -1.0].into_iter().map(move |sign| {
            let prefix = if sign > 0.0 { "+" } else { "-" };
            LoadCaseDef::new(format!("{prefix}{factor}W {label}"), direction)
                .with_factor(pattern, sign * factor)
        })
    })
    .collect()
}
