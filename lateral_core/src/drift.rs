//! # Story Drift & Torsional Irregularity
//!
//! Works over levels ordered bottom-to-top, in two passes:
//!
//! 1. [`DisplacementPoint`]s: superposed displacement of every tracked
//!    boundary point, per load case and direction.
//! 2. [`DriftPoint`]s: each point is matched to the nearest point at the
//!    level below with the same load case and direction;
//!    `drift = |Δ − Δ_below| / story height`. The base level uses Δ_below = 0.
//!
//! Torsional irregularity (ASCE 7-22 Table 12.3-1, 1a/1b) then compares the
//! maximum and average drift of every pair of points sharing a level, load
//! case and direction, keeping only load cases whose predominant direction
//! matches the drift direction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{LateralError, LateralResult};
use crate::geometry::{Axis, Point2};
use crate::loads::{LoadCase, PredominantDirection};
use crate::settings::AnalysisSettings;

/// Superposed displacement of a tracked point (first pass).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplacementPoint {
    pub level: String,
    pub node: String,
    pub location: Point2,
    pub direction: Axis,
    pub load_case: String,
    /// Displacement along `direction` (in)
    pub displacement: f64,
}

/// Tracked displacements of one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDisplacements {
    pub level: String,
    /// Story height below this level (in)
    pub story_height: f64,
    pub points: Vec<DisplacementPoint>,
}

/// The point at the level below a drift point was measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPoint {
    pub node: String,
    pub location: Point2,
    pub displacement: f64,
}

/// Story drift at a tracked point (second pass).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftPoint {
    pub level: String,
    pub node: String,
    pub location: Point2,
    pub direction: Axis,
    pub load_case: String,
    pub displacement: f64,
    /// `None` at the base level
    pub below: Option<MatchedPoint>,
    pub story_height: f64,
    /// |Δ − Δ_below| / story height
    pub drift: f64,
}

/// Torsional irregularity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrregularityStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Type 1A")]
    Type1A,
    #[serde(rename = "Type 1B")]
    Type1B,
}

impl std::fmt::Display for IrregularityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrregularityStatus::Ok => write!(f, "OK"),
            IrregularityStatus::Type1A => write!(f, "Type 1A"),
            IrregularityStatus::Type1B => write!(f, "Type 1B"),
        }
    }
}

/// max/avg drift comparison for one pair of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrregularityCheck {
    pub level: String,
    pub load_case: String,
    pub direction: Axis,
    pub node_a: String,
    pub node_b: String,
    pub drift_a: f64,
    pub drift_b: f64,
    pub average: f64,
    pub maximum: f64,
    pub status: IrregularityStatus,
}

/// Classify one pair of drifts.
///
/// `OK` when max ≤ 1a·avg, `Type 1A` when max ≤ 1b·avg, else `Type 1B`.
/// The comparisons allow `settings.numeric_tolerance` relative slack so that
/// exact boundary cases stay on the lower side.
pub fn classify_pair(drift_a: f64, drift_b: f64, settings: &AnalysisSettings) -> IrregularityStatus {
    let average = (drift_a + drift_b) / 2.0;
    let maximum = drift_a.max(drift_b);
    let within = |ratio: f64| {
        let limit = ratio * average;
        maximum <= limit + settings.numeric_tolerance * limit.abs()
    };

    if within(settings.irregularity_1a_ratio) {
        IrregularityStatus::Ok
    } else if within(settings.irregularity_1b_ratio) {
        IrregularityStatus::Type1A
    } else {
        IrregularityStatus::Type1B
    }
}

/// Second pass: story drift of every tracked point.
///
/// `levels` must be ordered bottom-to-top. Fails with `NotFound` when an
/// elevated point has no candidate below with the same load case and
/// direction, and with `InvalidInput` for a non-positive story height.
pub fn compute_drifts(levels: &[LevelDisplacements]) -> LateralResult<Vec<DriftPoint>> {
    let mut drifts = Vec::new();

    for (index, level) in levels.iter().enumerate() {
        if !(level.story_height > 0.0 && level.story_height.is_finite()) {
            return Err(LateralError::invalid_input(
                format!("{}.story_height", level.level),
                level.story_height.to_string(),
                "Story height must be positive",
            ));
        }
        let below_level = index.checked_sub(1).map(|i| &levels[i]);

        for point in &level.points {
            let below = match below_level {
                None => None,
                Some(below_level) => Some(match_below(point, below_level)?),
            };
            let below_displacement = below.as_ref().map_or(0.0, |m| m.displacement);

            drifts.push(DriftPoint {
                level: point.level.clone(),
                node: point.node.clone(),
                location: point.location,
                direction: point.direction,
                load_case: point.load_case.clone(),
                displacement: point.displacement,
                below,
                story_height: level.story_height,
                drift: (point.displacement - below_displacement).abs() / level.story_height,
            });
        }
    }

    Ok(drifts)
}

/// Nearest point below sharing load case and direction
fn match_below(point: &DisplacementPoint, below: &LevelDisplacements) -> LateralResult<MatchedPoint> {
    below
        .points
        .iter()
        .filter(|p| p.load_case == point.load_case && p.direction == point.direction)
        .min_by(|a, b| {
            let da = a.location.distance_to(point.location);
            let db = b.location.distance_to(point.location);
            da.total_cmp(&db)
        })
        .map(|p| MatchedPoint {
            node: p.node.clone(),
            location: p.location,
            displacement: p.displacement,
        })
        .ok_or_else(|| {
            LateralError::not_found(
                "Drift point below",
                format!("{} / {} / {}", below.level, point.load_case, point.direction),
            )
        })
}

/// Torsional irregularity checks for every pair of points sharing level,
/// load case and direction.
///
/// Drift points whose load case does not act predominantly in the drift's
/// direction are dropped before pairing. A drift point naming a load case
/// missing from `load_cases` fails with `NotFound`.
pub fn check_torsional_irregularity(
    drifts: &[DriftPoint],
    load_cases: &[LoadCase],
    settings: &AnalysisSettings,
) -> LateralResult<Vec<IrregularityCheck>> {
    let directions: HashMap<&str, PredominantDirection> =
        load_cases.iter().map(|lc| (lc.name(), lc.direction())).collect();

    let mut order: Vec<(&str, &str, Axis)> = Vec::new();
    let mut groups: HashMap<(&str, &str, Axis), Vec<&DriftPoint>> = HashMap::new();

    for drift in drifts {
        let direction = directions
            .get(drift.load_case.as_str())
            .ok_or_else(|| LateralError::not_found("Load case", &drift.load_case))?;
        if !direction.includes(drift.direction) {
            continue;
        }
        let key = (drift.level.as_str(), drift.load_case.as_str(), drift.direction);
        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(drift);
    }

    let mut checks = Vec::new();
    for key in order {
        let points = &groups[&key];
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                checks.push(IrregularityCheck {
                    level: a.level.clone(),
                    load_case: a.load_case.clone(),
                    direction: a.direction,
                    node_a: a.node.clone(),
                    node_b: b.node.clone(),
                    drift_a: a.drift,
                    drift_b: b.drift,
                    average: (a.drift + b.drift) / 2.0,
                    maximum: a.drift.max(b.drift),
                    status: classify_pair(a.drift, b.drift, settings),
                });
            }
        }
    }

    let irregular = checks.iter().filter(|c| c.status != IrregularityStatus::Ok).count();
    if irregular > 0 {
        tracing::warn!(irregular, total = checks.len(), "torsional irregularity detected");
    }
    Ok(checks)
}
