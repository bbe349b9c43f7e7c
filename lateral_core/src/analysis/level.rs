//! Per-level pipeline: stiffness → center of rigidity → torsional stiffness →
//! per-pattern responses.
//!
//! A [`LevelAnalysis`] owns the solved diaphragm and one response collection
//! per wall and per tracked node. Superposition and envelopes are computed
//! from it on demand for any set of load cases.

use serde::{Deserialize, Serialize};

use crate::distribution::{wall_reaction, Eccentricity, ForceDistributor};
use crate::drift::{DisplacementPoint, LevelDisplacements};
use crate::errors::{LateralError, LateralResult};
use crate::geometry::{self, Axis, Point2};
use crate::level::Level;
use crate::loads::{AppliedLoad, LoadCase, PatternCatalog};
use crate::responses::{NodalDisplacement, WallReaction, WallShear};
use crate::rigidity::RigidDiaphragm;
use crate::settings::AnalysisSettings;
use crate::superposition::{MinMaxEnvelope, ResponseCollection};
use crate::wall::WallPanel;

/// Everything the core needs to analyze one level.
///
/// ## JSON Example
///
/// ```json
/// {
///   "level": {"name": "L2", "boundary": [...], "story_height": 120.0},
///   "walls": [{"id": "A", "line": {...}, "stiffness": 100.0}],
///   "loads": [{"load_pattern": "Seismic X +Ecc", "fx": 40.0, "point_of_application": {...}}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelModel {
    pub level: Level,
    pub walls: Vec<WallPanel>,
    #[serde(default)]
    pub loads: Vec<AppliedLoad>,
}

/// A plan-extreme boundary vertex whose displacement is tracked for drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedNode {
    pub id: String,
    pub location: Point2,
}

/// Eccentricity of one load pattern at a level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternEccentricity {
    pub load_pattern: String,
    /// Total torsion about the center of rigidity (kip·in)
    pub torsion: f64,
    pub eccentricity: Eccentricity,
}

/// Enveloped wall results across a set of load cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallDesignSummary {
    pub wall: String,
    /// Signed offset from the center of rigidity (in)
    pub offset: f64,
    /// Largest-magnitude direct and torsional shear, per field
    pub shear: WallShear,
    /// Running min/max of the shear fields
    pub shear_range: MinMaxEnvelope<WallShear>,
    /// Largest-magnitude reaction components and unit shear
    pub reaction: WallReaction,
}

/// A level with all per-pattern responses computed.
#[derive(Debug, Clone, Serialize)]
pub struct LevelAnalysis {
    level: Level,
    diaphragm: RigidDiaphragm,
    nodes: Vec<TrackedNode>,
    eccentricities: Vec<PatternEccentricity>,
    wall_shears: Vec<ResponseCollection<WallShear>>,
    wall_reactions: Vec<ResponseCollection<WallReaction>>,
    node_displacements: Vec<ResponseCollection<NodalDisplacement>>,
}

impl LevelAnalysis {
    /// Solve the diaphragm and distribute every applied load pattern.
    pub fn run(model: &LevelModel, catalog: &PatternCatalog, settings: &AnalysisSettings) -> LateralResult<Self> {
        let level = &model.level;
        level.validate()?;

        let diaphragm = RigidDiaphragm::solve(&level.name, model.walls.clone())?;
        let distributor = ForceDistributor::new(&diaphragm, catalog, settings);
        let center_of_mass = level.center_of_mass()?;

        let nodes: Vec<TrackedNode> = geometry::extreme_vertices(&level.boundary, settings.point_tolerance)
            .into_iter()
            .enumerate()
            .map(|(i, location)| TrackedNode {
                id: format!("{}:N{}", level.name, i + 1),
                location,
            })
            .collect();

        let mut wall_shears: Vec<_> = diaphragm
            .walls()
            .iter()
            .map(|w| ResponseCollection::new(&w.wall.id))
            .collect();
        let mut wall_reactions: Vec<_> = diaphragm
            .walls()
            .iter()
            .map(|w| ResponseCollection::new(&w.wall.id))
            .collect();
        let mut node_displacements: Vec<_> = nodes.iter().map(|n| ResponseCollection::new(&n.id)).collect();
        let mut eccentricities = Vec::with_capacity(model.loads.len());

        for load in &model.loads {
            load.validate()?;
            let category = catalog.category(&load.load_pattern)?;
            if !category.is_lateral() {
                return Err(LateralError::invalid_input(
                    format!("{}.loads", level.name),
                    &load.load_pattern,
                    format!("{} ({}) patterns are not lateral story forces", category, category.code()),
                ));
            }

            for (i, (placed, shear)) in distributor.distribute(load)?.into_iter().enumerate() {
                wall_shears[i].push(&load.load_pattern, shear)?;
                wall_reactions[i].push(&load.load_pattern, wall_reaction(placed, &shear))?;
            }
            for (node, collection) in nodes.iter().zip(node_displacements.iter_mut()) {
                collection.push(&load.load_pattern, distributor.displacement_at(load, node.location)?)?;
            }
            eccentricities.push(PatternEccentricity {
                load_pattern: load.load_pattern.clone(),
                torsion: distributor.torsion(load),
                eccentricity: distributor.eccentricity(load, center_of_mass),
            });
        }

        if model.loads.is_empty() {
            tracing::warn!(level = %level.name, "level has no applied loads");
        }
        tracing::info!(
            level = %level.name,
            walls = diaphragm.walls().len(),
            patterns = model.loads.len(),
            nodes = nodes.len(),
            "level analyzed"
        );

        Ok(LevelAnalysis {
            level: level.clone(),
            diaphragm,
            nodes,
            eccentricities,
            wall_shears,
            wall_reactions,
            node_displacements,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn diaphragm(&self) -> &RigidDiaphragm {
        &self.diaphragm
    }

    pub fn nodes(&self) -> &[TrackedNode] {
        &self.nodes
    }

    pub fn eccentricities(&self) -> &[PatternEccentricity] {
        &self.eccentricities
    }

    /// Per-pattern shears of a wall
    pub fn wall_shears(&self, wall_id: &str) -> LateralResult<&ResponseCollection<WallShear>> {
        self.wall_shears
            .iter()
            .find(|c| c.element() == wall_id)
            .ok_or_else(|| LateralError::not_found("Wall", wall_id))
    }

    /// Per-pattern reactions of a wall
    pub fn wall_reactions(&self, wall_id: &str) -> LateralResult<&ResponseCollection<WallReaction>> {
        self.wall_reactions
            .iter()
            .find(|c| c.element() == wall_id)
            .ok_or_else(|| LateralError::not_found("Wall", wall_id))
    }

    /// Per-pattern displacements of a tracked node
    pub fn node_displacements(&self, node_id: &str) -> LateralResult<&ResponseCollection<NodalDisplacement>> {
        self.node_displacements
            .iter()
            .find(|c| c.element() == node_id)
            .ok_or_else(|| LateralError::not_found("Node", node_id))
    }

    /// Envelopes of every wall across `load_cases`
    pub fn wall_summaries(&self, load_cases: &[LoadCase]) -> Vec<WallDesignSummary> {
        self.diaphragm
            .walls()
            .iter()
            .zip(self.wall_shears.iter().zip(&self.wall_reactions))
            .map(|(placed, (shears, reactions))| WallDesignSummary {
                wall: placed.wall.id.clone(),
                offset: placed.offset,
                shear: shears.envelope_absolute(load_cases),
                shear_range: shears.envelope_min_max(load_cases),
                reaction: reactions.envelope_absolute(load_cases),
            })
            .collect()
    }

    /// First drift pass: superposed displacement of every tracked node, per
    /// load case and axis
    pub fn displacement_points(&self, load_cases: &[LoadCase]) -> LateralResult<LevelDisplacements> {
        let story_height = self.level.story_height()?;
        let mut points = Vec::with_capacity(self.nodes.len() * load_cases.len() * 2);

        for (node, collection) in self.nodes.iter().zip(&self.node_displacements) {
            for superposed in collection.superimpose_all(load_cases) {
                for axis in Axis::ALL {
                    points.push(DisplacementPoint {
                        level: self.level.name.clone(),
                        node: node.id.clone(),
                        location: node.location,
                        direction: axis,
                        load_case: superposed.load_case.clone(),
                        displacement: superposed.response.along(axis),
                    });
                }
            }
        }

        Ok(LevelDisplacements {
            level: self.level.name.clone(),
            story_height,
            points,
        })
    }
}
