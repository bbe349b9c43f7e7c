//! # Analysis Pipeline
//!
//! Orchestrates the per-level pipeline and the building-wide drift pass.
//!
//! ```text
//! LevelModel ──► RigidDiaphragm::solve ──► ForceDistributor ──► LevelAnalysis
//!                                                                   │
//!                 (all levels, in parallel)                         ▼
//!         BuildingAnalysis ◄── check_torsional_irregularity ◄── compute_drifts
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::analysis::{analyze_building, BuildingModel, LevelModel};
//! use lateral_core::geometry::Point2;
//! use lateral_core::level::Level;
//! use lateral_core::loads::catalog::SEISMIC_X_POS;
//! use lateral_core::loads::{seismic_load_cases, AppliedLoad, PatternCatalog};
//! use lateral_core::settings::AnalysisSettings;
//! use lateral_core::wall::WallPanel;
//!
//! let boundary = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(360.0, 0.0),
//!     Point2::new(360.0, 240.0),
//!     Point2::new(0.0, 240.0),
//! ];
//! let level = LevelModel {
//!     level: Level::new("L2", boundary).with_story_height(120.0),
//!     walls: vec![
//!         WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, 240.0), 100.0),
//!         WallPanel::new("B", Point2::new(360.0, 0.0), Point2::new(360.0, 240.0), 150.0),
//!         WallPanel::new("C", Point2::new(0.0, 0.0), Point2::new(360.0, 0.0), 80.0),
//!         WallPanel::new("D", Point2::new(0.0, 240.0), Point2::new(360.0, 240.0), 120.0),
//!     ],
//!     loads: vec![AppliedLoad::new(SEISMIC_X_POS, 40.0, 0.0, Point2::new(180.0, 120.0))],
//! };
//!
//! let catalog = PatternCatalog::standard();
//! let cases = vec![seismic_load_cases(0.7)[0].clone().build(&catalog)?];
//! let results = analyze_building(
//!     &BuildingModel::new(vec![level]),
//!     &cases,
//!     &catalog,
//!     &AnalysisSettings::default(),
//! )?;
//! assert_eq!(results.levels.len(), 1);
//! # Ok::<(), lateral_core::LateralError>(())
//! ```

pub mod building;
pub mod level;

pub use building::{analyze_building, BuildingAnalysis, BuildingModel};
pub use level::{LevelAnalysis, LevelModel, PatternEccentricity, TrackedNode, WallDesignSummary};
