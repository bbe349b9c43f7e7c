//! # lateral_core - Rigid-Diaphragm Lateral Analysis Engine
//!
//! `lateral_core` distributes story forces on a rigid diaphragm to the shear
//! walls below it, superposes per-pattern responses into load cases, and checks
//! story drift and torsional irregularity. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Staged**: stiffness, center of rigidity and torsional stiffness are
//!   separate types, each built from the one before
//! - **JSON-First**: model and result types implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Linear**: every response is superposable by load factor
//!
//! ## Quick Start
//!
//! ```rust
//! use lateral_core::geometry::Point2;
//! use lateral_core::rigidity::RigidDiaphragm;
//! use lateral_core::wall::WallPanel;
//!
//! let walls = vec![
//!     WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, 240.0), 100.0),
//!     WallPanel::new("B", Point2::new(360.0, 0.0), Point2::new(360.0, 240.0), 150.0),
//!     WallPanel::new("C", Point2::new(0.0, 0.0), Point2::new(360.0, 0.0), 80.0),
//!     WallPanel::new("D", Point2::new(0.0, 240.0), Point2::new(360.0, 240.0), 120.0),
//! ];
//! let diaphragm = RigidDiaphragm::solve("L2", walls)?;
//! assert!(diaphragm.center().approx_eq(Point2::new(216.0, 144.0), 1e-9));
//! # Ok::<(), lateral_core::LateralError>(())
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Points, segments, plan extents and polygon helpers
//! - [`level`] - Diaphragm levels and story heights
//! - [`wall`] - Shear wall panels
//! - [`loads`] - Load patterns, load cases and applied story forces
//! - [`rigidity`] - Staged stiffness → center of rigidity → torsional stiffness
//! - [`distribution`] - Direct and torsional wall shear, diaphragm displacement
//! - [`superposition`] - Generic load-case superposition and envelopes
//! - [`responses`] - Wall shear, wall reaction and nodal displacement payloads
//! - [`drift`] - Story drift and torsional irregularity
//! - [`analysis`] - Per-level and whole-building pipeline
//! - [`settings`] - Code factors and tolerances
//! - [`project`] - Project container and metadata
//! - [`file_io`] - File operations with atomic saves
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod distribution;
pub mod drift;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod level;
pub mod loads;
pub mod project;
pub mod responses;
pub mod rigidity;
pub mod settings;
pub mod superposition;
pub mod wall;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze_building, BuildingAnalysis, BuildingModel, LevelAnalysis, LevelModel};
pub use errors::{LateralError, LateralResult};
pub use file_io::{load_project, save_project};
pub use project::{Project, ProjectMetadata};
pub use settings::AnalysisSettings;
