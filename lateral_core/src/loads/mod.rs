//! Load patterns, load cases and applied story forces
//!
//! # Overview
//!
//! - [`LoadPatternCategory`] - ASCE 7 categories (D, L, W, E, ...)
//! - [`PatternCatalog`] - read-only pattern name → category table
//! - [`LoadCaseDef`] / [`LoadCase`] - factored pattern combinations
//! - [`AppliedLoad`] - one pattern's direct forces and torsion at a level
//!
//! # Example
//!
//! ```
//! use lateral_core::geometry::Point2;
//! use lateral_core::loads::{AppliedLoad, PatternCatalog, seismic_load_cases};
//!
//! let catalog = PatternCatalog::standard();
//! let cases: Vec<_> = seismic_load_cases(0.7)
//!     .into_iter()
//!     .map(|def| def.build(&catalog))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(cases.len(), 12);
//!
//! let story_force = AppliedLoad::new("Seismic X +Ecc", 40.0, 0.0, Point2::new(180.0, 120.0));
//! assert_eq!(story_force.torsion_about(Point2::new(180.0, 120.0)), 0.0);
//! ```

pub mod applied;
pub mod catalog;
pub mod combinations;
pub mod load_types;

pub use applied::AppliedLoad;
pub use catalog::{LoadPattern, PatternCatalog};
pub use combinations::{
    seismic_load_cases,
    wind_load_cases,
    LoadCase,
    LoadCaseDef,
    PredominantDirection,
};
pub use load_types::LoadPatternCategory;
