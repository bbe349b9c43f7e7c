//! # Response Superposition
//!
//! Per-load-pattern responses are combined into per-load-case responses by
//! linear superposition, then reduced across load cases into design
//! envelopes. Everything here is generic over any payload implementing
//! [`Superimposable`]; the payload only decides how its own fields scale and
//! add.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::loads::{LoadCaseDef, PatternCatalog, PredominantDirection};
//! use lateral_core::responses::WallShear;
//! use lateral_core::superposition::ResponseCollection;
//!
//! let catalog = PatternCatalog::standard();
//! let case = LoadCaseDef::new("0.7E X+", PredominantDirection::X)
//!     .with_factor("Seismic X +Ecc", 0.7)
//!     .build(&catalog)
//!     .unwrap();
//!
//! let mut shears = ResponseCollection::new("W1");
//! shears.push("Seismic X +Ecc", WallShear { direct: 10.0, torsional: 2.0 }).unwrap();
//! shears.push("Seismic Y +Ecc", WallShear { direct: 0.0, torsional: 5.0 }).unwrap();
//!
//! let result = shears.superimpose_at(&case);
//! assert_eq!(result.load_case, "0.7E X+");
//! assert!((result.response.total() - 8.4).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{LateralError, LateralResult};
use crate::loads::LoadCase;

/// A response payload that combines linearly.
///
/// Implementations must satisfy, field by field:
/// `a.apply_load_factor(p).superimpose(&b.apply_load_factor(q)) == p·a + q·b`,
/// with `Default` as the additive zero.
pub trait Superimposable: Clone + Default {
    /// Scale every numeric field by `factor`
    fn apply_load_factor(&self, factor: f64) -> Self;

    /// Add `other` field by field
    fn superimpose(&self, other: &Self) -> Self;

    /// Combine two payloads field by field with `op`; used by the envelopes
    fn zip_fields(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self;
}

/// One load pattern's response for an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternResponse<T> {
    pub load_pattern: String,
    pub response: T,
}

/// A response superposed for one load case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Superposed<T> {
    pub load_case: String,
    pub response: T,
}

/// Separate running minimum and maximum per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxEnvelope<T> {
    pub min: T,
    pub max: T,
}

/// All per-pattern responses of one element, at most one per load pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCollection<T> {
    element: String,
    entries: Vec<PatternResponse<T>>,
}

impl<T: Superimposable> ResponseCollection<T> {
    /// Empty collection for an element (wall id, node id, ...)
    pub fn new(element: impl Into<String>) -> Self {
        ResponseCollection {
            element: element.into(),
            entries: Vec::new(),
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a pattern response; a second entry for the same pattern is rejected
    pub fn push(&mut self, load_pattern: impl Into<String>, response: T) -> LateralResult<()> {
        let load_pattern = load_pattern.into();
        if self.entries.iter().any(|e| e.load_pattern == load_pattern) {
            return Err(LateralError::duplicate_load_pattern(&self.element, load_pattern));
        }
        self.entries.push(PatternResponse { load_pattern, response });
        Ok(())
    }

    /// Response for a single pattern
    pub fn get(&self, load_pattern: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.load_pattern == load_pattern)
            .map(|e| &e.response)
    }

    pub fn entries(&self) -> &[PatternResponse<T>] {
        &self.entries
    }

    pub fn load_patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.load_pattern.as_str())
    }

    /// Superpose the factored pattern responses of one load case.
    ///
    /// Patterns not in the load case are skipped; an empty collection yields
    /// the zero response.
    pub fn superimpose_at(&self, load_case: &LoadCase) -> Superposed<T> {
        let response = self.entries.iter().fold(T::default(), |acc, entry| {
            match load_case.factor(&entry.load_pattern) {
                Some(factor) => acc.superimpose(&entry.response.apply_load_factor(factor)),
                None => acc,
            }
        });
        Superposed {
            load_case: load_case.name().to_string(),
            response,
        }
    }

    /// Superposed response for every load case, in order
    pub fn superimpose_all(&self, load_cases: &[LoadCase]) -> Vec<Superposed<T>> {
        load_cases.iter().map(|lc| self.superimpose_at(lc)).collect()
    }

    /// Per field, the superposed value of greatest magnitude across the load
    /// cases, sign preserved. The first case wins ties. Zero when
    /// `load_cases` is empty.
    pub fn envelope_absolute(&self, load_cases: &[LoadCase]) -> T {
        self.reduce(load_cases, |current, candidate| {
            if candidate.abs() > current.abs() {
                candidate
            } else {
                current
            }
        })
    }

    /// Per field, the running minimum and running maximum across the load
    /// cases. Both are zero when `load_cases` is empty.
    pub fn envelope_min_max(&self, load_cases: &[LoadCase]) -> MinMaxEnvelope<T> {
        MinMaxEnvelope {
            min: self.reduce(load_cases, f64::min),
            max: self.reduce(load_cases, f64::max),
        }
    }

    fn reduce(&self, load_cases: &[LoadCase], op: impl Fn(f64, f64) -> f64 + Copy) -> T {
        load_cases
            .iter()
            .map(|lc| self.superimpose_at(lc).response)
            .reduce(|acc, next| acc.zip_fields(&next, op))
            .unwrap_or_default()
    }
}
