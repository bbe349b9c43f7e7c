//! Load pattern catalog
//!
//! A read-only table mapping load-pattern names to their category. It is
//! built once (from the standard set or a project file) and then shared by
//! reference or `Arc` with every component that needs to classify a pattern.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::load_types::LoadPatternCategory;
use crate::errors::{LateralError, LateralResult};

/// Seismic, X direction, center of mass shifted +5%
pub const SEISMIC_X_POS: &str = "Seismic X +Ecc";
/// Seismic, X direction, center of mass shifted -5%
pub const SEISMIC_X_NEG: &str = "Seismic X -Ecc";
/// Seismic, Y direction, center of mass shifted +5%
pub const SEISMIC_Y_POS: &str = "Seismic Y +Ecc";
/// Seismic, Y direction, center of mass shifted -5%
pub const SEISMIC_Y_NEG: &str = "Seismic Y -Ecc";
/// Wind along X
pub const WIND_X: &str = "Wind X";
/// Wind along Y
pub const WIND_Y: &str = "Wind Y";

/// A named load pattern and its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadPattern {
    pub name: String,
    pub category: LoadPatternCategory,
}

impl LoadPattern {
    pub fn new(name: impl Into<String>, category: LoadPatternCategory) -> Self {
        LoadPattern {
            name: name.into(),
            category,
        }
    }
}

/// Immutable load pattern → category lookup table.
///
/// # Example
/// ```
/// use lateral_core::loads::{LoadPattern, LoadPatternCategory, PatternCatalog};
///
/// let catalog = PatternCatalog::from_patterns(vec![
///     LoadPattern::new("EQ-X", LoadPatternCategory::Seismic),
///     LoadPattern::new("W-X", LoadPatternCategory::Wind),
/// ]).unwrap();
///
/// assert_eq!(catalog.category("EQ-X").unwrap(), LoadPatternCategory::Seismic);
/// assert!(catalog.category("Snow").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternCatalog {
    categories: HashMap<String, LoadPatternCategory>,
}

static STANDARD: Lazy<Arc<PatternCatalog>> = Lazy::new(|| {
    let patterns = [
        (SEISMIC_X_POS, LoadPatternCategory::Seismic),
        (SEISMIC_X_NEG, LoadPatternCategory::Seismic),
        (SEISMIC_Y_POS, LoadPatternCategory::Seismic),
        (SEISMIC_Y_NEG, LoadPatternCategory::Seismic),
        (WIND_X, LoadPatternCategory::Wind),
        (WIND_Y, LoadPatternCategory::Wind),
    ];
    Arc::new(PatternCatalog {
        categories: patterns
            .into_iter()
            .map(|(name, category)| (name.to_string(), category))
            .collect(),
    })
});

impl PatternCatalog {
    /// Shared catalog of the standard directional seismic and wind patterns
    pub fn standard() -> Arc<PatternCatalog> {
        Arc::clone(&STANDARD)
    }

    /// Build a catalog, rejecting a name registered under two categories
    pub fn from_patterns(patterns: impl IntoIterator<Item = LoadPattern>) -> LateralResult<Self> {
        let mut categories = HashMap::new();
        for pattern in patterns {
            if let Some(existing) = categories.insert(pattern.name.clone(), pattern.category) {
                if existing != pattern.category {
                    return Err(LateralError::invalid_input(
                        "load_patterns",
                        pattern.name,
                        format!("Registered as both {} and {}", existing, pattern.category),
                    ));
                }
            }
        }
        Ok(PatternCatalog { categories })
    }

    /// Category of a pattern
    pub fn category(&self, load_pattern: &str) -> LateralResult<LoadPatternCategory> {
        self.categories
            .get(load_pattern)
            .copied()
            .ok_or_else(|| LateralError::unknown_load_pattern(load_pattern))
    }

    pub fn contains(&self, load_pattern: &str) -> bool {
        self.categories.contains_key(load_pattern)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// All patterns, sorted by name
    pub fn patterns(&self) -> Vec<LoadPattern> {
        let mut patterns: Vec<_> = self
            .categories
            .iter()
            .map(|(name, category)| LoadPattern::new(name.clone(), *category))
            .collect();
        patterns.sort_by(|a, b| a.name.cmp(&b.name));
        patterns
    }
}
