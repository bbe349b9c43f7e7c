//! # Force Distribution
//!
//! Distributes one load pattern's story forces to the walls of a solved
//! [`RigidDiaphragm`] and computes rigid-body displacements of plan points.
//!
//! ## Formulas
//!
//! ```text
//! DirectShear_i    = s_x · (Kx_i / ΣKx) · |Fx|  +  s_y · (Ky_i / ΣKy) · |Fy|
//!                    s = +1 when the force component is within 90° of the
//!                    wall direction, -1 otherwise
//! TorsionalShear_i = K_i · offset_i · M / J
//! θ                = M / J
//! Ux               = Fx / ΣKx + d·θ·sin α
//! Uy               = Fy / ΣKy + d·θ·cos α
//! ```
//!
//! where `M` is the pattern's torsion about the center of rigidity, `d` the
//! distance from the point to the center of rigidity and `α` the angle from
//! the (point − CR) vector to the global X-axis. Seismic displacements are
//! amplified by Cd/Ie before they are returned.

use serde::Serialize;

use crate::errors::{LateralError, LateralResult};
use crate::geometry::Point2;
use crate::loads::{AppliedLoad, PatternCatalog};
use crate::responses::{NodalDisplacement, WallReaction, WallShear};
use crate::rigidity::{PlacedWall, RigidDiaphragm};
use crate::settings::AnalysisSettings;

/// Eccentricity between center of mass and center of rigidity for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Eccentricity {
    /// CM.x − CR.x (in)
    pub ex: f64,
    /// CM.y − CR.y (in)
    pub ey: f64,
    /// Torsion from the direct forces acting at the center of mass (kip·in)
    pub inherent_torsion: f64,
    /// Accidental torsion carried by the pattern (kip·in)
    pub accidental_torsion: f64,
}

/// Distributes applied loads over one diaphragm.
#[derive(Debug, Clone, Copy)]
pub struct ForceDistributor<'a> {
    diaphragm: &'a RigidDiaphragm,
    catalog: &'a PatternCatalog,
    settings: &'a AnalysisSettings,
}

impl<'a> ForceDistributor<'a> {
    pub fn new(diaphragm: &'a RigidDiaphragm, catalog: &'a PatternCatalog, settings: &'a AnalysisSettings) -> Self {
        ForceDistributor {
            diaphragm,
            catalog,
            settings,
        }
    }

    pub fn diaphragm(&self) -> &RigidDiaphragm {
        self.diaphragm
    }

    /// Total torsion about the center of rigidity, counterclockwise positive
    pub fn torsion(&self, load: &AppliedLoad) -> f64 {
        load.torsion_about(self.diaphragm.center())
    }

    /// Diaphragm rotation θ = M / J (rad, unamplified)
    pub fn rotation(&self, load: &AppliedLoad) -> LateralResult<f64> {
        let torsion = self.torsion(load);
        let j = self.diaphragm.torsional_stiffness();
        if j > 0.0 {
            return Ok(torsion / j);
        }
        if torsion.abs() <= self.settings.numeric_tolerance {
            return Ok(0.0);
        }
        Err(LateralError::degenerate_torsional_stiffness(self.diaphragm.level()))
    }

    /// Stiffness-proportional share of the direct force, signed by alignment
    pub fn direct_shear(&self, placed: &PlacedWall, load: &AppliedLoad) -> f64 {
        let wall = &placed.wall;
        let unit = wall.unit_vector();

        let x_share = wall.kx() / self.diaphragm.kx();
        let y_share = wall.ky() / self.diaphragm.ky();

        let x = alignment_sign(Point2::new(load.fx, 0.0), unit) * x_share * load.fx.abs();
        let y = alignment_sign(Point2::new(0.0, load.fy), unit) * y_share * load.fy.abs();
        x + y
    }

    /// Shear from diaphragm rotation: K·offset·M / J
    pub fn torsional_shear(&self, placed: &PlacedWall, load: &AppliedLoad) -> LateralResult<f64> {
        let theta = self.rotation(load)?;
        Ok(placed.wall.stiffness * placed.offset * theta)
    }

    /// Direct and torsional shear in one wall
    pub fn wall_shear(&self, placed: &PlacedWall, load: &AppliedLoad) -> LateralResult<WallShear> {
        Ok(WallShear {
            direct: self.direct_shear(placed, load),
            torsional: self.torsional_shear(placed, load)?,
        })
    }

    /// Shear for every wall, in diaphragm order
    pub fn distribute(&self, load: &AppliedLoad) -> LateralResult<Vec<(&'a PlacedWall, WallShear)>> {
        let diaphragm: &'a RigidDiaphragm = self.diaphragm;
        diaphragm
            .walls()
            .iter()
            .map(|placed| Ok((placed, self.wall_shear(placed, load)?)))
            .collect()
    }

    /// Rigid-body displacement of `point`, amplified for seismic patterns
    pub fn displacement_at(&self, load: &AppliedLoad, point: Point2) -> LateralResult<NodalDisplacement> {
        let theta = self.rotation(load)?;
        let r = self.diaphragm.center().to(point);
        let d = r.length();
        let alpha = -r.angle();

        let elastic = NodalDisplacement {
            ux: load.fx / self.diaphragm.kx() + d * theta * alpha.sin(),
            uy: load.fy / self.diaphragm.ky() + d * theta * alpha.cos(),
            rotation: theta,
        };

        let category = self.catalog.category(&load.load_pattern)?;
        if category.amplifies_deflection() {
            let scale = self.settings.seismic_displacement_scale();
            Ok(NodalDisplacement {
                ux: elastic.ux * scale,
                uy: elastic.uy * scale,
                rotation: elastic.rotation * scale,
            })
        } else {
            Ok(elastic)
        }
    }

    /// CM-to-CR eccentricity and the torsion split for a pattern
    pub fn eccentricity(&self, load: &AppliedLoad, center_of_mass: Point2) -> Eccentricity {
        let e = self.diaphragm.center().to(center_of_mass);
        Eccentricity {
            ex: e.x,
            ey: e.y,
            inherent_torsion: -e.y * load.fx + e.x * load.fy,
            accidental_torsion: load.accidental_torsion,
        }
    }
}

/// Total shear resolved along the wall direction, plus shear per unit length
pub fn wall_reaction(placed: &PlacedWall, shear: &WallShear) -> WallReaction {
    let unit = placed.wall.unit_vector();
    let total = shear.total();
    let length = placed.wall.length();
    WallReaction {
        fx: total * unit.x,
        fy: total * unit.y,
        unit_shear: if length > 0.0 { total / length } else { 0.0 },
    }
}

/// +1 when the angle between `force` and `unit` is under 90°, -1 when over,
/// 0 when perpendicular or when there is no force
fn alignment_sign(force: Point2, unit: Point2) -> f64 {
    let dot = force.dot(unit);
    if dot > 0.0 {
        1.0
    } else if dot < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::catalog::{SEISMIC_X_POS, SEISMIC_Y_POS, WIND_X};
    use crate::wall::WallPanel;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn diaphragm() -> RigidDiaphragm {
        RigidDiaphragm::solve(
            "L2",
            vec![
                WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, 240.0), 100.0),
                WallPanel::new("B", Point2::new(360.0, 0.0), Point2::new(360.0, 240.0), 150.0),
                WallPanel::new("C", Point2::new(0.0, 0.0), Point2::new(360.0, 0.0), 80.0),
                WallPanel::new("D", Point2::new(0.0, 240.0), Point2::new(360.0, 240.0), 120.0),
            ],
        )
        .unwrap()
    }

    fn x_load() -> AppliedLoad {
        AppliedLoad::new(SEISMIC_X_POS, 40.0, 0.0, Point2::new(180.0, 120.0))
    }

    #[test]
    fn test_torsion_about_center() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);
        assert_relative_eq!(dist.torsion(&x_load()), 960.0, max_relative = 1e-12);
    }

    #[test]
    fn test_direct_shear_split_by_stiffness() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);
        let shears = dist.distribute(&x_load()).unwrap();

        let direct: Vec<f64> = shears.iter().map(|(_, s)| s.direct).collect();
        assert_abs_diff_eq!(direct[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(direct[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(direct[2], 16.0, max_relative = 1e-12);
        assert_relative_eq!(direct[3], 24.0, max_relative = 1e-12);
    }

    #[test]
    fn test_direct_shear_reverses_with_force() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);
        let load = AppliedLoad::new(SEISMIC_X_POS, -40.0, 0.0, Point2::new(216.0, 144.0));
        let c = d.wall("C").unwrap();
        assert_relative_eq!(dist.direct_shear(c, &load), -16.0, max_relative = 1e-12);
    }

    #[test]
    fn test_torque_conservation() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);
        let load = x_load().with_accidental_torsion(-300.0);

        let resisted: f64 = dist
            .distribute(&load)
            .unwrap()
            .iter()
            .map(|(placed, shear)| shear.torsional * placed.offset)
            .sum();
        assert_relative_eq!(resisted, dist.torsion(&load), max_relative = 1e-12);
    }

    #[test]
    fn test_direct_shear_sums_to_force() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);
        let load = AppliedLoad::new(SEISMIC_Y_POS, 0.0, 25.0, Point2::new(180.0, 120.0));
        let total: f64 = dist.distribute(&load).unwrap().iter().map(|(_, s)| s.direct).sum();
        assert_relative_eq!(total, 25.0, max_relative = 1e-12);
    }

    #[test]
    fn test_displacement_translation_and_rotation() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);

        let load = AppliedLoad::new(WIND_X, 40.0, 0.0, Point2::new(180.0, 120.0));
        let theta = 960.0 / 10_540_800.0;

        // Corner (360, 240): r = (144, 96)
        let u = dist.displacement_at(&load, Point2::new(360.0, 240.0)).unwrap();
        assert_relative_eq!(u.ux, 40.0 / 200.0 - 96.0 * theta, max_relative = 1e-9);
        assert_relative_eq!(u.uy, 144.0 * theta, max_relative = 1e-9);
        assert_relative_eq!(u.rotation, theta, max_relative = 1e-12);

        // At the center of rigidity only translation remains
        let at_cr = dist.displacement_at(&load, d.center()).unwrap();
        assert_relative_eq!(at_cr.ux, 0.2, max_relative = 1e-12);
        assert_abs_diff_eq!(at_cr.uy, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_seismic_displacement_amplified() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings {
            deflection_amplification: 5.0,
            ..Default::default()
        };
        let dist = ForceDistributor::new(&d, &catalog, &settings);

        let seismic = dist.displacement_at(&x_load(), d.center()).unwrap();
        let mut wind_load = x_load();
        wind_load.load_pattern = WIND_X.to_string();
        let wind = dist.displacement_at(&wind_load, d.center()).unwrap();
        assert_relative_eq!(seismic.ux, 5.0 * wind.ux, max_relative = 1e-12);
    }

    #[test]
    fn test_unknown_pattern_displacement() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);
        let load = AppliedLoad::new("Nope", 1.0, 0.0, Point2::ORIGIN);
        assert!(dist.displacement_at(&load, Point2::ORIGIN).is_err());
    }

    #[test]
    fn test_zero_torsional_stiffness() {
        // Two walls crossing at one point: CR sits on both lines, J = 0
        let d = RigidDiaphragm::solve(
            "X",
            vec![
                WallPanel::new("H", Point2::new(-10.0, 0.0), Point2::new(10.0, 0.0), 50.0),
                WallPanel::new("V", Point2::new(0.0, -10.0), Point2::new(0.0, 10.0), 50.0),
            ],
        )
        .unwrap();
        assert_eq!(d.torsional_stiffness(), 0.0);

        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);

        let centered = AppliedLoad::new(WIND_X, 10.0, 0.0, Point2::ORIGIN);
        assert_eq!(dist.rotation(&centered).unwrap(), 0.0);

        let eccentric = AppliedLoad::new(WIND_X, 10.0, 0.0, Point2::new(0.0, 5.0));
        assert_eq!(
            dist.rotation(&eccentric).unwrap_err().error_code(),
            "DEGENERATE_TORSIONAL_STIFFNESS"
        );
    }

    #[test]
    fn test_wall_reaction() {
        let d = diaphragm();
        let a = d.wall("A").unwrap();
        let reaction = wall_reaction(a, &WallShear { direct: 10.0, torsional: 2.0 });
        assert_abs_diff_eq!(reaction.fx, 0.0, epsilon = 1e-12);
        assert_relative_eq!(reaction.fy, 12.0);
        assert_relative_eq!(reaction.unit_shear, 12.0 / 240.0);
    }

    #[test]
    fn test_eccentricity() {
        let d = diaphragm();
        let catalog = PatternCatalog::standard();
        let settings = AnalysisSettings::default();
        let dist = ForceDistributor::new(&d, &catalog, &settings);
        let e = dist.eccentricity(&x_load(), Point2::new(180.0, 120.0));
        assert_relative_eq!(e.ex, -36.0);
        assert_relative_eq!(e.ey, -24.0);
        assert_relative_eq!(e.inherent_torsion, 960.0);
    }
}
