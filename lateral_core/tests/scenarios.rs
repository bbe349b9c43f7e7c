//! End-to-end scenarios through the public API.

use approx::assert_relative_eq;

use lateral_core::analysis::{analyze_building, BuildingModel, LevelModel};
use lateral_core::distribution::ForceDistributor;
use lateral_core::drift::{classify_pair, IrregularityStatus};
use lateral_core::geometry::{Axis, Point2};
use lateral_core::level::Level;
use lateral_core::loads::catalog::{SEISMIC_X_POS, SEISMIC_Y_POS};
use lateral_core::loads::{seismic_load_cases, AppliedLoad, LoadCase, LoadCaseDef, PatternCatalog, PredominantDirection};
use lateral_core::rigidity::{AxisStiffness, RigidDiaphragm};
use lateral_core::settings::AnalysisSettings;
use lateral_core::wall::WallPanel;
use lateral_core::{load_project, save_project, Project};

fn rectangle(width: f64, depth: f64) -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(width, 0.0),
        Point2::new(width, depth),
        Point2::new(0.0, depth),
    ]
}

fn box_walls(width: f64, depth: f64, k: [f64; 4]) -> Vec<WallPanel> {
    vec![
        WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(0.0, depth), k[0]),
        WallPanel::new("B", Point2::new(width, 0.0), Point2::new(width, depth), k[1]),
        WallPanel::new("C", Point2::new(0.0, 0.0), Point2::new(width, 0.0), k[2]),
        WallPanel::new("D", Point2::new(0.0, depth), Point2::new(width, depth), k[3]),
    ]
}

fn case(name: &str, direction: PredominantDirection, pattern: &str) -> LoadCase {
    LoadCaseDef::new(name, direction)
        .with_factor(pattern, 1.0)
        .build(&PatternCatalog::standard())
        .unwrap()
}

#[test]
fn stiffness_and_center_of_rigidity() {
    let stiffness = AxisStiffness::compute("L2", box_walls(360.0, 240.0, [100.0, 150.0, 80.0, 120.0])).unwrap();
    assert_relative_eq!(stiffness.kx(), 200.0, max_relative = 1e-9);
    assert_relative_eq!(stiffness.ky(), 250.0, max_relative = 1e-9);

    let center = stiffness.locate_center();
    assert!(center.center().approx_eq(Point2::new(216.0, 144.0), 1e-9));

    let diaphragm = center.into_diaphragm();
    assert_relative_eq!(diaphragm.torsional_stiffness(), 10_540_800.0, max_relative = 1e-12);
    let magnitudes: Vec<f64> = diaphragm.walls().iter().map(|w| w.offset.abs()).collect();
    for (actual, expected) in magnitudes.iter().zip([216.0, 144.0, 144.0, 96.0]) {
        assert_relative_eq!(*actual, expected, max_relative = 1e-12);
    }
}

#[test]
fn stiffness_is_conserved_for_skewed_walls() {
    let walls = vec![
        WallPanel::new("A", Point2::new(0.0, 0.0), Point2::new(100.0, 100.0), 70.0),
        WallPanel::new("B", Point2::new(300.0, 0.0), Point2::new(250.0, 200.0), 45.0),
        WallPanel::new("C", Point2::new(0.0, 200.0), Point2::new(300.0, 210.0), 90.0),
    ];
    let kx: f64 = walls.iter().map(WallPanel::kx).sum();
    let ky: f64 = walls.iter().map(WallPanel::ky).sum();

    let diaphragm = RigidDiaphragm::solve("L2", walls).unwrap();
    assert_relative_eq!(diaphragm.kx(), kx, max_relative = 1e-9);
    assert_relative_eq!(diaphragm.ky(), ky, max_relative = 1e-9);
}

#[test]
fn torque_is_conserved() {
    let diaphragm = RigidDiaphragm::solve("L2", box_walls(360.0, 240.0, [100.0, 150.0, 80.0, 120.0])).unwrap();
    let catalog = PatternCatalog::standard();
    let settings = AnalysisSettings::default();
    let distributor = ForceDistributor::new(&diaphragm, &catalog, &settings);

    let load = AppliedLoad::new(SEISMIC_X_POS, 40.0, 0.0, Point2::new(180.0, 120.0));
    assert_relative_eq!(distributor.torsion(&load), 960.0, max_relative = 1e-12);

    let resisted: f64 = distributor
        .distribute(&load)
        .unwrap()
        .iter()
        .map(|(placed, shear)| shear.torsional * placed.offset)
        .sum();
    assert_relative_eq!(resisted, 960.0, max_relative = 1e-12);

    let direct: f64 = distributor
        .distribute(&load)
        .unwrap()
        .iter()
        .map(|(_, shear)| shear.direct.abs())
        .sum();
    assert_relative_eq!(direct, 40.0, max_relative = 1e-12);
}

#[test]
fn wall_through_center_takes_no_torsion() {
    let mut walls = box_walls(360.0, 240.0, [100.0, 150.0, 80.0, 120.0]);
    walls.push(WallPanel::new("E", Point2::new(216.0, 0.0), Point2::new(216.0, 240.0), 50.0));
    let diaphragm = RigidDiaphragm::solve("L2", walls).unwrap();
    assert!(diaphragm.center().approx_eq(Point2::new(216.0, 144.0), 1e-9));

    let catalog = PatternCatalog::standard();
    let settings = AnalysisSettings::default();
    let distributor = ForceDistributor::new(&diaphragm, &catalog, &settings);
    let load = AppliedLoad::new(SEISMIC_Y_POS, 0.0, 30.0, Point2::new(20.0, 120.0)).with_accidental_torsion(75.0);

    let e = diaphragm.wall("E").unwrap();
    assert_eq!(e.offset, 0.0);
    assert_eq!(distributor.torsional_shear(e, &load).unwrap(), 0.0);
}

#[test]
fn irregularity_classification_boundaries() {
    let settings = AnalysisSettings::default();
    assert_eq!(classify_pair(0.010, 0.011, &settings), IrregularityStatus::Ok);
    assert_eq!(classify_pair(0.010, 0.013, &settings), IrregularityStatus::Ok);
    assert_eq!(classify_pair(0.010, 0.015, &settings), IrregularityStatus::Ok);
    assert_eq!(classify_pair(0.010, 0.016, &settings), IrregularityStatus::Type1A);
    assert_eq!(classify_pair(0.010, 0.030, &settings), IrregularityStatus::Type1B);
}

#[test]
fn eccentric_load_is_torsionally_irregular() {
    let level = LevelModel {
        level: Level::new("L2", rectangle(360.0, 240.0)).with_story_height(120.0),
        walls: box_walls(360.0, 240.0, [100.0; 4]),
        loads: vec![AppliedLoad::new(SEISMIC_Y_POS, 0.0, 40.0, Point2::new(360.0, 120.0))],
    };
    let cases = vec![case("EY", PredominantDirection::Y, SEISMIC_Y_POS)];
    let results = analyze_building(
        &BuildingModel::new(vec![level]),
        &cases,
        &PatternCatalog::standard(),
        &AnalysisSettings::default(),
    )
    .unwrap();

    // Nodes (0,0), (360,0), (360,240): only the pairs spanning X differ
    assert_eq!(results.irregularities.len(), 3);
    assert_eq!(results.irregular().count(), 2);
    assert_eq!(results.worst_irregularity(), IrregularityStatus::Type1B);

    // θ = 7200 / 9,360,000; Uy = 4·(0.2 ± 180θ)
    let theta = 7200.0 / 9_360_000.0;
    let stiff_side = results
        .drifts
        .iter()
        .find(|d| d.node == "L2:N1" && d.direction == Axis::Y)
        .unwrap();
    assert_relative_eq!(stiff_side.displacement, 4.0 * (0.2 - 180.0 * theta), max_relative = 1e-9);
    let check = results.irregular().next().unwrap();
    assert_relative_eq!(check.maximum / check.average, 1.0 + 900.0 * theta, max_relative = 1e-9);
}

#[test]
fn setback_level_matches_nearest_point_below() {
    let lower = LevelModel {
        level: Level::new("L2", rectangle(360.0, 240.0)).with_elevation(120.0),
        walls: box_walls(360.0, 240.0, [100.0; 4]),
        loads: vec![AppliedLoad::new(SEISMIC_X_POS, 30.0, 0.0, Point2::new(180.0, 120.0))],
    };
    let upper = LevelModel {
        level: Level::new("Roof", rectangle(200.0, 240.0)).with_elevation(252.0),
        walls: box_walls(200.0, 240.0, [100.0; 4]),
        loads: vec![AppliedLoad::new(SEISMIC_X_POS, 20.0, 0.0, Point2::new(100.0, 120.0))],
    };
    let mut model = BuildingModel::new(vec![lower, upper]);
    model.resolve_story_heights(0.0).unwrap();

    let cases = vec![case("EX", PredominantDirection::X, SEISMIC_X_POS)];
    let results = analyze_building(&model, &cases, &PatternCatalog::standard(), &AnalysisSettings::default()).unwrap();

    let roof_corner = results
        .drifts
        .iter()
        .find(|d| d.level == "Roof" && d.node == "Roof:N2" && d.direction == Axis::X)
        .unwrap();
    let below = roof_corner.below.as_ref().unwrap();
    assert_eq!(below.node, "L2:N2");
    assert_eq!(roof_corner.story_height, 132.0);
    // L2: 4·30/200 = 0.6, Roof: 4·20/200 = 0.4
    assert_relative_eq!(roof_corner.drift, 0.2 / 132.0, max_relative = 1e-9);

    let base = results.drifts.iter().find(|d| d.level == "L2").unwrap();
    assert!(base.below.is_none());
}

#[test]
fn standard_cases_envelope_wall_shear() {
    let level = LevelModel {
        level: Level::new("L2", rectangle(360.0, 240.0)).with_story_height(120.0),
        walls: box_walls(360.0, 240.0, [100.0, 150.0, 80.0, 120.0]),
        loads: vec![
            AppliedLoad::new(SEISMIC_X_POS, 40.0, 0.0, Point2::new(180.0, 120.0)),
            AppliedLoad::new(SEISMIC_Y_POS, 0.0, 40.0, Point2::new(180.0, 120.0)),
        ],
    };
    let catalog = PatternCatalog::standard();
    let cases: Vec<LoadCase> = seismic_load_cases(0.7)
        .into_iter()
        .map(|def| def.build(&catalog))
        .collect::<Result<_, _>>()
        .unwrap();

    let results = analyze_building(
        &BuildingModel::new(vec![level]),
        &cases,
        &catalog,
        &AnalysisSettings::default(),
    )
    .unwrap();
    let summaries = results.levels[0].wall_summaries(&cases);

    let c = summaries.iter().find(|s| s.wall == "C").unwrap();
    // 100/30 case puts 0.7 × 16 kip of direct X shear on wall C
    assert_relative_eq!(c.shear.direct.abs(), 0.7 * 16.0, max_relative = 1e-9);
    assert!(c.shear_range.min.direct < 0.0 && c.shear_range.max.direct > 0.0);
    assert_relative_eq!(c.shear_range.max.direct, -c.shear_range.min.direct, max_relative = 1e-9);
}

#[test]
fn project_file_runs_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("building.lat");

    let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
    project.base_elevation = Some(0.0);
    project.add_level(LevelModel {
        level: Level::new("L2", rectangle(360.0, 240.0)).with_elevation(120.0),
        walls: box_walls(360.0, 240.0, [100.0, 150.0, 80.0, 120.0]),
        loads: vec![AppliedLoad::new(SEISMIC_X_POS, 40.0, 0.0, Point2::new(180.0, 120.0))],
    });
    save_project(&project, &path).unwrap();

    let loaded = load_project(&path).unwrap();
    let results = loaded.analyze().unwrap();
    assert_eq!(results.levels.len(), 1);
    assert!(results.max_drift().unwrap().drift > 0.0);
}

#[test]
fn demo_project_parses_and_runs() {
    let project = lateral_core::file_io::parse_project(include_str!("../../demos/two_story.lat")).unwrap();
    assert_eq!(project.load_cases.len(), 4);

    let results = project.analyze().unwrap();
    assert_eq!(results.levels.len(), 2);
    assert_eq!(results.level("Roof").unwrap().level().story_height, Some(120.0));
    assert!(results.drifts.iter().filter(|d| d.level == "Roof").all(|d| d.below.is_some()));
}
