//! # Stratify Lateral CLI
//!
//! Runs a rigid-diaphragm lateral analysis on a `.lat` project file and prints
//! the center of rigidity, wall shear envelopes, drift and torsional
//! irregularity per level.
//!
//! ## Usage
//!
//! ```bash
//! lateral_cli building.lat          # summary + JSON report
//! lateral_cli building.lat --full   # summary + every drift point and check
//! ```
//!
//! Set `RUST_LOG` to override the default `lateral_core=info,lateral_cli=info`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lateral_core::analysis::WallDesignSummary;
use lateral_core::drift::{DriftPoint, IrregularityCheck, IrregularityStatus};
use lateral_core::{load_project, BuildingAnalysis, LateralResult, Project};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lateral_cli", version, about = "Rigid-diaphragm lateral analysis of a .lat project")]
struct Cli {
    /// Project file (.lat)
    path: PathBuf,
    /// Include every drift point and irregularity check in the JSON report
    #[arg(long)]
    full: bool,
}

/// JSON report printed after the summary.
#[derive(Serialize)]
struct Report<'a> {
    job_id: &'a str,
    engineer: &'a str,
    worst_irregularity: IrregularityStatus,
    max_drift: Option<&'a DriftPoint>,
    levels: Vec<LevelReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drifts: Option<&'a [DriftPoint]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    irregularities: Option<&'a [IrregularityCheck]>,
}

#[derive(Serialize)]
struct LevelReport<'a> {
    name: &'a str,
    center_of_rigidity: lateral_core::geometry::Point2,
    torsional_stiffness: f64,
    walls: Vec<WallDesignSummary>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lateral_core=info,lateral_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli.path, cli.full) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(path: &std::path::Path, full: bool) -> LateralResult<()> {
    tracing::info!(path = %path.display(), "loading project");
    let project = load_project(path)?;
    let catalog = project.catalog()?;
    let load_cases = project.load_cases(&catalog)?;
    let results = project.analyze_with(&catalog, &load_cases)?;

    print_summary(&project, &results, &load_cases);

    let levels = results
        .levels
        .iter()
        .map(|l| LevelReport {
            name: &l.level().name,
            center_of_rigidity: l.diaphragm().center(),
            torsional_stiffness: l.diaphragm().torsional_stiffness(),
            walls: l.wall_summaries(&load_cases),
        })
        .collect();

    let report = Report {
        job_id: &project.meta.job_id,
        engineer: &project.meta.engineer,
        worst_irregularity: results.worst_irregularity(),
        max_drift: results.max_drift(),
        levels,
        drifts: full.then_some(results.drifts.as_slice()),
        irregularities: full.then_some(results.irregularities.as_slice()),
    };

    println!();
    println!("JSON Output (for LLM/API use):");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_summary(project: &Project, results: &BuildingAnalysis, load_cases: &[lateral_core::loads::LoadCase]) {
    println!("═══════════════════════════════════════");
    println!("  LATERAL ANALYSIS - {}", project.meta.job_id);
    println!("═══════════════════════════════════════");
    println!();
    println!("Engineer:   {}", project.meta.engineer);
    println!("Load cases: {}", load_cases.len());
    println!(
        "Cd / Ie:    {:.2} / {:.2}",
        project.settings.deflection_amplification, project.settings.importance_factor
    );

    for level in &results.levels {
        let diaphragm = level.diaphragm();
        println!();
        println!("Level {}:", level.level().name);
        println!("  ΣKx = {:.1}  ΣKy = {:.1}  J = {:.0}", diaphragm.kx(), diaphragm.ky(), diaphragm.torsional_stiffness());
        println!("  CR  = {}", diaphragm.center());
        println!("  {:<10} {:>10} {:>10} {:>10} {:>10}", "Wall", "Offset", "Direct", "Torsion", "v (k/in)");
        for wall in level.wall_summaries(load_cases) {
            println!(
                "  {:<10} {:>10.2} {:>10.2} {:>10.2} {:>10.4}",
                wall.wall, wall.offset, wall.shear.direct, wall.shear.torsional, wall.reaction.unit_shear
            );
        }
    }

    println!();
    if let Some(max) = results.max_drift() {
        println!(
            "Max drift:  {:.5} at {} / {} ({}, {})",
            max.drift, max.level, max.node, max.load_case, max.direction
        );
    }
    for check in results.irregular() {
        println!(
            "  {} {} {} {}-{}: max/avg = {:.3} {}",
            check.level,
            check.load_case,
            check.direction,
            check.node_a,
            check.node_b,
            check.maximum / check.average,
            status_icon(check.status)
        );
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  TORSIONAL IRREGULARITY: {}", results.worst_irregularity());
    println!("═══════════════════════════════════════");
}

fn status_icon(status: IrregularityStatus) -> &'static str {
    match status {
        IrregularityStatus::Ok => "[OK]",
        IrregularityStatus::Type1A => "[1A]",
        IrregularityStatus::Type1B => "[1B]",
    }
}
