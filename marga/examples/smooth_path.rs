//! Smooth a planner path from a YAML scenario file.
//!
//! Scenarios define:
//! - An ASCII occupancy map (`#` occupied)
//! - The coarse path to smooth, in cell coordinates
//!
//! Usage:
//!   cargo run --example smooth_path -- --scenario scenarios/staircase.yaml
//!   RUST_LOG=marga=debug cargo run --example smooth_path -- -s scenarios/staircase.yaml --obstacles

use clap::Parser;
use serde::Deserialize;
use std::path::Path;

use marga::smoothing::{max_curvature, path_length, roughness};
use marga::{MargaConfig, ObstacleField, OccupancyGrid, PathSmoother, Point2D};

/// Smooth a scenario path and report quality metrics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario YAML file (map + path)
    #[arg(short = 's', long)]
    scenario: String,

    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: String,

    /// Add the obstacle clearance term even if disabled in the config
    #[arg(long)]
    obstacles: bool,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    map: Vec<String>,
    path: Vec<Point2D>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config_path = Path::new(&args.config);
    let mut config = if config_path.exists() {
        log::info!("Loading configuration from {:?}", config_path);
        MargaConfig::load(config_path)?
    } else {
        log::info!("Using default configuration");
        MargaConfig::default()
    };
    if args.obstacles {
        config.obstacle.enabled = true;
    }

    log::info!("Loading scenario from {:?}", args.scenario);
    let contents = std::fs::read_to_string(&args.scenario)?;
    let scenario: Scenario = serde_yaml::from_str(&contents)?;

    let rows: Vec<&str> = scenario.map.iter().map(String::as_str).collect();
    let grid = OccupancyGrid::from_ascii(&rows)?;
    let field = ObstacleField::from_grid(&grid);
    log::info!(
        "Map {}x{} with {} occupied cells",
        grid.width(),
        grid.height(),
        grid.occupied_count()
    );

    let mut smoother = PathSmoother::new(grid.bounds(), &config.to_smoothing_config());
    if let Some(term) = config.obstacle_term(&field) {
        smoother.prepend_term(Box::new(term));
    }
    log::info!("Correction terms: {:?}", smoother.term_names());

    let input = marga::core::waypoints_from_points(&scenario.path);
    let (output, stats) = smoother.smooth_with_stats(&input);

    log::info!(
        "{} passes, {} updates accepted, {} rejected",
        stats.iterations,
        stats.accepted_updates,
        stats.rejected_updates
    );

    println!("{:>10} {:>10} {:>10}", "", "input", "smoothed");
    println!(
        "{:>10} {:>10.3} {:>10.3}",
        "length",
        path_length(&input),
        path_length(&output)
    );
    println!(
        "{:>10} {:>10.3} {:>10.3}",
        "max kappa",
        max_curvature(&input),
        max_curvature(&output)
    );
    println!(
        "{:>10} {:>10.3} {:>10.3}",
        "roughness",
        roughness(&input),
        roughness(&output)
    );

    println!();
    for (before, after) in input.iter().zip(&output) {
        println!(
            "({:6.2}, {:6.2}) -> ({:6.2}, {:6.2}) theta {:+.3}",
            before.x, before.y, after.x, after.y, after.theta
        );
    }

    Ok(())
}
