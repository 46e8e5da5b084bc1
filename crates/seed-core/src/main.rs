//! World Seeder
//!
//! Reads per-location TOML records, seeds a world configuration from them and
//! writes the result as JSON.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use seed_core::config::DEFAULT_CONFIG_PATH;
use seed_core::{
    load_location_dir, seed_world, standard_world, DirectoryTerrainSource, MissingTerrainPolicy,
    NoTerrain, SeedConfig, Seeder, TerrainSource,
};

/// Command line arguments for the seeder
#[derive(Parser, Debug)]
#[command(name = "world_seed")]
#[command(about = "Seeds a game world's static configuration from location records")]
struct Args {
    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory of location records (overrides config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Directory of terrain files (overrides config)
    #[arg(long)]
    terrain: Option<PathBuf>,

    /// Output file for the seeded world (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for entity ids (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Fail when a location has no terrain resource
    #[arg(long)]
    strict_terrain: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Seed run aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SeedConfig::load_or_default(&args.config)?;
    apply_overrides(&mut config, &args);

    if args.print_config {
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!(
        seed = config.seed.rng_seed,
        data = ?config.paths.data_dir,
        terrain = ?config.terrain.directory,
        "Starting seed run"
    );

    let locations = load_location_dir(&config.paths.data_dir)?;
    let seeder = Seeder::from_data(locations);
    if seeder.is_empty() {
        tracing::warn!("No location records found in {:?}", config.paths.data_dir);
    }

    let terrain: Box<dyn TerrainSource> = match &config.terrain.directory {
        Some(dir) => Box::new(DirectoryTerrainSource::new(dir)),
        None => {
            tracing::warn!("No terrain directory configured, all terrain will be empty");
            Box::new(NoTerrain)
        }
    };

    let mut world = standard_world(config.seed.rng_seed);
    let settings = config.settings();
    let report = seed_world(&mut world, terrain.as_ref(), &settings, seeder)?;

    let output = &config.paths.output;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, world.to_json()?)?;

    println!(
        "Seeded {} locations, {} creatures, {} spawn areas",
        report.locations, report.creatures, report.spawn_areas
    );
    println!(
        "  Safe respawn: {} self, {} default, {} unresolved",
        report.self_respawn, report.default_respawn, report.unresolved_respawn
    );
    println!("  Wrote {}", output.display());
    Ok(())
}

fn apply_overrides(config: &mut SeedConfig, args: &Args) {
    if let Some(data) = &args.data {
        config.paths.data_dir = data.clone();
    }
    if let Some(terrain) = &args.terrain {
        config.terrain.directory = Some(terrain.clone());
    }
    if let Some(output) = &args.output {
        config.paths.output = output.clone();
    }
    if let Some(seed) = args.seed {
        config.seed.rng_seed = seed;
    }
    if args.strict_terrain {
        config.terrain.missing = MissingTerrainPolicy::Fail;
    }
}
