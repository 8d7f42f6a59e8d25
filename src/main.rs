//! Headless match runner.
//!
//! Loads a map and a level, plays one match with the trace presentation
//! surfaces, and logs the result. Without a windowing host there is no real
//! input, so the frame budget doubles as the quit request.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use log::{info, warn};
use varena::input::FrameBudget;
use varena::presentation::{TraceAudio, TraceDraw};
use varena::{
    default_arena, init_logging, load_level, resolve_search_path, spawn_level, Game, LevelSpec,
    World,
};

/// A vertical-arena platformer, simulation only
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Map file name, resolved against the search paths
    #[arg(short, long, default_value = "arena.txt")]
    map: String,

    /// Level file describing the actors to spawn
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Seed for ambient randomness
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// Frames to simulate before requesting quit
    #[arg(long, default_value_t = 10_000)]
    max_frames: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let search_paths = [PathBuf::from("."), PathBuf::from("assets")];

    let mut world = World::new();
    match resolve_search_path(&search_paths, &args.map) {
        Some(path) => {
            let _ = world.load_map(&path);
        }
        None => warn!("map {} not found on any search path", args.map),
    }

    let spec = level_spec(args.level.as_deref(), &world);
    if let Some(name) = &spec.map {
        match resolve_search_path(&search_paths, name) {
            Some(path) => {
                let _ = world.load_map(&path);
            }
            None => warn!("level map {name} not found on any search path"),
        }
    }
    if let Some([gx, gy]) = spec.gravity {
        world = world.with_gravity(Vec3::new(gx, gy, 0.0));
    }
    let ids = spawn_level(&mut world, &spec);
    info!("level ready with {} actors", ids.len());

    let mut game = Game::new(world).with_seed(args.seed);
    let mut events = FrameBudget::new(args.max_frames);
    let result = game.play(&mut events, &mut TraceDraw, &mut TraceAudio);
    info!("result: {result:?}");

    Ok(())
}

/// Loads the requested level, falling back to the built-in arena when the
/// file is missing or malformed.
fn level_spec(path: Option<&std::path::Path>, world: &World) -> LevelSpec {
    let Some(path) = path else {
        return default_arena(world);
    };
    match load_level(path) {
        Ok(spec) => spec,
        Err(err) => {
            warn!("{err}; using the built-in arena");
            default_arena(world)
        }
    }
}
