//! maze-gen: random perfect mazes for the solver.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_gen::MazeGen;
use maze_solver::GenArgs;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = GenArgs::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let maze = MazeGen::new(StdRng::seed_from_u64(seed)).backtracker(args.rows, args.columns);
    let text = maze.grid.render();
    let text = text.trim_end_matches('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("cannot write {}", path.display()))?;
            info!(
                "generated {}x{} maze (seed {seed}) as {}",
                maze.grid.width(),
                maze.grid.height(),
                path.display()
            );
        }
        None => println!("{text}"),
    }
    Ok(())
}
