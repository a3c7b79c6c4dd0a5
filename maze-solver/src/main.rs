//! maze-solver: shortest route through a character-grid maze.
//!
//! Usage:
//!   maze-solver maze.txt                  # writes output.txt and path.json
//!   maze-solver maze.txt --verify         # cross-check with BFS
//!   RUST_LOG=debug maze-solver maze.txt   # search statistics on stderr

use anyhow::Result;
use clap::Parser;
use maze_solver::{SolverArgs, SolverConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SolverConfig::from(SolverArgs::parse());
    let Some(report) = maze_solver::run_or_report(&config)? else {
        return Ok(());
    };

    match report.outcome.path() {
        Some(path) => println!("Path: {} steps", path.steps()),
        None => println!("Path: none"),
    }
    println!("A* solve: {:.3} ms", report.solve_ms);
    println!("Total: {:.3} ms", report.total_ms);
    Ok(())
}
