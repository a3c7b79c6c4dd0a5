//! The load → search → emit pipeline.

use std::fs;
use std::time::{Duration, Instant};

use log::{error, info, warn};
use maze_core::{Maze, Point};
use maze_paths::{Path, PathRange, SearchOutcome};

use crate::config::{PathOrder, SolverConfig};
use crate::emit;
use crate::error::{Result, SolveError};

/// What one run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The maze as loaded, before the route was painted.
    pub size: Point,
    pub outcome: SearchOutcome,
    /// Time spent inside the search only.
    pub solve_ms: f64,
    /// Load, search and emit together.
    pub total_ms: f64,
    /// `Some(agrees)` when verification ran.
    pub verified: Option<bool>,
    /// Both artifacts were written successfully.
    pub emitted: bool,
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Solve the maze named by `config.input` and write the artifacts.
///
/// Read, load and admission failures are errors and leave no artifacts.
/// A maze without a route is a normal outcome: it is reported and nothing
/// is written. Artifact write failures are logged as warnings.
pub fn run(config: &SolverConfig) -> Result<RunReport> {
    let started = Instant::now();

    let text = fs::read_to_string(&config.input).map_err(|cause| SolveError::Read {
        path: config.input.clone(),
        cause,
    })?;
    let mut maze = Maze::parse_with(&text, &config.load)?;
    let size = maze.grid.size();

    let mut pr = PathRange::new(maze.grid.bounds()).with_max_dim(config.load.max_dim);
    let search_started = Instant::now();
    let outcome = pr.solve(&maze)?;
    let solve_ms = ms(search_started.elapsed());

    let mut verified = None;
    let mut emitted = false;
    match outcome.path() {
        Some(path) => {
            if config.verify {
                verified = Some(verify(&mut pr, &maze, path)?);
            }
            maze.grid.paint_path(path.goal_first());
            emitted = emit_artifacts(config, &maze, path);
        }
        None => warn!("no path from {} to {}", maze.start, maze.end),
    }

    Ok(RunReport {
        size,
        outcome,
        solve_ms,
        total_ms: ms(started.elapsed()),
        verified,
        emitted,
    })
}

/// [`run`], with load and admission failures reported on stderr instead of
/// returned. `Ok(None)` means the maze was rejected and the run ended
/// normally; only unreadable input comes back as an error.
pub fn run_or_report(config: &SolverConfig) -> Result<Option<RunReport>> {
    match run(config) {
        Ok(report) => Ok(Some(report)),
        Err(e) if !e.is_fatal() => {
            error!("{}: {e}", config.input.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Compare the A* step count with a breadth-first distance.
fn verify(pr: &mut PathRange, maze: &Maze, path: &Path) -> Result<bool> {
    let bfs = pr.bfs_distance(&maze.grid, maze.start, maze.end)?;
    let ok = bfs == Some(path.steps() as u32);
    if ok {
        info!("verified: {} steps matches breadth-first search", path.steps());
    } else {
        error!(
            "verification failed: A* found {} steps, breadth-first search {:?}",
            path.steps(),
            bfs
        );
    }
    Ok(ok)
}

fn emit_artifacts(config: &SolverConfig, maze: &Maze, path: &Path) -> bool {
    info!(
        "saving {} ({}x{})",
        config.output.display(),
        maze.grid.width(),
        maze.grid.height()
    );
    let grid_ok = emit::write_solved_grid(&config.output, &maze.grid)
        .inspect_err(|e| warn!("{e}"))
        .is_ok();

    let cells = match config.order {
        PathOrder::GoalFirst => path.goal_first().to_vec(),
        PathOrder::StartFirst => path.start_first(),
    };
    let json_ok = emit::write_path_json(&config.path_json, &cells)
        .inspect_err(|e| warn!("{e}"))
        .is_ok();

    grid_ok && json_ok
}
