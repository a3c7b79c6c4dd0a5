//! Run configuration and the command-line surfaces that build it.

use std::path::PathBuf;

use clap::Parser;
use maze_core::{DEFAULT_MAX_DIM, LoadOptions};
use maze_gen::odd_side;

/// Order of the records in the path listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathOrder {
    /// End first, Start last.
    #[default]
    GoalFirst,
    /// Start first, End last.
    StartFirst,
}

/// Everything one solver run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub input: PathBuf,
    /// Solved-grid artifact.
    pub output: PathBuf,
    /// Path-listing artifact.
    pub path_json: PathBuf,
    pub load: LoadOptions,
    pub order: PathOrder,
    /// Cross-check the A* step count against a breadth-first search.
    pub verify: bool,
}

impl SolverConfig {
    /// Defaults for `input`: artifacts in the working directory.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from("output.txt"),
            path_json: PathBuf::from("path.json"),
            load: LoadOptions::default(),
            order: PathOrder::default(),
            verify: false,
        }
    }
}

/// CLI arguments for `maze-solver`.
#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Find the shortest route through a maze with A*")]
pub struct SolverArgs {
    /// Maze file: `#` wall, `S` start, `E` end, `.` or space open
    pub input: PathBuf,

    /// Where to write the maze with the route marked by `.`
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Where to write the route as a JSON list of {x, y}
    #[arg(long, default_value = "path.json")]
    pub path_json: PathBuf,

    /// Largest accepted width and height
    #[arg(long, default_value_t = DEFAULT_MAX_DIM)]
    pub max_dim: usize,

    /// Reject characters other than `# S E . ` instead of treating them as open
    #[arg(long)]
    pub strict: bool,

    /// List the route from start to end instead of end to start
    #[arg(long)]
    pub start_first: bool,

    /// Check the route length against a breadth-first search
    #[arg(long)]
    pub verify: bool,
}

impl From<SolverArgs> for SolverConfig {
    fn from(args: SolverArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            path_json: args.path_json,
            load: LoadOptions {
                max_dim: args.max_dim,
                strict: args.strict,
            },
            order: if args.start_first {
                PathOrder::StartFirst
            } else {
                PathOrder::GoalFirst
            },
            verify: args.verify,
        }
    }
}

/// CLI arguments for `maze-gen`.
#[derive(Parser, Debug)]
#[command(name = "maze-gen")]
#[command(about = "Generate a random perfect maze")]
pub struct GenArgs {
    /// Number of rows (bumped to an odd number)
    #[arg(value_parser = maze_side)]
    pub rows: usize,

    /// Number of columns (bumped to an odd number)
    #[arg(value_parser = maze_side)]
    pub columns: usize,

    /// Seed for a reproducible maze
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Accept a requested side only if the generated side stays within what the
/// solver loads by default.
fn maze_side(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    let side = odd_side(n);
    if side > DEFAULT_MAX_DIM {
        return Err(format!(
            "{n} would generate a side of {side}, above the limit of {DEFAULT_MAX_DIM}"
        ));
    }
    Ok(n)
}
