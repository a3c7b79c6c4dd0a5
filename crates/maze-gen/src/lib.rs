//! Random maze generation.
//!
//! Provides two generators producing solver-ready [`Maze`]s:
//! - **Recursive backtracker**: a depth-first carve through a wall-filled
//!   grid, giving a perfect maze (exactly one route between any two cells).
//! - **Rubble field**: open floor scattered with random walls, giving loopy
//!   layouts with many tied routes, and sometimes none at all.

use log::debug;
use maze_core::{CellKind, Grid, Maze, Point};
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

/// Two-cell jumps used by the backtracker; the cell in between is the wall
/// that gets knocked down.
const JUMPS: [Point; 4] = [
    Point::new(0, 2),
    Point::new(2, 0),
    Point::new(0, -2),
    Point::new(-2, 0),
];

/// Smallest side the backtracker produces. Anything smaller would put Start
/// and End on the same cell.
pub const MIN_SIDE: usize = 5;

/// Maze generator driven by a random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a perfect maze with the recursive-backtracker algorithm.
    ///
    /// Both dimensions are bumped to the next odd number (and to at least
    /// [`MIN_SIDE`]) so that corridors and walls alternate. Start is at
    /// (1, 1) and End at the opposite inner corner.
    pub fn backtracker(&mut self, rows: usize, columns: usize) -> Maze {
        let rows = odd_side(rows);
        let columns = odd_side(columns);
        let mut grid = Grid::filled(columns as i32, rows as i32, CellKind::Wall);

        let origin = Point::new(1, 1);
        grid.set(origin, CellKind::Open);
        let mut stack = vec![origin];
        let mut jumps = JUMPS;

        while let Some(&cur) = stack.last() {
            jumps.shuffle(&mut self.rng);
            let next = jumps
                .iter()
                .map(|&d| (cur + d, d))
                .find(|&(n, _)| grid.at(n) == Some(CellKind::Wall));
            match next {
                Some((n, d)) => {
                    grid.set(cur.shift(d.x / 2, d.y / 2), CellKind::Open);
                    grid.set(n, CellKind::Open);
                    stack.push(n);
                }
                None => {
                    stack.pop();
                }
            }
        }

        let end = Point::new(columns as i32 - 2, rows as i32 - 2);
        debug!("carved {columns}x{rows} backtracker maze");
        Maze::new(grid, origin, end)
    }

    /// Generate an open field where each cell is a wall with probability
    /// `wall_pct`. Start is the top-left corner and End the bottom-right one;
    /// both are always floor. The result is not guaranteed to be solvable.
    pub fn rubble(&mut self, width: usize, height: usize, wall_pct: f64) -> Maze {
        let width = width.max(2) as i32;
        let height = height.max(1) as i32;
        let mut grid = Grid::filled(width, height, CellKind::Open);
        let p = wall_pct.clamp(0.0, 1.0);
        for pos in grid.bounds() {
            if self.rng.random_bool(p) {
                grid.set(pos, CellKind::Wall);
            }
        }
        Maze::new(grid, Point::ZERO, Point::new(width - 1, height - 1))
    }
}

/// The side length [`MazeGen::backtracker`] actually produces for a
/// requested `n`.
pub fn odd_side(n: usize) -> usize {
    let n = n.max(MIN_SIDE);
    if n % 2 == 0 { n + 1 } else { n }
}
