//! A* shortest-path search over character-grid mazes.
//!
//! The engine is built from three pieces that live for exactly one search:
//!
//! - an [`OpenSet`]: a fixed-capacity binary min-heap over `f = g + h` with a
//!   cell → heap-slot index, so relaxation never rescans the heap;
//! - a [`ClosedSet`]: an append-only arena of finalized nodes whose parent
//!   links are arena indices;
//! - the main loop in [`PathRange::astar_path`], which expands cells in North,
//!   East, South, West order and rebuilds the path goal first.
//!
//! [`PathRange::bfs_distance`] gives the unweighted step count between two
//! cells, used to cross-check A* results.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod closed;
mod distance;
mod error;
mod heap;
mod outcome;
mod pathrange;
mod traits;

pub use closed::ClosedSet;
pub use distance::manhattan;
pub use error::SearchError;
pub use heap::{Node, OpenSet};
pub use outcome::{Path, SearchOutcome, SearchStats};
pub use pathrange::PathRange;
pub use traits::{AstarPather, Pather, WeightedPather};
