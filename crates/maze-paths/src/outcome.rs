use maze_core::Point;

/// A shortest path, stored goal first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    pub(crate) fn from_goal_first(cells: Vec<Point>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// Cells from goal back to start.
    #[inline]
    pub fn goal_first(&self) -> &[Point] {
        &self.cells
    }

    /// Cells from start to goal.
    pub fn start_first(&self) -> Vec<Point> {
        self.cells.iter().rev().copied().collect()
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a path holds at least the goal cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit moves (`len() - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.cells[0]
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }
}

/// Counters collected during one A* run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved to the closed set.
    pub expanded: usize,
    /// Nodes pushed onto the open set.
    pub inserted: usize,
    /// Successful decrease-key operations.
    pub relaxed: usize,
    /// Largest open-set size seen.
    pub peak_open: usize,
}

/// Terminal state of an A* run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was popped from the open set.
    Found { path: Path, stats: SearchStats },
    /// The open set ran dry first.
    NoPath { stats: SearchStats },
}

impl SearchOutcome {
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NoPath { .. } => None,
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Found { stats, .. } | Self::NoPath { stats } => *stats,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
