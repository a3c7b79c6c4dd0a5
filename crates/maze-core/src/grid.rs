//! The [`Grid`] type, a rectangular 2D grid of [`CellKind`]s, and the
//! [`Maze`] that pairs a grid with its Start and End cells.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of [`CellKind`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell set to `kind`.
    pub fn filled(width: i32, height: i32, kind: CellKind) -> Self {
        let bounds = Range::with_size(width.max(0), height.max(0));
        Self {
            cells: vec![kind; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from row-major cells. `cells.len()` must equal
    /// `width * height`.
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<CellKind>) -> Self {
        let bounds = Range::with_size(width, height);
        debug_assert_eq!(cells.len(), bounds.len());
        Self { cells, bounds }
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, kind: CellKind) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = kind;
        }
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellKind::is_passable)
    }

    /// Count how many cells equal `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate over `(Point, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        // chunks() panics on a zero chunk size.
        self.cells.chunks(self.width().max(1) as usize)
    }

    /// Mark every cell of `path` as [`CellKind::Path`], leaving Start and End
    /// markers untouched. Returns the number of cells painted.
    pub fn paint_path(&mut self, path: &[Point]) -> usize {
        let mut painted = 0;
        for &p in path {
            let Some(i) = self.bounds.index(p) else {
                continue;
            };
            if !self.cells[i].is_marker() && self.cells[i] != CellKind::Path {
                self.cells[i] = CellKind::Path;
                painted += 1;
            }
        }
        painted
    }

    /// Render the grid as text: one line per row, each terminated by `\n`.
    pub fn render(&self) -> String {
        let w = self.width().max(0) as usize;
        let mut out = String::with_capacity((w + 1) * self.height().max(0) as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.to_char()));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A loaded maze: the grid plus its unique Start and End cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
}

impl Maze {
    /// Assemble a maze, writing the Start and End markers into the grid.
    pub fn new(mut grid: Grid, start: Point, end: Point) -> Self {
        grid.set(start, CellKind::Start);
        grid.set(end, CellKind::End);
        Self { grid, start, end }
    }
}
