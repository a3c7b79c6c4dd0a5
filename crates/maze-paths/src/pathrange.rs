use maze_core::{DEFAULT_MAX_DIM, Point, Range};

use crate::error::SearchError;

/// Search entry point for one grid rectangle.
///
/// Holds the admission limit and a scratch neighbour buffer. All per-search
/// storage (open set, closed set, visited flags) is sized to the rectangle
/// when a search starts and dropped when it returns.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) max_dim: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle, limited to
    /// [`DEFAULT_MAX_DIM`] cells per side.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            max_dim: DEFAULT_MAX_DIM,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Set the admission limit on width and height.
    pub fn with_max_dim(mut self, max_dim: usize) -> Self {
        self.max_dim = max_dim;
        self
    }

    /// Refuse ranges larger than the admission limit. Called before any
    /// storage sized to the range is allocated.
    pub(crate) fn admit(&self) -> Result<(), SearchError> {
        let width = self.rng.width().max(0) as usize;
        let height = self.rng.height().max(0) as usize;
        if width > self.max_dim || height > self.max_dim {
            return Err(SearchError::TooLarge {
                width,
                height,
                max: self.max_dim,
            });
        }
        Ok(())
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p)
    }
}
