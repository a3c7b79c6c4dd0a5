//! Maze text loader.
//!
//! The input format is one row per line, every row the same width. `#` is a
//! wall, `S` and `E` mark start and end, `.` and space are open floor. Only
//! the first `S` and the first `E` are honored; later duplicates load as open
//! floor.

use log::{debug, warn};

use crate::cell::CellKind;
use crate::error::{LoadError, Result};
use crate::geom::Point;
use crate::grid::{Grid, Maze};

/// Default bound on both maze width and height.
pub const DEFAULT_MAX_DIM: usize = 1000;

/// Loader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadOptions {
    /// Maximum width and maximum height accepted.
    pub max_dim: usize,
    /// Reject characters outside `# S E . ` instead of loading them as open
    /// floor.
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_dim: DEFAULT_MAX_DIM,
            strict: false,
        }
    }
}

/// Maze rows: lines with one trailing `\r` removed, including a final line
/// that ends in a bare `\r`.
fn rows(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(|l| l.strip_suffix('\r').unwrap_or(l))
}

/// Width and height of a maze text, measured without allocating.
fn measure(text: &str) -> Result<(usize, usize)> {
    let mut width = None;
    let mut height = 0;
    // A blank line is only tolerated when nothing but blank lines follow.
    let mut blank: Option<usize> = None;

    for (i, line) in rows(text).enumerate() {
        let len = line.chars().count();
        if len == 0 {
            if blank.is_none() {
                blank = Some(i);
            }
            continue;
        }
        let expected = *width.get_or_insert(len);
        if let Some(b) = blank {
            return Err(LoadError::InconsistentWidth {
                line: b + 1,
                expected,
                found: 0,
            });
        }
        if len != expected {
            return Err(LoadError::InconsistentWidth {
                line: i + 1,
                expected,
                found: len,
            });
        }
        height = i + 1;
    }

    match width {
        Some(w) => Ok((w, height)),
        None => Err(LoadError::Empty),
    }
}

impl Maze {
    /// Parse maze text using [`LoadOptions::default`].
    pub fn parse(text: &str) -> Result<Maze> {
        Self::parse_with(text, &LoadOptions::default())
    }

    /// Parse maze text.
    ///
    /// Dimensions are validated against `opts.max_dim` before any storage
    /// sized to the grid is allocated.
    pub fn parse_with(text: &str, opts: &LoadOptions) -> Result<Maze> {
        let (width, height) = measure(text)?;
        if width > opts.max_dim || height > opts.max_dim {
            return Err(LoadError::TooLarge {
                width,
                height,
                max: opts.max_dim,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut end = None;
        let mut demoted = 0usize;

        for (y, line) in rows(text).take(height).enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let kind = match CellKind::from_char(ch) {
                    Some(CellKind::Start) if start.is_none() => {
                        start = Some(p);
                        CellKind::Start
                    }
                    Some(CellKind::End) if end.is_none() => {
                        end = Some(p);
                        CellKind::End
                    }
                    Some(CellKind::Start | CellKind::End) => {
                        demoted += 1;
                        CellKind::Open
                    }
                    Some(kind) => kind,
                    None if opts.strict => return Err(LoadError::UnknownCell { ch, x, y }),
                    None => CellKind::Open,
                };
                cells.push(kind);
            }
        }

        if demoted > 0 {
            warn!("{demoted} duplicate start/end marker(s) loaded as open floor");
        }

        let start = start.ok_or(LoadError::MissingStart)?;
        let end = end.ok_or(LoadError::MissingEnd)?;
        debug!("loaded {width}x{height} maze, start {start}, end {end}");

        let grid = Grid::from_cells(width as i32, height as i32, cells);
        Ok(Maze { grid, start, end })
    }
}
