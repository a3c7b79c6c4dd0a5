//! Error types for maze loading.

use thiserror::Error;

/// Reasons a maze text cannot be turned into a searchable [`Maze`](crate::Maze).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("maze is empty")]
    Empty,

    #[error("inconsistent width on line {line}: expected {expected}, found {found}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("maze too large: {width}x{height} (max {max}x{max})")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("start marker 'S' not found")]
    MissingStart,

    #[error("end marker 'E' not found")]
    MissingEnd,

    #[error("unknown cell {ch:?} at ({x}, {y})")]
    UnknownCell { ch: char, x: usize, y: usize },
}

pub type Result<T> = std::result::Result<T, LoadError>;
