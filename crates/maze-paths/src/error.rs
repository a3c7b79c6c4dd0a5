use maze_core::Point;
use thiserror::Error;

/// Reasons a search is refused before it starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("range {width}x{height} exceeds the {max}x{max} search limit")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("{0} is outside the search range")]
    OutOfRange(Point),
}
