//! Error types for the solver pipeline.
//!
//! Each message carries its cause inline and no variant reports a separate
//! `source()`, so a chain printer shows every cause exactly once.

use std::path::PathBuf;

use maze_core::LoadError;
use maze_paths::SearchError;
use thiserror::Error;

/// Failures that stop a run before any artifact is written.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("cannot read {}: {cause}", path.display())]
    Read { path: PathBuf, cause: std::io::Error },

    #[error("invalid maze: {0}")]
    Load(LoadError),

    #[error("search refused: {0}")]
    Search(SearchError),
}

impl SolveError {
    /// Whether the process should exit non-zero. A maze that loads badly or
    /// is refused by the search is reported and the run ends normally; only
    /// unreadable input is fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SolveError::Read { .. })
    }
}

impl From<LoadError> for SolveError {
    fn from(e: LoadError) -> Self {
        SolveError::Load(e)
    }
}

impl From<SearchError> for SolveError {
    fn from(e: SearchError) -> Self {
        SolveError::Search(e)
    }
}

/// Failures writing an output artifact. Reported as warnings; the computed
/// result is unaffected.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("cannot write {}: {cause}", path.display())]
    Io { path: PathBuf, cause: std::io::Error },

    #[error("cannot encode path listing: {0}")]
    Json(serde_json::Error),
}

impl From<serde_json::Error> for EmitError {
    fn from(e: serde_json::Error) -> Self {
        EmitError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
