//! Output artifacts: the solved grid and the path listing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use maze_core::{Grid, Point};
use serde::Serialize;

use crate::error::EmitError;

/// JSON shape of the path listing: `{"path": [{"x": .., "y": ..}, ...]}`.
#[derive(Debug, Serialize)]
pub struct PathListing<'a> {
    pub path: &'a [Point],
}

/// Encode `cells` as a pretty-printed path listing, newline-terminated.
pub fn path_json(cells: &[Point]) -> Result<String, EmitError> {
    let mut out = serde_json::to_string_pretty(&PathListing { path: cells })?;
    out.push('\n');
    Ok(out)
}

/// Write the rendered grid to `path`.
pub fn write_solved_grid(path: &Path, grid: &Grid) -> Result<(), EmitError> {
    write_file(path, grid.render().as_bytes())
}

/// Write the path listing for `cells` to `path`.
pub fn write_path_json(path: &Path, cells: &[Point]) -> Result<(), EmitError> {
    let json = path_json(cells)?;
    write_file(path, json.as_bytes())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), EmitError> {
    let io = |cause| EmitError::Io {
        path: path.to_path_buf(),
        cause,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io)?);
    w.write_all(bytes).map_err(io)?;
    w.flush().map_err(io)
}
