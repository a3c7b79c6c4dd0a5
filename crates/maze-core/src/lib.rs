//! **maze-core**: character-grid maze model.
//!
//! This crate provides the foundational types shared by the solver
//! workspace: geometry primitives, cell kinds, the rectangular [`Grid`], and
//! the text loader that turns maze files into a [`Maze`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod load;

pub use cell::CellKind;
pub use error::LoadError;
pub use geom::{Point, Range};
pub use grid::{Grid, Maze};
pub use load::{DEFAULT_MAX_DIM, LoadOptions};
