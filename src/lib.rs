//! Polycube box-packing solver.
//!
//! Determines whether (and how) a catalog of rigid polycube pieces can fill
//! a rectangular box exactly, using rotations but no reflections, each piece
//! used at most once. Piece orientations are canonicalized and deduplicated
//! up front; a depth-first backtracking search over a flat occupancy grid
//! then enumerates every tiling, streaming solutions to the caller one at a
//! time.

pub mod catalog;
pub mod display;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod shape;
pub mod solver;

pub use error::{Error, Result};
pub use geometry::{Point, Size};
pub use grid::BoxGrid;
pub use pieces::{OrientationSet, PieceDef, PieceId, Puzzle};
pub use shape::Shape;
pub use solver::{solve, solve_with, Placement, Solution};
