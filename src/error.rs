//! Error types for puzzle definitions.
//!
//! Only *definition* problems surface as errors, reported before any search
//! starts. Search dead-ends are ordinary backtracking, and broken push/pop
//! discipline in the grid is a fatal assertion rather than a recoverable
//! error (see [`crate::grid`]).

use thiserror::Error;

use crate::pieces::PieceId;

/// Result type alias for puzzle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a puzzle definition can be invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Box dimensions must be strictly positive on every axis.
    #[error("box dimensions must be positive, got {0}x{1}x{2}")]
    InvalidDimensions(i32, i32, i32),

    /// A piece was defined with no points.
    #[error("piece {0:?} has an empty point set")]
    EmptyPiece(PieceId),

    /// The same piece id appears more than once in the catalog.
    #[error("piece {0:?} appears more than once in the catalog")]
    DuplicatePiece(PieceId),

    /// The solver tracks piece availability in a 32-bit mask.
    #[error("catalog has {0} pieces, at most 32 are supported")]
    TooManyPieces(usize),
}
