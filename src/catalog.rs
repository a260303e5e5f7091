//! The bundled demo puzzle: six pieces packing a 4x4x2 box.
//!
//! Cell counts are 4 + 4 + 5 + 6 + 6 + 7 = 32, exactly the box volume. The
//! catalog order is the search order; it is arbitrary but fixed.

use crate::geometry::{Point, Size};
use crate::pieces::{PieceDef, PieceId, Puzzle};

/// Box dimensions of the demo puzzle.
pub const DEMO_DIMS: Size = Size::new(4, 4, 2);

/// The demo piece catalog, ids A through F.
pub fn demo_pieces() -> Vec<PieceDef> {
    vec![
        // C: S-bend climbing one level (4 cells)
        piece(2, &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1)]),
        // D: straight bar with a riser at one end (4 cells)
        piece(3, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 0, 1)]),
        // B: L-bar with a stacked corner (5 cells)
        piece(1, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (2, 1, 1)]),
        // F: U-plate with a stacked corner (6 cells)
        piece(5, &[(0, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0), (2, 1, 0), (2, 0, 1)]),
        // A: 2x2x2 cube missing one edge's two corners (6 cells)
        piece(0, &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1), (1, 0, 1), (0, 1, 1)]),
        // E: 3x2 plate with a stacked corner (7 cells)
        piece(4, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0), (2, 1, 0), (2, 0, 1)]),
    ]
}

/// The full demo puzzle definition.
pub fn demo_puzzle() -> Puzzle {
    Puzzle::new(DEMO_DIMS, demo_pieces())
}

fn piece(id: u8, cells: &[(i32, i32, i32)]) -> PieceDef {
    PieceDef::new(
        PieceId(id),
        cells.iter().map(|&(x, y, z)| Point::new(x, y, z)).collect(),
    )
}
