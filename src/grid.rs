//! The occupancy grid: a rectangular box of cells owned by pieces.
//!
//! The grid is a flat row-major buffer of `Option<PieceId>` plus a stack of
//! placed pieces. All mutation goes through [`BoxGrid::try_place`] and
//! [`BoxGrid::remove_last`], which keep one invariant: a cell's occupant is
//! the id of the most recent still-placed piece covering it, and popping the
//! stack restores the exact prior occupancy. Violations of the push/pop
//! discipline are programming errors and abort via assertion.

use crate::geometry::{Point, Size};
use crate::pieces::PieceId;
use crate::shape::Shape;

/// One entry of the placement stack: which piece, in which orientation, at
/// which anchor. The shape borrows from the puzzle's orientation sets.
#[derive(Clone, Copy, Debug)]
pub struct PlacedPiece<'a> {
    pub piece: PieceId,
    pub shape: &'a Shape,
    pub anchor: Point,
}

impl PlacedPiece<'_> {
    /// Absolute cell positions covered by this placement.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.shape.points().iter().map(move |&p| self.anchor + p)
    }
}

/// Mutable search state: occupancy buffer plus LIFO placement stack.
pub struct BoxGrid<'a> {
    dims: Size,
    cells: Vec<Option<PieceId>>,
    placements: Vec<PlacedPiece<'a>>,
    filled: usize,
}

impl<'a> BoxGrid<'a> {
    /// An empty grid. Dimensions must be positive; puzzle validation
    /// guarantees this for solver-created grids.
    pub fn new(dims: Size) -> Self {
        assert!(
            dims.x > 0 && dims.y > 0 && dims.z > 0,
            "box dimensions must be positive, got {dims:?}"
        );
        BoxGrid {
            dims,
            cells: vec![None; dims.volume()],
            placements: Vec::new(),
            filled: 0,
        }
    }

    pub fn dims(&self) -> Size {
        self.dims
    }

    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Placements in push order (deepest first).
    pub fn placements(&self) -> &[PlacedPiece<'a>] {
        &self.placements
    }

    /// Raw occupancy in row-major order, for snapshotting.
    pub(crate) fn cells(&self) -> &[Option<PieceId>] {
        &self.cells
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        self.dims.contains(p)
    }

    /// Occupant of an in-bounds cell, or `None` when empty.
    pub fn occupant(&self, p: Point) -> Option<PieceId> {
        assert!(self.in_bounds(p), "cell {p:?} outside {:?}", self.dims);
        self.cells[self.dims.index_of(p)]
    }

    pub fn is_occupied(&self, p: Point) -> bool {
        self.occupant(p).is_some()
    }

    /// Places `shape` translated by `anchor`, marking every covered cell
    /// with `piece` and pushing onto the placement stack.
    ///
    /// The check and the commit are atomic per call: if any covered cell is
    /// out of bounds or already occupied, the grid is left untouched and the
    /// call returns `false`.
    pub fn try_place(&mut self, piece: PieceId, shape: &'a Shape, anchor: Point) -> bool {
        for &p in shape.points() {
            let cell = anchor + p;
            if !self.in_bounds(cell) || self.is_occupied(cell) {
                return false;
            }
        }
        for &p in shape.points() {
            let index = self.dims.index_of(anchor + p);
            self.cells[index] = Some(piece);
        }
        self.filled += shape.cell_count();
        self.placements.push(PlacedPiece {
            piece,
            shape,
            anchor,
        });
        true
    }

    /// Pops the most recent placement and clears its cells.
    ///
    /// # Panics
    ///
    /// If the stack is empty, or a cleared cell is not owned by the popped
    /// piece. Either means the caller broke the push/pop discipline, and
    /// continuing would corrupt every later result.
    pub fn remove_last(&mut self) {
        let placed = self
            .placements
            .pop()
            .expect("remove_last called on an empty placement stack");
        for cell in placed.cells() {
            let index = self.dims.index_of(cell);
            assert_eq!(
                self.cells[index],
                Some(placed.piece),
                "cell {cell:?} is not owned by the piece being removed"
            );
            self.cells[index] = None;
        }
        self.filled -= placed.shape.cell_count();
    }

    /// First empty cell at or after `from` in row-major order, or `None` if
    /// everything from `from` onward is filled.
    ///
    /// `from` is a resume cursor: cells before it are never revisited, so the
    /// caller must guarantee they are already occupied (the solver threads
    /// [`BoxGrid::next_scan_position`] through its recursion for exactly this
    /// reason). The cursor may be the one-past-the-end position produced by
    /// wrapping off the last cell.
    pub fn find_next_empty_cell(&self, from: Point) -> Option<Point> {
        if from.x >= self.dims.x {
            return None;
        }
        let start = self.dims.index_of(from);
        self.cells[start..]
            .iter()
            .position(|cell| cell.is_none())
            .map(|offset| self.dims.point_at(start + offset))
    }

    /// The cell immediately after `cell` in row-major order. The innermost
    /// axis wraps into the next outer one; stepping past the final cell
    /// yields `(dims.x, 0, 0)`, which the scan treats as "no cells left".
    pub fn next_scan_position(&self, cell: Point) -> Point {
        let mut next = cell;
        next.z += 1;
        if next.z == self.dims.z {
            next.z = 0;
            next.y += 1;
            if next.y == self.dims.y {
                next.y = 0;
                next.x += 1;
            }
        }
        next
    }
}
