//! Backtracking search over the occupancy grid.
//!
//! At each recursion level the engine locates the first uncovered cell in
//! row-major order and tries, for every still-available piece and every one
//! of its orientations, a single anchor: the one that lands the orientation's
//! canonically smallest point exactly on that cell.
//!
//! That single anchor is complete, not a heuristic. The scan always returns
//! the lexicographically first empty cell, and a canonical shape's first
//! point is its minimum in the same order. Any placement covering the empty
//! cell must put its minimum point at or before it; cells strictly before are
//! already occupied, so the minimum point must land on the empty cell itself.
//! The argument holds only because cell-scan order and point-sort order are
//! the same total order (see [`crate::geometry::Size::index_of`]).

use std::ops::ControlFlow;

use log::debug;

use crate::error::Result;
use crate::geometry::{Point, Size};
use crate::grid::BoxGrid;
use crate::pieces::{OrientationSet, PieceId, Puzzle};
use crate::shape::Shape;

/// One placed piece of a finished solution.
#[derive(Clone, Debug)]
pub struct Placement {
    pub piece: PieceId,
    pub shape: Shape,
    pub anchor: Point,
}

/// An immutable snapshot of the grid taken at the moment every piece was
/// placed: the full occupancy plus the placement list in search order.
#[derive(Clone, Debug)]
pub struct Solution {
    dims: Size,
    cells: Vec<Option<PieceId>>,
    placements: Vec<Placement>,
}

impl Solution {
    fn capture(grid: &BoxGrid) -> Self {
        Solution {
            dims: grid.dims(),
            cells: grid.cells().to_vec(),
            placements: grid
                .placements()
                .iter()
                .map(|placed| Placement {
                    piece: placed.piece,
                    shape: placed.shape.clone(),
                    anchor: placed.anchor,
                })
                .collect(),
        }
    }

    pub fn dims(&self) -> Size {
        self.dims
    }

    /// Placements in the order the search made them.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Occupant of a cell, or `None` for an uncovered cell (which a genuine
    /// solution never has).
    pub fn occupant(&self, p: Point) -> Option<PieceId> {
        assert!(self.dims.contains(p), "cell {p:?} outside {:?}", self.dims);
        self.cells[self.dims.index_of(p)]
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

/// Runs the exhaustive search, handing each solution to `sink` as it is
/// found. The sink returns [`ControlFlow::Break`] to stop early; whether to
/// keep the first solution, all of them, or a capped count is entirely the
/// consumer's decision.
///
/// Fails fast on an invalid puzzle definition, before any search work.
pub fn solve_with<F>(puzzle: &Puzzle, mut sink: F) -> Result<()>
where
    F: FnMut(Solution) -> ControlFlow<()>,
{
    puzzle.validate()?;
    let sets = puzzle.orientation_sets();
    let available = if sets.is_empty() {
        0
    } else {
        u32::MAX >> (32 - sets.len())
    };
    let mut grid = BoxGrid::new(puzzle.dims);
    search(&sets, available, &mut grid, Point::ORIGIN, &mut sink);
    Ok(())
}

/// Convenience wrapper collecting up to `max_solutions` solutions (all of
/// them when `None`).
pub fn solve(puzzle: &Puzzle, max_solutions: Option<usize>) -> Result<Vec<Solution>> {
    let mut solutions = Vec::new();
    solve_with(puzzle, |solution| {
        solutions.push(solution);
        match max_solutions {
            Some(max) if solutions.len() >= max => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    })?;
    Ok(solutions)
}

/// One recursion level: fill the next empty cell with any available piece.
///
/// `available` is a per-frame copy of the piece-availability bitmask, so
/// undoing a branch is just returning to the caller's copy. `scan_from` is
/// the resume cursor for the empty-cell scan; everything before it is known
/// to be occupied.
fn search<'a, F>(
    sets: &'a [OrientationSet],
    available: u32,
    grid: &mut BoxGrid<'a>,
    scan_from: Point,
    sink: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(Solution) -> ControlFlow<()>,
{
    if available == 0 {
        // all pieces placed; a genuine tiling also has no holes left, which
        // only a volume-mismatched catalog can violate
        if grid.is_full() {
            debug!("solution found: {} placements", grid.placements().len());
            return sink(Solution::capture(grid));
        }
        return ControlFlow::Continue(());
    }

    let Some(empty_cell) = grid.find_next_empty_cell(scan_from) else {
        // box full but pieces remain: over-volume catalog, dead end
        return ControlFlow::Continue(());
    };
    let next_from = grid.next_scan_position(empty_cell);

    for (index, set) in sets.iter().enumerate() {
        if available & (1u32 << index) == 0 {
            continue;
        }
        for shape in set.shapes() {
            // force the canonically smallest point onto the empty cell
            let anchor = empty_cell - shape.min_point();
            if grid.try_place(set.id(), shape, anchor) {
                let flow = search(sets, available & !(1u32 << index), grid, next_from, sink);
                grid.remove_last();
                flow?;
            }
        }
    }

    // no piece fits this cell: implicit backtrack
    ControlFlow::Continue(())
}
