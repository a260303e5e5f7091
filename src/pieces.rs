//! Piece definitions, orientation sets, and the puzzle input contract.
//!
//! A puzzle hands the solver a box size and one [`PieceDef`] per logical
//! piece. Each definition is expanded once into an [`OrientationSet`] of
//! geometrically distinct rotations; the sets are immutable for the rest of
//! the search.

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::geometry::{Point, Size, ROTATIONS};
use crate::shape::Shape;

/// Identifies a logical piece (not an orientation). Cell occupancy and the
/// used-at-most-once rule are both keyed by this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u8);

/// One piece of the catalog: an id plus a point set giving some orientation
/// of the piece. Points may be arbitrary; canonicalization happens inside.
#[derive(Clone, Debug)]
pub struct PieceDef {
    pub id: PieceId,
    pub points: Vec<Point>,
    /// When set, the piece is restricted to the given orientation and its
    /// rotations are never generated. Pinning one piece of a symmetric
    /// puzzle is the usual way to cut rotationally redundant solutions.
    pub pinned: bool,
}

impl PieceDef {
    pub fn new(id: PieceId, points: Vec<Point>) -> Self {
        PieceDef {
            id,
            points,
            pinned: false,
        }
    }

    /// A piece fixed in the exact orientation given by `points`.
    pub fn pinned(id: PieceId, points: Vec<Point>) -> Self {
        PieceDef {
            id,
            points,
            pinned: true,
        }
    }
}

/// Every geometrically distinct orientation of one piece, canonicalized,
/// deduplicated and sorted. Symmetric pieces yield fewer than 24 entries.
#[derive(Clone, Debug)]
pub struct OrientationSet {
    id: PieceId,
    shapes: Vec<Shape>,
}

impl OrientationSet {
    /// Expands a piece definition into its distinct orientations.
    ///
    /// `max_height` drops orientations whose bounding box is taller than the
    /// target box. This is a sound pruning step only because the box height
    /// is exact: a taller orientation can never be placed anywhere.
    ///
    /// # Panics
    ///
    /// If the definition has no points; validate the puzzle first.
    pub fn build(def: &PieceDef, max_height: Option<i32>) -> Self {
        let base = Shape::new(def.points.clone());
        let mut shapes: Vec<Shape> = if def.pinned {
            vec![base]
        } else {
            let distinct: FxHashSet<Shape> =
                ROTATIONS.iter().map(|&rotate| base.transform(rotate)).collect();
            distinct.into_iter().collect()
        };
        if let Some(height) = max_height {
            shapes.retain(|shape| shape.size().z <= height);
        }
        // canonical-sort order fixes the iteration order of the search
        shapes.sort();
        OrientationSet {
            id: def.id,
            shapes,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Orientations in canonical-sort order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// A puzzle definition: box dimensions plus an ordered piece catalog.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub dims: Size,
    pub pieces: Vec<PieceDef>,
}

impl Puzzle {
    pub fn new(dims: Size, pieces: Vec<PieceDef>) -> Self {
        Puzzle { dims, pieces }
    }

    /// Checks the definition before any search work is done.
    pub fn validate(&self) -> Result<()> {
        if self.dims.x <= 0 || self.dims.y <= 0 || self.dims.z <= 0 {
            return Err(Error::InvalidDimensions(
                self.dims.x,
                self.dims.y,
                self.dims.z,
            ));
        }
        if self.pieces.len() > 32 {
            return Err(Error::TooManyPieces(self.pieces.len()));
        }
        let mut seen = FxHashSet::default();
        for def in &self.pieces {
            if def.points.is_empty() {
                return Err(Error::EmptyPiece(def.id));
            }
            if !seen.insert(def.id) {
                return Err(Error::DuplicatePiece(def.id));
            }
        }
        Ok(())
    }

    /// Builds one orientation set per piece, in catalog order, filtered by
    /// the box height.
    pub fn orientation_sets(&self) -> Vec<OrientationSet> {
        self.pieces
            .iter()
            .map(|def| {
                let set = OrientationSet::build(def, Some(self.dims.z));
                debug!(
                    "piece {:?}: {} orientation(s){}",
                    def.id,
                    set.len(),
                    if def.pinned { " (pinned)" } else { "" }
                );
                set
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(cells: &[(i32, i32, i32)]) -> Vec<Point> {
        cells.iter().map(|&(x, y, z)| Point::new(x, y, z)).collect()
    }

    #[test]
    fn unit_cube_has_one_orientation() {
        let def = PieceDef::new(PieceId(0), points(&[(0, 0, 0)]));
        assert_eq!(OrientationSet::build(&def, None).len(), 1);
    }

    #[test]
    fn domino_has_three_orientations() {
        // one per axis it can lie along
        let def = PieceDef::new(PieceId(0), points(&[(0, 0, 0), (1, 0, 0)]));
        assert_eq!(OrientationSet::build(&def, None).len(), 3);
    }

    #[test]
    fn orientation_count_is_within_group_bound() {
        let pieces = [
            points(&[(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1)]),
            points(&[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 0, 1)]),
            points(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1), (1, 0, 1), (0, 1, 1)]),
        ];
        for (i, cells) in pieces.into_iter().enumerate() {
            let set = OrientationSet::build(&PieceDef::new(PieceId(i as u8), cells), None);
            assert!((1..=24).contains(&set.len()));
        }
    }

    #[test]
    fn set_is_closed_under_regeneration() {
        // rebuilding from any member reproduces the same set
        let def = PieceDef::new(PieceId(1), points(&[(0, 0, 0), (1, 0, 0), (1, 1, 0)]));
        let set = OrientationSet::build(&def, None);
        for member in set.shapes() {
            let regenerated = OrientationSet::build(
                &PieceDef::new(PieceId(1), member.points().to_vec()),
                None,
            );
            assert_eq!(regenerated.shapes(), set.shapes());
        }
    }

    #[test]
    fn orientations_are_sorted_and_distinct() {
        let def = PieceDef::new(
            PieceId(2),
            points(&[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (2, 1, 1)]),
        );
        let set = OrientationSet::build(&def, None);
        for pair in set.shapes().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn height_filter_drops_tall_orientations() {
        // a straight tricube has 3 orientations; capping the height at 2
        // removes the upright one
        let def = PieceDef::new(PieceId(0), points(&[(0, 0, 0), (0, 0, 1), (0, 0, 2)]));
        assert_eq!(OrientationSet::build(&def, None).len(), 3);
        let capped = OrientationSet::build(&def, Some(2));
        assert_eq!(capped.len(), 2);
        assert!(capped.shapes().iter().all(|s| s.size().z <= 2));
    }

    #[test]
    fn pinned_piece_keeps_a_single_orientation() {
        let def = PieceDef::pinned(PieceId(3), points(&[(0, 0, 0), (1, 0, 0)]));
        let set = OrientationSet::build(&def, None);
        assert_eq!(set.len(), 1);
        assert_eq!(set.shapes()[0], Shape::new(points(&[(0, 0, 0), (1, 0, 0)])));
    }

    #[test]
    fn validate_rejects_bad_definitions() {
        let unit = points(&[(0, 0, 0)]);
        let puzzle = Puzzle::new(Size::new(0, 1, 1), vec![]);
        assert_eq!(puzzle.validate(), Err(Error::InvalidDimensions(0, 1, 1)));

        let puzzle = Puzzle::new(
            Size::new(1, 1, 1),
            vec![PieceDef::new(PieceId(0), Vec::new())],
        );
        assert_eq!(puzzle.validate(), Err(Error::EmptyPiece(PieceId(0))));

        let puzzle = Puzzle::new(
            Size::new(2, 1, 1),
            vec![
                PieceDef::new(PieceId(0), unit.clone()),
                PieceDef::new(PieceId(0), unit.clone()),
            ],
        );
        assert_eq!(puzzle.validate(), Err(Error::DuplicatePiece(PieceId(0))));

        let many = (0..33)
            .map(|i| PieceDef::new(PieceId(i as u8), unit.clone()))
            .collect();
        let puzzle = Puzzle::new(Size::new(33, 1, 1), many);
        assert_eq!(puzzle.validate(), Err(Error::TooManyPieces(33)));
    }
}
