//! Canonical polycube shapes.
//!
//! A [`Shape`] is a set of unit-cube positions held in canonical form: the
//! minimum coordinate is zero on every axis and the points are sorted
//! ascending. Two rotation paths that land on the same point set therefore
//! compare equal, which is how symmetric pieces collapse to fewer than 24
//! orientations.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::geometry::{self, Point, Size};

/// An immutable canonical point set with its bounding-box extents.
#[derive(Clone, Debug)]
pub struct Shape {
    /// Sorted ascending; the first entry is the lexicographic minimum.
    points: Vec<Point>,
    size: Size,
}

impl Shape {
    /// Builds a shape from arbitrary (possibly unsorted, possibly offset)
    /// points and canonicalizes it. Duplicate points collapse.
    ///
    /// # Panics
    ///
    /// If `points` is empty. A piece with no cells is rejected during puzzle
    /// validation before any `Shape` is built.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(!points.is_empty(), "a shape must contain at least one point");
        let mut shape = Shape {
            points,
            size: Size::new(0, 0, 0),
        };
        shape.normalize();
        shape
    }

    /// Translates so the minimum coordinate per axis is zero, sorts and
    /// dedups the points, and recomputes the bounding box.
    fn normalize(&mut self) {
        let min_x = self.points.iter().map(|p| p.x).min().unwrap();
        let min_y = self.points.iter().map(|p| p.y).min().unwrap();
        let min_z = self.points.iter().map(|p| p.z).min().unwrap();
        for p in &mut self.points {
            p.x -= min_x;
            p.y -= min_y;
            p.z -= min_z;
        }
        self.points.sort();
        self.points.dedup();

        let max_x = self.points.iter().map(|p| p.x).max().unwrap();
        let max_y = self.points.iter().map(|p| p.y).max().unwrap();
        let max_z = self.points.iter().map(|p| p.z).max().unwrap();
        self.size = Size::new(max_x + 1, max_y + 1, max_z + 1);
    }

    /// Applies one point transform to every cell and re-canonicalizes.
    pub fn transform(&self, rotate: fn(Point) -> Point) -> Shape {
        Shape::new(self.points.iter().map(|&p| rotate(p)).collect())
    }

    /// Rotated 90 degrees around the X axis.
    pub fn rotate_x(&self) -> Shape {
        self.transform(geometry::rotate_x)
    }

    /// Rotated 90 degrees around the Y axis.
    pub fn rotate_y(&self) -> Shape {
        self.transform(geometry::rotate_y)
    }

    /// Rotated 90 degrees around the Z axis.
    pub fn rotate_z(&self) -> Shape {
        self.transform(geometry::rotate_z)
    }

    /// The canonical (sorted) point sequence.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The lexicographically smallest point. The solver anchors this cell
    /// onto the scan's next empty cell.
    pub fn min_point(&self) -> Point {
        self.points[0]
    }

    /// Number of unit cubes in the shape.
    pub fn cell_count(&self) -> usize {
        self.points.len()
    }

    /// Bounding-box extents (max coordinate + 1 per axis).
    pub fn size(&self) -> Size {
        self.size
    }
}

// Equality, ordering and hashing consider only the canonical point sequence;
// `size` is derived from it.

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Eq for Shape {}

impl PartialOrd for Shape {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Shape {
    fn cmp(&self, other: &Self) -> Ordering {
        self.points.cmp(&other.points)
    }
}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points.hash(state);
    }
}
