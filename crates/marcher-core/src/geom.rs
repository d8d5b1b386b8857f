//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! A [`Bounds`] describes a `width × height` grid anchored at the origin and
//! owns the bijection between 2D coordinates and the linear cell index
//! `x + y * width` used everywhere else in the workspace.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (image coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a `width × height` grid whose top-left cell is (0, 0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    /// Create bounds for a `width × height` grid.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells. Saturates instead of overflowing.
    #[inline]
    pub const fn len(self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Whether the grid has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Flat index of `p`, or `None` when `p` is outside the grid.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize + p.y as usize * self.width)
    }

    /// Coordinates of flat index `idx`.
    ///
    /// The caller must pass an index below [`len`](Self::len); larger
    /// indices map to points outside the grid.
    #[inline]
    pub fn point_of(self, idx: usize) -> Point {
        debug_assert!(self.width > 0, "point_of on zero-width bounds");
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Row-major iterator over every point of the grid.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.point_of(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.bounds.len().saturating_sub(self.next);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for BoundsIter {}
