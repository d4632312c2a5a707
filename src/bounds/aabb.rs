//! Axis-aligned bounding box.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Used as the cell of a k-d tree
/// node when its partition lines are extracted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates the square `[-half_extent, half_extent]²` centered on the origin.
    #[inline]
    pub fn centered(half_extent: F) -> Self {
        Self {
            min: Point2::new(-half_extent, -half_extent),
            max: Point2::new(half_extent, half_extent),
        }
    }

    /// Vertical line `x = x` spanning the box height, bottom to top.
    #[inline]
    pub fn vertical_line(self, x: F) -> Segment2<F> {
        Segment2::new(Point2::new(x, self.min.y), Point2::new(x, self.max.y))
    }

    /// Horizontal line `y = y` spanning the box width, left to right.
    #[inline]
    pub fn horizontal_line(self, y: F) -> Segment2<F> {
        Segment2::new(Point2::new(self.min.x, y), Point2::new(self.max.x, y))
    }

    /// Splits the box at `x` into its left and right parts.
    #[inline]
    pub fn split_at_x(self, x: F) -> (Self, Self) {
        (
            Self::new(self.min, Point2::new(x, self.max.y)),
            Self::new(Point2::new(x, self.min.y), self.max),
        )
    }

    /// Splits the box at `y` into its lower and upper parts.
    #[inline]
    pub fn split_at_y(self, y: F) -> (Self, Self) {
        (
            Self::new(self.min, Point2::new(self.max.x, y)),
            Self::new(Point2::new(self.min.x, y), self.max),
        )
    }
}
