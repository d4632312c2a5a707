//! Median-split k-d tree over 2D points.
//!
//! The tree is built once and never mutated. Each node stores one input
//! point and splits the plane through it, alternating between a vertical
//! split (by x) at even depths and a horizontal split (by y) at odd depths.
//!
//! # Example
//!
//! ```
//! use planum::{Point2, spatial::KdTree};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(2.0, 3.0),
//!     Point2::new(5.0, 4.0),
//!     Point2::new(9.0, 6.0),
//!     Point2::new(4.0, 7.0),
//!     Point2::new(8.0, 1.0),
//!     Point2::new(7.0, 2.0),
//! ];
//!
//! let tree = KdTree::build(&points);
//! let root = tree.root().unwrap();
//!
//! assert_eq!(tree.len(), 6);
//! assert!(root.is_vertical());
//! assert_eq!(root.point(), Point2::new(7.0, 2.0));
//! ```

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cmp::Ordering;

/// A node of the k-d tree.
///
/// A node owns its children outright; there are no parent links.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KdNode<F> {
    point: Point2<F>,
    vertical: bool,
    left: Option<Box<KdNode<F>>>,
    right: Option<Box<KdNode<F>>>,
}

impl<F: Float> KdNode<F> {
    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> Point2<F> {
        self.point
    }

    /// `true` if this node partitions by x, `false` if by y.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Subtree with coordinates before the node's point on the split axis.
    #[inline]
    pub fn left(&self) -> Option<&KdNode<F>> {
        self.left.as_deref()
    }

    /// Subtree with coordinates after the node's point on the split axis.
    #[inline]
    pub fn right(&self) -> Option<&KdNode<F>> {
        self.right.as_deref()
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Coordinate of the node's point on its own split axis.
    #[inline]
    pub fn split_value(&self) -> F {
        if self.vertical {
            self.point.x
        } else {
            self.point.y
        }
    }

    fn count(&self) -> usize {
        1 + self.left().map_or(0, KdNode::count) + self.right().map_or(0, KdNode::count)
    }

    fn height(&self) -> usize {
        1 + self
            .left()
            .map_or(0, KdNode::height)
            .max(self.right().map_or(0, KdNode::height))
    }
}

/// A 2D k-d tree built by recursive median splits.
///
/// # Construction
///
/// At depth `d` the points are sorted by x (ties by y) when `d` is even and
/// by y (ties by x) when `d` is odd. The point at index `len / 2` becomes
/// the node, the points before it form the left subtree and the points after
/// it form the right subtree.
///
/// # Complexity
///
/// - Construction: O(n log² n)
/// - Depth: ⌊log₂ n⌋ + 1
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KdTree<F> {
    root: Option<Box<KdNode<F>>>,
    size: usize,
}

impl<F: Float> KdTree<F> {
    /// Builds a k-d tree whose root splits vertically.
    ///
    /// Returns an empty tree if the input is empty.
    pub fn build(points: &[Point2<F>]) -> Self {
        Self::build_from_depth(points, 0)
    }

    /// Builds a k-d tree as if its root sat at `depth`.
    ///
    /// The root splits vertically when `depth` is even and horizontally
    /// when it is odd.
    pub fn build_from_depth(points: &[Point2<F>], depth: usize) -> Self {
        if points.is_empty() {
            return KdTree {
                root: None,
                size: 0,
            };
        }

        let mut working: Vec<Point2<F>> = points.to_vec();
        let root = Self::build_recursive(&mut working, depth);

        tracing::debug!(
            points = points.len(),
            start_depth = depth,
            height = root.height(),
            "k-d tree built"
        );

        KdTree {
            root: Some(root),
            size: points.len(),
        }
    }

    /// Recursively builds the tree.
    fn build_recursive(points: &mut [Point2<F>], depth: usize) -> Box<KdNode<F>> {
        let vertical = depth % 2 == 0;

        if points.len() == 1 {
            return Box::new(KdNode {
                point: points[0],
                vertical,
                left: None,
                right: None,
            });
        }

        points.sort_by(|a, b| axis_order(*a, *b, vertical));

        let median = points.len() / 2;
        let point = points[median];
        let (before, rest) = points.split_at_mut(median);
        let after = &mut rest[1..];

        let left = if before.is_empty() {
            None
        } else {
            Some(Self::build_recursive(before, depth + 1))
        };

        let right = if after.is_empty() {
            None
        } else {
            Some(Self::build_recursive(after, depth + 1))
        };

        Box::new(KdNode {
            point,
            vertical,
            left,
            right,
        })
    }

    /// Returns the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&KdNode<F>> {
        self.root.as_deref()
    }

    /// Returns the number of points in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of levels in the tree (0 for an empty tree).
    pub fn depth(&self) -> usize {
        self.root().map_or(0, KdNode::height)
    }

    /// Counts the nodes by walking the tree.
    ///
    /// Always equal to [`len`](Self::len); exposed so callers can check it.
    pub fn node_count(&self) -> usize {
        self.root().map_or(0, KdNode::count)
    }

    /// Returns the stored points in pre-order (node, left, right).
    pub fn points(&self) -> Vec<Point2<F>> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack: Vec<&KdNode<F>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.point);
            if let Some(right) = node.right() {
                stack.push(right);
            }
            if let Some(left) = node.left() {
                stack.push(left);
            }
        }
        out
    }

    /// Returns the partition lines of every node clipped to its cell.
    ///
    /// The root cell is `bounds`. A vertical node contributes the line
    /// `x = point.x` across its cell and hands the part left of it to its
    /// left child. A horizontal node contributes `y = point.y` and hands the
    /// lower part to its left child. Lines come out in pre-order.
    ///
    /// # Example
    ///
    /// ```
    /// use planum::bounds::Aabb2;
    /// use planum::spatial::KdTree;
    /// use planum::{Point2, Segment2};
    ///
    /// let tree = KdTree::build(&[Point2::new(1.0_f64, 2.0), Point2::new(-3.0, -4.0)]);
    /// let lines = tree.split_segments(Aabb2::centered(10.0));
    ///
    /// assert_eq!(lines[0], Segment2::from_coords(1.0, -10.0, 1.0, 10.0));
    /// assert_eq!(lines[1], Segment2::from_coords(-10.0, -4.0, 1.0, -4.0));
    /// ```
    pub fn split_segments(&self, bounds: Aabb2<F>) -> Vec<Segment2<F>> {
        let mut segments = Vec::with_capacity(self.size);
        if let Some(root) = self.root() {
            Self::collect_splits(root, bounds, &mut segments);
        }
        segments
    }

    fn collect_splits(node: &KdNode<F>, cell: Aabb2<F>, out: &mut Vec<Segment2<F>>) {
        let (line, (before, after)) = if node.vertical {
            (cell.vertical_line(node.point.x), cell.split_at_x(node.point.x))
        } else {
            (
                cell.horizontal_line(node.point.y),
                cell.split_at_y(node.point.y),
            )
        };
        out.push(line);

        if let Some(left) = node.left() {
            Self::collect_splits(left, before, out);
        }
        if let Some(right) = node.right() {
            Self::collect_splits(right, after, out);
        }
    }
}

/// Orders two points on the active axis, breaking ties on the other one.
fn axis_order<F: Float>(a: Point2<F>, b: Point2<F>, vertical: bool) -> Ordering {
    let (a_primary, a_secondary, b_primary, b_secondary) = if vertical {
        (a.x, a.y, b.x, b.y)
    } else {
        (a.y, a.x, b.y, b.x)
    };
    a_primary
        .partial_cmp(&b_primary)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a_secondary.partial_cmp(&b_secondary).unwrap_or(Ordering::Equal))
}
