//! Convex hull algorithms.
//!
//! Two independent constructions are provided:
//!
//! - [`gift_wrapping`] - Jarvis march driven by the smallest turning angle
//! - [`graham_scan`] - angular sort around the lowest point plus a stack sweep
//!
//! Both return inputs of two or fewer points unchanged.
//!
//! # Example
//!
//! ```
//! use planum::hull::{gift_wrapping, graham_scan, hull_area};
//! use planum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(2.0, 1.0), // Interior point
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! let wrapped = gift_wrapping(&points);
//! let scanned = graham_scan(&points);
//!
//! assert_eq!(wrapped.len(), 4);
//! assert_eq!(scanned.len(), 4);
//! assert_eq!(hull_area(&wrapped), hull_area(&scanned));
//! ```

use crate::predicates::{cross, is_left_turn, lowest_point_index};
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull by gift wrapping.
///
/// The walk starts at the lowest point (minimum y, then minimum x) with an
/// auxiliary previous point one unit to its right, so the initial direction
/// points left. Each step picks, among the points not yet taken, the one
/// with the smallest angle between the current direction and the direction
/// to the candidate. Exact ties go to the point that comes first in input
/// order. The walk ends when the start point is picked again.
///
/// # Complexity
///
/// - Time: O(n·h) where h is the number of hull vertices
/// - Space: O(n)
///
/// # Returns
///
/// The hull traversed clockwise. The first element is the successor of the
/// lowest point and the last element is the lowest point itself. Inputs with
/// two or fewer points are returned unchanged.
///
/// # Example
///
/// ```
/// use planum::hull::gift_wrapping;
/// use planum::Point2;
///
/// let square: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let hull = gift_wrapping(&square);
/// assert_eq!(
///     hull,
///     vec![
///         Point2::new(0.0, 4.0),
///         Point2::new(4.0, 4.0),
///         Point2::new(4.0, 0.0),
///         Point2::new(0.0, 0.0),
///     ]
/// );
/// ```
pub fn gift_wrapping<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let Some(start_index) = lowest_point_index(points) else {
        return points.to_vec();
    };

    let start = points[start_index];
    let mut remaining: Vec<Point2<F>> = points.to_vec();
    let mut current = start;
    let mut previous = start + Vec2::unit_x();
    let mut hull = Vec::new();

    loop {
        let direction = current - previous;

        let mut best: Option<(usize, F)> = None;
        for (i, &candidate) in remaining.iter().enumerate() {
            if candidate == current {
                continue;
            }
            let angle = direction.angle_degrees(candidate - current);
            match best {
                Some((_, best_angle)) if angle >= best_angle => {}
                _ => best = Some((i, angle)),
            }
        }

        let Some((index, _)) = best else {
            // Every remaining point coincides with the current one.
            tracing::warn!(
                taken = hull.len(),
                "gift wrapping ran out of candidates before closing the hull"
            );
            break;
        };

        let next = remaining.remove(index);
        hull.push(next);
        previous = current;
        current = next;

        if next == start {
            break;
        }
    }

    tracing::debug!(
        input = points.len(),
        hull = hull.len(),
        "gift wrapping finished"
    );
    hull
}

/// Computes the convex hull with a Graham scan.
///
/// The lowest point is the pivot. Every other point is keyed by the angle
/// between `(1, 0)` and its offset from the pivot. When two points share an
/// angle exactly, only the farther one takes part in the scan. The survivors
/// are sorted by angle and swept with a stack that pops while the last two
/// stack entries and the candidate fail to make a left turn. Collinear turns
/// count as left turns, so collinear boundary points are kept.
///
/// # Complexity
///
/// - Time: O(n²) for the exact-angle bookkeeping, O(n log n) for the sweep
/// - Space: O(n)
///
/// # Returns
///
/// The hull counter-clockwise, starting at the pivot (stack bottom to top).
/// Inputs with two or fewer points are returned unchanged.
///
/// # Example
///
/// ```
/// use planum::hull::graham_scan;
/// use planum::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 4.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(1.0, 2.0), // Interior point
/// ];
///
/// let hull = graham_scan(&points);
/// assert_eq!(
///     hull,
///     vec![
///         Point2::new(0.0, 0.0),
///         Point2::new(4.0, 0.0),
///         Point2::new(4.0, 4.0),
///         Point2::new(0.0, 4.0),
///     ]
/// );
/// ```
pub fn graham_scan<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let Some(pivot_index) = lowest_point_index(points) else {
        return points.to_vec();
    };
    let pivot = points[pivot_index];
    let reference = Vec2::unit_x();

    // (angle, distance from pivot, point); one entry per distinct angle
    let mut candidates: Vec<(F, F, Point2<F>)> = Vec::new();
    for &p in points {
        if p == pivot {
            continue;
        }
        let offset = p - pivot;
        let angle = reference.angle_degrees(offset);
        let distance = offset.magnitude();

        match candidates.iter_mut().find(|(a, _, _)| *a == angle) {
            Some(entry) => {
                if entry.1 < distance {
                    *entry = (angle, distance, p);
                }
            }
            None => candidates.push((angle, distance, p)),
        }
    }

    if candidates.is_empty() {
        tracing::warn!(input = points.len(), "graham scan input collapses to one point");
        return vec![pivot];
    }

    candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut stack: Vec<Point2<F>> = Vec::with_capacity(candidates.len() + 1);
    stack.push(pivot);
    stack.push(candidates[0].2);

    for &(_, _, next) in &candidates[1..] {
        while stack.len() >= 2
            && !is_left_turn(stack[stack.len() - 2], stack[stack.len() - 1], next)
        {
            stack.pop();
        }
        stack.push(next);
    }

    tracing::debug!(
        input = points.len(),
        candidates = candidates.len(),
        hull = stack.len(),
        "graham scan finished"
    );
    stack
}

/// Computes the area enclosed by a hull.
///
/// Uses the shoelace formula, so the vertex order may be clockwise or
/// counter-clockwise.
///
/// # Returns
///
/// The area of the hull. Returns 0 for fewer than 3 vertices.
pub fn hull_area<F: Float>(hull: &[Point2<F>]) -> F {
    if hull.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = hull.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + hull[i].x * hull[j].y;
        area = area - hull[j].x * hull[i].y;
    }

    area.abs() / (F::one() + F::one())
}

/// Tests if a point is inside a convex hull.
///
/// A point on the boundary is considered inside. Works for hulls in either
/// orientation, which covers both [`gift_wrapping`] and [`graham_scan`] output.
///
/// # Returns
///
/// `true` if the point is inside or on the boundary of the hull. Always
/// `false` for fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use planum::hull::{gift_wrapping, point_in_hull};
/// use planum::Point2;
///
/// let hull = gift_wrapping(&[
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
///
/// assert!(point_in_hull(&hull, Point2::new(1.0, 1.0))); // Center
/// assert!(point_in_hull(&hull, Point2::new(0.0, 0.0))); // Corner
/// assert!(!point_in_hull(&hull, Point2::new(3.0, 3.0))); // Outside
/// ```
pub fn point_in_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    if hull.len() < 3 {
        return false;
    }

    let n = hull.len();
    let (mut left, mut right) = (false, false);
    for i in 0..n {
        let j = (i + 1) % n;
        let c = cross(hull[i], hull[j], point);
        if c > F::zero() {
            left = true;
        } else if c < F::zero() {
            right = true;
        }
        if left && right {
            return false;
        }
    }

    true
}

/// Joins consecutive points into a closed outline.
///
/// The first segment runs from the last point to the first, followed by one
/// segment per successive pair. This is how hulls and raw polygons are turned
/// into drawable line sets.
///
/// # Returns
///
/// `points.len()` segments, or none for one point or fewer.
pub fn closed_polyline<F: Float>(points: &[Point2<F>]) -> Vec<Segment2<F>> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };
    if points.len() == 1 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len());
    let mut previous = last;
    for &p in points {
        segments.push(Segment2::new(previous, p));
        previous = p;
    }
    segments
}
