//! Geometric predicates shared by every algorithm in the crate.
//!
//! All tests use plain floating-point arithmetic. There is no tolerance and
//! no robust fallback: collinear triples count as left turns, and degenerate
//! circumcircles produce non-finite values instead of errors.

use crate::error::GeometryError;
use crate::primitives::{Circle2, Point2, Segment2};
use num_traits::Float;

/// Cross product of vectors OA and OB where O is the origin point.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
pub fn cross<F: Float>(o: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (a - o).cross(b - o)
}

/// Returns the index of the lowest point: minimum y, ties broken by minimum x.
///
/// The first occurrence wins when several points are identical.
/// Returns `None` for an empty slice.
pub fn lowest_point_index<F: Float>(points: &[Point2<F>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let q = points[b];
                if p.y < q.y || (p.y == q.y && p.x < q.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Returns the point with minimum y, ties broken by minimum x.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyInput`] if `points` is empty.
///
/// # Example
///
/// ```
/// use planum::predicates::find_lowest_point;
/// use planum::Point2;
///
/// let points = vec![
///     Point2::new(3.0_f64, 1.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(-1.0, 0.0),
/// ];
/// assert_eq!(find_lowest_point(&points).unwrap(), Point2::new(-1.0, 0.0));
/// assert!(find_lowest_point::<f64>(&[]).is_err());
/// ```
pub fn find_lowest_point<F: Float>(points: &[Point2<F>]) -> Result<Point2<F>, GeometryError> {
    lowest_point_index(points)
        .map(|i| points[i])
        .ok_or(GeometryError::EmptyInput)
}

/// Tests whether `p1 -> p2 -> p3` turns left.
///
/// Computes the sign of `(p2 - p1) × (p3 - p1)`. Collinear triples (zero
/// cross product) count as a left turn.
#[inline]
pub fn is_left_turn<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> bool {
    cross(p1, p2, p3) >= F::zero()
}

/// Tests whether `p` lies strictly to the left of the directed segment.
///
/// Points on the supporting line are not to the left.
#[inline]
pub fn is_strictly_left<F: Float>(segment: Segment2<F>, p: Point2<F>) -> bool {
    cross(segment.start, segment.end, p) > F::zero()
}

/// Computes the circle through `edge_start`, `edge_end` and `point`.
///
/// The center is the intersection of the perpendicular bisectors of
/// `point - edge_start` and `point - edge_end`, solved as a 2×2 linear system
/// with Cramer's rule. The radius is the distance from the center to `point`.
///
/// Collinear points make the system singular. The division by zero is not
/// intercepted: the returned center and radius are infinite or NaN.
///
/// # Example
///
/// ```
/// use planum::predicates::circumscribed_circle;
/// use planum::Point2;
///
/// let circle = circumscribed_circle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
/// );
/// assert_eq!(circle.center, Point2::new(2.0, 2.0));
/// assert!((circle.radius - 8.0_f64.sqrt()).abs() < 1e-12);
///
/// let degenerate = circumscribed_circle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 0.0),
/// );
/// assert!(!degenerate.is_finite());
/// ```
pub fn circumscribed_circle<F: Float>(
    edge_start: Point2<F>,
    edge_end: Point2<F>,
    point: Point2<F>,
) -> Circle2<F> {
    let two = F::one() + F::one();

    let v1 = point - edge_start;
    let v2 = point - edge_end;

    let mid1 = edge_start + v1 / two;
    let mid2 = edge_end + v2 / two;

    // Bisector i: a_i * x + b_i * y = c_i
    let (a1, b1) = (v1.x, v1.y);
    let c1 = a1 * mid1.x + b1 * mid1.y;
    let (a2, b2) = (v2.x, v2.y);
    let c2 = a2 * mid2.x + b2 * mid2.y;

    let d = a1 * b2 - a2 * b1;
    let dx = c1 * b2 - c2 * b1;
    let dy = a1 * c2 - a2 * c1;

    let center = Point2::new(dx / d, dy / d);
    Circle2::new(center, center.distance(point))
}
