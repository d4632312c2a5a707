//! Delaunay triangulation by incremental half-edge growth.
//!
//! Instead of inserting points and flipping edges, the triangulation grows
//! outward from one seed edge. For every open edge the third vertex is the
//! point on its left that minimises the signed Delaunay distance, which picks
//! the triangle whose circumcircle holds no other point on that side.
//!
//! # Algorithm
//!
//! 1. Seed with the edge from the lowest point to its nearest neighbour
//!    (or its reverse when nothing lies to the left of it)
//! 2. Close a triangle over the seed and queue its open edges
//! 3. Pop an edge, look for a triangle on its other side; a new triangle's
//!    edges either pair with a queued reverse edge or are queued themselves
//! 4. Stop when the queue is empty; edges whose other side stayed empty form
//!    the convex hull
//!
//! # Complexity
//!
//! - Time: O(n²), every open edge scans every input point
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use planum::triangulation::delaunay_segments;
//! use planum::Point2;
//!
//! let square: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! // Four hull edges and one diagonal
//! let segments = delaunay_segments(&square).unwrap();
//! assert_eq!(segments.len(), 5);
//! ```

use std::collections::VecDeque;

use crate::error::GeometryError;
use crate::predicates::{circumscribed_circle, find_lowest_point, is_strictly_left};
use crate::primitives::{Point2, Segment2};
use crate::triangulation::HalfEdgeMesh;
use num_traits::Float;

/// Most half-edges the growth can create without closing a second triangle
/// over the same directed base edge: three per ordered pair of input points,
/// plus the seed triangle.
///
/// Ties between cocircular or collinear candidates can make the growth lay
/// overlapping triangles, so a finished mesh may hold more than the `6 n`
/// half-edges of a planar triangulation.
fn growth_bound(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
        .saturating_mul(3)
        .saturating_add(3)
}

/// Signed Delaunay distance of `point` over a directed edge.
///
/// The circumradius of `edge.start`, `edge.end` and `point`, negated when the
/// angle at `point` between the two endpoints exceeds 90 degrees (the
/// circumcenter then lies on the far side of the edge).
///
/// # Example
///
/// ```
/// use planum::triangulation::delaunay_distance;
/// use planum::{Point2, Segment2};
///
/// let edge = Segment2::from_coords(0.0_f64, 0.0, 4.0, 0.0);
///
/// // Acute apex: the plain circumradius
/// assert!((delaunay_distance(edge, Point2::new(2.0, 4.0)) - 2.5).abs() < 1e-12);
///
/// // Obtuse apex close to the edge: negative
/// assert!(delaunay_distance(edge, Point2::new(2.0, 1.0)) < 0.0);
/// ```
pub fn delaunay_distance<F: Float>(edge: Segment2<F>, point: Point2<F>) -> F {
    let radius = circumscribed_circle(edge.start, edge.end, point).radius;
    let a = edge.start - point;
    let b = edge.end - point;
    let right_angle = F::from(90.0).unwrap_or_else(|| F::zero().acos().to_degrees());
    if a.angle_degrees(b) > right_angle {
        -radius
    } else {
        radius
    }
}

/// Builds the Delaunay triangulation of `points` as a half-edge mesh.
///
/// Every half-edge belongs to one triangle. Interior edges appear twice as
/// twins, one of which is flagged as a help edge; hull edges have no twin.
///
/// # Returns
///
/// An empty mesh for fewer than 3 points.
///
/// # Errors
///
/// - [`GeometryError::DegenerateGeometry`] if every point coincides with the
///   lowest point, or if all points are collinear so no triangle can be seeded
/// - [`GeometryError::MeshGrowthDiverged`] if the growth keeps closing
///   triangles after every ordered pair of points has served as a base,
///   i.e. it is revisiting edges it already grew from
pub fn delaunay_mesh<F: Float>(points: &[Point2<F>]) -> Result<HalfEdgeMesh<F>, GeometryError> {
    grow_mesh(points, growth_bound(points.len()))
}

/// Runs the growth, failing once the mesh holds more than `max_half_edges`.
fn grow_mesh<F: Float>(
    points: &[Point2<F>],
    max_half_edges: usize,
) -> Result<HalfEdgeMesh<F>, GeometryError> {
    let mut mesh = HalfEdgeMesh::new();
    if points.len() < 3 {
        return Ok(mesh);
    }

    let lowest = find_lowest_point(points)?;
    let nearest = nearest_point(lowest, points).ok_or(GeometryError::DegenerateGeometry {
        reason: "all points coincide",
    })?;
    let seed = Segment2::new(lowest, nearest);

    let mut pending: VecDeque<usize> = VecDeque::new();
    match closest_apex(seed, points) {
        Some(apex) => {
            let base = mesh.push(seed);
            let (e1, e2) = mesh.close_triangle(base, apex);
            pending.extend([base, e1, e2]);
        }
        None => {
            let reversed = seed.reversed();
            let apex = closest_apex(reversed, points).ok_or_else(|| {
                tracing::warn!(points = points.len(), "no triangle on either side of the seed edge");
                GeometryError::DegenerateGeometry {
                    reason: "all points are collinear",
                }
            })?;
            tracing::debug!("seed edge has nothing on its left, growing from its reverse");
            let base = mesh.push(reversed);
            let (e1, e2) = mesh.close_triangle(base, apex);
            pending.extend([e1, e2]);
        }
    }

    while let Some(used) = pending.pop_front() {
        let reversed = mesh.edges()[used].segment.reversed();
        let Some(apex) = closest_apex(reversed, points) else {
            tracing::trace!(edge = used, "hull edge");
            continue;
        };

        let reverse = mesh.push(reversed);
        mesh.link_twins(used, reverse);
        mesh.mark_help(reverse);
        let (e1, e2) = mesh.close_triangle(reverse, apex);

        for edge in [e1, e2] {
            let segment = mesh.edges()[edge].segment;
            let matched = pending
                .iter()
                .position(|&queued| mesh.edges()[queued].segment.is_reverse_of(segment));
            match matched.and_then(|position| pending.remove(position)) {
                Some(earlier) => {
                    mesh.link_twins(earlier, edge);
                    mesh.mark_help(earlier);
                }
                None => pending.push_back(edge),
            }
        }

        if mesh.len() > max_half_edges {
            tracing::warn!(
                points = points.len(),
                half_edges = mesh.len(),
                "Delaunay growth revisited its base edges"
            );
            return Err(GeometryError::MeshGrowthDiverged {
                half_edges: mesh.len(),
            });
        }
    }

    tracing::debug!(
        points = points.len(),
        half_edges = mesh.len(),
        triangles = mesh.triangle_count(),
        "Delaunay mesh finished"
    );
    Ok(mesh)
}

/// Computes the Delaunay triangulation of `points` as drawable segments.
///
/// One segment per triangle edge: every half-edge of [`delaunay_mesh`]
/// except the help edges. Empty for fewer than 3 points.
///
/// # Errors
///
/// Same as [`delaunay_mesh`].
pub fn delaunay_segments<F: Float>(points: &[Point2<F>]) -> Result<Vec<Segment2<F>>, GeometryError> {
    Ok(delaunay_mesh(points)?.segments())
}

/// The point strictly left of `edge` with the smallest Delaunay distance.
///
/// Ties keep the first point. Candidates with a NaN or positive infinite
/// distance are never chosen.
fn closest_apex<F: Float>(edge: Segment2<F>, points: &[Point2<F>]) -> Option<Point2<F>> {
    let mut best = None;
    let mut best_distance = F::max_value();
    for &p in points.iter().filter(|&&p| is_strictly_left(edge, p)) {
        let distance = delaunay_distance(edge, p);
        if distance < best_distance {
            best = Some(p);
            best_distance = distance;
        }
    }
    best
}

/// The point closest to `from`, skipping copies of `from`. Ties keep the first.
fn nearest_point<F: Float>(from: Point2<F>, points: &[Point2<F>]) -> Option<Point2<F>> {
    let mut best = None;
    let mut best_distance = F::max_value();
    for &p in points.iter().filter(|&&p| p != from) {
        let distance = from.distance(p);
        if distance < best_distance {
            best = Some(p);
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::from_coords(x1, y1, x2, y2)
    }

    #[test]
    fn test_too_few_points() {
        assert!(delaunay_mesh::<f64>(&[]).unwrap().is_empty());
        let two = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0)];
        assert!(delaunay_segments(&two).unwrap().is_empty());
    }

    #[test]
    fn test_delaunay_distance_sign() {
        let edge = seg(0.0, 0.0, 2.0, 0.0);
        // Acute apex, circumcenter on the apex side
        let far = delaunay_distance(edge, Point2::new(1.0, 3.0));
        assert!(far > 0.0);
        // Obtuse apex
        let near = delaunay_distance(edge, Point2::new(1.0, 0.25));
        assert!(near < 0.0);
        assert!(near < far);
        assert_relative_eq!(delaunay_distance(edge, Point2::new(1.0, 2.0)), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_square_mesh() {
        let mesh = delaunay_mesh(&square()).unwrap();
        assert_eq!(mesh.len(), 6);
        assert_eq!(mesh.triangle_count(), 2);

        // Diagonal (4,4) -> (0,0) is twinned with its help reverse
        assert_eq!(mesh.edges()[2].segment, seg(4.0, 4.0, 0.0, 0.0));
        assert_eq!(mesh.edges()[3].segment, seg(0.0, 0.0, 4.0, 4.0));
        assert_eq!(mesh.twin(2), Some(3));
        assert_eq!(mesh.twin(3), Some(2));
        assert!(mesh.edges()[3].is_help);
        assert_eq!(mesh.boundary_edges().count(), 4);

        assert_eq!(
            delaunay_segments(&square()).unwrap(),
            vec![
                seg(0.0, 0.0, 4.0, 0.0),
                seg(4.0, 0.0, 4.0, 4.0),
                seg(4.0, 4.0, 0.0, 0.0),
                seg(4.0, 4.0, 0.0, 4.0),
                seg(0.0, 4.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_reversed_seed() {
        // The nearest neighbour of (0,0) is (0,3); nothing lies left of (0,0) -> (0,3).
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        ];
        let mesh = delaunay_mesh(&points).unwrap();
        assert_eq!(mesh.len(), 3);
        assert_eq!(mesh.edges()[0].segment, seg(0.0, 3.0, 0.0, 0.0));
        assert_eq!(mesh.boundary_edges().count(), 3);
        assert_eq!(mesh.segments().len(), 3);
    }

    #[test]
    fn test_fan_around_center() {
        let mut points = square();
        points.push(Point2::new(2.0, 2.0));

        let mesh = delaunay_mesh(&points).unwrap();
        assert_eq!(mesh.len(), 12);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.boundary_edges().count(), 4);
        assert_eq!(mesh.iter().filter(|e| e.is_help).count(), 4);

        let segments = mesh.segments();
        assert_eq!(segments.len(), 8);
        for corner in &points[..4] {
            assert!(segments
                .iter()
                .any(|s| s.same_endpoints(Segment2::new(*corner, Point2::new(2.0, 2.0)))));
        }
    }

    #[test]
    fn test_queued_twin_becomes_help_edge() {
        let mut points = square();
        points.push(Point2::new(2.0, 2.0));
        let mesh = delaunay_mesh(&points).unwrap();

        // (2,2) -> (4,4) was queued first and is hidden; its later twin stays.
        let queued = mesh
            .iter()
            .position(|e| e.segment == seg(2.0, 2.0, 4.0, 4.0))
            .unwrap();
        let later = mesh.twin(queued).unwrap();
        assert!(later > queued);
        assert!(mesh.edges()[queued].is_help);
        assert!(!mesh.edges()[later].is_help);
    }

    #[test]
    fn test_collinear_points_are_degenerate() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert!(matches!(
            delaunay_mesh(&points),
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let points = vec![Point2::new(1.0_f64, 1.0); 4];
        assert_eq!(
            delaunay_segments(&points),
            Err(GeometryError::DegenerateGeometry {
                reason: "all points coincide"
            })
        );
    }

    fn grid_ties() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(3.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(1.0, 3.0),
        ]
    }

    #[test]
    fn test_grid_ties_finish_past_planar_count() {
        let points = grid_ties();
        let mesh = delaunay_mesh(&points).unwrap();

        // Overlapping triangles from collinear ties push the count past 6 n
        assert!(mesh.len() > 6 * points.len());
        assert_eq!(mesh.len() % 3, 0);
        assert!(mesh.len() <= growth_bound(points.len()));
        assert_eq!(mesh.segments(), delaunay_mesh(&points).unwrap().segments());
    }

    #[test]
    fn test_growth_stops_at_bound() {
        // The seed triangle and every later triangle add three half-edges
        assert_eq!(
            grow_mesh(&grid_ties(), 20),
            Err(GeometryError::MeshGrowthDiverged { half_edges: 21 })
        );
        assert_eq!(grow_mesh(&square(), 6).map(|mesh| mesh.len()), Ok(6));
    }

    #[test]
    fn test_growth_bound() {
        assert_eq!(growth_bound(0), 3);
        assert_eq!(growth_bound(4), 39);
        assert_eq!(growth_bound(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_deterministic() {
        let points = vec![
            Point2::new(0.3_f64, 0.1),
            Point2::new(5.2, -0.4),
            Point2::new(2.9, 4.4),
            Point2::new(-1.7, 3.3),
            Point2::new(2.1, 1.6),
            Point2::new(6.0, 3.1),
        ];
        assert_eq!(delaunay_mesh(&points), delaunay_mesh(&points));
    }
}
