//! Property-based tests for Delaunay growth and the Voronoi dual.
//!
//! Random coordinates put the points in general position with overwhelming
//! probability, so every input must triangulate.

use planum::hull::graham_scan;
use planum::predicates::{circumscribed_circle, is_strictly_left};
use planum::triangulation::{
    delaunay_mesh, delaunay_segments, voronoi_segments_from_mesh, HalfEdgeMesh, VoronoiOptions,
};
use planum::Point2;
use proptest::prelude::*;

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(
        (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Point2::new(x, y)),
        3..=25,
    )
}

fn mesh_of(points: &[Point2<f64>]) -> Result<HalfEdgeMesh<f64>, TestCaseError> {
    delaunay_mesh(points).map_err(|e| TestCaseError::fail(format!("triangulation failed: {e}")))
}

proptest! {
    /// Property: twin links are mutual and join reversed segments
    #[test]
    fn prop_twins_are_mutual(points in point_set()) {
        let mesh = mesh_of(&points)?;
        for (i, edge) in mesh.iter().enumerate() {
            if let Some(t) = edge.twin {
                prop_assert_ne!(t, i);
                prop_assert_eq!(mesh.twin(t), Some(i));
                prop_assert!(mesh.edges()[t].segment.is_reverse_of(edge.segment));
                // Exactly one side of a shared edge is drawn
                prop_assert_ne!(edge.is_help, mesh.edges()[t].is_help);
            } else {
                prop_assert!(!edge.is_help);
            }
        }
    }

    /// Property: every half-edge lies on a counter-clockwise triangle
    #[test]
    fn prop_next_cycles_are_triangles(points in point_set()) {
        let mesh = mesh_of(&points)?;
        prop_assert_eq!(mesh.len() % 3, 0);
        for i in 0..mesh.len() {
            let a = mesh.next(i).unwrap();
            let b = mesh.next(a).unwrap();
            prop_assert_eq!(mesh.next(b), Some(i));
            prop_assert_ne!(a, i);

            let edge = mesh.edges()[i].segment;
            prop_assert_eq!(edge.end, mesh.edges()[a].segment.start);
            prop_assert!(is_strictly_left(edge, mesh.apex(i).unwrap()));
        }
    }

    /// Property: twin-less edges have nothing on their outer side
    #[test]
    fn prop_boundary_edges_are_hull_edges(points in point_set()) {
        let mesh = mesh_of(&points)?;
        for edge in mesh.boundary_edges() {
            let outer = edge.segment.reversed();
            for p in &points {
                prop_assert!(!is_strictly_left(outer, *p));
            }
        }
    }

    /// Property: Euler counts of a triangulated point set
    #[test]
    fn prop_euler_counts(points in point_set()) {
        let mesh = mesh_of(&points)?;
        let n = points.len();
        let h = mesh.boundary_edges().count();

        prop_assert_eq!(h, graham_scan(&points).len());
        prop_assert_eq!(mesh.triangle_count(), 2 * n - h - 2);
        prop_assert_eq!(delaunay_segments(&points).unwrap().len(), 3 * n - h - 3);
    }

    /// Property: no input point lies inside a triangle's circumcircle
    #[test]
    fn prop_empty_circumcircles(points in point_set()) {
        let mesh = mesh_of(&points)?;
        for (i, edge) in mesh.iter().enumerate() {
            let circle = circumscribed_circle(edge.start(), edge.end(), mesh.apex(i).unwrap());
            for p in &points {
                let d = circle.center.distance(*p);
                prop_assert!(
                    d >= circle.radius * (1.0 - 1e-9),
                    "{:?} inside circumcircle {:?}", p, circle
                );
            }
        }
    }

    /// Property: one Voronoi segment per drawn Delaunay edge, rays of fixed length
    #[test]
    fn prop_voronoi_is_dual(points in point_set(), ray_length in 0.5..50.0_f64) {
        let mesh = mesh_of(&points)?;
        let options = VoronoiOptions::default().with_ray_length(ray_length);
        let segments = voronoi_segments_from_mesh(&mesh, &options);
        prop_assert_eq!(segments.len(), mesh.segments().len());

        let drawn = mesh.iter().filter(|e| !e.is_help);
        for (edge, s) in drawn.zip(&segments) {
            if edge.twin.is_none() {
                prop_assert!((s.length() - ray_length).abs() <= 1e-9 * ray_length);
            }
        }
    }

    /// Property: rerunning on the same input gives the same mesh
    #[test]
    fn prop_deterministic(points in point_set()) {
        prop_assert_eq!(delaunay_mesh(&points), delaunay_mesh(&points));
    }
}
