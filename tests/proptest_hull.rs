//! Property-based tests for the convex hull algorithms.
//!
//! - Graham scan output is convex and contains every input point
//! - Gift wrapping agrees with Graham scan on size, vertex set and area
//! - Hull vertices are input points

use planum::hull::{closed_polyline, gift_wrapping, graham_scan, hull_area, point_in_hull};
use planum::predicates::{find_lowest_point, is_left_turn};
use planum::Point2;
use proptest::prelude::*;

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point() -> impl Strategy<Value = Point2<f64>> {
    (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Point2::new(x, y))
}

fn point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(point(), 3..=30)
}

proptest! {
    /// Property: every turn of the Graham hull is a left turn
    #[test]
    fn prop_graham_hull_is_convex(points in point_set()) {
        let hull = graham_scan(&points);
        let n = hull.len();
        prop_assert!(n >= 2);
        if n >= 3 {
            for i in 0..n {
                prop_assert!(is_left_turn(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]));
            }
        }
    }

    /// Property: the Graham hull starts at the lowest point and encloses the input
    #[test]
    fn prop_graham_hull_contains_all_points(points in point_set()) {
        let hull = graham_scan(&points);
        prop_assert_eq!(hull[0], find_lowest_point(&points).unwrap());
        if hull.len() >= 3 {
            for p in &points {
                prop_assert!(point_in_hull(&hull, *p), "{:?} outside hull", p);
            }
        }
    }

    /// Property: hull vertices are taken from the input, never synthesized
    #[test]
    fn prop_hull_vertices_are_input_points(points in point_set()) {
        for p in graham_scan(&points).iter().chain(gift_wrapping(&points).iter()) {
            prop_assert!(points.contains(p));
        }
    }

    /// Property: both algorithms find the same hull
    #[test]
    fn prop_gift_wrapping_matches_graham_scan(points in point_set()) {
        let graham = graham_scan(&points);
        let wrapped = gift_wrapping(&points);

        prop_assert_eq!(wrapped.len(), graham.len());
        prop_assert_eq!(*wrapped.last().unwrap(), find_lowest_point(&points).unwrap());
        for p in &wrapped {
            prop_assert!(graham.contains(p));
        }

        let a = hull_area(&graham);
        let b = hull_area(&wrapped);
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0), "areas differ: {} vs {}", a, b);
    }

    /// Property: a closed outline has one segment per vertex and closes on itself
    #[test]
    fn prop_outline_is_closed(points in point_set()) {
        let hull = graham_scan(&points);
        let outline = closed_polyline(&hull);
        prop_assert_eq!(outline.len(), hull.len());
        for (i, s) in outline.iter().enumerate() {
            prop_assert_eq!(s.end, outline[(i + 1) % outline.len()].start);
        }
    }

    /// Property: rerunning on the same input gives the same output
    #[test]
    fn prop_hulls_are_deterministic(points in point_set()) {
        prop_assert_eq!(graham_scan(&points), graham_scan(&points));
        prop_assert_eq!(gift_wrapping(&points), gift_wrapping(&points));
    }
}
