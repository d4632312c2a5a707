//! Property-based tests for k-d tree construction.

use planum::spatial::{KdNode, KdTree};
use planum::{Aabb2, Point2};
use proptest::prelude::*;

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(
        (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Point2::new(x, y)),
        0..=60,
    )
}

fn axis(p: Point2<f64>, vertical: bool) -> f64 {
    if vertical {
        p.x
    } else {
        p.y
    }
}

fn subtree(node: Option<&KdNode<f64>>, out: &mut Vec<Point2<f64>>) {
    if let Some(n) = node {
        out.push(n.point());
        subtree(n.left(), out);
        subtree(n.right(), out);
    }
}

fn check_node(node: &KdNode<f64>, vertical: bool) -> Result<(), TestCaseError> {
    prop_assert_eq!(node.is_vertical(), vertical);
    let key = axis(node.point(), vertical);

    let mut below = Vec::new();
    subtree(node.left(), &mut below);
    for p in below {
        prop_assert!(axis(p, vertical) <= key);
    }
    let mut above = Vec::new();
    subtree(node.right(), &mut above);
    for p in above {
        prop_assert!(axis(p, vertical) >= key);
    }

    if let Some(left) = node.left() {
        check_node(left, !vertical)?;
    }
    if let Some(right) = node.right() {
        check_node(right, !vertical)?;
    }
    Ok(())
}

fn sorted(mut points: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
}

proptest! {
    /// Property: the tree holds every input point exactly once
    #[test]
    fn prop_points_preserved(points in point_set()) {
        let tree = KdTree::build(&points);
        prop_assert_eq!(tree.len(), points.len());
        prop_assert_eq!(tree.node_count(), points.len());
        prop_assert_eq!(sorted(tree.points()), sorted(points));
    }

    /// Property: axes alternate by depth and children respect the split
    #[test]
    fn prop_split_invariant(points in point_set()) {
        let tree = KdTree::build(&points);
        if let Some(root) = tree.root() {
            check_node(root, true)?;
        }
    }

    /// Property: an odd starting depth flips every axis
    #[test]
    fn prop_odd_start_depth_starts_horizontal(points in point_set()) {
        let tree = KdTree::build_from_depth(&points, 3);
        if let Some(root) = tree.root() {
            check_node(root, false)?;
        }
    }

    /// Property: median splits keep the tree balanced
    #[test]
    fn prop_depth_is_logarithmic(points in point_set()) {
        let tree = KdTree::build(&points);
        let n = points.len();
        let bound = if n == 0 { 0 } else { (usize::BITS - n.leading_zeros()) as usize };
        prop_assert!(tree.depth() <= bound, "depth {} for {} points", tree.depth(), n);
    }

    /// Property: one split line per node, all inside the drawing area
    #[test]
    fn prop_split_lines_stay_in_bounds(points in point_set()) {
        let bounds = Aabb2::centered(100.0);
        let lines = KdTree::build(&points).split_segments(bounds);
        prop_assert_eq!(lines.len(), points.len());
        for line in lines {
            for end in [line.start, line.end] {
                prop_assert!(end.x >= bounds.min.x && end.x <= bounds.max.x);
                prop_assert!(end.y >= bounds.min.y && end.y <= bounds.max.y);
            }
            prop_assert!(line.start.x == line.end.x || line.start.y == line.end.y);
        }
    }
}
