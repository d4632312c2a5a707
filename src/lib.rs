//! planum - Planar point-set algorithms
//!
//! Convex hulls, Delaunay triangulation and its Voronoi dual, k-d trees and
//! monotone polygon triangulation over plain lists of 2D points. Every
//! algorithm is a single deterministic pass in ordinary floating-point
//! arithmetic, generic over `f32` and `f64`.
//!
//! # Example
//!
//! ```
//! use planum::{delaunay_segments, graham_scan, KdTree, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(1.0, 2.0),
//! ];
//!
//! assert_eq!(graham_scan(&points).len(), 4);
//! assert_eq!(delaunay_segments(&points).unwrap().len(), 8);
//! assert_eq!(KdTree::build(&points).len(), 5);
//! ```

pub mod bounds;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod scene;
pub mod spatial;
pub mod triangulation;

pub use bounds::Aabb2;
pub use error::GeometryError;
pub use hull::{closed_polyline, gift_wrapping, graham_scan, hull_area, point_in_hull};
pub use polygon::monotone_triangulation;
pub use predicates::{circumscribed_circle, find_lowest_point, is_left_turn};
pub use primitives::{Circle2, Point2, Segment2, Vec2};
pub use scene::{construct, Construction, SceneOptions};
pub use spatial::{KdNode, KdTree};
pub use triangulation::{
    delaunay_mesh, delaunay_segments, voronoi_segments, HalfEdge, HalfEdgeMesh, VoronoiOptions,
};
