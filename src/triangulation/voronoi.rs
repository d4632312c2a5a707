//! Voronoi diagram as the dual of the Delaunay half-edge mesh.
//!
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each shared Delaunay edge becomes the segment between the circumcenters
//!   of its two triangles
//! - Each hull edge becomes a ray from its triangle's circumcenter along the
//!   outward normal, cut off at [`VoronoiOptions::ray_length`]
//!
//! The ray length is a drawing bound for unbounded cells. It has no geometric
//! meaning.
//!
//! # Example
//!
//! ```
//! use planum::triangulation::{voronoi_segments, VoronoiOptions};
//! use planum::Point2;
//!
//! let square: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! let segments = voronoi_segments(&square, &VoronoiOptions::default()).unwrap();
//!
//! // The shared diagonal collapses to a point; the four hull edges become rays
//! assert_eq!(segments.len(), 5);
//! assert_eq!(segments.iter().filter(|s| s.length() > 1.0).count(), 4);
//! ```

use crate::error::GeometryError;
use crate::predicates::circumscribed_circle;
use crate::primitives::{Point2, Segment2, Vec2};
use crate::triangulation::{delaunay_mesh, HalfEdgeMesh};
use num_traits::Float;

/// Length of the segments drawn for unbounded Voronoi edges.
pub const DEFAULT_RAY_LENGTH: f64 = 10.0;

/// Options for [`voronoi_segments`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoronoiOptions<F> {
    /// Length of the segment standing in for each unbounded edge.
    pub ray_length: F,
}

impl<F: Float> Default for VoronoiOptions<F> {
    fn default() -> Self {
        Self {
            ray_length: F::from(DEFAULT_RAY_LENGTH).unwrap_or_else(F::max_value),
        }
    }
}

impl<F: Float> VoronoiOptions<F> {
    /// Sets the length of the unbounded edge segments.
    pub fn with_ray_length(mut self, ray_length: F) -> Self {
        self.ray_length = ray_length;
        self
    }
}

/// Computes the Voronoi diagram of `points` as segments.
///
/// # Errors
///
/// Same as [`delaunay_mesh`](crate::triangulation::delaunay_mesh).
pub fn voronoi_segments<F: Float>(
    points: &[Point2<F>],
    options: &VoronoiOptions<F>,
) -> Result<Vec<Segment2<F>>, GeometryError> {
    let mesh = delaunay_mesh(points)?;
    let segments = voronoi_segments_from_mesh(&mesh, options);
    tracing::debug!(sites = points.len(), segments = segments.len(), "Voronoi diagram finished");
    Ok(segments)
}

/// Computes the Voronoi segments dual to an existing Delaunay mesh.
///
/// One segment per non-help half-edge, in mesh order. Shared edges give the
/// segment between the two circumcenters (zero length for cocircular
/// triangles). Hull edges give a segment of length `options.ray_length`
/// pointing to the right of the edge direction, or a zero-length segment if
/// the edge itself has zero length.
pub fn voronoi_segments_from_mesh<F: Float>(
    mesh: &HalfEdgeMesh<F>,
    options: &VoronoiOptions<F>,
) -> Vec<Segment2<F>> {
    let mut segments = Vec::new();
    for (index, edge) in mesh.iter().enumerate() {
        if edge.is_help {
            continue;
        }
        let Some(center) = triangle_circumcenter(mesh, index) else {
            continue;
        };

        match edge.twin.and_then(|twin| triangle_circumcenter(mesh, twin)) {
            Some(other) => segments.push(Segment2::new(center, other)),
            None => {
                let outward = (-edge.segment.direction())
                    .perpendicular()
                    .normalize()
                    .unwrap_or_else(Vec2::zero);
                segments.push(Segment2::new(center, center + outward * options.ray_length));
            }
        }
    }
    segments
}

/// Circumcenter of the triangle owning the half-edge at `index`.
fn triangle_circumcenter<F: Float>(mesh: &HalfEdgeMesh<F>, index: usize) -> Option<Point2<F>> {
    let edge = mesh.edge(index)?;
    let apex = mesh.apex(index)?;
    Some(circumscribed_circle(edge.start(), edge.end(), apex).center)
}
