//! Turns a point set into the segments of one construction.
//!
//! Every algorithm in the crate ends up as a list of segments to draw. This
//! module picks the algorithm by name and does that last step, so a viewer
//! only has to know about [`Construction`] and [`construct`].
//!
//! # Example
//!
//! ```
//! use planum::scene::{construct, Construction, SceneOptions};
//! use planum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! let options = SceneOptions::default();
//! let outline = construct("graham-scan".parse().unwrap(), &points, &options).unwrap();
//! assert_eq!(outline.len(), 4);
//!
//! let triangulated = construct(Construction::HullTriangulation, &points, &options).unwrap();
//! assert_eq!(triangulated.len(), 5);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::bounds::Aabb2;
use crate::error::GeometryError;
use crate::hull::{closed_polyline, gift_wrapping, graham_scan};
use crate::polygon::monotone_triangulation;
use crate::primitives::{Point2, Segment2};
use crate::spatial::KdTree;
use crate::triangulation::{delaunay_segments, voronoi_segments, VoronoiOptions};
use num_traits::Float;
use thiserror::Error;

/// Half extent of the default k-d tree drawing area.
pub const DEFAULT_KD_HALF_EXTENT: f64 = 10.0;

/// The constructions a point set can be drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    /// Convex hull outline by gift wrapping.
    GiftWrapping,
    /// Convex hull outline by Graham scan.
    GrahamScan,
    /// The points joined in input order as a closed polygon.
    Polygon,
    /// Graham scan hull outline plus its triangulation diagonals.
    HullTriangulation,
    /// Polygon outline plus its monotone triangulation diagonals.
    PolygonTriangulation,
    /// K-d tree split lines.
    KdTree,
    /// Delaunay triangulation edges.
    Delaunay,
    /// Voronoi diagram edges.
    Voronoi,
}

impl Construction {
    /// Every construction, in menu order.
    pub const ALL: [Construction; 8] = [
        Construction::GiftWrapping,
        Construction::GrahamScan,
        Construction::Polygon,
        Construction::HullTriangulation,
        Construction::PolygonTriangulation,
        Construction::KdTree,
        Construction::Delaunay,
        Construction::Voronoi,
    ];

    /// Kebab-case name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Construction::GiftWrapping => "gift-wrapping",
            Construction::GrahamScan => "graham-scan",
            Construction::Polygon => "polygon",
            Construction::HullTriangulation => "hull-triangulation",
            Construction::PolygonTriangulation => "polygon-triangulation",
            Construction::KdTree => "kd-tree",
            Construction::Delaunay => "delaunay",
            Construction::Voronoi => "voronoi",
        }
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown construction name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown construction `{0}`")]
pub struct UnknownConstruction(pub String);

impl FromStr for Construction {
    type Err = UnknownConstruction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Construction::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownConstruction(s.to_string()))
    }
}

/// Drawing parameters shared by the constructions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneOptions<F> {
    /// Voronoi ray length.
    pub voronoi: VoronoiOptions<F>,
    /// Area the k-d tree split lines are clipped to.
    pub kd_bounds: Aabb2<F>,
}

impl<F: Float> Default for SceneOptions<F> {
    fn default() -> Self {
        let half_extent = F::from(DEFAULT_KD_HALF_EXTENT).unwrap_or_else(F::max_value);
        Self {
            voronoi: VoronoiOptions::default(),
            kd_bounds: Aabb2::centered(half_extent),
        }
    }
}

impl<F: Float> SceneOptions<F> {
    /// Sets the Voronoi options.
    pub fn voronoi(mut self, voronoi: VoronoiOptions<F>) -> Self {
        self.voronoi = voronoi;
        self
    }

    /// Sets the k-d tree drawing area.
    pub fn kd_bounds(mut self, bounds: Aabb2<F>) -> Self {
        self.kd_bounds = bounds;
        self
    }
}

/// Computes the segments that draw `construction` over `points`.
///
/// Outlines come first, diagonals after. Hull outlines and the polygon
/// outline are closed: the first segment runs from the last point back to
/// the first.
///
/// # Errors
///
/// Only [`Construction::Delaunay`] and [`Construction::Voronoi`] can fail;
/// see [`delaunay_mesh`](crate::triangulation::delaunay_mesh).
pub fn construct<F: Float>(
    construction: Construction,
    points: &[Point2<F>],
    options: &SceneOptions<F>,
) -> Result<Vec<Segment2<F>>, GeometryError> {
    let segments = match construction {
        Construction::GiftWrapping => closed_polyline(&gift_wrapping(points)),
        Construction::GrahamScan => closed_polyline(&graham_scan(points)),
        Construction::Polygon => closed_polyline(points),
        Construction::HullTriangulation => outline_with_diagonals(&graham_scan(points)),
        Construction::PolygonTriangulation => outline_with_diagonals(points),
        Construction::KdTree => KdTree::build(points).split_segments(options.kd_bounds),
        Construction::Delaunay => delaunay_segments(points)?,
        Construction::Voronoi => voronoi_segments(points, &options.voronoi)?,
    };
    tracing::debug!(
        construction = construction.name(),
        points = points.len(),
        segments = segments.len(),
        "construction built"
    );
    Ok(segments)
}

fn outline_with_diagonals<F: Float>(polygon: &[Point2<F>]) -> Vec<Segment2<F>> {
    let mut segments = closed_polyline(polygon);
    segments.extend(monotone_triangulation(polygon));
    segments
}
