//! Delaunay triangulation and its Voronoi dual.
//!
//! - [`delaunay_mesh`] / [`delaunay_segments`] - triangulation grown edge by
//!   edge from the lowest point, stored in a [`HalfEdgeMesh`]
//! - [`voronoi_segments`] - the dual diagram drawn as segments

mod delaunay;
mod half_edge;
mod voronoi;

pub use delaunay::{delaunay_distance, delaunay_mesh, delaunay_segments};
pub use half_edge::{HalfEdge, HalfEdgeMesh};
pub use voronoi::{
    voronoi_segments, voronoi_segments_from_mesh, VoronoiOptions, DEFAULT_RAY_LENGTH,
};
