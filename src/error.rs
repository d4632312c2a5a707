//! Error types for planum operations.

use thiserror::Error;

/// Errors that can occur while building a geometric structure.
///
/// Degenerate circumcircles are not represented here: the
/// primitive returns non-finite values and callers see them propagate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The operation needs at least one point.
    #[error("empty input: at least one point is required")]
    EmptyInput,

    /// The point set cannot seed the requested structure.
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// What made the input unusable.
        reason: &'static str,
    },

    /// Delaunay edge growth kept closing triangles after exhausting every
    /// directed edge between input points as a base.
    #[error("mesh growth diverged after {half_edges} half-edges")]
    MeshGrowthDiverged {
        /// Number of half-edges in the arena when growth was aborted.
        half_edges: usize,
    },
}
