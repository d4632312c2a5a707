//! Spatial partitioning structures.
//!
//! - [`KdTree`] - a 2D k-d tree built by alternating median splits
//!
//! Construction only; the tree exposes its structure and its partition lines
//! but no nearest-neighbour or range queries.

mod kdtree;

pub use kdtree::{KdNode, KdTree};
