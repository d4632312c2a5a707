//! Polygon decomposition.
//!
//! - [`monotone_triangulation`] - diagonals that split a y-monotone polygon
//!   into triangles
//!
//! # Example
//!
//! ```
//! use planum::polygon::{monotone_chains, monotone_triangulation, Chain};
//! use planum::Point2;
//!
//! let square: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! let chains = monotone_chains(&square);
//! assert_eq!(chains[0].chain, Chain::Left);
//! assert_eq!(monotone_triangulation(&square).len(), 1);
//! ```

mod monotone;

pub use monotone::{monotone_chains, monotone_triangulation, Chain, ChainVertex};
