//! Triangulation of y-monotone polygons by a stack sweep.
//!
//! The polygon boundary is split at its top and bottom vertices into two
//! chains, the chains are merged into one top-to-bottom sequence, and a
//! stack sweep emits the diagonals that cut the polygon into triangles.
//!
//! The input is assumed to be y-monotone. Nothing checks this: a polygon
//! that is not monotone produces diagonals that may cross its boundary.
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use planum::polygon::monotone_triangulation;
//! use planum::Point2;
//!
//! let pentagon: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(5.0, 3.0),
//!     Point2::new(2.0, 5.0),
//!     Point2::new(-1.0, 3.0),
//! ];
//!
//! // A convex n-gon needs n - 3 diagonals
//! assert_eq!(monotone_triangulation(&pentagon).len(), 2);
//! ```

use crate::predicates::is_left_turn;
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// Which boundary chain a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    /// The chain whose first edge below the top vertex leans left.
    Left,
    /// The chain whose first edge below the top vertex leans right.
    Right,
}

impl Chain {
    /// Returns the other chain.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Chain::Left => Chain::Right,
            Chain::Right => Chain::Left,
        }
    }
}

/// A polygon vertex tagged with its chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainVertex<F> {
    /// The vertex position.
    pub point: Point2<F>,
    /// The chain the vertex was reached on.
    pub chain: Chain,
}

/// Splits a polygon into its two chains and merges them top to bottom.
///
/// The top vertex has the largest y (ties: smallest x) and the bottom vertex
/// the smallest y (ties: largest x). Walking forward from the top vertex
/// gives one chain, walking backward gives the other. The forward chain is
/// [`Chain::Right`] when its first edge makes a smaller angle with `(1, 0)`
/// than the backward chain's first edge. The top vertex belongs to the
/// forward chain and the bottom vertex to the backward chain.
///
/// The merged sequence is ordered by y descending, then x ascending.
///
/// # Returns
///
/// Every vertex once, top first and bottom last. Empty for an empty polygon.
pub fn monotone_chains<F: Float>(polygon: &[Point2<F>]) -> Vec<ChainVertex<F>> {
    let n = polygon.len();
    if n == 0 {
        return Vec::new();
    }

    let (top_index, bottom_index) = extreme_vertices(polygon);
    let top = polygon[top_index];
    let bottom = polygon[bottom_index];

    let forward_dir = polygon[(top_index + 1) % n] - top;
    let backward_dir = polygon[(top_index + n - 1) % n] - top;
    let right = Vec2::unit_x();
    let forward_chain = if right.angle_degrees(forward_dir) < right.angle_degrees(backward_dir) {
        Chain::Right
    } else {
        Chain::Left
    };
    let backward_chain = forward_chain.opposite();

    // Top down to (not including) the bottom vertex
    let mut forward = Vec::new();
    let mut j = top_index;
    while polygon[j] != bottom {
        forward.push(ChainVertex {
            point: polygon[j],
            chain: forward_chain,
        });
        j = (j + 1) % n;
    }

    // Just below the top vertex down to (and including) the bottom vertex
    let mut backward = Vec::new();
    let mut j = top_index;
    loop {
        j = (j + n - 1) % n;
        backward.push(ChainVertex {
            point: polygon[j],
            chain: backward_chain,
        });
        if polygon[j] == bottom {
            break;
        }
    }

    let mut merged = Vec::with_capacity(forward.len() + backward.len());
    let (mut f, mut b) = (0, 0);
    loop {
        if f == forward.len() {
            merged.extend_from_slice(&backward[b..]);
            break;
        }
        if b == backward.len() {
            merged.extend_from_slice(&forward[f..]);
            break;
        }

        let p = forward[f].point;
        let q = backward[b].point;
        if p.y > q.y || (p.y == q.y && p.x < q.x) {
            merged.push(forward[f]);
            f += 1;
        } else {
            merged.push(backward[b]);
            b += 1;
        }
    }
    merged
}

/// Triangulates a y-monotone polygon.
///
/// Vertices are swept top to bottom over [`monotone_chains`] with a stack
/// seeded by the first two vertices:
///
/// - If the current vertex lies on the other chain than the stack top, a
///   diagonal goes from every stacked vertex except the bottom one to the
///   current vertex. The stack is then reset to the previous vertex and the
///   current one.
/// - If it lies on the same chain, stacked vertices are popped for as long as
///   the diagonal to them stays inside the polygon (a left turn on the right
///   chain, a right turn on the left chain), emitting a diagonal each time.
///   The last vertex popped successfully and the current one are pushed back.
///
/// The bottom vertex finally receives a diagonal to every stacked vertex
/// except the top and the bottom of the stack.
///
/// # Returns
///
/// The diagonals, `n - 3` of them for a proper n-gon. Polygons with three or
/// fewer vertices have none.
///
/// # Example
///
/// ```
/// use planum::polygon::monotone_triangulation;
/// use planum::{Point2, Segment2};
///
/// let square: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let diagonals = monotone_triangulation(&square);
/// assert_eq!(diagonals, vec![Segment2::from_coords(4.0, 4.0, 0.0, 0.0)]);
/// ```
pub fn monotone_triangulation<F: Float>(polygon: &[Point2<F>]) -> Vec<Segment2<F>> {
    if polygon.len() <= 3 {
        return Vec::new();
    }

    let sorted = monotone_chains(polygon);
    if sorted.len() < 3 {
        return Vec::new();
    }

    let mut diagonals = Vec::with_capacity(polygon.len() - 3);
    let mut stack: Vec<ChainVertex<F>> = vec![sorted[0], sorted[1]];

    for i in 2..sorted.len() - 1 {
        let current = sorted[i];
        let Some(top) = stack.last().copied() else {
            break;
        };

        if current.chain != top.chain {
            while stack.len() > 1 {
                if let Some(popped) = stack.pop() {
                    diagonals.push(Segment2::new(popped.point, current.point));
                }
            }
            stack.clear();
            stack.push(sorted[i - 1]);
            stack.push(current);
        } else {
            let Some(mut last) = stack.pop() else {
                break;
            };
            while let Some(candidate) = stack.pop() {
                let left = is_left_turn(current.point, last.point, candidate.point);
                let inside = match current.chain {
                    Chain::Right => left,
                    Chain::Left => !left,
                };
                if inside {
                    diagonals.push(Segment2::new(current.point, candidate.point));
                    last = candidate;
                } else {
                    stack.push(candidate);
                    break;
                }
            }
            stack.push(last);
            stack.push(current);
        }
    }

    // The top of the stack is adjacent to the bottom vertex already.
    stack.pop();
    let bottom = sorted[sorted.len() - 1].point;
    while stack.len() > 1 {
        if let Some(v) = stack.pop() {
            diagonals.push(Segment2::new(bottom, v.point));
        }
    }

    tracing::debug!(
        vertices = polygon.len(),
        diagonals = diagonals.len(),
        "monotone triangulation finished"
    );
    diagonals
}

/// Indices of the top (max y, then min x) and bottom (min y, then max x) vertices.
fn extreme_vertices<F: Float>(polygon: &[Point2<F>]) -> (usize, usize) {
    let mut top = 0;
    let mut bottom = 0;
    for (i, p) in polygon.iter().enumerate() {
        let t = polygon[top];
        let b = polygon[bottom];
        if p.y > t.y || (p.y == t.y && p.x < t.x) {
            top = i;
        }
        if p.y < b.y || (p.y == b.y && p.x > b.x) {
            bottom = i;
        }
    }
    (top, bottom)
}
