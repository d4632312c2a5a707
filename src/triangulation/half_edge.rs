//! Arena-backed half-edge mesh produced by the Delaunay growth.
//!
//! Half-edges live in a single `Vec` and refer to each other by index. Every
//! half-edge belongs to exactly one triangle, so `next` always forms a cycle
//! of length three. `twin` links the two half-edges of a shared edge and is
//! `None` on the hull boundary.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A directed edge of one triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfEdge<F> {
    /// The directed segment `start -> end`.
    pub segment: Segment2<F>,
    /// Bookkeeping edge: one of two twins, hidden from segment output.
    pub is_help: bool,
    /// Index of the opposite half-edge, if the edge is shared by two triangles.
    pub twin: Option<usize>,
    /// Index of the following half-edge around the same triangle.
    pub next: usize,
}

impl<F: Float> HalfEdge<F> {
    /// Start point of the edge.
    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.segment.start
    }

    /// End point of the edge.
    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.segment.end
    }

    /// Returns true if the edge has no twin.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }
}

/// A triangle mesh stored as an arena of half-edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfEdgeMesh<F> {
    edges: Vec<HalfEdge<F>>,
}

impl<F> Default for HalfEdgeMesh<F> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<F: Float> HalfEdgeMesh<F> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of half-edges, help edges included.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the mesh has no half-edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All half-edges in creation order.
    #[inline]
    pub fn edges(&self) -> &[HalfEdge<F>] {
        &self.edges
    }

    /// The half-edge at `index`.
    #[inline]
    pub fn edge(&self, index: usize) -> Option<&HalfEdge<F>> {
        self.edges.get(index)
    }

    /// Iterates over the half-edges in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, HalfEdge<F>> {
        self.edges.iter()
    }

    /// Index of the twin of the half-edge at `index`.
    #[inline]
    pub fn twin(&self, index: usize) -> Option<usize> {
        self.edges.get(index).and_then(|e| e.twin)
    }

    /// Index of the half-edge following `index` around its triangle.
    #[inline]
    pub fn next(&self, index: usize) -> Option<usize> {
        self.edges.get(index).map(|e| e.next)
    }

    /// The vertex of the owning triangle opposite the half-edge at `index`.
    pub fn apex(&self, index: usize) -> Option<Point2<F>> {
        let next = self.next(index)?;
        self.edges.get(next).map(HalfEdge::end)
    }

    /// Number of triangles. Every triangle owns three half-edges.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.edges.len() / 3
    }

    /// Iterates over the twin-less half-edges, i.e. the hull boundary.
    pub fn boundary_edges(&self) -> impl Iterator<Item = &HalfEdge<F>> + '_ {
        self.edges.iter().filter(|e| e.is_boundary())
    }

    /// One segment per drawn edge: every half-edge except the help edges.
    pub fn segments(&self) -> Vec<Segment2<F>> {
        self.edges
            .iter()
            .filter(|e| !e.is_help)
            .map(|e| e.segment)
            .collect()
    }

    /// Appends a half-edge that points to itself until a triangle closes it.
    pub(crate) fn push(&mut self, segment: Segment2<F>) -> usize {
        let index = self.edges.len();
        self.edges.push(HalfEdge {
            segment,
            is_help: false,
            twin: None,
            next: index,
        });
        index
    }

    /// Closes a triangle over the half-edge `base` with the vertex `apex`.
    ///
    /// Pushes `base.end -> apex` and `apex -> base.start` and links
    /// `base -> e1 -> e2 -> base`. Returns the indices of the two new edges.
    pub(crate) fn close_triangle(&mut self, base: usize, apex: Point2<F>) -> (usize, usize) {
        let segment = self.edges[base].segment;
        let e1 = self.push(Segment2::new(segment.end, apex));
        let e2 = self.push(Segment2::new(apex, segment.start));
        self.edges[base].next = e1;
        self.edges[e1].next = e2;
        self.edges[e2].next = base;
        (e1, e2)
    }

    /// Links `a` and `b` as mutual twins.
    pub(crate) fn link_twins(&mut self, a: usize, b: usize) {
        self.edges[a].twin = Some(b);
        self.edges[b].twin = Some(a);
    }

    pub(crate) fn mark_help(&mut self, index: usize) {
        self.edges[index].is_help = true;
    }
}

impl<'a, F> IntoIterator for &'a HalfEdgeMesh<F> {
    type Item = &'a HalfEdge<F>;
    type IntoIter = std::slice::Iter<'a, HalfEdge<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
