use crate::graphs::directivity::Directivity;
use crate::graphs::{edges::ReadEdges, vertices::ReadVertices};

/// High level abstraction for a finite simple graph.
///
/// A graph composes a vertex view and an edge view. Whether edges are
/// directed is a static property of the type, selected by
/// [`Graph::Directivity`].
pub trait Graph: ReadVertices + ReadEdges {
    type Directivity: Directivity;

    /// True for directed graphs.
    #[inline]
    fn is_directed(&self) -> bool {
        <Self::Directivity as Directivity>::DIRECTED
    }

    /// Largest edge count possible for the current vertex count.
    fn max_edges(&self) -> usize {
        <Self::Directivity as Directivity>::max_edges(self.vertex_count())
    }

    /// Size measure for the whole graph.
    ///
    /// Defined as the number of vertices plus the number of edges.
    fn size(&self) -> usize {
        self.vertex_count() + self.edge_count()
    }

    /// Returns true when the graph is empty.
    ///
    /// By default this is the case when the size method returns zero.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
