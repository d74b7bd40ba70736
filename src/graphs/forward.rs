use crate::graphs::edges::OutEdge;
use crate::graphs::graph::Graph;
use crate::graphs::vertices::VertexIndex;

/// Constant-time access to the out-edges of a vertex.
///
/// Every traversal in this crate is driven through this trait.
pub trait Forward: Graph {
    /// Out-edges of `vertex`. Panics when `vertex` is out of range.
    fn successors(&self, vertex: VertexIndex) -> &[OutEdge<Self::EdgeProperties>];

    #[inline]
    fn out_degree(&self, vertex: VertexIndex) -> usize {
        self.successors(vertex).len()
    }
}
