use crate::graphs::vertices::VertexIndex;

/// An edge record stored under its source vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutEdge<E = ()> {
    /// Target vertex.
    pub to: VertexIndex,
    /// Opaque edge payload.
    pub properties: E,
}

impl<E> OutEdge<E> {
    #[inline]
    pub fn new(to: VertexIndex, properties: E) -> Self {
        Self { to, properties }
    }
}

/// Payload type shared by the edge traits below.
pub trait Edges {
    /// Data attached to every edge, `()` for plain graphs.
    type EdgeProperties;
}

/// A graph that supports read-only access to its edges.
///
/// Edges are enumerated as `(source, payload, destination)` triples. An
/// undirected graph reports each logical edge once, as its `source <
/// destination` half.
pub trait ReadEdges: Edges {
    /// Iterator over all edges in the graph.
    ///
    /// The order of edges depends on the implementation, but should be stable
    /// for a given graph instance unless the graph is mutated.
    type Edges<'a>: Iterator<Item = (VertexIndex, &'a Self::EdgeProperties, VertexIndex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Payload of the edge `from -> to`, if present.
    fn edge(&self, from: VertexIndex, to: VertexIndex) -> Option<&Self::EdgeProperties>;

    fn has_edge(&self, from: VertexIndex, to: VertexIndex) -> bool {
        self.edge(from, to).is_some()
    }
}

/// A graph that supports both querying and mutating edges.
///
/// This is a convenience alias for types that implement:
/// - [`ReadEdges`] for read-only access,
/// - [`InsertEdge`] for inserting edges, and
/// - [`RemoveEdge`] for removing edges.
pub trait EdgesMut: Edges + ReadEdges + InsertEdge + RemoveEdge {}

/// Blanket implementation of [`EdgesMut`] for any type that provides the
/// required capabilities.
impl<T> EdgesMut for T where T: Edges + ReadEdges + InsertEdge + RemoveEdge {}

/// A graph that supports insertion of edges.
pub trait InsertEdge: Edges {
    /// Inserts the edge `from -> to` carrying `properties`.
    ///
    /// Returns `false` without touching the graph when the edge already
    /// exists. Undirected graphs insert both mirrored records.
    ///
    /// Panics when `from == to` or either endpoint is out of range.
    fn insert_edge(
        &mut self,
        from: VertexIndex,
        to: VertexIndex,
        properties: Self::EdgeProperties,
    ) -> bool;
}

/// A graph that supports removal of edges.
pub trait RemoveEdge: Edges {
    /// Removes the edge `from -> to`.
    ///
    /// Returns `false` when no such edge exists. Undirected graphs remove
    /// both mirrored records.
    fn erase_edge(&mut self, from: VertexIndex, to: VertexIndex) -> bool;
}
