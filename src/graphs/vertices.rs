use crate::graphs::edges::OutEdge;

/// Dense vertex identity in `0..vertex_count`.
///
/// Indices are renumbered by structural mutations that remove vertices, so
/// they must not be cached across such calls.
pub type VertexIndex = usize;

/// A vertex record: its payload plus the out-edges it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vertex<E = (), V = ()> {
    /// Opaque vertex payload.
    pub properties: V,
    pub(crate) out_edges: Vec<OutEdge<E>>,
}

impl<E, V> Vertex<E, V> {
    pub(crate) fn new(properties: V) -> Self {
        Self {
            properties,
            out_edges: Vec::new(),
        }
    }

    /// Out-edges in insertion order (or target order after sorting).
    #[inline]
    pub fn out_edges(&self) -> &[OutEdge<E>] {
        &self.out_edges
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    #[inline]
    pub(crate) fn position_of(&self, to: VertexIndex) -> Option<usize> {
        self.out_edges.iter().position(|edge| edge.to == to)
    }
}

/// A graph whose vertex set can be enumerated.
pub trait Vertices {
    /// Iterator over all vertices in the graph.
    ///
    /// The order of vertices depends on the implementation, but should be stable
    /// for a given graph instance unless the graph is mutated.
    type Vertices<'a>: Iterator<Item = VertexIndex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// A graph that exposes a payload per vertex.
pub trait ReadVertices: Vertices {
    type VertexProperties;

    /// Payload of `vertex`. Panics when `vertex` is out of range.
    fn properties(&self, vertex: VertexIndex) -> &Self::VertexProperties;
}
