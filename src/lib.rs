//! Simple directed and undirected graphs stored as adjacency lists, with
//! the classical algorithms that run on them.
//!
//! Graphs are [`AdjacencyList`]s parameterised by their [`Directivity`].
//! Traversals ([`bfs`], [`dfs`], [`dijkstra`]) are iterators that carry
//! per-vertex [`Decoration`]s such as hop counts or predecessors. Union-find
//! and a binary heap with keyed updates back the connectivity and
//! shortest-path algorithms.

pub mod algorithms;
pub mod error;
pub mod graphs;
pub mod heaps;
pub mod sets;

pub use error::{GraphError, Result};
pub use graphs::{AdjacencyList, Directed, DirectedGraph, Directivity, Undirected, UndirectedGraph, VertexIndex};

/// Traits needed to call the generic graph API.
pub mod prelude {
    pub use crate::graphs::{
        Capacitated, Decoration, Directivity, Edges, EdgesMut, Forward, Frontier, Graph, InsertEdge,
        ReadEdges, ReadVertices, RemoveEdge, Scalar, Vertices, Visited, Weighted,
    };
    pub use crate::heaps::Comparator;
    pub use crate::sets::FindStrategy;
}
