pub mod adjacency_list;
pub mod decoration;
pub mod dijkstra;
pub mod directivity;
pub mod edges;
pub mod forward;
pub mod frontier;
pub mod graph;
pub mod operations;
pub mod properties;
pub mod traversal;
pub mod vertices;
pub mod visited;

pub use adjacency_list::{AdjacencyList, DirectedGraph, EdgeIter, UndirectedGraph};
pub use decoration::{Bottleneck, Decoration, Hops, PathLength, Predecessor, NO_PREDECESSOR, UNREACHED};
pub use dijkstra::{
    dijkstra, dijkstra_by, dijkstra_shortest_paths, dijkstra_shortest_paths_by, dijkstra_visit,
    Dijkstra,
};
pub use directivity::{Directed, Directivity, Undirected};
pub use edges::{Edges, EdgesMut, InsertEdge, OutEdge, ReadEdges, RemoveEdge};
pub use forward::Forward;
pub use frontier::Frontier;
pub use graph::Graph;
pub use operations::{complement, disorient, is_regular, is_regular_with, orient, regular_degree, transpose};
pub use properties::{Capacitated, Scalar, Weighted};
pub use traversal::{
    bfs, bfs_decorated, bfs_shortest_path, bfs_shortest_paths, bfs_visit, dfs, dfs_decorated,
    dfs_visit, reconstruct_path, Bfs, Dfs, Traversal,
};
pub use vertices::{ReadVertices, Vertex, VertexIndex, Vertices};
pub use visited::Visited;
