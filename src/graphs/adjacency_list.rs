use std::marker::PhantomData;

use tracing::trace;

use crate::graphs::directivity::{Directed, Directivity, Undirected};
use crate::graphs::edges::{Edges, InsertEdge, OutEdge, ReadEdges, RemoveEdge};
use crate::graphs::forward::Forward;
use crate::graphs::graph::Graph;
use crate::graphs::vertices::{ReadVertices, Vertex, VertexIndex, Vertices};

/// Simple graph stored as one out-edge vector per vertex.
///
/// `D` selects directed or undirected semantics. An undirected edge `{u, v}`
/// is stored as the two records `u -> v` and `v -> u` carrying equal
/// payloads, and every mutation keeps the pair in sync. Self-loops and
/// parallel edges are rejected.
///
/// No reverse index is kept, so [`AdjacencyList::in_degree`] on a directed
/// graph scans every edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdjacencyList<D: Directivity = Directed, E = (), V = ()> {
    vertices: Vec<Vertex<E, V>>,
    records: usize,
    directivity: PhantomData<D>,
}

pub type DirectedGraph<E = (), V = ()> = AdjacencyList<Directed, E, V>;
pub type UndirectedGraph<E = (), V = ()> = AdjacencyList<Undirected, E, V>;

impl<D: Directivity, E, V> Default for AdjacencyList<D, E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Directivity, E, V> AdjacencyList<D, E, V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            records: 0,
            directivity: PhantomData,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            records: 0,
            directivity: PhantomData,
        }
    }

    /// Creates `n` vertices with default payloads and no edges.
    #[must_use]
    pub fn with_vertices(n: usize) -> Self
    where
        V: Default,
    {
        let mut graph = Self::with_capacity(n);
        graph.vertices.resize_with(n, || Vertex::new(V::default()));
        graph
    }

    pub fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Logical edge count; an undirected edge counts once.
    #[inline]
    pub fn edge_count(&self) -> usize {
        D::edge_count(self.records)
    }

    #[inline]
    pub fn max_edges(&self) -> usize {
        D::max_edges(self.vertices.len())
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    /// Vertex record at `index`. Panics when out of range.
    #[inline]
    pub fn vertex(&self, index: VertexIndex) -> &Vertex<E, V> {
        &self.vertices[index]
    }

    /// Iterates vertex indices with their records.
    pub fn iter(&self) -> impl Iterator<Item = (VertexIndex, &Vertex<E, V>)> {
        self.vertices.iter().enumerate()
    }

    #[inline]
    pub fn properties(&self, index: VertexIndex) -> &V {
        &self.vertices[index].properties
    }

    #[inline]
    pub fn properties_mut(&mut self, index: VertexIndex) -> &mut V {
        &mut self.vertices[index].properties
    }

    #[inline]
    pub fn out_edges(&self, index: VertexIndex) -> &[OutEdge<E>] {
        &self.vertices[index].out_edges
    }

    #[inline]
    pub fn out_degree(&self, index: VertexIndex) -> usize {
        self.vertices[index].out_edges.len()
    }

    /// Number of edges entering `index`.
    ///
    /// Directed graphs scan every stored edge. For undirected graphs this
    /// equals the out-degree.
    pub fn in_degree(&self, index: VertexIndex) -> usize {
        assert!(index < self.vertices.len(), "vertex {index} out of range");
        if D::DIRECTED {
            self.vertices
                .iter()
                .flat_map(|vertex| vertex.out_edges.iter())
                .filter(|edge| edge.to == index)
                .count()
        } else {
            self.out_degree(index)
        }
    }

    #[inline]
    pub fn edge(&self, from: VertexIndex, to: VertexIndex) -> Option<&E> {
        let vertex = &self.vertices[from];
        vertex
            .position_of(to)
            .map(|position| &vertex.out_edges[position].properties)
    }

    #[inline]
    pub fn has_edge(&self, from: VertexIndex, to: VertexIndex) -> bool {
        self.vertices[from].position_of(to).is_some()
    }

    /// Iterates edges as `(from, payload, to)`.
    ///
    /// Undirected graphs yield each edge once, as its `from < to` record.
    pub fn edges(&self) -> EdgeIter<'_, D, E, V> {
        EdgeIter {
            vertices: &self.vertices,
            from: 0,
            current: [].iter(),
            directivity: PhantomData,
        }
    }

    /// Appends a vertex and returns its index.
    pub fn insert_vertex(&mut self, properties: V) -> VertexIndex {
        self.vertices.push(Vertex::new(properties));
        self.vertices.len() - 1
    }

    /// Removes `index` with every incident edge and returns its payload.
    ///
    /// All vertices above `index` move down by one.
    pub fn erase_vertex(&mut self, index: VertexIndex) -> V {
        assert!(index < self.vertices.len(), "vertex {index} out of range");
        trace!(vertex = index, "erasing vertex");

        let removed = self.vertices.remove(index);
        self.records -= removed.out_edges.len();

        let mut dropped = 0;
        for vertex in &mut self.vertices {
            let before = vertex.out_edges.len();
            vertex.out_edges.retain(|edge| edge.to != index);
            dropped += before - vertex.out_edges.len();
        }
        self.records -= dropped;

        self.shift_targets_above(index);
        removed.properties
    }

    /// Merges `v` into `u` and removes the merged vertex.
    ///
    /// The survivor is the lower of the two indices, so the other index is
    /// erased and every vertex above it moves down by one. Neighbors of the
    /// erased vertex become neighbors of the survivor; when both were already
    /// adjacent to some `w`, the survivor keeps its own edge payload. Returns
    /// true when `u` and `v` were adjacent.
    ///
    /// Panics when `u == v` or either index is out of range.
    pub fn contract(&mut self, u: VertexIndex, v: VertexIndex) -> bool {
        assert_ne!(u, v, "cannot contract a vertex with itself");
        let count = self.vertices.len();
        assert!(u < count && v < count, "contract({u}, {v}) out of range");

        let (u, v) = if u < v { (u, v) } else { (v, u) };
        trace!(survivor = u, merged = v, "contracting vertices");

        let mut adjacent = false;
        if let Some(position) = self.vertices[u].position_of(v) {
            self.vertices[u].out_edges.remove(position);
            self.records -= 1;
            adjacent = true;
        }
        if let Some(position) = self.vertices[v].position_of(u) {
            self.vertices[v].out_edges.remove(position);
            self.records -= 1;
            adjacent = true;
        }

        let merged = std::mem::take(&mut self.vertices[v].out_edges);
        for edge in merged {
            if self.vertices[u].position_of(edge.to).is_some() {
                self.records -= 1;
            } else {
                self.vertices[u].out_edges.push(edge);
            }
        }

        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            if index == v {
                continue;
            }
            let Some(position) = vertex.position_of(v) else {
                continue;
            };
            if vertex.position_of(u).is_some() {
                vertex.out_edges.remove(position);
                self.records -= 1;
            } else {
                vertex.out_edges[position].to = u;
            }
        }

        self.vertices.remove(v);
        self.shift_targets_above(v);
        adjacent
    }

    /// Adds a twin of `v` and returns its index.
    ///
    /// The twin copies `v`'s payload. Every other vertex with an edge to `v`
    /// gains an edge to the twin with the same payload. The twin owns no
    /// edges of its own in a directed graph; in an undirected graph it holds
    /// the mirrors of those new edges.
    pub fn cleave(&mut self, v: VertexIndex) -> VertexIndex
    where
        E: Clone,
        V: Clone,
    {
        assert!(v < self.vertices.len(), "vertex {v} out of range");
        let twin = self.insert_vertex(self.vertices[v].properties.clone());
        trace!(vertex = v, twin, "cleaving vertex");

        let mut mirrors = Vec::new();
        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            if index == v || index == twin {
                continue;
            }
            if let Some(position) = vertex.position_of(v) {
                let properties = vertex.out_edges[position].properties.clone();
                if !D::DIRECTED {
                    mirrors.push(OutEdge::new(index, properties.clone()));
                }
                vertex.out_edges.push(OutEdge::new(twin, properties));
                self.records += 1;
            }
        }

        self.records += mirrors.len();
        self.vertices[twin].out_edges = mirrors;
        twin
    }

    /// Copy of the graph with the same vertices and no edges.
    #[must_use]
    pub fn strip_edges(&self) -> Self
    where
        V: Clone,
    {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|vertex| Vertex::new(vertex.properties.clone()))
                .collect(),
            records: 0,
            directivity: PhantomData,
        }
    }

    /// Consuming variant of [`AdjacencyList::strip_edges`].
    #[must_use]
    pub fn into_stripped(mut self) -> Self {
        for vertex in &mut self.vertices {
            vertex.out_edges.clear();
        }
        self.records = 0;
        self
    }

    /// Reinterprets the graph as directed.
    ///
    /// An undirected edge becomes the two directed edges it is stored as.
    #[must_use]
    pub fn to_directed(&self) -> AdjacencyList<Directed, E, V>
    where
        E: Clone,
        V: Clone,
    {
        AdjacencyList {
            vertices: self.vertices.clone(),
            records: self.records,
            directivity: PhantomData,
        }
    }

    /// Consuming variant of [`AdjacencyList::to_directed`].
    #[must_use]
    pub fn into_directed(self) -> AdjacencyList<Directed, E, V> {
        AdjacencyList {
            vertices: self.vertices,
            records: self.records,
            directivity: PhantomData,
        }
    }

    /// Collapses every edge to an undirected one.
    ///
    /// When both `u -> v` and `v -> u` exist, the edge met first in vertex
    /// then adjacency order supplies the payload.
    #[must_use]
    pub fn to_undirected(&self) -> AdjacencyList<Undirected, E, V>
    where
        E: Clone,
        V: Clone,
    {
        let mut undirected = AdjacencyList {
            vertices: self
                .vertices
                .iter()
                .map(|vertex| Vertex::new(vertex.properties.clone()))
                .collect(),
            records: 0,
            directivity: PhantomData,
        };

        for (from, vertex) in self.vertices.iter().enumerate() {
            for edge in &vertex.out_edges {
                undirected.insert_edge(from, edge.to, edge.properties.clone());
            }
        }
        undirected
    }

    /// Orders every out-edge sequence by target index.
    pub fn sort_edges(&mut self) {
        for vertex in &mut self.vertices {
            vertex.out_edges.sort_by_key(|edge| edge.to);
        }
    }

    /// Mutable payload of the `from -> to` record only.
    ///
    /// Undirected callers should prefer `set_edge_properties`, which keeps
    /// both records equal.
    pub(crate) fn record_mut(&mut self, from: VertexIndex, to: VertexIndex) -> Option<&mut E> {
        let vertex = &mut self.vertices[from];
        let position = vertex.position_of(to)?;
        Some(&mut vertex.out_edges[position].properties)
    }

    /// Appends a record without checks. Callers keep mirrors consistent.
    pub(crate) fn push_record(&mut self, from: VertexIndex, to: VertexIndex, properties: E) {
        self.vertices[from].out_edges.push(OutEdge::new(to, properties));
        self.records += 1;
    }

    fn check_endpoints(&self, from: VertexIndex, to: VertexIndex) {
        assert_ne!(from, to, "self-loop on vertex {from}");
        let count = self.vertices.len();
        assert!(
            from < count && to < count,
            "edge ({from}, {to}) out of range for {count} vertices"
        );
    }

    fn remove_record(&mut self, from: VertexIndex, to: VertexIndex) -> Option<E> {
        let vertex = &mut self.vertices[from];
        let position = vertex.position_of(to)?;
        self.records -= 1;
        Some(vertex.out_edges.remove(position).properties)
    }

    fn shift_targets_above(&mut self, index: VertexIndex) {
        for vertex in &mut self.vertices {
            for edge in &mut vertex.out_edges {
                if edge.to > index {
                    edge.to -= 1;
                }
            }
        }
    }
}

impl<E, V> AdjacencyList<Directed, E, V> {
    /// Replaces the payload of `from -> to`. Returns false if absent.
    pub fn set_edge_properties(&mut self, from: VertexIndex, to: VertexIndex, properties: E) -> bool {
        match self.record_mut(from, to) {
            Some(slot) => {
                *slot = properties;
                true
            }
            None => false,
        }
    }
}

impl<E, V> AdjacencyList<Undirected, E, V> {
    /// Number of edges incident to `index`.
    #[inline]
    pub fn degree(&self, index: VertexIndex) -> usize {
        self.out_degree(index)
    }

    /// Replaces the payload of `{from, to}` in both records.
    pub fn set_edge_properties(&mut self, from: VertexIndex, to: VertexIndex, properties: E) -> bool
    where
        E: Clone,
    {
        if !self.has_edge(from, to) {
            return false;
        }
        if let Some(slot) = self.record_mut(to, from) {
            *slot = properties.clone();
        }
        if let Some(slot) = self.record_mut(from, to) {
            *slot = properties;
        }
        true
    }
}

/// Iterator returned by [`AdjacencyList::edges`].
pub struct EdgeIter<'a, D, E, V> {
    vertices: &'a [Vertex<E, V>],
    from: VertexIndex,
    current: std::slice::Iter<'a, OutEdge<E>>,
    directivity: PhantomData<D>,
}

impl<'a, D: Directivity, E, V> Iterator for EdgeIter<'a, D, E, V> {
    type Item = (VertexIndex, &'a E, VertexIndex);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for edge in self.current.by_ref() {
                let from = self.from - 1;
                if D::DIRECTED || from < edge.to {
                    return Some((from, &edge.properties, edge.to));
                }
            }

            let vertex = self.vertices.get(self.from)?;
            self.current = vertex.out_edges.iter();
            self.from += 1;
        }
    }
}

impl<D: Directivity, E, V> Vertices for AdjacencyList<D, E, V> {
    type Vertices<'a>
        = std::ops::Range<VertexIndex>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        0..self.vertices.len()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<D: Directivity, E, V> ReadVertices for AdjacencyList<D, E, V> {
    type VertexProperties = V;

    fn properties(&self, vertex: VertexIndex) -> &V {
        &self.vertices[vertex].properties
    }
}

impl<D: Directivity, E, V> Edges for AdjacencyList<D, E, V> {
    type EdgeProperties = E;
}

impl<D: Directivity, E, V> ReadEdges for AdjacencyList<D, E, V> {
    type Edges<'a>
        = EdgeIter<'a, D, E, V>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        AdjacencyList::edges(self)
    }

    fn edge_count(&self) -> usize {
        D::edge_count(self.records)
    }

    fn edge(&self, from: VertexIndex, to: VertexIndex) -> Option<&E> {
        AdjacencyList::edge(self, from, to)
    }
}

impl<E, V> InsertEdge for AdjacencyList<Directed, E, V> {
    fn insert_edge(&mut self, from: VertexIndex, to: VertexIndex, properties: E) -> bool {
        self.check_endpoints(from, to);
        if self.has_edge(from, to) {
            return false;
        }
        self.push_record(from, to, properties);
        true
    }
}

impl<E: Clone, V> InsertEdge for AdjacencyList<Undirected, E, V> {
    fn insert_edge(&mut self, from: VertexIndex, to: VertexIndex, properties: E) -> bool {
        self.check_endpoints(from, to);
        if self.has_edge(from, to) {
            debug_assert!(self.has_edge(to, from));
            return false;
        }
        self.push_record(to, from, properties.clone());
        self.push_record(from, to, properties);
        true
    }
}

impl<E, V> RemoveEdge for AdjacencyList<Directed, E, V> {
    fn erase_edge(&mut self, from: VertexIndex, to: VertexIndex) -> bool {
        self.remove_record(from, to).is_some()
    }
}

impl<E, V> RemoveEdge for AdjacencyList<Undirected, E, V> {
    fn erase_edge(&mut self, from: VertexIndex, to: VertexIndex) -> bool {
        if self.remove_record(from, to).is_none() {
            return false;
        }
        let mirrored = self.remove_record(to, from);
        debug_assert!(mirrored.is_some(), "missing mirror of ({from}, {to})");
        true
    }
}

impl<D: Directivity, E, V> Graph for AdjacencyList<D, E, V> {
    type Directivity = D;
}

impl<D: Directivity, E, V> Forward for AdjacencyList<D, E, V> {
    #[inline]
    fn successors(&self, vertex: VertexIndex) -> &[OutEdge<E>] {
        &self.vertices[vertex].out_edges
    }
}

impl<D, E, V> FromIterator<(VertexIndex, VertexIndex, E)> for AdjacencyList<D, E, V>
where
    D: Directivity,
    V: Default,
    Self: InsertEdge<EdgeProperties = E>,
{
    /// Builds a graph just large enough for the given edges.
    ///
    /// Duplicate edges keep the first payload.
    fn from_iter<I: IntoIterator<Item = (VertexIndex, VertexIndex, E)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (from, to, properties) in iter {
            let needed = from.max(to) + 1;
            if needed > graph.vertices.len() {
                graph
                    .vertices
                    .resize_with(needed, || Vertex::new(V::default()));
            }
            graph.insert_edge(from, to, properties);
        }
        graph
    }
}
