use bit_vec::BitVec;
use tracing::instrument;

use crate::graphs::decoration::{Decoration, Predecessor, NO_PREDECESSOR};
use crate::graphs::edges::OutEdge;
use crate::graphs::forward::Forward;
use crate::graphs::properties::{Scalar, Weighted};
use crate::graphs::vertices::VertexIndex;
use crate::graphs::visited::Visited;
use crate::heaps::binary_heap::{BinaryHeap, Comparator};

/// Edge weight callback: `(source vertex, out-edge) -> weight`.
pub type WeightFn<E, W> = fn(VertexIndex, &OutEdge<E>) -> W;

/// Weight type stored in the edge payloads of `G`.
pub type WeightOf<G> = <<G as crate::graphs::edges::Edges>::EdgeProperties as Weighted>::Weight;

/// Reads the weight stored in the edge payload.
#[inline]
pub fn edge_weight<E: Weighted>(_: VertexIndex, edge: &OutEdge<E>) -> E::Weight {
    edge.properties.weight()
}

#[derive(Debug, Clone)]
struct Entry<W, D> {
    vertex: VertexIndex,
    distance: W,
    decoration: D,
}

#[derive(Debug, Clone, Copy, Default)]
struct ByDistance;

impl<W: Scalar, D> Comparator<Entry<W, D>> for ByDistance {
    #[inline]
    fn precedes(&self, a: &Entry<W, D>, b: &Entry<W, D>) -> bool {
        a.distance < b.distance
    }
}

/// Single-source shortest paths over non-negative weights.
///
/// Yields `(vertex, distance, decoration)` as vertices are finalized, in
/// order of non-decreasing distance. Improved tentative distances are pushed
/// as fresh heap entries; a vertex is finalized by its first pop and later
/// stale entries are skipped.
///
/// Panics if adding an edge weight would decrease a distance.
pub struct Dijkstra<'g, G, W, D, F>
where
    G: Forward,
{
    graph: &'g G,
    weight: F,
    heap: BinaryHeap<Entry<W, D>, ByDistance>,
    tentative: Vec<W>,
    finalized: BitVec,
}

impl<'g, G, W, D, F> Dijkstra<'g, G, W, D, F>
where
    G: Forward,
    W: Scalar,
    D: Decoration<G::EdgeProperties>,
    F: FnMut(VertexIndex, &OutEdge<G::EdgeProperties>) -> W,
{
    pub fn new(graph: &'g G, sources: impl IntoIterator<Item = VertexIndex>, weight: F) -> Self {
        let vertices = graph.vertex_count();
        let mut heap = BinaryHeap::with_comparator(ByDistance);
        let mut tentative = vec![W::INFINITY; vertices];

        for source in sources {
            assert!(source < vertices, "source {source} out of range");
            if tentative[source] > W::ZERO {
                tentative[source] = W::ZERO;
                heap.push(Entry {
                    vertex: source,
                    distance: W::ZERO,
                    decoration: D::seed(source),
                });
            }
        }

        Self {
            graph,
            weight,
            heap,
            tentative,
            finalized: <BitVec as Visited<VertexIndex>>::with_capacity(vertices),
        }
    }

    #[inline]
    pub fn is_finalized(&self, vertex: VertexIndex) -> bool {
        self.finalized.is_visited(&vertex)
    }
}

impl<'g, G, W, D, F> Iterator for Dijkstra<'g, G, W, D, F>
where
    G: Forward,
    W: Scalar,
    D: Decoration<G::EdgeProperties>,
    F: FnMut(VertexIndex, &OutEdge<G::EdgeProperties>) -> W,
{
    type Item = (VertexIndex, W, D);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = loop {
            let entry = self.heap.pop()?;
            if self.finalized.visit(entry.vertex) {
                break entry;
            }
        };

        let Entry {
            vertex,
            distance,
            decoration,
        } = entry;

        let graph = self.graph;
        for edge in graph.successors(vertex) {
            if self.finalized.is_visited(&edge.to) {
                continue;
            }

            let next = distance + (self.weight)(vertex, edge);
            assert!(
                next >= distance,
                "negative weight on edge ({vertex}, {})",
                edge.to
            );

            if next < self.tentative[edge.to] {
                self.tentative[edge.to] = next;
                self.heap.push(Entry {
                    vertex: edge.to,
                    distance: next,
                    decoration: decoration.follow(vertex, edge),
                });
            }
        }

        Some((vertex, distance, decoration))
    }
}

/// Dijkstra over the weights stored in the edge payloads.
pub fn dijkstra<G, D>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
) -> Dijkstra<'_, G, WeightOf<G>, D, WeightFn<G::EdgeProperties, WeightOf<G>>>
where
    G: Forward,
    G::EdgeProperties: Weighted,
    D: Decoration<G::EdgeProperties>,
{
    let weight: WeightFn<G::EdgeProperties, WeightOf<G>> = edge_weight::<G::EdgeProperties>;
    Dijkstra::new(graph, sources, weight)
}

/// Dijkstra with weights computed by `weight`.
pub fn dijkstra_by<G, W, D, F>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
    weight: F,
) -> Dijkstra<'_, G, W, D, F>
where
    G: Forward,
    W: Scalar,
    D: Decoration<G::EdgeProperties>,
    F: FnMut(VertexIndex, &OutEdge<G::EdgeProperties>) -> W,
{
    Dijkstra::new(graph, sources, weight)
}

/// Runs Dijkstra until `visitor` returns true.
///
/// `visitor` receives `(vertex, distance, decoration)`. Returns whether the
/// visitor reported a hit.
pub fn dijkstra_visit<G, D>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
    mut visitor: impl FnMut(VertexIndex, WeightOf<G>, &D) -> bool,
) -> bool
where
    G: Forward,
    G::EdgeProperties: Weighted,
    D: Decoration<G::EdgeProperties>,
{
    dijkstra::<G, D>(graph, sources)
        .any(|(vertex, distance, decoration)| visitor(vertex, distance, &decoration))
}

/// Weighted distance and predecessor of every vertex.
///
/// Unreached vertices get `(W::INFINITY, NO_PREDECESSOR)`; sources are their
/// own predecessor.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn dijkstra_shortest_paths<G>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
) -> Vec<(WeightOf<G>, VertexIndex)>
where
    G: Forward,
    G::EdgeProperties: Weighted,
{
    dijkstra_shortest_paths_by(graph, sources, edge_weight::<G::EdgeProperties>)
}

/// [`dijkstra_shortest_paths`] with weights computed by `weight`.
pub fn dijkstra_shortest_paths_by<G, W, F>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
    weight: F,
) -> Vec<(W, VertexIndex)>
where
    G: Forward,
    W: Scalar,
    F: FnMut(VertexIndex, &OutEdge<G::EdgeProperties>) -> W,
{
    let mut paths = vec![(W::INFINITY, NO_PREDECESSOR); graph.vertex_count()];
    for (vertex, distance, Predecessor(predecessor)) in
        dijkstra_by::<G, W, Predecessor, F>(graph, sources, weight)
    {
        paths[vertex] = (distance, predecessor);
    }
    paths
}
