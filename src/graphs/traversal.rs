use std::collections::VecDeque;
use std::marker::PhantomData;

use bit_vec::BitVec;
use tracing::instrument;

use crate::graphs::decoration::{
    Decoration, Hops, PathLength, Predecessor, NO_PREDECESSOR, UNREACHED,
};
use crate::graphs::edges::OutEdge;
use crate::graphs::forward::Forward;
use crate::graphs::frontier::Frontier;
use crate::graphs::vertices::VertexIndex;
use crate::graphs::visited::Visited;

/// Frontier-driven graph search yielding `(vertex, decoration)` in visit order.
///
/// Every vertex moves from unseen to enqueued at most once, guarded by the
/// marker `M`, and is yielded when it leaves the frontier. The frontier type
/// fixes the order: see [`Bfs`] and [`Dfs`]. Stopping early is just
/// dropping the iterator, so a visitor that returns true maps onto
/// [`Iterator::any`].
pub struct Traversal<'g, G, D, F, M = BitVec>
where
    G: Forward,
{
    graph: &'g G,
    frontier: F,
    enqueued: M,
    decoration: PhantomData<D>,
}

/// Breadth-first search: first enqueued, first visited.
pub type Bfs<'g, G, D = (), M = BitVec> = Traversal<'g, G, D, VecDeque<(VertexIndex, D)>, M>;

/// Depth-first search: an explicit stack, first listed successor visited first.
pub type Dfs<'g, G, D = (), M = BitVec> = Traversal<'g, G, D, Vec<(VertexIndex, D)>, M>;

impl<'g, G, D, F, M> Traversal<'g, G, D, F, M>
where
    G: Forward,
    D: Decoration<G::EdgeProperties>,
    F: Frontier<(VertexIndex, D)>,
    M: Visited<VertexIndex>,
{
    /// Starts a search from `sources`. Repeated sources are enqueued once.
    pub fn new(graph: &'g G, sources: impl IntoIterator<Item = VertexIndex>) -> Self {
        let mut frontier = F::default();
        let mut enqueued = M::with_capacity(graph.vertex_count());

        for source in sources {
            assert!(
                source < graph.vertex_count(),
                "source {source} out of range"
            );
            if enqueued.visit(source) {
                frontier.push((source, D::seed(source)));
            }
        }

        Self {
            graph,
            frontier,
            enqueued,
            decoration: PhantomData,
        }
    }

    /// Marker of every vertex enqueued so far.
    #[inline]
    pub fn into_enqueued(self) -> M {
        self.enqueued
    }

    #[inline]
    pub fn is_enqueued(&self, vertex: VertexIndex) -> bool {
        self.enqueued.is_visited(&vertex)
    }

    #[inline]
    fn enqueue(&mut self, from: VertexIndex, decoration: &D, edge: &OutEdge<G::EdgeProperties>) {
        if self.enqueued.visit(edge.to) {
            self.frontier.push((edge.to, decoration.follow(from, edge)));
        }
    }
}

impl<'g, G, D, F, M> Iterator for Traversal<'g, G, D, F, M>
where
    G: Forward,
    D: Decoration<G::EdgeProperties>,
    F: Frontier<(VertexIndex, D)>,
    M: Visited<VertexIndex>,
{
    type Item = (VertexIndex, D);

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, decoration) = self.frontier.pop()?;
        let graph = self.graph;
        let successors = graph.successors(vertex);

        if F::LIFO {
            for edge in successors.iter().rev() {
                self.enqueue(vertex, &decoration, edge);
            }
        } else {
            for edge in successors {
                self.enqueue(vertex, &decoration, edge);
            }
        }

        debug_assert!(self.frontier.len() <= graph.vertex_count());
        Some((vertex, decoration))
    }
}

/// Breadth-first search from `sources`, visiting bare vertices.
pub fn bfs<G: Forward>(graph: &G, sources: impl IntoIterator<Item = VertexIndex>) -> Bfs<'_, G> {
    Traversal::new(graph, sources)
}

/// Depth-first search from `sources`, visiting bare vertices.
pub fn dfs<G: Forward>(graph: &G, sources: impl IntoIterator<Item = VertexIndex>) -> Dfs<'_, G> {
    Traversal::new(graph, sources)
}

/// Breadth-first search carrying the decoration `D`.
pub fn bfs_decorated<G, D>(graph: &G, sources: impl IntoIterator<Item = VertexIndex>) -> Bfs<'_, G, D>
where
    G: Forward,
    D: Decoration<G::EdgeProperties>,
{
    Traversal::new(graph, sources)
}

/// Depth-first search carrying the decoration `D`.
pub fn dfs_decorated<G, D>(graph: &G, sources: impl IntoIterator<Item = VertexIndex>) -> Dfs<'_, G, D>
where
    G: Forward,
    D: Decoration<G::EdgeProperties>,
{
    Traversal::new(graph, sources)
}

/// Runs a breadth-first search until `visitor` returns true.
///
/// Returns whether the visitor reported a hit.
pub fn bfs_visit<G, D>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
    mut visitor: impl FnMut(VertexIndex, &D) -> bool,
) -> bool
where
    G: Forward,
    D: Decoration<G::EdgeProperties>,
{
    bfs_decorated::<G, D>(graph, sources).any(|(vertex, decoration)| visitor(vertex, &decoration))
}

/// Runs a depth-first search until `visitor` returns true.
pub fn dfs_visit<G, D>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
    mut visitor: impl FnMut(VertexIndex, &D) -> bool,
) -> bool
where
    G: Forward,
    D: Decoration<G::EdgeProperties>,
{
    dfs_decorated::<G, D>(graph, sources).any(|(vertex, decoration)| visitor(vertex, &decoration))
}

/// Breadth-first search reporting hop distance and predecessor per visit.
///
/// `visitor` receives `(vertex, distance, predecessor)`; returning true stops
/// the search. Sources have distance 0 and are their own predecessor.
pub fn bfs_shortest_path<G: Forward>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
    mut visitor: impl FnMut(VertexIndex, PathLength, VertexIndex) -> bool,
) -> bool {
    bfs_decorated::<G, (Hops, Predecessor)>(graph, sources)
        .any(|(vertex, (Hops(distance), Predecessor(predecessor)))| {
            visitor(vertex, distance, predecessor)
        })
}

/// Hop distance and predecessor of every vertex.
///
/// Unreached vertices get `(UNREACHED, NO_PREDECESSOR)`.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn bfs_shortest_paths<G: Forward>(
    graph: &G,
    sources: impl IntoIterator<Item = VertexIndex>,
) -> Vec<(PathLength, VertexIndex)> {
    let mut paths = vec![(UNREACHED, NO_PREDECESSOR); graph.vertex_count()];
    for (vertex, (Hops(distance), Predecessor(predecessor))) in
        bfs_decorated::<G, (Hops, Predecessor)>(graph, sources)
    {
        paths[vertex] = (distance, predecessor);
    }
    paths
}

/// Walks a predecessor table from `target` back to its source.
///
/// Returns the path in source-to-target order, or `None` when `target` was
/// not reached.
pub fn reconstruct_path<W>(paths: &[(W, VertexIndex)], target: VertexIndex) -> Option<Vec<VertexIndex>> {
    let mut current = target;
    let mut path = vec![current];
    loop {
        let predecessor = paths.get(current)?.1;
        if predecessor == NO_PREDECESSOR {
            return None;
        }
        if predecessor == current {
            break;
        }
        path.push(predecessor);
        current = predecessor;
        debug_assert!(path.len() <= paths.len(), "predecessor cycle");
    }
    path.reverse();
    Some(path)
}
