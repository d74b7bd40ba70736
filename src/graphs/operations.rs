use bit_vec::BitVec;

use crate::graphs::adjacency_list::AdjacencyList;
use crate::graphs::directivity::{Directed, Directivity, Undirected};
use crate::graphs::vertices::VertexIndex;

/// Graph with every edge reversed.
///
/// Reversing both records of an undirected edge gives the same pair back, so
/// undirected graphs come out equal up to adjacency order.
pub fn transpose<D, E, V>(graph: &AdjacencyList<D, E, V>) -> AdjacencyList<D, E, V>
where
    D: Directivity,
    E: Clone,
    V: Clone,
{
    let mut result = graph.strip_edges();
    for (from, vertex) in graph.iter() {
        for edge in vertex.out_edges() {
            result.push_record(edge.to, from, edge.properties.clone());
        }
    }
    result
}

/// Graph on the same vertices holding exactly the missing edges.
///
/// New edges carry `E::default()`.
pub fn complement<D, E, V>(graph: &AdjacencyList<D, E, V>) -> AdjacencyList<D, E, V>
where
    D: Directivity,
    E: Default,
    V: Clone,
{
    let vertices = graph.vertex_count();
    let mut result = graph.strip_edges();
    let mut adjacent = BitVec::from_elem(vertices, false);

    for (from, vertex) in graph.iter() {
        for edge in vertex.out_edges() {
            adjacent.set(edge.to, true);
        }
        for to in (0..vertices).filter(|&to| to != from && !adjacent[to]) {
            result.push_record(from, to, E::default());
        }
        for edge in vertex.out_edges() {
            adjacent.set(edge.to, false);
        }
    }
    result
}

/// Directs every undirected edge `{u, v}` with `u < v`.
///
/// `orientation(u, v)` returning true keeps `u -> v`, otherwise `v -> u`.
pub fn orient<E, V>(
    graph: &AdjacencyList<Undirected, E, V>,
    mut orientation: impl FnMut(VertexIndex, VertexIndex) -> bool,
) -> AdjacencyList<Directed, E, V>
where
    E: Clone,
    V: Clone,
{
    let mut result = graph.strip_edges().into_directed();
    for (from, properties, to) in graph.edges() {
        if orientation(from, to) {
            result.push_record(from, to, properties.clone());
        } else {
            result.push_record(to, from, properties.clone());
        }
    }
    result
}

/// Forgets edge directions. See [`AdjacencyList::to_undirected`].
pub fn disorient<E, V>(graph: &AdjacencyList<Directed, E, V>) -> AdjacencyList<Undirected, E, V>
where
    E: Clone,
    V: Clone,
{
    graph.to_undirected()
}

/// Whether every vertex has exactly `degree` neighbors.
///
/// Directed graphs must match `degree` on both in- and out-degrees.
pub fn is_regular_with<D: Directivity, E, V>(graph: &AdjacencyList<D, E, V>, degree: usize) -> bool {
    let vertices = graph.vertex_count();
    if D::DIRECTED {
        if graph.edge_count() != vertices * degree {
            return false;
        }
    } else if graph.edge_count() * 2 != vertices * degree {
        return false;
    }

    if graph.iter().any(|(_, vertex)| vertex.out_degree() != degree) {
        return false;
    }

    if D::DIRECTED {
        // Out-degrees are all `degree` and the total matches, so in-degrees
        // only need an upper bound.
        let mut in_degrees = vec![0usize; vertices];
        for (_, vertex) in graph.iter() {
            for edge in vertex.out_edges() {
                in_degrees[edge.to] += 1;
                if in_degrees[edge.to] > degree {
                    return false;
                }
            }
        }
    }
    true
}

/// Common degree of a regular graph, `None` if irregular or empty.
pub fn regular_degree<D: Directivity, E, V>(graph: &AdjacencyList<D, E, V>) -> Option<usize> {
    if graph.vertex_count() == 0 {
        return None;
    }
    let hypothesis = graph.out_degree(0);
    is_regular_with(graph, hypothesis).then_some(hypothesis)
}

pub fn is_regular<D: Directivity, E, V>(graph: &AdjacencyList<D, E, V>) -> bool {
    regular_degree(graph).is_some()
}
