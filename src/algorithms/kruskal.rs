use std::cmp::Ordering;

use tracing::instrument;

use crate::graphs::adjacency_list::AdjacencyList;
use crate::graphs::directivity::Undirected;
use crate::graphs::edges::InsertEdge;
use crate::graphs::properties::Weighted;
use crate::graphs::vertices::VertexIndex;
use crate::sets::disjoint_set::DisjointSet;

/// Minimum spanning forest over the weights stored in the edges.
///
/// The result has the same vertices as `graph` and one tree per connected
/// component. Equal weights keep their edge enumeration order. Graphs whose
/// payloads carry no weight use [`spanning_forest`] instead.
pub fn kruskal<E, V>(graph: &AdjacencyList<Undirected, E, V>) -> AdjacencyList<Undirected, E, V>
where
    E: Weighted + Clone,
    V: Clone,
{
    kruskal_by(graph, |_, properties, _| properties.weight())
}

/// Minimum spanning forest under the weight function `weight(from, payload, to)`.
///
/// Incomparable weights such as NaN are treated as equal.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal_by<E, V, W, F>(graph: &AdjacencyList<Undirected, E, V>, mut weight: F) -> AdjacencyList<Undirected, E, V>
where
    E: Clone,
    V: Clone,
    W: PartialOrd,
    F: FnMut(VertexIndex, &E, VertexIndex) -> W,
{
    let mut edges: Vec<_> = graph
        .edges()
        .map(|(from, properties, to)| (weight(from, properties, to), from, properties, to))
        .collect();
    edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    select(graph, edges.into_iter().map(|(_, from, properties, to)| (from, properties, to)))
}

/// Spanning forest without any weight ordering.
///
/// Edges are taken in enumeration order, gated only by connectivity.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn spanning_forest<E, V>(graph: &AdjacencyList<Undirected, E, V>) -> AdjacencyList<Undirected, E, V>
where
    E: Clone,
    V: Clone,
{
    select(graph, graph.edges())
}

fn select<'a, E, V>(
    graph: &AdjacencyList<Undirected, E, V>,
    candidates: impl Iterator<Item = (VertexIndex, &'a E, VertexIndex)>,
) -> AdjacencyList<Undirected, E, V>
where
    E: Clone + 'a,
    V: Clone,
{
    let vertices = graph.vertex_count();
    let mut forest = graph.strip_edges();
    let mut set: DisjointSet = DisjointSet::new(vertices);

    for (from, properties, to) in candidates {
        if set.unite(from, to) {
            forest.insert_edge(from, to, properties.clone());
            if set.sets() == 1 {
                break;
            }
        }
    }
    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::algorithms::components::ccs;
    use crate::graphs::adjacency_list::UndirectedGraph;

    fn weighted(n: usize, edges: &[(usize, usize, u32)]) -> UndirectedGraph<u32> {
        let mut graph = UndirectedGraph::with_vertices(n);
        for &(u, v, w) in edges {
            graph.insert_edge(u, v, w);
        }
        graph
    }

    fn total(graph: &UndirectedGraph<u32>) -> u32 {
        graph.edges().map(|(_, w, _)| *w).sum()
    }

    #[test]
    fn picks_minimum_tree() {
        let graph = weighted(
            6,
            &[
                (0, 1, 1),
                (0, 2, 3),
                (0, 3, 3),
                (1, 2, 2),
                (2, 3, 4),
                (2, 5, 7),
                (3, 4, 1),
                (4, 5, 9),
            ],
        );
        let tree = kruskal(&graph);
        assert_eq!(tree.vertex_count(), 6);
        assert_eq!(tree.edge_count(), 5);
        assert!(!tree.has_edge(0, 2));
        assert!(!tree.has_edge(2, 3));
        assert!(!tree.has_edge(4, 5));
        assert_eq!(total(&tree), 14);
    }

    #[test]
    fn forest_for_disconnected_graph() {
        let graph = weighted(
            7,
            &[(0, 1, 4), (1, 2, 1), (0, 2, 2), (3, 4, 5), (4, 5, 5), (3, 5, 1)],
        );
        let forest = kruskal(&graph);
        assert_eq!(ccs(&forest), 3);
        assert_eq!(forest.edge_count(), 4);
        assert!(forest.has_edge(1, 2) && forest.has_edge(0, 2) && forest.has_edge(3, 5));
        assert!(!forest.has_edge(0, 1));
        assert_eq!(total(&forest), 9);
    }

    #[test]
    fn equal_weights_keep_enumeration_order() {
        let graph = weighted(3, &[(0, 1, 1), (0, 2, 1), (1, 2, 1)]);
        let tree = kruskal(&graph);
        assert!(tree.has_edge(0, 1) && tree.has_edge(0, 2));
        assert!(!tree.has_edge(1, 2));
    }

    #[test]
    fn unweighted_spanning_forest() {
        let mut graph = UndirectedGraph::<()>::with_vertices(5);
        for (u, v) in [(0, 1), (1, 2), (2, 0), (3, 4)] {
            graph.insert_edge(u, v, ());
        }
        let forest = spanning_forest(&graph);
        assert_eq!(forest.edge_count(), 3);
        assert_eq!(ccs(&forest), ccs(&graph));
    }

    #[test]
    fn custom_weight_function_maximises() {
        let graph = weighted(3, &[(0, 1, 1), (1, 2, 5), (0, 2, 3)]);
        let tree = kruskal_by(&graph, |_, w, _| std::cmp::Reverse(*w));
        assert!(tree.has_edge(1, 2) && tree.has_edge(0, 2));
        assert_eq!(total(&tree), 8);
    }

    // Minimum total weight of a spanning forest by enumerating edge subsets.
    fn brute_force(graph: &UndirectedGraph<u32>) -> u32 {
        let edges: Vec<_> = graph.edges().map(|(u, w, v)| (u, *w, v)).collect();
        let target = graph.vertex_count() - ccs(graph);
        let mut best = u32::MAX;
        for mask in 0u32..(1 << edges.len()) {
            if mask.count_ones() as usize != target {
                continue;
            }
            let mut set: DisjointSet = DisjointSet::new(graph.vertex_count());
            let mut weight = 0;
            let mut acyclic = true;
            for (i, &(u, w, v)) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    acyclic &= set.unite(u, v);
                    weight += w;
                }
            }
            if acyclic {
                best = best.min(weight);
            }
        }
        best
    }

    prop_compose! {
        fn small_weighted()
            (n in 1usize..=8)
            (edges in proptest::collection::vec((0..n, 0..n, 1u32..20), 0..12), n in Just(n))
            -> UndirectedGraph<u32>
        {
            let mut graph = UndirectedGraph::with_vertices(n);
            for (u, v, w) in edges {
                if u != v {
                    graph.insert_edge(u, v, w);
                }
            }
            graph
        }
    }

    proptest! {
        #[test]
        fn prop_kruskal_is_minimal_forest(graph in small_weighted()) {
            let forest = kruskal(&graph);
            let components = ccs(&graph);
            prop_assert_eq!(ccs(&forest), components);
            prop_assert_eq!(forest.edge_count(), graph.vertex_count() - components);
            prop_assert_eq!(total(&forest), brute_force(&graph));
            for (u, w, v) in forest.edges() {
                prop_assert_eq!(graph.edge(u, v), Some(w));
            }
        }
    }

    #[test]
    fn random_stress_forest_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x4B_2175_C41);
        for _ in 0..50 {
            let n = rng.random_range(1..100);
            let mut graph = UndirectedGraph::<u32>::with_vertices(n);
            for _ in 0..rng.random_range(0..n * 3) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u != v {
                    graph.insert_edge(u, v, rng.random_range(0..1_000));
                }
            }
            let forest = kruskal(&graph);
            assert_eq!(forest.edge_count(), n - ccs(&graph));
            assert_eq!(ccs(&forest), ccs(&graph));
        }
    }
}
