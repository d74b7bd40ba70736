use rustc_hash::FxHashMap;
use tracing::instrument;

use crate::graphs::adjacency_list::AdjacencyList;
use crate::graphs::directivity::Undirected;
use crate::sets::disjoint_set::DisjointSet;

/// Union-find over the vertices of `graph` with every edge united.
pub fn disjoint_set<E, V>(graph: &AdjacencyList<Undirected, E, V>) -> DisjointSet {
    let mut set = DisjointSet::new(graph.vertex_count());
    for (from, _, to) in graph.edges() {
        set.unite(from, to);
    }
    set
}

/// Number of connected components.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn ccs<E, V>(graph: &AdjacencyList<Undirected, E, V>) -> usize {
    disjoint_set(graph).sets()
}

/// Splits `graph` into one graph per connected component.
///
/// Components are ordered by their lowest vertex, and each keeps its
/// vertices in original order, renumbered from zero.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn split_ccs<E, V>(graph: &AdjacencyList<Undirected, E, V>) -> Vec<AdjacencyList<Undirected, E, V>>
where
    E: Clone,
    V: Clone,
{
    let mut set = disjoint_set(graph);
    let mut component_of_root = FxHashMap::default();
    let mut components: Vec<AdjacencyList<Undirected, E, V>> = Vec::with_capacity(set.sets());
    let mut placement = Vec::with_capacity(graph.vertex_count());

    for (vertex, record) in graph.iter() {
        let root = set.find(vertex);
        let component = *component_of_root.entry(root).or_insert_with(|| {
            components.push(AdjacencyList::with_capacity(set.cardinality(root)));
            components.len() - 1
        });
        let local = components[component].insert_vertex(record.properties.clone());
        placement.push((component, local));
    }

    for (from, record) in graph.iter() {
        let (component, local_from) = placement[from];
        for edge in record.out_edges() {
            let (other, local_to) = placement[edge.to];
            debug_assert_eq!(component, other);
            components[component].push_record(local_from, local_to, edge.properties.clone());
        }
    }

    components
}
