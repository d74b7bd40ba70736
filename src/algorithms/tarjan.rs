use bit_vec::BitVec;
use tracing::instrument;

use crate::graphs::adjacency_list::DirectedGraph;
use crate::graphs::edges::InsertEdge;
use crate::graphs::forward::Forward;
use crate::graphs::vertices::VertexIndex;

const UNDISCOVERED: usize = usize::MAX;

/// Strongly connected components of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnected {
    /// Component id of every vertex. Ids follow the order in which
    /// components were closed, so every edge between two components points
    /// from a higher id to a lower one.
    pub components: Vec<usize>,
    /// Number of components.
    pub count: usize,
}

impl StronglyConnected {
    #[inline]
    pub fn component(&self, vertex: VertexIndex) -> usize {
        self.components[vertex]
    }

    #[inline]
    pub fn is_strongly_connected(&self) -> bool {
        self.count == 1
    }

    /// Vertices of each component in increasing order, indexed by id.
    pub fn members(&self) -> Vec<Vec<VertexIndex>> {
        let mut members = vec![Vec::new(); self.count];
        for (vertex, &component) in self.components.iter().enumerate() {
            members[component].push(vertex);
        }
        members
    }

    /// Component graph: one vertex per component, one edge per connected
    /// pair of distinct components. The result is acyclic.
    pub fn condensation<G: Forward>(&self, graph: &G) -> DirectedGraph {
        let mut dag = DirectedGraph::with_vertices(self.count);
        for from in graph.vertices() {
            for edge in graph.successors(from) {
                let (a, b) = (self.components[from], self.components[edge.to]);
                if a != b {
                    dag.insert_edge(a, b, ());
                }
            }
        }
        dag
    }
}

/// Tarjan's index/lowlink algorithm with an explicit call stack.
///
/// Roots are tried in vertex order and successors in adjacency order.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn tarjan<G: Forward>(graph: &G) -> StronglyConnected {
    let vertices = graph.vertex_count();
    let mut index = vec![UNDISCOVERED; vertices];
    let mut lowlink = vec![0; vertices];
    let mut on_stack = BitVec::from_elem(vertices, false);
    let mut stack = Vec::new();
    let mut components = vec![UNDISCOVERED; vertices];
    let mut count = 0;
    let mut next_index = 0;

    // Frames are (vertex, position of the next successor to examine).
    let mut calls: Vec<(VertexIndex, usize)> = Vec::new();

    for root in 0..vertices {
        if index[root] != UNDISCOVERED {
            continue;
        }

        index[root] = next_index;
        lowlink[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack.set(root, true);
        calls.push((root, 0));

        while let Some(frame) = calls.last_mut() {
            let vertex = frame.0;
            let successors = graph.successors(vertex);

            if let Some(edge) = successors.get(frame.1) {
                frame.1 += 1;
                let to = edge.to;
                if index[to] == UNDISCOVERED {
                    index[to] = next_index;
                    lowlink[to] = next_index;
                    next_index += 1;
                    stack.push(to);
                    on_stack.set(to, true);
                    calls.push((to, 0));
                } else if on_stack[to] {
                    lowlink[vertex] = lowlink[vertex].min(index[to]);
                }
                continue;
            }

            calls.pop();
            if let Some(&(parent, _)) = calls.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[vertex]);
            }

            if lowlink[vertex] == index[vertex] {
                while let Some(member) = stack.pop() {
                    on_stack.set(member, false);
                    components[member] = count;
                    if member == vertex {
                        break;
                    }
                }
                count += 1;
            }
        }
    }

    debug_assert!(stack.is_empty());
    StronglyConnected { components, count }
}
