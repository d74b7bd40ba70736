use tracing::{debug, instrument};

use crate::error::{GraphError, Result};
use crate::graphs::forward::Forward;
use crate::graphs::vertices::VertexIndex;

/// Topological order of a directed acyclic graph by Kahn's algorithm.
///
/// Ready vertices are kept on a stack, so among several candidates the one
/// that became ready last is emitted first. Fails with
/// [`GraphError::Cyclic`] if the graph has a cycle.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn toposort<G: Forward>(graph: &G) -> Result<Vec<VertexIndex>> {
    let vertices = graph.vertex_count();
    let mut in_degree = vec![0usize; vertices];
    for vertex in graph.vertices() {
        for edge in graph.successors(vertex) {
            in_degree[edge.to] += 1;
        }
    }

    let mut ready: Vec<VertexIndex> = (0..vertices).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(vertices);

    while let Some(vertex) = ready.pop() {
        order.push(vertex);
        for edge in graph.successors(vertex) {
            in_degree[edge.to] -= 1;
            if in_degree[edge.to] == 0 {
                ready.push(edge.to);
            }
        }
    }

    if order.len() != vertices {
        debug!(ordered = order.len(), vertices, "cycle detected");
        return Err(GraphError::Cyclic {
            ordered: order.len(),
            vertices,
        });
    }
    Ok(order)
}
