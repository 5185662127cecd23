//! Breadth-first search for augmenting paths.

use std::collections::{HashMap, VecDeque};

use log::trace;

use crate::types::{EdgeId, VertexId};

use super::Graph;

/// Shortest path (fewest edges) from `source` to `sink` using only edges
/// with positive residual capacity.
///
/// Returns the path's edges in order from `source` to `sink`, or `None` when
/// `sink` is unreachable. The search stops as soon as `sink` is discovered.
/// Asking for a path from a vertex to itself yields `None`.
pub fn augmenting_path(graph: &Graph, source: VertexId, sink: VertexId) -> Option<Vec<EdgeId>> {
    if source == sink || !graph.contains_vertex(source) || !graph.contains_vertex(sink) {
        return None;
    }

    // Predecessor edge of every discovered vertex; doubles as the visited set.
    let mut parent: HashMap<VertexId, Option<EdgeId>> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    parent.insert(source, None);
    queue.push_back(source);

    'search: while let Some(current) = queue.pop_front() {
        let Some(vertex) = graph.vertex(current) else {
            continue;
        };

        for &next in graph.successors(current) {
            if parent.contains_key(&next) {
                continue;
            }
            let Some(edge) = vertex.edge_to(next).and_then(|id| graph.edge(id)) else {
                continue;
            };
            if edge.residual_capacity() <= 0 {
                continue;
            }

            trace!("bfs: discovered {next} via {current}");
            parent.insert(next, Some(edge.id()));
            if next == sink {
                break 'search;
            }
            queue.push_back(next);
        }
    }

    // Walk the predecessor chain back from the sink.
    let mut path = Vec::new();
    let mut at = sink;
    while let Some(&Some(edge_id)) = parent.get(&at) {
        path.push(edge_id);
        at = graph.edge(edge_id)?.tail();
    }
    if at != source {
        return None;
    }

    path.reverse();
    Some(path)
}
