//! Cycle detection over the adjacency projection.
//!
//! Three-colour depth-first search: a vertex is white until first entered
//! (`visited`), grey while it sits on the active path (`on_stack`), and black
//! once all of its successors are explored. Reaching a grey vertex again
//! means a back edge, which closes a cycle.
//!
//! The walk keeps an explicit stack of frames instead of recursing, so path
//! length is bounded by heap rather than call-stack size.

use std::collections::HashSet;

use crate::types::VertexId;

use super::Graph;

/// One frame of the explicit DFS stack: a vertex and the index of the next
/// successor to examine.
struct Frame {
    vertex: VertexId,
    next: usize,
}

/// Returns `true` if the graph contains at least one directed cycle.
///
/// Start vertices are tried in ascending ID order. The answer does not
/// depend on that order. O(V + E).
pub fn is_cyclic(graph: &Graph) -> bool {
    let mut visited: HashSet<VertexId> = HashSet::with_capacity(graph.vertex_count());
    let mut on_stack: HashSet<VertexId> = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    for start in graph.vertices().map(|v| v.id()) {
        if visited.contains(&start) {
            continue;
        }
        visited.insert(start);
        on_stack.insert(start);
        stack.push(Frame {
            vertex: start,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let successors = graph.successors(frame.vertex);
            if frame.next == successors.len() {
                // Finished: leaves the path but stays visited.
                on_stack.remove(&frame.vertex);
                stack.pop();
                continue;
            }

            let w = successors[frame.next];
            frame.next += 1;

            if on_stack.contains(&w) {
                return true;
            }
            if visited.insert(w) {
                on_stack.insert(w);
                stack.push(Frame { vertex: w, next: 0 });
            }
        }
    }

    false
}
