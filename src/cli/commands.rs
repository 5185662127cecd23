//! CLI command implementations.

use std::str::FromStr;

use serde::Serialize;

use crate::flow::{residual_graph, EdmondsKarp};
use crate::graph::{Graph, GraphBuilder};
use crate::types::{FlowError, FlowResult, VertexId};

/// One edge given on the command line as `TAIL:HEAD[:CAPACITY[:FLOW]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeSpec {
    pub tail: VertexId,
    pub head: VertexId,
    pub capacity: i64,
    pub flow: i64,
}

impl FromStr for EdgeSpec {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_edge_spec(s)
    }
}

/// Parse `TAIL:HEAD[:CAPACITY[:FLOW]]`. Missing capacity and flow default to 0.
pub fn parse_edge_spec(spec: &str) -> FlowResult<EdgeSpec> {
    let parts: Vec<&str> = spec.trim().split(':').map(str::trim).collect();
    if parts.len() < 2 || parts.len() > 4 {
        return Err(FlowError::InvalidEdgeSpec(format!(
            "'{spec}' (expected TAIL:HEAD[:CAPACITY[:FLOW]])"
        )));
    }

    let vertex = |s: &str| -> FlowResult<VertexId> {
        s.parse()
            .map_err(|_| FlowError::InvalidEdgeSpec(format!("'{spec}': bad vertex ID '{s}'")))
    };
    let number = |s: Option<&&str>| -> FlowResult<i64> {
        match s {
            None => Ok(0),
            Some(s) => s
                .parse()
                .map_err(|_| FlowError::InvalidEdgeSpec(format!("'{spec}': bad number '{s}'"))),
        }
    };

    Ok(EdgeSpec {
        tail: vertex(parts[0])?,
        head: vertex(parts[1])?,
        capacity: number(parts.get(2))?,
        flow: number(parts.get(3))?,
    })
}

/// Build a graph from parsed edge specs, validating attributes.
pub fn build_graph(specs: &[EdgeSpec]) -> FlowResult<Graph> {
    let mut builder = GraphBuilder::new();
    for spec in specs {
        builder.flow_edge(spec.tail, spec.head, spec.capacity, spec.flow);
    }
    builder.build()
}

#[derive(Serialize)]
struct VertexReport {
    id: VertexId,
    indegree: usize,
    outdegree: usize,
    degree: usize,
}

#[derive(Serialize)]
struct EdgeReport {
    tail: VertexId,
    head: VertexId,
    capacity: i64,
    flow: i64,
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn join_ids(ids: &[VertexId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display structural information about a graph.
pub fn cmd_info(specs: &[EdgeSpec], json: bool) -> FlowResult<()> {
    let graph = build_graph(specs)?;
    let sources: Vec<VertexId> = graph.sources().iter().map(|v| v.id()).collect();
    let sinks: Vec<VertexId> = graph.sinks().iter().map(|v| v.id()).collect();
    let cyclic = graph.is_cyclic();

    if json {
        let vertices: Vec<VertexReport> = graph
            .vertices()
            .map(|v| VertexReport {
                id: v.id(),
                indegree: v.indegree(),
                outdegree: v.outdegree(),
                degree: v.degree(),
            })
            .collect();
        print_json(&serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "sources": sources,
            "sinks": sinks,
            "cyclic": cyclic,
            "degrees": vertices,
        }));
    } else {
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Sources: {}", join_ids(&sources));
        println!("Sinks: {}", join_ids(&sinks));
        println!("Cyclic: {}", if cyclic { "yes" } else { "no" });
        println!("Degrees:");
        for v in graph.vertices() {
            println!(
                "  {}: in {} / out {} / total {}",
                v.id(),
                v.indegree(),
                v.outdegree(),
                v.degree()
            );
        }
    }
    Ok(())
}

/// Report whether the graph has a cycle.
pub fn cmd_cyclic(specs: &[EdgeSpec], json: bool) -> FlowResult<()> {
    let graph = build_graph(specs)?;
    let cyclic = graph.is_cyclic();
    if json {
        println!("{}", serde_json::json!({ "cyclic": cyclic }));
    } else if cyclic {
        println!("Graph is cyclic");
    } else {
        println!("Graph is acyclic");
    }
    Ok(())
}

/// Print the residual graph of the given flow assignment.
pub fn cmd_residual(specs: &[EdgeSpec], json: bool) -> FlowResult<()> {
    let graph = build_graph(specs)?;
    let residual = residual_graph(&graph)?;
    let edges: Vec<EdgeReport> = residual
        .edges()
        .map(|e| EdgeReport {
            tail: e.tail(),
            head: e.head(),
            capacity: e.capacity(),
            flow: e.flow(),
        })
        .collect();

    if json {
        print_json(&serde_json::json!({
            "vertices": residual.vertex_count(),
            "edges": edges,
        }));
    } else {
        println!("Residual edges ({}):", edges.len());
        for e in &edges {
            println!("  {} -> {}  capacity {}", e.tail, e.head, e.capacity);
        }
    }
    Ok(())
}

/// Compute the maximum flow and the flow it routes over each input edge.
pub fn cmd_max_flow(
    specs: &[EdgeSpec],
    source: Option<VertexId>,
    sink: Option<VertexId>,
    json: bool,
) -> FlowResult<()> {
    let graph = build_graph(specs)?;
    let result = EdmondsKarp::new().solve_with(&graph, source, sink)?;

    let edges: Vec<EdgeReport> = graph
        .edges()
        .map(|e| EdgeReport {
            tail: e.tail(),
            head: e.head(),
            capacity: e.capacity(),
            flow: e.flow().saturating_add(result.net_flow(e.tail(), e.head())),
        })
        .collect();

    if json {
        print_json(&serde_json::json!({
            "source": result.source(),
            "sink": result.sink(),
            "max_flow": result.value(),
            "augmentations": result.augmentations(),
            "edges": edges,
        }));
    } else {
        println!(
            "Max flow {} -> {}: {}",
            result.source(),
            result.sink(),
            result.value()
        );
        println!("Augmenting paths: {}", result.augmentations());
        for e in &edges {
            println!("  {} -> {}  {}/{}", e.tail, e.head, e.flow, e.capacity);
        }
    }
    Ok(())
}
