//! Property tests over random edge sequences.

use std::collections::{BTreeSet, VecDeque};

use proptest::prelude::*;

use flownet::flow::{residual_graph, EdmondsKarp};
use flownet::graph::{augmenting_path, Graph};
use flownet::types::VertexId;

/// Mutation applied to a graph under test.
#[derive(Debug, Clone)]
enum Op {
    Edge(VertexId, VertexId),
    Vertex(VertexId),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (0u64..12, 0u64..12).prop_map(|(t, h)| Op::Edge(t, h)),
        1 => (0u64..12).prop_map(Op::Vertex),
    ]
}

fn arb_network() -> impl Strategy<Value = Vec<(VertexId, VertexId, i64, i64)>> {
    prop::collection::vec((0u64..8, 0u64..8, 0i64..20, 0i64..20), 1..30)
}

fn build(edges: &[(VertexId, VertexId, i64, i64)]) -> Graph {
    let mut g = Graph::new();
    for &(t, h, c, f) in edges {
        g.add_edge(t, h).set_capacity(c).unwrap().set_flow(f.min(c)).unwrap();
    }
    g
}

fn scan_sources(g: &Graph) -> BTreeSet<VertexId> {
    g.vertices().filter(|v| v.indegree() == 0).map(|v| v.id()).collect()
}

fn scan_sinks(g: &Graph) -> BTreeSet<VertexId> {
    g.vertices().filter(|v| v.outdegree() == 0).map(|v| v.id()).collect()
}

/// Vertices reachable from `from` over edges with spare residual capacity.
fn reachable(r: &Graph, from: VertexId) -> BTreeSet<VertexId> {
    let mut seen = BTreeSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(u) = queue.pop_front() {
        for (v, id) in r.vertex(u).unwrap().outgoing() {
            if r.edge(id).unwrap().residual_capacity() > 0 && seen.insert(v) {
                queue.push_back(v);
            }
        }
    }
    seen
}

fn ids(vertices: Vec<&flownet::Vertex>) -> BTreeSet<VertexId> {
    vertices.into_iter().map(|v| v.id()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn degree_is_in_plus_out(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut g = Graph::new();
        for op in ops {
            match op {
                Op::Edge(t, h) => { g.add_edge(t, h); }
                Op::Vertex(v) => { g.add_vertex(v); }
            }
            for v in g.vertices() {
                prop_assert_eq!(v.degree(), v.indegree() + v.outdegree());
            }
        }
    }

    #[test]
    fn sources_and_sinks_match_full_scan(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut g = Graph::new();
        for op in ops {
            match op {
                Op::Edge(t, h) => { g.add_edge(t, h); }
                Op::Vertex(v) => { g.add_vertex(v); }
            }
            prop_assert_eq!(ids(g.sources()), scan_sources(&g));
            prop_assert_eq!(ids(g.sinks()), scan_sinks(&g));
        }
    }

    #[test]
    fn edges_are_linked_from_both_endpoints(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut g = Graph::new();
        for op in ops {
            match op {
                Op::Edge(t, h) => { g.add_edge(t, h); }
                Op::Vertex(v) => { g.add_vertex(v); }
            }
        }
        let mut linked = 0usize;
        for v in g.vertices() {
            for (head, id) in v.outgoing() {
                let e = g.edge(id).unwrap();
                prop_assert_eq!((e.tail(), e.head()), (v.id(), head));
                prop_assert_eq!(g.vertex(head).unwrap().edge_from(v.id()), Some(id));
                linked += 1;
            }
            let heads: BTreeSet<VertexId> = v.outgoing().map(|(h, _)| h).collect();
            let projected: BTreeSet<VertexId> = g.successors(v.id()).iter().copied().collect();
            prop_assert_eq!(heads, projected);
            prop_assert_eq!(g.successors(v.id()).len(), v.outdegree());
        }
        prop_assert_eq!(linked, g.edge_count());
    }

    #[test]
    fn chain_plus_back_edge_is_cyclic(len in 2u64..40, back_to in 0u64..40) {
        let mut g = Graph::new();
        for i in 0..len {
            g.add_edge(i, i + 1);
        }
        prop_assert!(!g.is_cyclic());
        g.add_edge(len, back_to % (len + 1));
        prop_assert!(g.is_cyclic());
    }

    #[test]
    fn residual_matches_definition(edges in arb_network()) {
        let g = build(&edges);
        let r = residual_graph(&g).unwrap();
        prop_assert_eq!(r.vertex_count(), g.vertex_count());

        for e in g.edges() {
            let (u, v, c, f) = (e.tail(), e.head(), e.capacity(), e.flow());
            // A self-loop is its own antiparallel partner.
            let antiparallel = g.edge_between(v, u).is_some();

            if c > f {
                let forward = r.find_edge(u, v).unwrap().capacity();
                if antiparallel {
                    prop_assert!(forward >= c - f);
                } else {
                    prop_assert_eq!(forward, c - f);
                }
            } else if !antiparallel {
                prop_assert!(r.edge_between(u, v).is_none());
            }

            if f > 0 {
                let backward = r.find_edge(v, u).unwrap().capacity();
                if antiparallel {
                    prop_assert!(backward >= f);
                } else {
                    prop_assert_eq!(backward, f);
                }
            }
        }
        prop_assert!(r.edges().all(|e| e.flow() == 0 && e.capacity() > 0));
    }

    #[test]
    fn max_flow_bounded_by_cut_at_terminals(edges in arb_network()) {
        let g = build(&edges);
        let Ok(result) = EdmondsKarp::new().solve(&g) else {
            return Ok(());
        };
        let (s, t) = (result.source(), result.sink());
        prop_assert_ne!(s, t);

        let r = residual_graph(&g).unwrap();
        let out_of_source: i64 = r.vertex(s).unwrap()
            .outgoing()
            .map(|(_, id)| r.edge(id).unwrap().capacity())
            .sum();
        let into_sink: i64 = r.vertex(t).unwrap()
            .incoming()
            .map(|(_, id)| r.edge(id).unwrap().capacity())
            .sum();

        prop_assert!(result.value() >= 0);
        prop_assert!(result.value() <= out_of_source);
        prop_assert!(result.value() <= into_sink);
    }

    #[test]
    fn max_flow_bounded_by_input_capacities(
        edges in prop::collection::vec((0u64..8, 0u64..8, 0i64..20), 1..30)
    ) {
        let mut g = Graph::new();
        for &(t, h, c) in &edges {
            g.add_edge(t, h).set_capacity(c).unwrap();
        }
        let Ok(result) = EdmondsKarp::new().solve(&g) else {
            return Ok(());
        };
        let (s, t) = (result.source(), result.sink());

        let out_of_source: i64 = g.vertex(s).unwrap()
            .outgoing()
            .map(|(_, id)| g.edge(id).unwrap().capacity())
            .sum();
        let into_sink: i64 = g.vertex(t).unwrap()
            .incoming()
            .map(|(_, id)| g.edge(id).unwrap().capacity())
            .sum();

        prop_assert!(result.value() <= out_of_source);
        prop_assert!(result.value() <= into_sink);

        // Conservation of the pushed flow at every other vertex.
        for v in g.vertices().map(|v| v.id()).filter(|&v| v != s && v != t) {
            let net: i64 = result.residual().vertex(v).unwrap()
                .outgoing()
                .map(|(w, _)| result.net_flow(v, w))
                .sum();
            prop_assert_eq!(net, 0);
        }
    }

    #[test]
    fn max_flow_equals_min_cut(edges in arb_network()) {
        let g = build(&edges);
        let Ok(result) = EdmondsKarp::new().solve(&g) else {
            return Ok(());
        };
        let (s, t) = (result.source(), result.sink());
        prop_assert!(augmenting_path(result.residual(), s, t).is_none());

        // Whatever the source can still reach is the source side of a min cut.
        let side = reachable(result.residual(), s);
        prop_assert!(!side.contains(&t));

        let initial = residual_graph(&g).unwrap();
        let cut: i64 = initial
            .edges()
            .filter(|e| side.contains(&e.tail()) && !side.contains(&e.head()))
            .map(|e| e.capacity())
            .sum();
        prop_assert_eq!(result.value(), cut);
    }
}
