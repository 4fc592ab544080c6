//! Graph generators shared by the kumo benchmarks.

use kumo_core::{Graph, GraphBuilder};

/// Builds a ring of `order` vertices with a chord every `stride` steps,
/// every edge inserted in both directions.
///
/// The chords give the enumeration a denser candidate space than a plain
/// cycle without saturating into a clique.
///
/// # Panics
/// Panics when `order` exceeds the default vertex capacity.
#[must_use]
pub fn ring_with_chords(order: usize, stride: usize) -> Graph {
    let payloads = (0..order).map(|index| format!("v{index}"));
    let mut graph = GraphBuilder::new()
        .with_payloads(payloads)
        .build()
        .expect("benchmark orders stay within the default capacity");
    for index in 0..order {
        insert_undirected(&mut graph, index + 1, (index + 1) % order + 1);
        if stride > 1 {
            insert_undirected(&mut graph, index + 1, (index + stride) % order + 1);
        }
    }
    graph
}

fn insert_undirected(graph: &mut Graph, a: usize, b: usize) {
    graph.insert_edge(a, b);
    graph.insert_edge(b, a);
}
