//! Adjacency-list graph container.
//!
//! Each vertex owns its payload and an ordered list of 0-based neighbour
//! indices. The original design linked edge records through raw pointers;
//! owned `Vec`s preserve the chain-order semantics while making deep copy a
//! derived `Clone` and destruction automatic.

use crate::result::VertexId;

/// Default bound on the number of vertices a description may declare.
pub const MAX_VERTICES: usize = 100;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Vertex {
    pub(crate) payload: String,
    /// Neighbour indices in insertion order, each unique and in
    /// `[0, graph.len())`, never the owning vertex itself.
    pub(crate) adjacency: Vec<usize>,
}

/// An undirected, unweighted graph over a small fixed set of vertices.
///
/// Edge records are directed arcs stored only in the source vertex's chain;
/// the graph is undirected only insofar as callers insert both directions.
/// Mutators take 1-based external identifiers and silently ignore
/// out-of-range, zero, and self-loop arguments.
///
/// # Examples
/// ```
/// use kumo_core::GraphBuilder;
///
/// let mut graph = GraphBuilder::new()
///     .with_payloads(["Aurora", "Basalt", "Cinder"])
///     .build()
///     .expect("three vertices fit the default capacity");
/// graph.insert_edge(1, 2);
/// graph.insert_edge(1, 2); // duplicate, ignored
/// graph.insert_edge(3, 3); // self-loop, ignored
/// let chain = graph.neighbours(1).expect("vertex 1 exists");
/// assert_eq!(chain.len(), 1);
/// assert_eq!(chain[0].get(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Creates an empty graph with no vertices.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::Graph;
    ///
    /// let graph = Graph::new();
    /// assert!(graph.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub(crate) fn from_payloads(payloads: Vec<String>) -> Self {
        Self {
            vertices: payloads
                .into_iter()
                .map(|payload| Vertex {
                    payload,
                    adjacency: Vec::new(),
                })
                .collect(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the payload of the vertex with the given 1-based identifier,
    /// or `None` when the identifier is zero or out of range.
    #[must_use]
    pub fn payload(&self, source: usize) -> Option<&str> {
        let index = source.checked_sub(1)?;
        self.vertices.get(index).map(|vertex| vertex.payload.as_str())
    }

    /// Returns the adjacency chain of the vertex with the given 1-based
    /// identifier, as external identifiers in chain order, or `None` when
    /// the identifier is zero or out of range.
    #[must_use]
    pub fn neighbours(&self, source: usize) -> Option<Vec<VertexId>> {
        let index = source.checked_sub(1)?;
        let vertex = self.vertices.get(index)?;
        Some(
            vertex
                .adjacency
                .iter()
                .map(|&target| VertexId::from_index(target))
                .collect(),
        )
    }

    /// Inserts the arc `source -> destination` (1-based identifiers).
    ///
    /// Silently ignores the call when either identifier is zero or out of
    /// range, when the two are equal, or when the arc already exists. A new
    /// record is appended at the end of the source chain. Only the one
    /// direction is inserted; callers wanting an undirected edge must also
    /// insert `destination -> source`.
    pub fn insert_edge(&mut self, source: usize, destination: usize) {
        let Some((from, to)) = self.checked_pair(source, destination) else {
            return;
        };
        if from == to {
            return;
        }
        let Some(vertex) = self.vertices.get_mut(from) else {
            return;
        };
        if vertex.adjacency.contains(&to) {
            return;
        }
        vertex.adjacency.push(to);
    }

    /// Removes the arc `source -> destination` (1-based identifiers).
    ///
    /// Unlinks exactly the matching record, preserving the order of the
    /// rest of the chain. Out-of-range, zero, self-loop, and absent-arc
    /// calls are silent no-ops.
    pub fn remove_edge(&mut self, source: usize, destination: usize) {
        let Some((from, to)) = self.checked_pair(source, destination) else {
            return;
        };
        if from == to {
            return;
        }
        let Some(vertex) = self.vertices.get_mut(from) else {
            return;
        };
        if let Some(position) = vertex.adjacency.iter().position(|&target| target == to) {
            vertex.adjacency.remove(position);
        }
    }

    /// Releases every vertex, its payload, and its adjacency chain.
    ///
    /// Dropping a graph does the same implicitly; this exists for callers
    /// that want to reuse the value. Calling it on an already empty graph
    /// is a no-op.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Converts a pair of 1-based identifiers into 0-based indices,
    /// returning `None` unless both land in `[0, len)`.
    fn checked_pair(&self, source: usize, destination: usize) -> Option<(usize, usize)> {
        let from = source.checked_sub(1)?;
        let to = destination.checked_sub(1)?;
        self.are_in_range(from, to).then_some((from, to))
    }

    /// Range guard over 0-based indices, used before mutation and display.
    pub(crate) fn are_in_range(&self, source: usize, destination: usize) -> bool {
        source < self.len() && destination < self.len()
    }

    /// Adjacency chain of a 0-based index; empty for out-of-range indices.
    pub(crate) fn adjacency(&self, index: usize) -> &[usize] {
        self.vertices
            .get(index)
            .map_or(&[], |vertex| vertex.adjacency.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use crate::GraphBuilder;

    use super::Graph;

    fn graph_of(order: usize) -> Graph {
        let payloads = (0..order).map(|index| format!("v{index}"));
        GraphBuilder::new()
            .with_payloads(payloads)
            .build()
            .expect("order fits the default capacity")
    }

    fn chain(graph: &Graph, source: usize) -> Vec<usize> {
        graph
            .neighbours(source)
            .expect("source must be in range")
            .iter()
            .map(|id| id.get())
            .collect()
    }

    #[test]
    fn insert_appends_in_order() {
        let mut graph = graph_of(4);
        graph.insert_edge(1, 3);
        graph.insert_edge(1, 2);
        graph.insert_edge(1, 4);
        assert_eq!(chain(&graph, 1), vec![3, 2, 4]);
    }

    #[test]
    fn insert_is_single_directional() {
        let mut graph = graph_of(3);
        graph.insert_edge(1, 2);
        assert_eq!(chain(&graph, 1), vec![2]);
        assert!(chain(&graph, 2).is_empty());
    }

    #[rstest]
    #[case::zero_source(0, 2)]
    #[case::zero_destination(2, 0)]
    #[case::source_past_size(5, 1)]
    #[case::destination_past_size(1, 5)]
    #[case::self_loop(2, 2)]
    fn invalid_insert_is_a_no_op(#[case] source: usize, #[case] destination: usize) {
        let mut graph = graph_of(4);
        graph.insert_edge(1, 2);
        let before = graph.clone();
        graph.insert_edge(source, destination);
        assert_eq!(graph, before);
    }

    #[rstest]
    #[case::zero_source(0, 2)]
    #[case::destination_past_size(1, 9)]
    #[case::self_loop(3, 3)]
    #[case::absent_arc(2, 3)]
    fn invalid_remove_is_a_no_op(#[case] source: usize, #[case] destination: usize) {
        let mut graph = graph_of(4);
        graph.insert_edge(1, 2);
        graph.insert_edge(1, 3);
        let before = graph.clone();
        graph.remove_edge(source, destination);
        assert_eq!(graph, before);
    }

    #[test]
    fn remove_preserves_chain_order() {
        let mut graph = graph_of(4);
        graph.insert_edge(1, 2);
        graph.insert_edge(1, 3);
        graph.insert_edge(1, 4);
        graph.remove_edge(1, 3);
        assert_eq!(chain(&graph, 1), vec![2, 4]);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = graph_of(3);
        original.insert_edge(1, 2);
        let mut copy = original.clone();

        copy.insert_edge(2, 3);
        copy.remove_edge(1, 2);
        assert_eq!(chain(&original, 1), vec![2]);
        assert!(chain(&original, 2).is_empty());

        original.insert_edge(3, 1);
        assert!(chain(&copy, 3).is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut graph = graph_of(3);
        graph.insert_edge(1, 2);
        graph.clear();
        assert!(graph.is_empty());
        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.neighbours(1).is_none());
    }

    #[test]
    fn payload_lookup_is_one_based() {
        let graph = GraphBuilder::new()
            .with_payloads(["A", "B", "C"])
            .build()
            .expect("three vertices fit the default capacity");
        assert_eq!(graph.payload(1), Some("A"));
        assert_eq!(graph.payload(3), Some("C"));
        assert_eq!(graph.payload(0), None);
        assert_eq!(graph.payload(4), None);
    }

    proptest! {
        /// Re-applying any sequence of insertions leaves the graph unchanged
        /// and every chain free of duplicate targets.
        #[test]
        fn insert_is_idempotent(pairs in proptest::collection::vec((0usize..=9, 0usize..=9), 0..40)) {
            let mut graph = graph_of(8);
            for &(source, destination) in &pairs {
                graph.insert_edge(source, destination);
            }
            let once = graph.clone();
            for &(source, destination) in &pairs {
                graph.insert_edge(source, destination);
            }
            prop_assert_eq!(&graph, &once);

            for source in 1..=graph.len() {
                let mut targets = chain(&graph, source);
                let total = targets.len();
                targets.sort_unstable();
                targets.dedup();
                prop_assert_eq!(targets.len(), total);
            }
        }

        /// Inserting an absent arc and removing it restores the exact chain.
        #[test]
        fn insert_then_remove_restores_chain(
            seed in proptest::collection::vec((1usize..=8, 1usize..=8), 0..32),
            (source, destination) in (1usize..=8, 1usize..=8),
        ) {
            let mut graph = graph_of(8);
            for &(a, b) in &seed {
                graph.insert_edge(a, b);
            }
            graph.remove_edge(source, destination);
            let before = graph.clone();

            graph.insert_edge(source, destination);
            graph.remove_edge(source, destination);
            prop_assert_eq!(graph, before);
        }
    }
}
