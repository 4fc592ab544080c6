//! Builder for assembling graphs from batch descriptions.
//!
//! Collects the vertex payload sequence and the edge-pair stream, then
//! replays the stream through [`Graph::insert_edge`] so the fail-quiet
//! mutation rules apply uniformly. A pair whose source is `0` acts as the
//! end-of-stream sentinel; later pairs are ignored.

use tracing::debug;

use crate::{
    Result,
    error::GraphError,
    graph::{Graph, MAX_VERTICES},
};

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use kumo_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_payloads(["A", "B", "C"])
///     .with_edges([(1, 2), (2, 3), (0, 0), (3, 1)])
///     .build()
///     .expect("three vertices fit the default capacity");
/// assert_eq!(graph.len(), 3);
/// // the pair after the (0, 0) sentinel was ignored
/// assert!(graph.neighbours(3).expect("vertex 3 exists").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    capacity: usize,
    payloads: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            capacity: MAX_VERTICES,
            payloads: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl GraphBuilder {
    /// Creates a builder with the default capacity of [`MAX_VERTICES`].
    ///
    /// # Examples
    /// ```
    /// use kumo_core::{GraphBuilder, MAX_VERTICES};
    ///
    /// let builder = GraphBuilder::new();
    /// assert_eq!(builder.capacity(), MAX_VERTICES);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex capacity enforced by [`Self::build`].
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the configured vertex capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends one vertex with the given payload.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payloads.push(payload.into());
        self
    }

    /// Appends one vertex per payload, in order.
    #[must_use]
    pub fn with_payloads(mut self, payloads: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.payloads.extend(payloads.into_iter().map(Into::into));
        self
    }

    /// Returns the number of vertices declared so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.payloads.len()
    }

    /// Appends one `(source, destination)` pair (1-based identifiers) to
    /// the edge stream.
    #[must_use]
    pub fn with_edge(mut self, source: usize, destination: usize) -> Self {
        self.edges.push((source, destination));
        self
    }

    /// Appends a sequence of `(source, destination)` pairs to the edge
    /// stream.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Validates the capacity and constructs the graph.
    ///
    /// The edge stream is consumed in order until a pair with source `0`
    /// or its end; each pair goes through [`Graph::insert_edge`], so
    /// malformed pairs are skipped silently rather than reported.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] when more payloads were
    /// supplied than the configured capacity allows.
    pub fn build(self) -> Result<Graph> {
        if self.payloads.len() > self.capacity {
            return Err(GraphError::TooManyVertices {
                got: self.payloads.len(),
                capacity: self.capacity,
            });
        }

        let mut graph = Graph::from_payloads(self.payloads);
        let mut consumed = 0usize;
        for (source, destination) in self.edges {
            if source == 0 {
                break;
            }
            graph.insert_edge(source, destination);
            consumed += 1;
        }
        debug!(
            vertices = graph.len(),
            edge_pairs = consumed,
            "graph built"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::{GraphError, GraphErrorCode};

    use super::GraphBuilder;

    fn chain(graph: &crate::Graph, source: usize) -> Vec<usize> {
        graph
            .neighbours(source)
            .expect("source must be in range")
            .iter()
            .map(|id| id.get())
            .collect()
    }

    #[test]
    fn builds_the_documented_scenario() {
        let graph = GraphBuilder::new()
            .with_payloads(["A", "B", "C"])
            .with_edges([(1, 2), (2, 3), (0, 0)])
            .build()
            .expect("three vertices fit the default capacity");
        assert_eq!(graph.len(), 3);
        assert_eq!(chain(&graph, 1), vec![2]);
        assert_eq!(chain(&graph, 2), vec![3]);
        assert!(chain(&graph, 3).is_empty());
    }

    #[test]
    fn sentinel_matches_on_source_alone() {
        let graph = GraphBuilder::new()
            .with_payloads(["A", "B"])
            .with_edges([(0, 2), (1, 2)])
            .build()
            .expect("two vertices fit the default capacity");
        assert!(chain(&graph, 1).is_empty());
    }

    #[test]
    fn malformed_pairs_are_skipped_silently() {
        let graph = GraphBuilder::new()
            .with_payloads(["A", "B"])
            .with_edges([(1, 7), (2, 2), (1, 2)])
            .build()
            .expect("two vertices fit the default capacity");
        assert_eq!(chain(&graph, 1), vec![2]);
    }

    #[test]
    fn rejects_descriptions_over_capacity() {
        let err = GraphBuilder::new()
            .with_capacity(2)
            .with_payloads(["A", "B", "C"])
            .build()
            .expect_err("three payloads exceed a capacity of two");
        assert_eq!(err, GraphError::TooManyVertices { got: 3, capacity: 2 });
        assert_eq!(err.code(), GraphErrorCode::TooManyVertices);
        assert_eq!(err.code().as_str(), "GRAPH_TOO_MANY_VERTICES");
    }
}
