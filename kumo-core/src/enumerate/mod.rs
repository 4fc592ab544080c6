//! Connected induced subgraph enumeration.
//!
//! Backtracking search in the extend-subgraph style: each vertex in turn
//! becomes the root of a search that grows the subgraph from a FIFO list of
//! extension candidates. Candidates are restricted to indices strictly
//! greater than the root, so a subgraph whose smallest vertex is `r` is
//! only ever discovered from root `r` and never again from a later start.
//!
//! Merged candidates are checked by linear scan against the candidate list
//! and the current subgraph, but not against the neighbourhoods of earlier
//! members. On cyclic graphs the same vertex set can therefore surface more
//! than once under different discovery orders; callers needing set-level
//! uniqueness must dedupe.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{
    graph::Graph,
    result::{Subgraph, VertexId},
};


impl Graph {
    /// Enumerates every connected induced subgraph with exactly `k`
    /// vertices, each reported as 1-based identifiers in discovery order.
    ///
    /// A `k` of zero or larger than the vertex count yields no subgraphs;
    /// there is no error path. Recursion depth is bounded by `k`.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::GraphBuilder;
    ///
    /// // path 1 - 2 - 3, inserted in both directions
    /// let graph = GraphBuilder::new()
    ///     .with_payloads(["a", "b", "c"])
    ///     .with_edges([(1, 2), (2, 1), (2, 3), (3, 2)])
    ///     .build()
    ///     .expect("three vertices fit the default capacity");
    /// let pairs: Vec<String> = graph
    ///     .enumerate_subgraphs(2)
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// assert_eq!(pairs, ["1 2", "2 3"]);
    /// ```
    #[must_use]
    #[instrument(name = "graph.enumerate", skip(self), fields(order = self.len()))]
    pub fn enumerate_subgraphs(&self, k: usize) -> Vec<Subgraph> {
        let mut found = Vec::new();
        if k == 0 || k > self.len() {
            debug!(k, "enumeration skipped: size out of range");
            return found;
        }

        for root in 0..self.len() {
            let mut current = vec![root];
            let candidates = self.extension_candidates(root, &VecDeque::new(), &current, root);
            self.extend_subgraph(&mut current, candidates, root, k, &mut found);
        }

        debug!(k, count = found.len(), "enumeration complete");
        found
    }

    /// One backtracking step: emit when the subgraph reached `k` vertices,
    /// otherwise pop candidates in FIFO order, grow, recurse, and undo.
    fn extend_subgraph(
        &self,
        current: &mut Vec<usize>,
        mut candidates: VecDeque<usize>,
        root: usize,
        k: usize,
        found: &mut Vec<Subgraph>,
    ) {
        if current.len() == k {
            found.push(Subgraph::new(
                current.iter().map(|&index| VertexId::from_index(index)).collect(),
            ));
            return;
        }

        while let Some(next) = candidates.pop_front() {
            current.push(next);
            let extended = self.extension_candidates(next, &candidates, current, root);
            self.extend_subgraph(current, extended, root, k, found);
            current.pop();
        }
    }

    /// Returns `candidates` extended with the neighbours of `vertex` whose
    /// index is strictly greater than `root` and which are neither listed
    /// already nor members of the subgraph, preserving FIFO order.
    fn extension_candidates(
        &self,
        vertex: usize,
        candidates: &VecDeque<usize>,
        current: &[usize],
        root: usize,
    ) -> VecDeque<usize> {
        let mut extended = candidates.clone();
        for &target in self.adjacency(vertex) {
            if target > root && !extended.contains(&target) && !current.contains(&target) {
                extended.push_back(target);
            }
        }
        extended
    }
}
