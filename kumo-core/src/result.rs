//! Result types for subgraph enumeration.
//!
//! External callers see 1-based vertex identifiers; the containers in this
//! module carry that convention so internal 0-based indices never leak
//! through the public API.

use std::fmt;
use std::num::NonZeroUsize;

/// External, 1-based identifier of a vertex.
///
/// # Examples
/// ```
/// use kumo_core::VertexId;
///
/// let id = VertexId::try_new(3).expect("3 is a valid external id");
/// assert_eq!(id.get(), 3);
/// assert!(VertexId::try_new(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(NonZeroUsize);

impl VertexId {
    /// Wraps a raw external identifier, rejecting the reserved value `0`.
    #[must_use]
    pub const fn try_new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Converts a 0-based internal index into the external identifier.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Returns the raw 1-based identifier.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One connected induced subgraph discovered by
/// [`crate::Graph::enumerate_subgraphs`].
///
/// Vertices appear in discovery order: the root first, then each vertex in
/// the order the backtracking search appended it.
///
/// # Examples
/// ```
/// use kumo_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_payloads(["a", "b"])
///     .with_edge(1, 2)
///     .build()
///     .expect("description fits the default capacity");
/// let subgraphs = graph.enumerate_subgraphs(2);
/// assert_eq!(subgraphs.len(), 1);
/// assert_eq!(subgraphs[0].to_string(), "1 2");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subgraph {
    vertices: Vec<VertexId>,
}

impl Subgraph {
    pub(crate) fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// Returns the member vertices in discovery order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the number of member vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when the subgraph has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl fmt::Display for Subgraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for id in &self.vertices {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{id}")?;
            first = false;
        }
        Ok(())
    }
}
