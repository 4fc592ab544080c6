//! Error types for the Kumo core library.
//!
//! Edge mutation follows a fail-quiet policy: out-of-range indices,
//! self-loops, and duplicate insertions are silent no-ops rather than
//! errors. Only the construction surface can fail, so this module stays
//! deliberately small.

use thiserror::Error;

/// Error type produced while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The description declared more vertices than the configured capacity.
    #[error("description declares {got} vertices but the capacity is {capacity}")]
    TooManyVertices {
        /// Number of vertices declared by the description.
        got: usize,
        /// Capacity configured on the builder.
        capacity: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::TooManyVertices { .. } => GraphErrorCode::TooManyVertices,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// The description declared more vertices than the configured capacity.
    TooManyVertices,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooManyVertices => "GRAPH_TOO_MANY_VERTICES",
        }
    }
}

impl std::fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
