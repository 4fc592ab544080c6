//! Kumo core library.
//!
//! An in-memory undirected, unweighted graph held as one owned adjacency
//! list per vertex, together with enumeration of all connected induced
//! subgraphs of a fixed order.
//!
//! Vertices are addressed externally with 1-based identifiers and stored
//! internally with 0-based indices. Edge records are single-directional:
//! [`Graph::insert_edge`] adds one arc only, and callers wanting an
//! undirected edge insert both directions themselves.

mod builder;
mod display;
mod enumerate;
mod error;
mod graph;
mod result;

pub use crate::{
    builder::GraphBuilder,
    display::DISPLAY_ERROR,
    error::{GraphError, GraphErrorCode, Result},
    graph::{Graph, MAX_VERTICES},
    result::{Subgraph, VertexId},
};
