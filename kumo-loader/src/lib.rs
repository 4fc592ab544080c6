//! Loader for the textual graph-description format.
//!
//! A description is: one header line holding the vertex count, one free-text
//! payload line per vertex, then a whitespace-separated stream of 1-based
//! `(source, destination)` integer pairs ended by a pair whose source is `0`
//! or by end of input.
//!
//! Only the header is strict. Everything after it degrades silently: missing
//! payload lines leave later vertices with empty payloads, and a truncated
//! or unparseable edge stream simply ends it. The graph mutators apply their
//! own fail-quiet range rules to whatever pairs survive tokenizing.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;
use tracing::debug;

use kumo_core::{Graph, GraphBuilder, GraphError, MAX_VERTICES};

/// Errors raised while tokenizing a graph description.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Reading from the underlying source failed.
    #[error("failed to read description: {0}")]
    Io(#[from] io::Error),
    /// The description was empty.
    #[error("description is missing the vertex-count header")]
    MissingVertexCount,
    /// The header line did not hold a non-negative integer.
    #[error("header line `{line}` is not a vertex count")]
    InvalidVertexCount {
        /// The raw header line as read.
        line: String,
    },
}

/// A tokenized graph description, ready to hand to [`GraphBuilder`].
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use kumo_loader::parse_description;
///
/// let text = "3\nAurora\nBasalt\nCinder\n1 2\n2 3\n0 0\n";
/// let description = parse_description(Cursor::new(text)).expect("well-formed description");
/// assert_eq!(description.vertex_count(), 3);
/// assert_eq!(description.edges(), [(1, 2), (2, 3)]);
/// let graph = description.into_graph().expect("fits the default capacity");
/// assert_eq!(graph.payload(1), Some("Aurora"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphDescription {
    vertex_count: usize,
    payloads: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl GraphDescription {
    /// Returns the vertex count declared by the header.
    ///
    /// This is the declared figure; a truncated description can carry fewer
    /// payload lines than it declares.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the payload lines in vertex order.
    #[must_use]
    pub fn payloads(&self) -> &[String] {
        &self.payloads
    }

    /// Returns the surviving edge pairs in stream order, sentinel excluded.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Builds the graph this description denotes.
    ///
    /// Vertices missing a payload line get an empty payload, so the graph
    /// always holds exactly the declared vertex count.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] when the declared count
    /// exceeds [`MAX_VERTICES`].
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        if self.vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                got: self.vertex_count,
                capacity: MAX_VERTICES,
            });
        }
        let mut payloads = self.payloads;
        payloads.resize(self.vertex_count, String::new());
        GraphBuilder::new()
            .with_payloads(payloads)
            .with_edges(self.edges)
            .build()
    }
}

/// Tokenizes a graph description from a buffered reader.
///
/// # Errors
/// Returns [`LoaderError::Io`] on read failures and
/// [`LoaderError::MissingVertexCount`] / [`LoaderError::InvalidVertexCount`]
/// when the header line is absent or not a non-negative integer.
pub fn parse_description(reader: impl BufRead) -> Result<GraphDescription, LoaderError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(LoaderError::MissingVertexCount)??;
    let vertex_count: usize = match header.trim().parse() {
        Ok(count) => count,
        Err(_) => return Err(LoaderError::InvalidVertexCount { line: header }),
    };

    let mut payloads = Vec::with_capacity(vertex_count.min(MAX_VERTICES));
    for _ in 0..vertex_count {
        match lines.next() {
            Some(line) => payloads.push(line?),
            // truncated description: later vertices stay payload-less
            None => break,
        }
    }

    let mut tokens = Vec::new();
    for line in lines {
        tokens.extend(line?.split_whitespace().map(str::to_owned));
    }

    let mut edges = Vec::new();
    let mut stream = tokens.iter();
    while let Some(raw_source) = stream.next() {
        let Some(raw_destination) = stream.next() else {
            break;
        };
        let Ok(source) = raw_source.parse::<i64>() else {
            break;
        };
        let Ok(destination) = raw_destination.parse::<i64>() else {
            break;
        };
        if source == 0 {
            break;
        }
        // negative indices are no-ops under the range guard anyway
        let (Ok(source), Ok(destination)) = (usize::try_from(source), usize::try_from(destination))
        else {
            continue;
        };
        edges.push((source, destination));
    }

    debug!(
        vertex_count,
        payloads = payloads.len(),
        edge_pairs = edges.len(),
        "description tokenized"
    );
    Ok(GraphDescription {
        vertex_count,
        payloads,
        edges,
    })
}

/// Tokenizes a graph description from a file on disk.
///
/// # Errors
/// Returns [`LoaderError::Io`] when the file cannot be opened or read, and
/// the same header errors as [`parse_description`].
pub fn try_from_path(path: &Path) -> Result<GraphDescription, LoaderError> {
    let file = File::open(path)?;
    parse_description(BufReader::new(file))
}
