//! Command implementations and argument parsing for the kumo CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use kumo_core::{Graph, GraphError, Subgraph};
use kumo_loader::{LoaderError, parse_description};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kumo", about = "Load a graph description and query it.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Enumerate connected induced subgraphs of a fixed order.
    Enumerate(EnumerateArgs),
    /// Render the display surface of the loaded graph.
    Show(ShowArgs),
}

/// Options accepted by the `enumerate` command.
#[derive(Debug, Args, Clone)]
pub struct EnumerateArgs {
    /// Path to the graph description file.
    pub path: PathBuf,

    /// Number of vertices in each reported subgraph.
    #[arg(long = "size", value_parser = clap::value_parser!(usize))]
    pub size: usize,
}

/// Options accepted by the `show` command.
///
/// With `--from` and `--to` the command renders that one pair; without
/// them it renders every vertex with its pairings.
#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Path to the graph description file.
    pub path: PathBuf,

    /// 1-based source vertex of the pair to render.
    #[arg(long, requires = "to")]
    pub from: Option<usize>,

    /// 1-based destination vertex of the pair to render.
    #[arg(long, requires = "from")]
    pub to: Option<usize>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading a description.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Description tokenizing failed.
    #[error(transparent)]
    Loader(#[from] LoaderError),
    /// Graph construction failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Subgraphs found by `enumerate`, in discovery order.
    Subgraphs(Vec<Subgraph>),
    /// Pre-rendered display output produced by `show`.
    Display(String),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kumo_cli::cli::{Cli, Command, EnumerateArgs, ExecutionSummary, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2\na\nb\n1 2\n2 1\n0 0\n")?;
/// let cli = Cli {
///     command: Command::Enumerate(EnumerateArgs {
///         path: file.path().to_path_buf(),
///         size: 2,
///     }),
/// };
/// let ExecutionSummary::Subgraphs(found) = run_cli(cli)? else {
///     panic!("enumerate must return subgraphs");
/// };
/// assert_eq!(found.len(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Enumerate(args) => {
            span.record("command", field::display("enumerate"));
            run_enumerate(args)
        }
        Command::Show(args) => {
            span.record("command", field::display("show"));
            run_show(args)
        }
    }
}

#[instrument(name = "cli.enumerate", err, skip(args), fields(path = field::Empty, size = field::Empty))]
pub(super) fn run_enumerate(args: EnumerateArgs) -> Result<ExecutionSummary, CliError> {
    let EnumerateArgs { path, size } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("size", field::display(size));

    let graph = load_graph(&path)?;
    let found = graph.enumerate_subgraphs(size);
    info!(
        vertices = graph.len(),
        size,
        subgraphs = found.len(),
        "enumeration completed"
    );
    Ok(ExecutionSummary::Subgraphs(found))
}

#[instrument(name = "cli.show", err, skip(args), fields(path = field::Empty, pair = field::Empty))]
pub(super) fn run_show(args: ShowArgs) -> Result<ExecutionSummary, CliError> {
    let ShowArgs { path, from, to } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));

    let graph = load_graph(&path)?;
    let mut rendered = Vec::new();
    match from.zip(to) {
        Some((source, destination)) => {
            span.record("pair", field::display(format_args!("{source}->{destination}")));
            graph
                .display(source, destination, &mut rendered)
                .map_err(|source_err| CliError::Io {
                    path: path.clone(),
                    source: source_err,
                })?;
        }
        None => {
            graph
                .display_all(&mut rendered)
                .map_err(|source_err| CliError::Io {
                    path: path.clone(),
                    source: source_err,
                })?;
        }
    }
    let text = String::from_utf8_lossy(&rendered).into_owned();
    info!(vertices = graph.len(), "display completed");
    Ok(ExecutionSummary::Display(text))
}

/// Writes the summary to the supplied writer.
///
/// Subgraphs render as one line of space-separated 1-based vertex
/// identifiers each; display output is written verbatim.
///
/// # Errors
/// Propagates any failure from the underlying writer.
pub fn render_summary(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Subgraphs(found) => {
            for subgraph in found {
                writeln!(writer, "{subgraph}")?;
            }
            Ok(())
        }
        ExecutionSummary::Display(text) => writer.write_all(text.as_bytes()),
    }
}

fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let description = parse_description(BufReader::new(file))?;
    Ok(description.into_graph()?)
}
