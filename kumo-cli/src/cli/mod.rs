//! Command-line interface orchestration for kumo.
//!
//! Offers an `enumerate` command that lists every connected induced
//! subgraph of a requested order, and a `show` command that renders the
//! display surface of a loaded graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, EnumerateArgs, ExecutionSummary, ShowArgs, render_summary, run_cli,
};
