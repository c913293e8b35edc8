// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use things_core::View;

pub use args::TaskArgs;

/// Parse any core type through its `FromStr`, surfacing the core error text.
fn parse_core<T>(s: &str) -> Result<T, String>
where
    T: std::str::FromStr<Err = things_core::Error>,
{
    s.parse().map_err(|e: things_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "things")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query the Things task database from the command line")]
#[command(
    long_about = "Query the Things task database from the command line.\n\n\
    The database is opened read-only. Point at it with --db, THINGS_DB, or the\n\
    'database' key of the config file."
)]
pub struct Cli {
    /// Path to the Things database (overrides THINGS_DB and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Reject malformed date filters instead of ignoring them
    #[arg(long, global = true)]
    pub strict_dates: bool,

    /// Log query translation to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────
    /// List tasks matching the given constraints
    #[command(after_help = "\
Examples:
  things tasks --status incomplete --deadline past    Overdue to-dos
  things tasks --project 2Xm7kJ...                    Items in a project
  things tasks --area false --status incomplete       Open items outside any area
  things tasks --tag Errand --start anytime           Tagged anytime to-dos
  things tasks --created-within 2w                    Created in the last two weeks
  things tasks --stop-date '>=2024-01-01' --count     Finished since New Year")]
    Tasks {
        #[command(flatten)]
        filters: TaskArgs,

        /// Print only the number of matching tasks
        #[arg(long)]
        count: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List one of the built-in lists
    View {
        /// inbox, today, upcoming, anytime, someday, logbook, or trash
        #[arg(value_parser = parse_core::<View>)]
        view: View,

        /// Print only the number of tasks in the list
        #[arg(long)]
        count: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show a single task, including trashed ones
    Show {
        uuid: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Catalogs
    // ─────────────────────────────────────────────────────────────────────────
    /// List areas
    Areas {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List tags
    Tags {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
