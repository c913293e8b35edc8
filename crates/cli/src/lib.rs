// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! thingsrs - command-line front end for the read-only Things query client.
//!
//! This crate wires [`things_core`] to the `things` binary: argument parsing,
//! configuration, logging, and text/JSON rendering.
//!
//! # Main Components
//!
//! - [`Cli`] - Parsed command line
//! - [`Config`] - User configuration (`config.toml`)
//! - [`Error`] - Error types for all operations

mod cli;
mod commands;
mod display;
mod logging;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, TaskArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    logging::setup(cli.verbose);

    if let Command::Completion { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "things", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let strict_dates = cli.strict_dates || config.strict_dates;
    let db = commands::open_db(&config, cli.db.as_deref())?;

    match cli.command {
        Command::Tasks {
            filters,
            count,
            output,
        } => commands::tasks::run(&db, &filters.into_query(strict_dates), count, output),
        Command::View {
            view,
            count,
            output,
        } => {
            let query = view.query().strict_dates(strict_dates);
            commands::tasks::run(&db, &query, count, output)
        }
        Command::Show { uuid, output } => commands::show::run(&db, &uuid, output),
        Command::Areas { output } => commands::lists::run_areas(&db, output),
        Command::Tags { output } => commands::lists::run_tags(&db, output),
        Command::Completion { .. } => Ok(()),
    }
}
