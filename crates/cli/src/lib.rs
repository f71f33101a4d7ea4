// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shelf_cli - terminal front end for Shared Shelf.
//!
//! Every command loads the shelf (remote repository when signed in, else
//! the local snapshot, else demo data), applies its change locally first,
//! syncs it through [`shelf_core`], and stores the result as the new
//! snapshot. Sync failures are reported as warnings, never as errors.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`run`] - command dispatch
//! - [`Config`] - endpoints and page size from `config.toml`
//! - [`Error`] - CLI errors wrapping [`shelf_core::Error`]

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
mod mode;
mod validate;

pub mod config;
pub mod error;

pub use cli::{Cli, CollectionArgs, Command, ItemArgs, OutputFormat, SchemaKind};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::List { output } => commands::collection::list(output),
        Command::Show {
            collection,
            search,
            output,
        } => commands::collection::show(collection.as_deref(), search.as_deref(), output),
        Command::Select { id } => commands::collection::select(&id),
        Command::New {
            name,
            template,
            fields,
            output,
        } => commands::collection::new(name.as_deref(), template.as_deref(), &fields, output),
        Command::Drop { id } => commands::collection::drop(&id),
        Command::Add {
            title,
            collection,
            fields,
            output,
        } => commands::item::add(&title, collection.as_deref(), &fields, output),
        Command::Rm { id } => commands::item::rm(&id),
        Command::Templates => commands::collection::templates(),
        Command::Search {
            query,
            limit,
            import,
            collection,
            output,
        } => commands::search::run(&query, limit, import, collection.as_deref(), output),
        Command::Resolve { target } => commands::resolve::run(&target),
        Command::Login { handle, password } => commands::auth::login(&handle, password),
        Command::Logout => commands::auth::logout(),
        Command::Status { output } => commands::auth::status(output),
        Command::Schema { kind } => commands::schema::run(kind),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "shelf", &mut std::io::stdout());
            Ok(())
        }
    }
}
