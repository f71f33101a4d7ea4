// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{CollectionArgs, ItemArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which record lexicon to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    Collection,
    Item,
}

#[derive(Parser)]
#[command(name = "shelf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Curate collections of books, places and links in your AT Protocol repository")]
#[command(
    long_about = "Curate collections of books, places and links in your AT Protocol repository.\n\n\
    Changes apply locally first and sync to your repository when signed in. \
    Signed out, the shelf runs on local demo data."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Shelf
    // ─────────────────────────────────────────────────────────────────────────
    /// List collections
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a collection's items (the active collection by default)
    #[command(after_help = colors::examples("\
Examples:
  shelf show                      Items in the active collection
  shelf show 3kabc234def2x        Items in a specific collection
  shelf show -s dune              Items matching \"dune\" in title, note or tags"))]
    Show {
        /// Collection ID
        collection: Option<String>,

        /// Only items whose title, note or tags contain this text
        #[arg(long, short)]
        search: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Make a collection the active one
    #[command(arg_required_else_help = true)]
    Select {
        /// Collection ID
        id: String,
    },

    /// Create a collection
    #[command(after_help = colors::examples("\
Examples:
  shelf new \"Reading 2025\"              Create an empty collection
  shelf new -T books                     Create from the Books template
  shelf new \"Japan\" -T travel -V private Template with a custom name"))]
    New {
        /// Collection name (defaults to the template's name)
        #[arg(value_parser = non_empty_string, required_unless_present = "template")]
        name: Option<String>,

        /// Start from a template (see `shelf templates`)
        #[arg(long, short = 'T')]
        template: Option<String>,

        #[command(flatten)]
        fields: CollectionArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete a collection and all of its items
    #[command(arg_required_else_help = true)]
    Drop {
        /// Collection ID
        id: String,
    },

    /// Add an item to a collection
    #[command(after_help = colors::examples("\
Examples:
  shelf add \"Dune\"                          Add to the active collection
  shelf add \"Dune\" -t scifi,classic --rating 5
  shelf add \"Noma\" -C 3kabc234def2x -u https://noma.dk"))]
    Add {
        /// Item title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Target collection ID (defaults to the active collection)
        #[arg(long, short = 'C')]
        collection: Option<String>,

        #[command(flatten)]
        fields: ItemArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Remove an item
    #[command(arg_required_else_help = true)]
    Rm {
        /// Item ID
        id: String,
    },

    /// List collection templates
    Templates,

    // ─────────────────────────────────────────────────────────────────────────
    // Network
    // ─────────────────────────────────────────────────────────────────────────
    /// Search public posts, optionally saving one as an item
    #[command(after_help = colors::examples("\
Examples:
  shelf search \"rust books\"              Show matching posts
  shelf search \"rust books\" --import 2   Save the second result"))]
    Search {
        #[arg(value_parser = non_empty_string)]
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = shelf_core::crossapp::SEARCH_LIMIT)]
        limit: u32,

        /// Save result N (1-based) to a collection
        #[arg(long, value_name = "N")]
        import: Option<usize>,

        /// Collection to import into (defaults to the active collection)
        #[arg(long, short = 'C')]
        collection: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Fetch any public record by AT URI or app URL
    #[command(arg_required_else_help = true)]
    Resolve {
        /// at://repo/collection/rkey, or a bsky.app / whtwnd / frontpage URL
        target: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Account & setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Sign in with a handle and app password
    #[command(arg_required_else_help = true)]
    Login {
        /// Handle or DID (a leading @ is ignored)
        #[arg(value_parser = non_empty_string)]
        handle: String,

        /// App password (defaults to $SHELF_APP_PASSWORD)
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Sign out and clear local data
    Logout,

    /// Show account and sync status
    Status {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the record lexicons
    Schema {
        /// Only this record type
        #[arg(value_enum)]
        kind: Option<SchemaKind>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
