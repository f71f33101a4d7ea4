// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_add_with_fields() {
    let cli = parse(&[
        "shelf", "add", "Dune", "-C", "c1", "-n", "classic", "-u", "https://example.com",
        "-t", "scifi,classic", "-t", "desert", "--rating", "5",
    ])
    .unwrap();
    match cli.command {
        Command::Add {
            title,
            collection,
            fields,
            output,
        } => {
            assert_eq!(title, "Dune");
            assert_eq!(collection.as_deref(), Some("c1"));
            assert_eq!(fields.note.as_deref(), Some("classic"));
            assert_eq!(fields.url.as_deref(), Some("https://example.com"));
            assert_eq!(fields.tags, vec!["scifi,classic", "desert"]);
            assert_eq!(fields.rating, Some(5));
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("expected add"),
    }
}

#[parameterized(
    empty_title = { &["shelf", "add", ""] },
    blank_title = { &["shelf", "add", "   "] },
    rating_too_high = { &["shelf", "add", "x", "--rating", "6"] },
    new_without_name_or_template = { &["shelf", "new"] },
    unknown_format = { &["shelf", "list", "-o", "yaml"] },
)]
fn test_rejected_arguments(args: &[&str]) {
    assert!(parse(args).is_err());
}

#[test]
fn test_new_from_template_only() {
    let cli = parse(&["shelf", "new", "-T", "books", "-V", "private"]).unwrap();
    match cli.command {
        Command::New {
            name,
            template,
            fields,
            ..
        } => {
            assert!(name.is_none());
            assert_eq!(template.as_deref(), Some("books"));
            assert_eq!(fields.visibility.as_deref(), Some("private"));
        }
        _ => panic!("expected new"),
    }
}

#[test]
fn test_search_defaults() {
    let cli = parse(&["shelf", "search", "rust"]).unwrap();
    match cli.command {
        Command::Search {
            query,
            limit,
            import,
            ..
        } => {
            assert_eq!(query, "rust");
            assert_eq!(limit, 6);
            assert!(import.is_none());
        }
        _ => panic!("expected search"),
    }
}

#[test]
fn test_show_json() {
    let cli = parse(&["shelf", "show", "c1", "-s", "dune", "-o", "json"]).unwrap();
    match cli.command {
        Command::Show {
            collection,
            search,
            output,
        } => {
            assert_eq!(collection.as_deref(), Some("c1"));
            assert_eq!(search.as_deref(), Some("dune"));
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("expected show"),
    }
}

#[test]
fn test_schema_kind() {
    let cli = parse(&["shelf", "schema", "item"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Schema {
            kind: Some(SchemaKind::Item)
        }
    ));
}
