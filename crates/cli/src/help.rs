// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the help palette.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_shelf}
  {list}        List collections
  {show}        Show a collection's items
  {select}      Make a collection the active one
  {new}         Create a collection
  {drop}        Delete a collection and its items
  {add}         Add an item to a collection
  {rm}          Remove an item
  {templates}   List collection templates

{header_network}
  {search}      Search public posts to save
  {resolve}     Fetch any public record by AT URI

{header_account}
  {login}       Sign in with an app password
  {logout}      Sign out and clear local data
  {status}      Show account and sync status
  {schema}      Print record lexicons
  {completion}  Generate shell completions
",
        header_shelf = colors::header("Shelf:"),
        header_network = colors::header("Network:"),
        header_account = colors::header("Account & Setup:"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        select = colors::literal("select"),
        new = colors::literal("new"),
        drop = colors::literal("drop"),
        add = colors::literal("add"),
        rm = colors::literal("rm"),
        templates = colors::literal("templates"),
        search = colors::literal("search"),
        resolve = colors::literal("resolve"),
        login = colors::literal("login"),
        logout = colors::literal("logout"),
        status = colors::literal("status"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  shelf list                       Browse the demo shelf
  shelf login alice.bsky.social    Sign in (reads SHELF_APP_PASSWORD)
  shelf new \"Books\" -T books       Create a collection from a template
  shelf add \"Dune\" -t scifi        Add an item to the active collection",
    )
}
