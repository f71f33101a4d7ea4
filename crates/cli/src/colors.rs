// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help text and collection swatches.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used by help output.
pub mod codes {
    /// Section headers
    pub const HEADER: u8 = 74;
    /// Commands and literals
    pub const LITERAL: u8 = 250;
    /// Placeholders, hints, secondary text
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    format!("{}{}{}", fg256(code), text, RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Parses `#rrggbb` into its components.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// A block glyph painted in a collection's color.
///
/// Plain text (or an unparseable color) yields the bare glyph.
pub fn swatch(color: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) if should_colorize() => format!("\x1b[38;2;{r};{g};{b}m■{RESET}"),
        _ => "■".to_string(),
    }
}

/// Colorize an examples block.
///
/// Lines ending in `:` are headers; in `  shelf cmd args    Description`
/// lines the command column is painted as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 128);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
        } else if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&literal(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
        } else {
            result.push_str(line);
        }
    }
    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut run_start = None;
    for (i, b) in bytes.iter().enumerate() {
        match (b, run_start) {
            (b' ', None) => run_start = Some(i),
            (b' ', Some(_)) => {}
            (_, Some(start)) if i - start >= 2 => return Some(start),
            (_, Some(_)) => run_start = None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
