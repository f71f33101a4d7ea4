// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! Used with `#[command(flatten)]` by commands that create records.

use clap::Args;

/// Optional collection fields for `new`.
#[derive(Args, Clone, Debug, Default)]
pub struct CollectionArgs {
    /// Short description
    #[arg(long, short)]
    pub description: Option<String>,

    /// Emoji icon (up to 4 characters)
    #[arg(long, short)]
    pub icon: Option<String>,

    /// Accent color as #rrggbb
    #[arg(long, short = 'c')]
    pub color: Option<String>,

    /// Who can see it (public, mutuals, private)
    #[arg(long, short = 'V')]
    pub visibility: Option<String>,
}

/// Optional item fields for `add`.
#[derive(Args, Clone, Debug, Default)]
pub struct ItemArgs {
    /// Free-form note
    #[arg(long, short)]
    pub note: Option<String>,

    /// Link (http or https)
    #[arg(long, short)]
    pub url: Option<String>,

    /// AT URI or app URL of related content
    #[arg(long = "ref", short = 'r', value_name = "URI")]
    pub external_ref: Option<String>,

    /// Tag(s) (comma-separated or repeated)
    #[arg(long = "tag", short = 't', value_name = "TAG")]
    pub tags: Vec<String>,

    /// Rating from 1 to 5 (0 for none)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub rating: Option<u8>,
}
