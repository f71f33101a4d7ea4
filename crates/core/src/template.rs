// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Starter presets for new collections.

use crate::model::Collection;

/// Preset icon, description and color for a new collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        icon: "📚",
        name: "Books",
        description: "Books I've read, want to read, or recommend",
        color: "#d97706",
    },
    Template {
        icon: "🍽️",
        name: "Restaurants",
        description: "Places to eat, tried and want to try",
        color: "#dc2626",
    },
    Template {
        icon: "✈️",
        name: "Travel",
        description: "Destinations, tips, and travel memories",
        color: "#2563eb",
    },
    Template {
        icon: "🎬",
        name: "Watch List",
        description: "Movies, shows, and documentaries",
        color: "#7c3aed",
    },
    Template {
        icon: "🎵",
        name: "Music",
        description: "Albums, playlists, and discoveries",
        color: "#059669",
    },
    Template {
        icon: "💡",
        name: "Ideas",
        description: "Thoughts, inspirations, and things to explore",
        color: "#ea580c",
    },
    Template {
        icon: "🔗",
        name: "Links",
        description: "Articles, tools, and resources worth saving",
        color: "#0891b2",
    },
    Template {
        icon: "🎁",
        name: "Gift Ideas",
        description: "Gift inspiration for friends and family",
        color: "#be185d",
    },
];

/// Looks up a template by name, ignoring case, spaces and dashes.
pub fn find(name: &str) -> Option<&'static Template> {
    let key = slug(name);
    TEMPLATES.iter().find(|t| slug(t.name) == key)
}

fn slug(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase).collect()
}

impl Template {
    /// A new local collection carrying this preset.
    ///
    /// `name` overrides the template's own name when given.
    pub fn instantiate(&self, name: Option<&str>) -> Collection {
        let mut col = Collection::new(name.unwrap_or(self.name));
        col.icon = self.icon.to_string();
        col.description = Some(self.description.to_string());
        col.color = self.color.to_string();
        col
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
