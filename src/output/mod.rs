//! Output formatting for CLI display
//!
//! This module provides utilities for formatting listing output in the
//! CLI: item and career lines, tag counts and the shown-vs-total summary.
//! Quiet mode strips decoration for scripting.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::content::{CareerEntry, ContentItem, ContentKind};
use crate::engine::FilterSummary;

/// Format a publication date for listing display
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m").to_string()
}

/// Format the shown-vs-total status line
#[must_use]
pub fn summary_line(summary: FilterSummary) -> String {
    summary.to_string().dimmed().to_string()
}

/// Format a content item for listing display
#[must_use]
pub fn item_line(item: &ContentItem, quiet: bool) -> String {
    if quiet {
        return item.title.clone();
    }

    let mut line = String::from("  ");

    if let Some(kind) = item.kind {
        line.push_str(&kind_badge(kind));
        line.push(' ');
    }

    line.push_str(&item.title.bold().to_string());

    if let Some(date) = item.published {
        line.push_str(&format!(" {}", format_date(date).dimmed()));
    }

    if !item.tags.is_empty() {
        line.push_str(&format!(" [{}]", item.tags.join(", ")).dimmed().to_string());
    }

    line
}

/// Format a career entry for timeline display
#[must_use]
pub fn career_line(entry: &CareerEntry, quiet: bool) -> String {
    if quiet {
        return entry.title.clone();
    }

    let mut line = String::from("  ");

    if let Some(date) = entry.date {
        line.push_str(&format_date(date).dimmed().to_string());
        line.push_str("  ");
    }

    line.push_str(&entry.title.bold().to_string());

    if !entry.tags.is_empty() {
        line.push_str(&format!(" [{}]", entry.tags.join(", ")).dimmed().to_string());
    }

    if let Some(description) = &entry.description {
        line.push_str(&format!("\n      {description}"));
    }

    line
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} item(s))")
    }
}

fn kind_badge(kind: ContentKind) -> String {
    let badge = format!("[{}]", kind.label());
    match kind {
        ContentKind::Development => badge.blue().to_string(),
        ContentKind::Illustration => badge.magenta().to_string(),
    }
}
