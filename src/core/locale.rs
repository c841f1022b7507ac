//! Splitting the source document into its two locale sections.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::scanner::{ScanMode, balanced_end};

/// Where the primary locale section ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleBoundary {
    /// The primary section runs from its opening brace up to the start of the
    /// secondary block, without checking brace balance.
    #[default]
    Legacy,
    /// The primary section ends at the brace that balances its opening brace.
    Balanced,
}

/// The two locale blocks of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSections<'a> {
    /// Starts at the opening brace of the primary block.
    pub primary: &'a str,
    /// Starts at the secondary marker (`ar: {`) and ends at its balancing brace.
    pub secondary: &'a str,
}

impl LocaleSections<'_> {
    pub fn primary_chars(&self) -> usize {
        self.primary.chars().count()
    }

    pub fn secondary_chars(&self) -> usize {
        self.secondary.chars().count()
    }
}

fn locale_marker(locale: &str) -> String {
    format!("{}: {{", locale)
}

fn find_marker(content: &str, locale: &str) -> Result<usize> {
    let marker = locale_marker(locale);
    content
        .find(&marker)
        .with_context(|| format!("Could not find `{}` section in source document", marker))
}

/// Split `content` into the primary and secondary locale sections.
///
/// Both markers are located with a plain substring search for `<locale>: {`;
/// the first occurrence wins. Fails if either marker is missing.
pub fn split_locales<'a>(
    content: &'a str,
    primary: &str,
    secondary: &str,
    boundary: LocaleBoundary,
    mode: ScanMode,
) -> Result<LocaleSections<'a>> {
    let primary_start = find_marker(content, primary)?;
    let secondary_start = find_marker(content, secondary)?;

    let primary_open = primary_start + locale_marker(primary).len() - 1;
    let primary_section = match boundary {
        // An inverted range yields an empty section, not a panic.
        LocaleBoundary::Legacy => content.get(primary_open..secondary_start).unwrap_or(""),
        LocaleBoundary::Balanced => match balanced_end(content, primary_open, mode) {
            Some(close) => &content[primary_open..=close],
            None => bail!("`{}` section is not brace-balanced", locale_marker(primary)),
        },
    };

    let tail = &content[secondary_start..];
    let secondary_section = match balanced_end(tail, 0, mode) {
        Some(close) => &tail[..=close],
        None => "",
    };

    Ok(LocaleSections {
        primary: primary_section,
        secondary: secondary_section,
    })
}
