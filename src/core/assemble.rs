//! Rendering one output file from a list of entry keys.

use std::fmt::Write;

use super::locale::LocaleSections;
use super::scanner::ScanMode;
use super::section::extract_section;

/// Fixed parts of every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    pub header: String,
    pub export_name: String,
    pub primary_locale: String,
    pub secondary_locale: String,
}

/// A rendered output file and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledFile {
    pub content: String,
    pub primary_entries: usize,
    pub secondary_entries: usize,
    /// Keys not found in the primary section, in grouping order.
    pub missing_primary: Vec<String>,
    /// Keys not found in the secondary section, in grouping order.
    pub missing_secondary: Vec<String>,
}

impl AssembledFile {
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// Collect the entries for `keys` from both sections.
///
/// Returns `None` when none of the keys exists in the primary section; the
/// secondary section is not consulted for that decision.
pub fn assemble(
    keys: &[String],
    sections: &LocaleSections<'_>,
    template: &OutputTemplate,
    mode: ScanMode,
) -> Option<AssembledFile> {
    let mut primary = Vec::new();
    let mut secondary = Vec::new();
    let mut missing_primary = Vec::new();
    let mut missing_secondary = Vec::new();

    for key in keys {
        match extract_section(sections.primary, key, mode) {
            Some(entry) => primary.push(entry),
            None => missing_primary.push(key.clone()),
        }
        match extract_section(sections.secondary, key, mode) {
            Some(entry) => secondary.push(entry),
            None => missing_secondary.push(key.clone()),
        }
    }

    if primary.is_empty() {
        return None;
    }

    Some(AssembledFile {
        content: render(template, &primary, &secondary),
        primary_entries: primary.len(),
        secondary_entries: secondary.len(),
        missing_primary,
        missing_secondary,
    })
}

fn render(template: &OutputTemplate, primary: &[&str], secondary: &[&str]) -> String {
    let mut out = String::with_capacity(
        template.header.len() + primary.iter().chain(secondary).map(|e| e.len() + 8).sum::<usize>(),
    );

    out.push_str(&template.header);
    let _ = write!(
        out,
        "\n\nexport const {} = {{\n  {}: {{\n",
        template.export_name, template.primary_locale
    );
    out.push_str(&join_entries(primary));
    let _ = write!(out, "\n  }},\n\n  {}: {{\n", template.secondary_locale);
    out.push_str(&join_entries(secondary));
    out.push_str("\n  },\n}\n");

    out
}

/// Indent each entry's first line by four spaces and separate entries with a
/// comma and a blank line. Entries keep their own trailing comma.
fn join_entries(entries: &[&str]) -> String {
    entries
        .iter()
        .map(|entry| format!("    {}", entry))
        .collect::<Vec<_>>()
        .join(",\n\n")
}
