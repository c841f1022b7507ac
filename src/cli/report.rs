//! Report formatting and printing.
//!
//! Commands return plain data; everything the operator sees is printed here.
//! Each `print_*` function has a `*_to` variant writing to any `Write`.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, KeysSummary, SplitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{GroupingOutcome, OutputStatus, WriteMode};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const NEXT_STEPS: &[&str] = &[
    "Create lib/i18n/index.ts with dynamic loader",
    "Update imports in app files",
    "Test the new system",
];

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Split(summary) => print_split_to(summary, verbose, &mut io::stdout().lock()),
        CommandSummary::Keys(summary) => print_keys_to(summary, verbose, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// split
// ============================================================

pub fn print_split_to<W: Write>(summary: &SplitSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;

    let _ = writeln!(
        writer,
        "{} section: {} chars",
        report.primary_locale.to_uppercase(),
        report.primary_chars
    );
    let _ = writeln!(
        writer,
        "{} section: {} chars",
        report.secondary_locale.to_uppercase(),
        report.secondary_chars
    );

    for outcome in &report.outcomes {
        let _ = writeln!(writer, "\nProcessing {}...", outcome.name);
        print_outcome(outcome, &report.primary_locale, verbose, writer);
        if verbose {
            print_outcome_details(outcome, &report.primary_locale, &report.secondary_locale, writer);
        }
    }

    match summary.mode {
        WriteMode::Write => {
            let _ = writeln!(writer, "\n\u{2705} Split complete!");
            let _ = writeln!(writer, "\nNext steps:");
            for (i, step) in NEXT_STEPS.iter().enumerate() {
                let _ = writeln!(writer, "{}. {}", i + 1, step);
            }
        }
        WriteMode::DryRun => {
            let count = report.count(OutputStatus::WouldCreate);
            let _ = writeln!(
                writer,
                "\n{} {} would be written (dry run)",
                count,
                plural(count, "file", "files")
            );
        }
        WriteMode::Check => {
            let stale = report.count(OutputStatus::Stale);
            if stale == 0 {
                let fresh = report.count(OutputStatus::UpToDate);
                let _ = writeln!(
                    writer,
                    "\n{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "All {} output {} up to date",
                        fresh,
                        plural(fresh, "file is", "files are")
                    )
                    .green()
                );
            } else {
                let _ = writeln!(
                    writer,
                    "\n{} {} ({})",
                    FAILURE_MARK.red(),
                    format!(
                        "{} output {} out of date",
                        stale,
                        plural(stale, "file is", "files are")
                    )
                    .red(),
                    "run i18n-split to regenerate".dimmed()
                );
            }
        }
    }
}

fn print_outcome<W: Write>(
    outcome: &GroupingOutcome,
    primary_locale: &str,
    verbose: bool,
    writer: &mut W,
) {
    let path = outcome.path.display();
    match outcome.status {
        OutputStatus::Created => {
            let _ = writeln!(writer, "  {} Created {}", SUCCESS_MARK.green(), path);
        }
        OutputStatus::WouldCreate => {
            let _ = writeln!(writer, "  Would create {}", path);
        }
        OutputStatus::UpToDate => {
            let _ = writeln!(writer, "  {} {} is up to date", SUCCESS_MARK.green(), path);
        }
        OutputStatus::Stale => {
            let _ = writeln!(
                writer,
                "  {} {} {}",
                FAILURE_MARK.red(),
                path,
                "is missing or out of date".red()
            );
        }
        OutputStatus::Skipped => {
            if verbose {
                let _ = writeln!(
                    writer,
                    "  {}",
                    format!("Skipped: no keys found in {} section", primary_locale).dimmed()
                );
            }
        }
    }
}

fn print_outcome_details<W: Write>(
    outcome: &GroupingOutcome,
    primary_locale: &str,
    secondary_locale: &str,
    writer: &mut W,
) {
    let Some(file) = &outcome.file else {
        return;
    };

    let _ = writeln!(
        writer,
        "    {}",
        format!("({} lines, {} chars)", file.line_count(), file.char_count()).dimmed()
    );
    for (locale, missing) in [
        (primary_locale, &file.missing_primary),
        (secondary_locale, &file.missing_secondary),
    ] {
        if !missing.is_empty() {
            let _ = writeln!(
                writer,
                "    {} {}",
                format!("Missing ({}):", locale).yellow(),
                missing.join(", ")
            );
        }
    }
}

// ============================================================
// keys
// ============================================================

pub fn print_keys_to<W: Write>(summary: &KeysSummary, verbose: bool, writer: &mut W) {
    let primary = summary.primary_locale.to_uppercase();
    let secondary = summary.secondary_locale.to_uppercase();

    let _ = writeln!(
        writer,
        "{} {}",
        format!("{} top-level keys", primary).bold(),
        format!("({})", summary.primary.len()).dimmed()
    );

    let width = summary
        .primary
        .iter()
        .map(|row| UnicodeWidthStr::width(row.key.as_str()))
        .max()
        .unwrap_or(0);

    for row in &summary.primary {
        let grouping = match &row.grouping {
            Some(name) => name.normal(),
            None => "(unassigned)".yellow(),
        };
        let padding = width - UnicodeWidthStr::width(row.key.as_str());
        let _ = write!(writer, "  {}{:padding$}  {}", row.key, "", grouping, padding = padding);
        if !row.in_secondary {
            let _ = write!(writer, "  {}", format!("not in {}", secondary).yellow());
        }
        let _ = writeln!(writer);
    }

    if !summary.secondary_only.is_empty() {
        let _ = writeln!(
            writer,
            "\n{} {}",
            format!("{}-only keys:", secondary).yellow(),
            summary.secondary_only.join(", ")
        );
    }

    if !summary.missing.is_empty() {
        let _ = writeln!(
            writer,
            "\n{}",
            format!("Grouping keys not found in {}:", primary).yellow()
        );
        for missing in &summary.missing {
            let _ = writeln!(
                writer,
                "  {} {}",
                missing.key,
                format!("({})", missing.grouping).dimmed()
            );
        }
    }

    if verbose {
        let assigned = summary.primary.iter().filter(|r| r.grouping.is_some()).count();
        let _ = writeln!(
            writer,
            "\n{}",
            format!(
                "{} of {} keys assigned to a grouping",
                assigned,
                summary.primary.len()
            )
            .dimmed()
        );
    }
}

// ============================================================
// init
// ============================================================

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
