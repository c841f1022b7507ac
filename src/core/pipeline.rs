//! The split pipeline: read the source document, split it by locale and
//! produce one file per grouping.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::assemble::{AssembledFile, assemble};
use super::locale::{LocaleSections, split_locales};
use crate::config::Config;

/// What the pipeline does with the assembled files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write every assembled file.
    #[default]
    Write,
    /// Assemble everything but write nothing.
    DryRun,
    /// Compare assembled files against what is on disk.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    Created,
    WouldCreate,
    UpToDate,
    /// The file on disk is missing or differs from the assembled content.
    Stale,
    /// No key of the grouping exists in the primary section.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct GroupingOutcome {
    pub name: String,
    /// Output path as configured, relative to the project root.
    pub path: PathBuf,
    pub status: OutputStatus,
    pub keys: Vec<String>,
    pub file: Option<AssembledFile>,
}

#[derive(Debug, Clone)]
pub struct SplitReport {
    pub source: PathBuf,
    pub primary_locale: String,
    pub secondary_locale: String,
    pub primary_chars: usize,
    pub secondary_chars: usize,
    pub outcomes: Vec<GroupingOutcome>,
}

impl SplitReport {
    pub fn count(&self, status: OutputStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

/// Read the configured source document below `root`.
pub fn read_source(config: &Config, root: &Path) -> Result<(PathBuf, String)> {
    let source = PathBuf::from(&config.source);
    let content = fs::read_to_string(root.join(&source))
        .with_context(|| format!("Failed to read source file: {}", source.display()))?;
    Ok((source, content))
}

/// Split the locale blocks of `content` as configured.
pub fn locale_sections<'a>(config: &Config, content: &'a str) -> Result<LocaleSections<'a>> {
    split_locales(
        content,
        &config.primary_locale,
        &config.secondary_locale,
        config.locale_boundary,
        config.scan_mode,
    )
}

/// Run the whole split. Relative paths in `config` are resolved against `root`.
///
/// In [`WriteMode::Write`] the directory of every output path is created
/// before any grouping is assembled, including for groupings that end up
/// skipped. Groupings are processed in table order. The first I/O failure
/// aborts the run; files written before it stay on disk.
pub fn run_split(config: &Config, root: &Path, mode: WriteMode) -> Result<SplitReport> {
    let (source, content) = read_source(config, root)?;
    let sections = locale_sections(config, &content)?;
    let template = config.template();
    let output_root = PathBuf::from(&config.output_root);

    if mode == WriteMode::Write {
        for grouping in &config.groupings {
            create_parent_dir(&root.join(&output_root).join(grouping.output_path()))?;
        }
    }

    let mut outcomes = Vec::with_capacity(config.groupings.len());
    for grouping in &config.groupings {
        let path = output_root.join(grouping.output_path());
        let file = assemble(&grouping.keys, &sections, &template, config.scan_mode);

        let status = match &file {
            None => OutputStatus::Skipped,
            Some(file) => apply(&root.join(&path), &path, file, mode)?,
        };

        outcomes.push(GroupingOutcome {
            name: grouping.name.clone(),
            path,
            status,
            keys: grouping.keys.clone(),
            file,
        });
    }

    Ok(SplitReport {
        source,
        primary_locale: config.primary_locale.clone(),
        secondary_locale: config.secondary_locale.clone(),
        primary_chars: sections.primary_chars(),
        secondary_chars: sections.secondary_chars(),
        outcomes,
    })
}

fn apply(
    full_path: &Path,
    display_path: &Path,
    file: &AssembledFile,
    mode: WriteMode,
) -> Result<OutputStatus> {
    match mode {
        WriteMode::Write => {
            create_parent_dir(full_path)?;
            fs::write(full_path, &file.content)
                .with_context(|| format!("Failed to write file: {}", display_path.display()))?;
            Ok(OutputStatus::Created)
        }
        WriteMode::DryRun => Ok(OutputStatus::WouldCreate),
        WriteMode::Check => match fs::read_to_string(full_path) {
            Ok(existing) if existing == file.content => Ok(OutputStatus::UpToDate),
            Ok(_) => Ok(OutputStatus::Stale),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(OutputStatus::Stale),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read file: {}", display_path.display())),
        },
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
