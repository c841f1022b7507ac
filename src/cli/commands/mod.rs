pub mod context;
pub mod init;
pub mod keys;
pub mod split;

use crate::core::{SplitReport, WriteMode};

#[derive(Debug)]
pub enum CommandSummary {
    Split(SplitSummary),
    Keys(KeysSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SplitSummary {
    pub report: SplitReport,
    pub mode: WriteMode,
}

/// One top-level key of the primary locale section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    pub key: String,
    /// Name of the grouping that claims the key.
    pub grouping: Option<String>,
    pub in_secondary: bool,
}

/// A key named by a grouping that is not a top-level key of the primary section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    pub key: String,
    pub grouping: String,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub primary_locale: String,
    pub secondary_locale: String,
    pub primary: Vec<KeyRow>,
    /// Top-level keys that only exist in the secondary section.
    pub secondary_only: Vec<String>,
    pub missing: Vec<MissingKey>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
