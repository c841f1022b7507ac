use std::process::ExitCode;

/// Process exit status of the CLI.
///
/// - `Success` (0): the command did its work
/// - `Failure` (1): the command ran but the outcome needs attention
///   (stale outputs under `--check`, config file already present for `init`)
/// - `Error` (2): the run aborted (missing source, missing locale block, bad config, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
