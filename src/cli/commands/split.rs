use anyhow::Result;

use super::super::args::SplitCommand;
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, SplitSummary};
use crate::core::{OutputStatus, WriteMode, run_split};

impl SplitCommand {
    pub fn write_mode(&self) -> WriteMode {
        if self.args.check {
            WriteMode::Check
        } else if self.args.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        }
    }
}

pub fn split(cmd: SplitCommand) -> Result<CommandResult> {
    let mut ctx = CommandContext::new(&cmd.args.common)?;
    if let Some(output_root) = &cmd.args.output_root {
        ctx.config.output_root = ctx.command_line_path(output_root);
    }
    split_in(&ctx, cmd.write_mode())
}

pub fn split_in(ctx: &CommandContext, mode: WriteMode) -> Result<CommandResult> {
    ctx.config.validate()?;

    let report = run_split(&ctx.config, &ctx.root_dir, mode)?;
    let error_count = report.count(OutputStatus::Stale);

    Ok(CommandResult {
        summary: CommandSummary::Split(SplitSummary { report, mode }),
        error_count,
        exit_on_errors: mode == WriteMode::Check,
    })
}
