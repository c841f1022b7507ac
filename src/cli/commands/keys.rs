use std::collections::HashSet;

use anyhow::Result;

use super::super::args::KeysCommand;
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, KeyRow, KeysSummary, MissingKey};
use crate::config::Config;
use crate::core::{
    LocaleSections,
    pipeline::{locale_sections, read_source},
    top_level_keys,
};

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.args.common)?;
    keys_in(&ctx)
}

pub fn keys_in(ctx: &CommandContext) -> Result<CommandResult> {
    ctx.config.validate()?;

    let (_, content) = read_source(&ctx.config, &ctx.root_dir)?;
    let sections = locale_sections(&ctx.config, &content)?;
    let summary = summarize(&ctx.config, &sections);

    Ok(CommandResult {
        summary: CommandSummary::Keys(summary),
        error_count: 0,
        exit_on_errors: false,
    })
}

fn summarize(config: &Config, sections: &LocaleSections<'_>) -> KeysSummary {
    let primary_keys = top_level_keys(sections.primary, config.scan_mode);
    let secondary_keys = top_level_keys(sections.secondary, config.scan_mode);

    let primary_set: HashSet<&str> = primary_keys.iter().copied().collect();
    let secondary_set: HashSet<&str> = secondary_keys.iter().copied().collect();

    let primary = primary_keys
        .iter()
        .map(|key| KeyRow {
            key: key.to_string(),
            grouping: config.grouping_for_key(key).map(|g| g.name.clone()),
            in_secondary: secondary_set.contains(key),
        })
        .collect();

    let secondary_only = secondary_keys
        .iter()
        .filter(|key| !primary_set.contains(*key))
        .map(|key| key.to_string())
        .collect();

    let missing = config
        .groupings
        .iter()
        .flat_map(|grouping| {
            grouping
                .keys
                .iter()
                .filter(|key| !primary_set.contains(key.as_str()))
                .map(|key| MissingKey {
                    key: key.clone(),
                    grouping: grouping.name.clone(),
                })
        })
        .collect();

    KeysSummary {
        primary_locale: config.primary_locale.clone(),
        secondary_locale: config.secondary_locale.clone(),
        primary,
        secondary_only,
        missing,
    }
}
