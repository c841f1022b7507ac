use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Configuration and project root shared by `split` and `keys`.
pub struct CommandContext {
    pub config: Config,
    /// Directory relative paths in `config` are resolved against: the
    /// directory holding the config file, or the working directory.
    pub root_dir: PathBuf,
    /// Directory the command was started from.
    pub work_dir: PathBuf,
    pub config_from_file: bool,
    pub verbose: bool,
}

impl CommandContext {
    /// Load the config found from the working directory and apply the
    /// command-line overrides.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let work_dir = env::current_dir().context("Failed to read the working directory")?;
        Self::with_root(work_dir, args)
    }

    pub fn with_root(work_dir: PathBuf, args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(&work_dir)?;

        // In verbose mode, inform user if using default config
        if args.verbose && !config_result.from_file() {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let root_dir = config_result
            .project_dir()
            .map_or_else(|| work_dir.clone(), Path::to_path_buf);
        let config_from_file = config_result.from_file();

        let mut ctx = Self {
            config: config_result.config,
            root_dir,
            work_dir,
            config_from_file,
            verbose: args.verbose,
        };
        if let Some(source) = &args.source {
            ctx.config.source = ctx.command_line_path(source);
        }
        Ok(ctx)
    }

    /// A path given on the command line, relative to the working directory,
    /// expressed so it resolves correctly against `root_dir`.
    pub fn command_line_path(&self, path: &Path) -> String {
        if self.root_dir == self.work_dir {
            path.to_string_lossy().into_owned()
        } else {
            self.work_dir.join(path).to_string_lossy().into_owned()
        }
    }
}
