use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod split;

const BIN_NAME: &str = "i18n-split";

/// A small content file in the shape the splitter expects.
pub const SOURCE: &str = "/**
 * Internationalization content
 */

export type Locale = 'en' | 'ar'

export const content = {
  en: {
    // Navigation
    nav: {
      home: 'Home',
      themes: 'Themes',
    },

    home: {
      hero: {
        title: 'RTL-First Design System',
        hint: 'Press } to close',
      },
    },

    buttonComponent: {
      title: 'Button',
      example: 'Use {variant} for emphasis',
    },

    footer: {
      copyright: 'All rights reserved',
    },
  },

  ar: {
    // التنقل
    nav: {
      home: 'الرئيسية',
      themes: 'السمات',
    },

    home: {
      hero: {
        title: 'نظام تصميم يدعم RTL أولاً',
        hint: 'اضغط } للإغلاق',
      },
    },

    buttonComponent: {
      title: 'زر',
      example: 'استخدم {variant} للتأكيد',
    },
  },
}
";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with [`SOURCE`] at the default source path.
    pub fn with_source() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("lib/i18n.ts", SOURCE)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn split_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("split");
        cmd
    }

    pub fn keys_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("keys");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
