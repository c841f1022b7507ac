use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{LocaleBoundary, OutputTemplate, ScanMode};

pub const CONFIG_FILE_NAME: &str = ".i18nsplitrc.json";

pub const DEFAULT_HEADER: &str = "/**
 * Internationalization content
 * Real, meaningful Arabic content for the GCC market
 */

export type Locale = 'en' | 'ar'
";

const COMPONENT_KEYS: &[&str] = &[
    "components",
    "componentDocs",
    "buttonComponent",
    "gettingStarted",
    "cardComponent",
    "inputComponent",
    "selectComponent",
    "tableComponent",
    "formComponent",
    "separatorComponent",
    "labelComponent",
    "avatarComponent",
    "alertComponent",
    "breadcrumbComponent",
    "tabsComponent",
    "paginationComponent",
    "accordionComponent",
    "collapsibleComponent",
    "dialogComponent",
    "popoverComponent",
    "dropdownMenuComponent",
    "contextMenuComponent",
    "sheetComponent",
    "badgeComponent",
    "checkboxComponent",
    "switchComponent",
    "sliderComponent",
    "textareaComponent",
    "calendarComponent",
    "datePickerComponent",
    "timePickerComponent",
    "fileUploadComponent",
    "numberInputComponent",
    "richTextEditorComponent",
    "toastComponent",
    "tooltipComponent",
    "progressComponent",
    "skeletonComponent",
    "radioGroupComponent",
];

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid identifier regex"));

/// A named list of entry keys written together to one output file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Grouping {
    pub name: String,
    /// Output path relative to `outputRoot`. Defaults to `<name>.ts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub keys: Vec<String>,
}

impl Grouping {
    pub fn new(name: &str, keys: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            output: None,
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn with_output(mut self, output: &str) -> Self {
        self.output = Some(output.to_string());
        self
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => PathBuf::from(output),
            None => PathBuf::from(format!("{}.ts", self.name)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_secondary_locale")]
    pub secondary_locale: String,
    #[serde(default = "default_export_name")]
    pub export_name: String,
    #[serde(default = "default_header")]
    pub header: String,
    #[serde(default)]
    pub scan_mode: ScanMode,
    #[serde(default)]
    pub locale_boundary: LocaleBoundary,
    #[serde(default = "default_groupings")]
    pub groupings: Vec<Grouping>,
}

fn default_source() -> String {
    "lib/i18n.ts".to_string()
}

fn default_output_root() -> String {
    "lib/i18n".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_secondary_locale() -> String {
    "ar".to_string()
}

fn default_export_name() -> String {
    "translations".to_string()
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_groupings() -> Vec<Grouping> {
    vec![
        Grouping::new("common", &["nav", "ui", "docs", "common"]),
        Grouping::new("home", &["home"]),
        Grouping::new("themes", &["themes", "themesPage"]),
        Grouping::new("documentation", &["documentationPages"]),
        Grouping::new("gcc", &["gcc", "gccDashboard"]),
        Grouping::new("examples", &["examples"]),
        Grouping::new("components", COMPONENT_KEYS).with_output("components/index.ts"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output_root: default_output_root(),
            primary_locale: default_primary_locale(),
            secondary_locale: default_secondary_locale(),
            export_name: default_export_name(),
            header: default_header(),
            scan_mode: ScanMode::default(),
            locale_boundary: LocaleBoundary::default(),
            groupings: default_groupings(),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

fn is_contained_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl Config {
    /// Validate configuration values.
    ///
    /// Locale names, keys and the export name must be plain identifiers, and
    /// every grouping must write to its own path below `outputRoot`.
    pub fn validate(&self) -> Result<()> {
        for (field, locale) in [
            ("primaryLocale", &self.primary_locale),
            ("secondaryLocale", &self.secondary_locale),
        ] {
            if !is_identifier(locale) {
                bail!("Invalid locale name in '{}': \"{}\"", field, locale);
            }
        }
        if self.primary_locale == self.secondary_locale {
            bail!(
                "'primaryLocale' and 'secondaryLocale' must differ (both are \"{}\")",
                self.primary_locale
            );
        }
        if !is_identifier(&self.export_name) {
            bail!("Invalid identifier in 'exportName': \"{}\"", self.export_name);
        }
        if self.groupings.is_empty() {
            bail!("'groupings' must contain at least one grouping");
        }

        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for grouping in &self.groupings {
            if grouping.name.trim().is_empty() {
                bail!("Grouping names in 'groupings' must not be empty");
            }
            if !names.insert(grouping.name.as_str()) {
                bail!("Duplicate grouping name in 'groupings': \"{}\"", grouping.name);
            }
            if grouping.keys.is_empty() {
                bail!("Grouping \"{}\" has no keys", grouping.name);
            }
            if let Some(key) = grouping.keys.iter().find(|k| !is_identifier(k)) {
                bail!("Invalid key in grouping \"{}\": \"{}\"", grouping.name, key);
            }

            let output = grouping.output_path();
            if output.as_os_str().is_empty() || !is_contained_relative(&output) {
                bail!(
                    "Invalid output path for grouping \"{}\": \"{}\" (must be relative to 'outputRoot')",
                    grouping.name,
                    output.display()
                );
            }
            if !outputs.insert(output.clone()) {
                bail!(
                    "Groupings share the output path \"{}\"",
                    output.display()
                );
            }
        }

        Ok(())
    }

    pub fn template(&self) -> OutputTemplate {
        OutputTemplate {
            header: self.header.clone(),
            export_name: self.export_name.clone(),
            primary_locale: self.primary_locale.clone(),
            secondary_locale: self.secondary_locale.clone(),
        }
    }

    /// The grouping that claims `key`, if any. The first grouping wins.
    pub fn grouping_for_key(&self, key: &str) -> Option<&Grouping> {
        self.groupings
            .iter()
            .find(|g| g.keys.iter().any(|k| k == key))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory the config's relative paths are resolved against.
    pub fn project_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
