use crate::case::acronyms::{self, AcronymSet, DEFAULT_ACRONYMS};
use crate::case::casing::Locale;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".stringcases.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Extra acronyms on top of the table.
    #[serde(default)]
    pub acronyms: Vec<String>,

    /// Plain-text file with one acronym per line.
    #[serde(default)]
    pub acronym_file: Option<PathBuf>,

    /// Entries of the default table that should be treated as ordinary words.
    #[serde(default)]
    pub ignore_acronyms: Vec<String>,

    /// Start from an empty table instead of the defaults.
    #[serde(default)]
    pub replace_defaults: bool,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            acronyms: Vec::new(),
            acronym_file: None,
            ignore_acronyms: Vec::new(),
            replace_defaults: false,
        }
    }
}

/// One config file as written. Keys left out are `None` and keep the value of
/// the layer below; keys that are present always win, even when they restate
/// a default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct ConfigFile {
    locale: Option<String>,
    acronyms: Option<Vec<String>>,
    acronym_file: Option<PathBuf>,
    ignore_acronyms: Option<Vec<String>>,
    replace_defaults: Option<bool>,
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let mut file: Self = if is_json {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        };

        // Relative acronym files are resolved against the config file.
        if let (Some(acronym_file), Some(parent)) = (&file.acronym_file, path.parent()) {
            if acronym_file.is_relative() {
                file.acronym_file = Some(parent.join(acronym_file));
            }
        }

        tracing::debug!("Loaded config from {}", path.display());
        Ok(file)
    }
}

impl Config {
    /// Load configuration with priority: argument > local config > global config > defaults
    pub fn load(locale: Option<String>) -> Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE), locale)
    }

    /// [`Config::load`] with explicit global and local paths. Paths that do
    /// not exist are skipped.
    pub fn load_from(
        global: Option<&Path>,
        local: &Path,
        locale: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        for path in global.into_iter().chain([local]) {
            if path.exists() {
                config = config.merge(ConfigFile::read(path)?);
            }
        }

        if let Some(locale) = locale {
            config.locale = locale;
        }

        Ok(config)
    }

    /// Read a TOML config file, or JSON when the extension is `.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigFile::read(path)?))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).context("Failed to parse config")?;
        Ok(Self::default().merge(file))
    }

    /// Lay `file` over `self`. Acronym lists accumulate across layers.
    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if let Some(acronyms) = file.acronyms {
            self.acronyms.extend(acronyms);
        }
        if file.acronym_file.is_some() {
            self.acronym_file = file.acronym_file;
        }
        if let Some(ignored) = file.ignore_acronyms {
            self.ignore_acronyms.extend(ignored);
        }
        if let Some(replace_defaults) = file.replace_defaults {
            self.replace_defaults = replace_defaults;
        }
        self
    }

    pub fn locale(&self) -> Result<Locale> {
        self.locale
            .parse()
            .with_context(|| format!("Invalid locale in config: {}", self.locale))
    }

    /// Build the acronym table described by this config.
    pub fn acronym_set(&self) -> Result<AcronymSet> {
        let mut entries: BTreeSet<String> = BTreeSet::new();

        if !self.replace_defaults {
            entries.extend(DEFAULT_ACRONYMS.iter().map(|s| s.to_string()));
        }
        entries.extend(self.acronyms.iter().map(|s| s.trim().to_uppercase()));

        if let Some(path) = &self.acronym_file {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read acronym file: {}", path.display()))?;
            entries.extend(
                acronyms::parse_list(&content)
                    .into_iter()
                    .map(str::to_uppercase),
            );
        }

        for ignored in &self.ignore_acronyms {
            let key = ignored.trim().to_uppercase();
            if !entries.remove(&key) {
                tracing::warn!("Ignored acronym '{}' is not in the acronym table", key);
            }
        }

        AcronymSet::new(entries).context("Invalid acronym in config")
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "stringcases").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
