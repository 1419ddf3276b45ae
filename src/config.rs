use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::patterns::{PatternEntry, PatternRegistry};

pub const CONFIG_FILE_NAME: &str = ".tablefixrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_binding_attribute")]
    pub binding_attribute: String,
    /// Extra patterns appended after the builtin ones.
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

fn default_source_root() -> String {
    "src/pages".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["tsx".to_string()]
}

fn default_binding_attribute() -> String {
    "dataSource".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            binding_attribute: default_binding_attribute(),
            patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid ignore globs, an empty extension list,
    /// a binding attribute that is not an identifier, or a broken pattern.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        let attr = &self.binding_attribute;
        if attr.is_empty() || !attr.chars().all(|c| c.is_alphanumeric() || c == '_') {
            bail!("Invalid 'bindingAttribute': \"{}\"", attr);
        }

        self.registry()?;
        Ok(())
    }

    /// Builtin patterns followed by the configured ones.
    pub fn registry(&self) -> Result<PatternRegistry> {
        let registry = PatternRegistry::with_extra(self.patterns.iter().cloned());
        registry.validate()?;
        Ok(registry)
    }

    /// Extensions without a leading dot, for comparison against `Path::extension`.
    pub fn normalized_extensions(&self) -> HashSet<String> {
        self.extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
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
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
