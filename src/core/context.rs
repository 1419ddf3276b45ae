use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result};
use colored::Colorize;

use super::patterns::PatternRegistry;
use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
};

/// Everything one run needs: where to look, which files, which patterns.
///
/// Built once from the command line and the config file, then handed to
/// [`crate::core::driver::run`]. Nothing here is global, so independent runs
/// with different targets or registries can share a process.
pub struct RunContext {
    pub config: Config,
    /// Project root used to locate the config file.
    pub root_dir: PathBuf,
    pub extensions: HashSet<String>,
    pub registry: PatternRegistry,
    pub verbose: bool,
}

impl RunContext {
    /// Load config from `--path` and apply CLI overrides (CLI > config file > defaults).
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, parsed, or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args.path.clone();
        let config_result = load_config(&root_dir)
            .with_context(|| format!("Failed to load configuration from {}", root_dir.display()))?;

        if common_args.verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref source_root) = common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }

        Self::from_config(config, root_dir, common_args.verbose)
    }

    /// Build a context from an already loaded config.
    pub fn from_config(config: Config, root_dir: PathBuf, verbose: bool) -> Result<Self> {
        config.validate()?;
        let registry = config.registry()?;
        let extensions = config.normalized_extensions();

        Ok(Self {
            config,
            root_dir,
            extensions,
            registry,
            verbose,
        })
    }

    /// Directory whose files are scanned.
    ///
    /// Absolute `sourceRoot` values are used as-is; relative ones are
    /// resolved against the project root.
    pub fn source_dir(&self) -> PathBuf {
        let p = Path::new(&self.config.source_root);
        if p.is_absolute() {
            return p.to_path_buf();
        }
        let is_cur_dir = self
            .root_dir
            .components()
            .all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            self.root_dir.join(rel)
        }
    }
}
