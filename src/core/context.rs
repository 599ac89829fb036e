//! Shared setup for batch commands: configuration resolution and output paths.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::loader::{LoadResult, load_word_lists},
};

/// Resolved settings for a single command run.
///
/// Precedence: command-line flags, then `.censorrc.json`, then built-in
/// defaults.
pub struct BatchContext {
    pub lists_root: PathBuf,
    pub output_root: PathBuf,
    pub verbose: bool,
    ignores: Vec<Pattern>,
}

impl BatchContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let loaded = load_config(Path::new("."))?;
        if common.verbose && !loaded.from_file {
            eprintln!(
                "Note: no {} found, using default configuration",
                crate::config::CONFIG_FILE_NAME
            );
        }

        let mut config = loaded.config;
        if let Some(lists_root) = &common.lists_root {
            config.lists_root = lists_root.display().to_string();
        }
        if let Some(output_root) = &common.output_root {
            config.output_root = output_root.display().to_string();
        }

        let ignores = config.compiled_ignores()?;

        Ok(Self {
            lists_root: PathBuf::from(&config.lists_root),
            output_root: PathBuf::from(&config.output_root),
            verbose: common.verbose,
            ignores,
        })
    }

    /// Scan the lists root and build the deduplicated word table.
    pub fn load(&self) -> Result<LoadResult> {
        load_word_lists(&self.lists_root, &self.ignores)
    }

    /// Write a derived artifact under the output root, creating it on demand.
    pub fn write_artifact(&self, name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_root).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_root.display()
            )
        })?;
        let path = self.output_root.join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write artifact: {}", path.display()))?;
        Ok(path)
    }
}
