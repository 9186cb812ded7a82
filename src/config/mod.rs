mod file_config;

pub use file_config::{FileConfig, FilePairConfig};

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Source/flat pairs processed when no `pairs` are configured, relative to the base path.
pub const DEFAULT_PAIRS: &[(&str, &str)] = &[
    (
        "data/1.min.json",
        "pinyinpractice/pinyinpractice/Resources/Data/1.min.json",
    ),
    (
        "data/2.min.json",
        "pinyinpractice/pinyinpractice/Resources/Data/2.min.json",
    ),
];

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub base_path: PathBuf,
    pub dry_run: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            dry_run: false,
        }
    }
}

/// One source file and the flattened file it annotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub source: PathBuf,
    pub flat: PathBuf,
}

impl FilePair {
    pub fn new(base_path: &Path, source: impl AsRef<Path>, flat: impl AsRef<Path>) -> Self {
        Self {
            source: base_path.join(source),
            flat: base_path.join(flat),
        }
    }

    /// File name of the flat file, used in progress output.
    pub fn flat_name(&self) -> String {
        self.flat
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.flat.display().to_string())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_path: PathBuf,
    pub dry_run: bool,
    pub pairs: Vec<FilePair>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let base_path = file
            .base_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.base_path.clone());

        if !base_path.exists() {
            bail!("Base path does not exist: {:?}", base_path);
        }
        if !base_path.is_dir() {
            bail!("base_path is not a directory: {:?}", base_path);
        }

        let dry_run = file.dry_run.unwrap_or(cli.dry_run);

        let pairs = match file.pairs {
            Some(pairs) if pairs.is_empty() => {
                bail!("pairs is empty, remove it to use the default HSK files")
            }
            Some(pairs) => pairs
                .iter()
                .map(|pair| FilePair::new(&base_path, &pair.source, &pair.flat))
                .collect(),
            None => DEFAULT_PAIRS
                .iter()
                .map(|(source, flat)| FilePair::new(&base_path, source, flat))
                .collect(),
        };

        Ok(AppConfig {
            base_path,
            dry_run,
            pairs,
        })
    }
}
