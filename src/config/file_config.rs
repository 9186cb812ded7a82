use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub base_path: Option<String>,
    pub dry_run: Option<bool>,

    /// Replaces the default HSK level pairs when present.
    pub pairs: Option<Vec<FilePairConfig>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilePairConfig {
    /// Nested source file holding the tone numbers.
    pub source: String,
    /// Flattened file that gets the `tn` field.
    pub flat: String,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
