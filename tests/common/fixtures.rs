//! Test fixture creation for vocabulary projects

use super::constants::*;
use anyhow::Result;
use hsk_tone_merge::config::DEFAULT_PAIRS;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding the default HSK 1 and HSK 2 file pairs.
pub struct TestProject {
    pub dir: TempDir,
    pub hsk1_source: PathBuf,
    pub hsk1_flat: PathBuf,
    pub hsk2_source: PathBuf,
    pub hsk2_flat: PathBuf,
}

impl TestProject {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Creates the data/ and app Resources/Data/ files at their default locations.
pub fn create_test_project() -> Result<TestProject> {
    let dir = TempDir::new()?;
    let contents = [(HSK1_SOURCE, HSK1_FLAT), (HSK2_SOURCE, HSK2_FLAT)];

    let mut paths = Vec::new();
    for ((source, flat), (source_content, flat_content)) in DEFAULT_PAIRS.iter().zip(contents) {
        let source = dir.path().join(source);
        let flat = dir.path().join(flat);
        for path in [&source, &flat] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&source, source_content)?;
        fs::write(&flat, flat_content)?;
        paths.push((source, flat));
    }

    let mut paths = paths.into_iter();
    let (hsk1_source, hsk1_flat) = paths.next().expect("two default pairs");
    let (hsk2_source, hsk2_flat) = paths.next().expect("two default pairs");

    Ok(TestProject {
        dir,
        hsk1_source,
        hsk1_flat,
        hsk2_source,
        hsk2_flat,
    })
}

#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
