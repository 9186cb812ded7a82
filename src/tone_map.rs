//! Simplified form to tone numbers lookup, built from a nested source file.

use crate::vocabulary::{read_records, SourceRecord};
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToneMap {
    entries: HashMap<String, String>,
}

impl ToneMap {
    /// Builds the map from already parsed records.
    /// Records without tone numbers on their first form are skipped.
    /// A key seen twice keeps the last value.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SourceRecord>) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            match record.tone_numbers() {
                Some(tone_numbers) => {
                    if let Some(previous) =
                        entries.insert(record.s.clone(), tone_numbers.to_string())
                    {
                        debug!(
                            key = %record.s,
                            "Duplicate source key, replacing {:?} with {:?}",
                            previous,
                            tone_numbers
                        );
                    }
                }
                None => debug!(key = %record.s, "No tone numbers on first form"),
            }
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ToneMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Reads the source file at `source_path` and extracts its tone map.
pub fn build_tone_map(source_path: &Path) -> Result<ToneMap> {
    let records: Vec<SourceRecord> = read_records(source_path)?;
    Ok(ToneMap::from_records(&records))
}
