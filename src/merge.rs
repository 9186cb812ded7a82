//! Applies a tone map onto the records of a flattened vocabulary file.

use crate::tone_map::ToneMap;
use crate::vocabulary::{read_records, FlatRecord};
use anyhow::Result;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    pub records: usize,
    pub annotated: usize,
    /// Annotated records whose `tn` was missing or different before.
    pub changed: usize,
    /// Keys with no tone map entry, in file order.
    pub unmatched: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AnnotatedFile {
    pub records: Vec<FlatRecord>,
    pub stats: MergeStats,
}

/// Sets `tn` on every record whose key is in `tone_map`.
/// Records without a match are left untouched and reported.
pub fn annotate_records(records: &mut [FlatRecord], tone_map: &ToneMap) -> MergeStats {
    let mut stats = MergeStats {
        records: records.len(),
        ..Default::default()
    };

    for record in records.iter_mut() {
        match tone_map.get(record.key()) {
            Some(tone_numbers) => {
                stats.annotated += 1;
                if record.set_tone_numbers(tone_numbers) {
                    stats.changed += 1;
                }
            }
            None => {
                warn!(
                    key = %record.key(),
                    "No tone numbers found for '{}', skipping...",
                    record.key()
                );
                stats.unmatched.push(record.key().to_string());
            }
        }
    }

    stats
}

/// Reads the flattened file at `flat_path` and annotates it in memory.
pub fn apply_tone_numbers(flat_path: &Path, tone_map: &ToneMap) -> Result<AnnotatedFile> {
    let mut records: Vec<FlatRecord> = read_records(flat_path)?;
    let stats = annotate_records(&mut records, tone_map);
    Ok(AnnotatedFile { records, stats })
}
