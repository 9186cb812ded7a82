//! Runs the tone-number merge over every configured file pair.

use crate::config::{AppConfig, FilePair};
use crate::merge::{apply_tone_numbers, MergeStats};
use crate::tone_map::build_tone_map;
use crate::vocabulary::write_records_compact;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct PairReport {
    pub flat: PathBuf,
    pub tone_map_entries: usize,
    pub stats: MergeStats,
    pub written: bool,
}

/// Builds the tone map for one pair, annotates the flat file and writes it back.
pub fn process_pair(pair: &FilePair, dry_run: bool) -> Result<PairReport> {
    let name = pair.flat_name();
    info!("Processing {}...", name);

    let tone_map = build_tone_map(&pair.source)?;
    info!("  Extracted tone numbers for {} characters", tone_map.len());

    let annotated = apply_tone_numbers(&pair.flat, &tone_map)?;
    let stats = annotated.stats;

    if dry_run {
        info!(
            "  Dry run: {} of {} records would be annotated ({} changed), {} unmatched",
            stats.annotated,
            stats.records,
            stats.changed,
            stats.unmatched.len()
        );
    } else {
        write_records_compact(&pair.flat, &annotated.records)?;
        info!("  Updated {} with tone numbers", name);
    }
    if !stats.unmatched.is_empty() {
        warn!(
            "  {} records in {} have no tone numbers",
            stats.unmatched.len(),
            name
        );
    }

    Ok(PairReport {
        flat: pair.flat.clone(),
        tone_map_entries: tone_map.len(),
        stats,
        written: !dry_run,
    })
}

/// Processes every pair in order. The first failure aborts the run;
/// pairs already written stay written.
pub fn run(config: &AppConfig) -> Result<Vec<PairReport>> {
    let mut reports = Vec::with_capacity(config.pairs.len());
    for pair in &config.pairs {
        let report = process_pair(pair, config.dry_run)
            .with_context(|| format!("Failed to add tone numbers to {:?}", pair.flat))?;
        reports.push(report);
    }

    if config.dry_run {
        info!("Dry run done, no files were changed.");
    } else {
        info!("Done! All files now have tone numbers (tn) field added.");
    }
    info!("Example of added field:");
    info!("  \"tn\": \"ba1\"  // for single character");
    info!("  \"tn\": \"ba4 ba5\"  // for multi-character words");

    Ok(reports)
}
