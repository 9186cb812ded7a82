//! Reading and writing vocabulary JSON files

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Reads a JSON array of records from `path`.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse vocabulary file: {:?}", path))
}

/// Overwrites `path` with `records` as compact JSON.
///
/// serde_json's compact formatter uses `,` and `:` without spaces and writes
/// non-ASCII characters as-is.
pub fn write_records_compact<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open vocabulary file for writing: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records)
        .with_context(|| format!("Failed to serialize vocabulary file: {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write vocabulary file: {:?}", path))
}
