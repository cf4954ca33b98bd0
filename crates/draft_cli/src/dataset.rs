//! Dataset handling: derive the filtered players file from the raw export
//! and load player pools for the draft run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use draft_core::PlayerRecord;
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub struct DatasetStats {
    pub rows: usize,
    pub skipped: usize,
}

/// Derive the edited dataset: the raw export filtered down to
/// `Name, Nation, Club, Position, Age, Overall`. Rows that fail to parse
/// are skipped with a warning, matching how the raw export is handled
/// elsewhere in the pipeline.
pub fn derive_dataset(source: &Path, target: &Path) -> Result<DatasetStats> {
    let mut reader = csv::Reader::from_path(source)
        .with_context(|| format!("failed to open source dataset: {}", source.display()))?;

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create edited directory: {}", parent.display())
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(target)
        .with_context(|| format!("failed to create edited dataset: {}", target.display()))?;

    let mut stats = DatasetStats { rows: 0, skipped: 0 };
    for (line, result) in reader.deserialize::<PlayerRecord>().enumerate() {
        match result {
            Ok(record) => {
                writer.serialize(&record)?;
                stats.rows += 1;
            }
            Err(e) => {
                stats.skipped += 1;
                warn!("skipping source row {}: {}", line + 2, e);
            }
        }
    }
    writer.flush()?;

    Ok(stats)
}

/// Load the full player pool from a dataset file.
pub fn load_players(path: &Path) -> Result<Vec<PlayerRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open players dataset: {}", path.display()))?;

    let mut players = Vec::new();
    for result in reader.deserialize() {
        let record: PlayerRecord = result
            .with_context(|| format!("malformed row in players dataset: {}", path.display()))?;
        players.push(record);
    }
    Ok(players)
}
