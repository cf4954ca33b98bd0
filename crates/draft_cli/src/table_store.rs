//! CSV-backed draft table repository. Each allocation pass round-trips the
//! whole table through this store (load → mutate one column → save).

use std::fs;
use std::path::PathBuf;

use draft_core::{DraftError, DraftTable, TableRepository};

pub struct CsvTableRepository {
    path: PathBuf,
}

impl CsvTableRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TableRepository for CsvTableRepository {
    fn load(&self) -> draft_core::Result<DraftTable> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            DraftError::Storage(format!("failed to open {}: {}", self.path.display(), e))
        })?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| DraftError::Storage(format!("failed to read table headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result
                .map_err(|e| DraftError::Storage(format!("failed to read table row: {}", e)))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        DraftTable::from_parts(columns, rows)
    }

    fn save(&mut self, table: &DraftTable) -> draft_core::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            DraftError::Storage(format!("failed to create {}: {}", self.path.display(), e))
        })?;

        writer
            .write_record(table.columns())
            .map_err(|e| DraftError::Storage(format!("failed to write table headers: {}", e)))?;
        for row in table.rows() {
            writer
                .write_record(row)
                .map_err(|e| DraftError::Storage(format!("failed to write table row: {}", e)))?;
        }
        writer.flush()?;

        Ok(())
    }
}
