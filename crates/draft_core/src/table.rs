//! The draft table: one row per team slot, one column per role label, plus
//! the repository abstraction every allocation pass persists through.

use std::collections::HashSet;

use crate::criteria::{Criteria, Tier};
use crate::error::{DraftError, Result};
use crate::player::PlayerRecord;

/// Column holding the team-slot labels ("Top 1", "Middle 3", ...). Written
/// once at table creation and never mutated by allocation.
pub const NAME_COLUMN: &str = "Name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DraftTable {
    /// Create an empty table: slot labels in the Name column, 1-indexed per
    /// tier band, and every role cell blank. The row count is fixed here and
    /// never changes afterwards.
    pub fn new(criteria: &Criteria, role_columns: &[String]) -> Self {
        let mut columns = Vec::with_capacity(role_columns.len() + 1);
        columns.push(NAME_COLUMN.to_string());
        columns.extend(role_columns.iter().cloned());

        let mut rows = Vec::with_capacity(criteria.total_slots());
        for tier in Tier::ALL {
            for (i, _) in criteria.tier_rows(tier).enumerate() {
                let mut row = vec![String::new(); columns.len()];
                row[0] = format!("{} {}", tier.label(), i + 1);
                rows.push(row);
            }
        }

        Self { columns, rows }
    }

    /// Rebuild a table from persisted parts, rejecting ragged rows.
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for row in &rows {
            if row.len() != columns.len() {
                return Err(DraftError::Storage(format!(
                    "ragged table row: expected {} cells, found {}",
                    columns.len(),
                    row.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    pub fn set_cell(&mut self, row: usize, column: &str, value: String) -> Result<()> {
        let col = self.column_index(column).ok_or_else(|| {
            DraftError::Configuration(format!("unknown draft table column: {}", column))
        })?;
        let cells = self.rows.get_mut(row).ok_or_else(|| {
            DraftError::Configuration(format!("draft table row {} out of range", row))
        })?;
        cells[col] = value;
        Ok(())
    }

    /// Non-empty cell count for one role column.
    pub fn filled_count(&self, column: &str) -> usize {
        match self.column_index(column) {
            Some(col) => self.rows.iter().filter(|r| !r[col].is_empty()).count(),
            None => 0,
        }
    }

    /// Drop repeated players from a role column, keeping the first occurrence
    /// in row order. Guards against a player being placed by both the top
    /// pass and a later backfill pass.
    pub fn dedup_column(&mut self, column: &str) {
        let col = match self.column_index(column) {
            Some(col) => col,
            None => return,
        };
        let mut seen: HashSet<String> = HashSet::new();
        for row in &mut self.rows {
            if row[col].is_empty() {
                continue;
            }
            let name = PlayerRecord::name_from_cell(&row[col]).to_string();
            if !seen.insert(name) {
                row[col].clear();
            }
        }
    }
}

/// Durable storage for the draft table. Every allocation pass is a full
/// load → mutate one column → save cycle, so the latest persisted state is
/// always re-read before the next role touches the table.
pub trait TableRepository {
    fn load(&self) -> Result<DraftTable>;
    fn save(&mut self, table: &DraftTable) -> Result<()>;
}

/// In-memory repository, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryTableRepository {
    table: Option<DraftTable>,
}

impl MemoryTableRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_table(self) -> Option<DraftTable> {
        self.table
    }
}

impl TableRepository for MemoryTableRepository {
    fn load(&self) -> Result<DraftTable> {
        self.table
            .clone()
            .ok_or_else(|| DraftError::Storage("no draft table has been saved".to_string()))
    }

    fn save(&mut self, table: &DraftTable) -> Result<()> {
        self.table = Some(table.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_criteria() -> Criteria {
        Criteria {
            leagues: 3,
            top_slots: 2,
            middle_slots: 2,
            bottom_slots: 2,
        }
    }

    fn gk_table() -> DraftTable {
        DraftTable::new(&small_criteria(), &["GK".to_string()])
    }

    #[test]
    fn test_new_table_has_slot_labels_and_empty_cells() {
        let table = gk_table();
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.columns(), ["Name", "GK"]);
        assert_eq!(table.cell(0, NAME_COLUMN), Some("Top 1"));
        assert_eq!(table.cell(2, NAME_COLUMN), Some("Middle 1"));
        assert_eq!(table.cell(5, NAME_COLUMN), Some("Bottom 2"));
        assert_eq!(table.filled_count("GK"), 0);
    }

    #[test]
    fn test_set_cell_rejects_unknown_column_and_row() {
        let mut table = gk_table();
        assert!(table.set_cell(0, "ST", "x".to_string()).is_err());
        assert!(table.set_cell(99, "GK", "x".to_string()).is_err());
        assert!(table.set_cell(0, "GK", "x".to_string()).is_ok());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut table = gk_table();
        let player = PlayerRecord::new("Alisson", "Brazil", "Liverpool", "GK", 31, 89);
        table.set_cell(0, "GK", player.to_cell()).unwrap();
        table.set_cell(3, "GK", player.to_cell()).unwrap();
        table.dedup_column("GK");
        assert_eq!(table.filled_count("GK"), 1);
        assert!(!table.cell(0, "GK").unwrap().is_empty());
        assert!(table.cell(3, "GK").unwrap().is_empty());
    }

    #[test]
    fn test_from_parts_rejects_ragged_rows() {
        let columns = vec!["Name".to_string(), "GK".to_string()];
        let rows = vec![vec!["Top 1".to_string()]];
        assert!(DraftTable::from_parts(columns, rows).is_err());
    }

    #[test]
    fn test_memory_repository_round_trip() {
        let mut repo = MemoryTableRepository::new();
        assert!(repo.load().is_err());

        let table = gk_table();
        repo.save(&table).unwrap();
        assert_eq!(repo.load().unwrap(), table);
    }
}
