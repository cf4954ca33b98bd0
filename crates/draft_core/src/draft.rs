//! Draft orchestration: builds the table schema once, then allocates every
//! role column in catalog order through the tier allocator.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::allocator::TierAllocator;
use crate::criteria::Criteria;
use crate::error::Result;
use crate::player::PlayerRecord;
use crate::positions::{self, CENTER_BACK, CENTER_BACK_COLUMNS};
use crate::table::{DraftTable, TableRepository};

/// Per-column fill counts reported after a draft run.
#[derive(Debug, Clone, Serialize)]
pub struct DraftSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub role: String,
    pub filled: usize,
}

/// Draft RNG: seeded for reproducible runs, OS entropy otherwise.
pub fn draft_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run the full draft: one allocation per role column, each a complete
/// load → mutate → save cycle against the repository, so every role starts
/// from the latest persisted table.
pub fn run_draft<S, R>(
    store: &mut S,
    pool: &[PlayerRecord],
    criteria: &Criteria,
    rng: R,
) -> Result<DraftSummary>
where
    S: TableRepository,
    R: Rng,
{
    criteria.validate()?;
    let columns = positions::role_columns(pool)?;

    let table = DraftTable::new(criteria, &columns);
    store.save(&table)?;
    info!(
        rows = table.row_count(),
        columns = columns.len(),
        "draft table created"
    );

    let mut allocator = TierAllocator::new(criteria, rng);
    let mut center_backs = false;
    for role in &columns {
        if role.as_str() == CENTER_BACK_COLUMNS.0 || role.as_str() == CENTER_BACK_COLUMNS.1 {
            center_backs = true;
            continue;
        }
        let role_pool: Vec<PlayerRecord> = pool
            .iter()
            .filter(|p| p.position == *role)
            .cloned()
            .collect();
        allocator.allocate_role(store, role_pool, role)?;
    }

    if center_backs {
        let cb_pool: Vec<PlayerRecord> = pool
            .iter()
            .filter(|p| p.position == CENTER_BACK)
            .cloned()
            .collect();
        allocator.allocate_paired(store, cb_pool, CENTER_BACK_COLUMNS)?;
    }

    let final_table = store.load()?;
    let columns = final_table
        .columns()
        .iter()
        .skip(1)
        .map(|role| ColumnSummary {
            role: role.clone(),
            filled: final_table.filled_count(role),
        })
        .collect();

    Ok(DraftSummary {
        rows: final_table.row_count(),
        columns,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::table::{MemoryTableRepository, NAME_COLUMN};

    fn criteria() -> Criteria {
        Criteria {
            leagues: 3,
            top_slots: 2,
            middle_slots: 2,
            bottom_slots: 2,
        }
    }

    fn pool() -> Vec<PlayerRecord> {
        let mut players = Vec::new();
        for i in 0..6 {
            players.push(PlayerRecord::new(
                format!("GK {}", i),
                "Nowhere",
                "FC Test",
                "GK",
                25,
                90 - i as u8,
            ));
        }
        for i in 0..10 {
            players.push(PlayerRecord::new(
                format!("CB {:02}", i),
                "Nowhere",
                "FC Test",
                "CB",
                26,
                88 - i as u8,
            ));
        }
        for i in 0..5 {
            players.push(PlayerRecord::new(
                format!("ST {}", i),
                "Nowhere",
                "FC Test",
                "ST",
                24,
                92 - i as u8,
            ));
        }
        players
    }

    fn assert_table_is_valid(table: &DraftTable) {
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.columns(), ["Name", "GK", "CB1", "CB2", "ST"]);
        assert_eq!(table.cell(0, NAME_COLUMN), Some("Top 1"));
        assert_eq!(table.cell(5, NAME_COLUMN), Some("Bottom 2"));
        for column in table.columns().iter().skip(1) {
            let names: Vec<&str> = (0..table.row_count())
                .filter_map(|row| table.cell(row, column))
                .filter(|cell| !cell.is_empty())
                .map(PlayerRecord::name_from_cell)
                .collect();
            let unique: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(names.len(), unique.len(), "duplicates in {}", column);
        }
    }

    #[test]
    fn test_run_draft_fills_every_role_column() {
        let criteria = criteria();
        let mut repo = MemoryTableRepository::new();

        let summary =
            run_draft(&mut repo, &pool(), &criteria, draft_rng(Some(42))).unwrap();

        assert_eq!(summary.rows, 6);
        let roles: Vec<&str> = summary.columns.iter().map(|c| c.role.as_str()).collect();
        assert_eq!(roles, ["GK", "CB1", "CB2", "ST"]);
        for column in &summary.columns {
            assert!(column.filled > 0, "{} column is empty", column.role);
        }
        assert_table_is_valid(&repo.load().unwrap());
    }

    #[test]
    fn test_rerun_produces_a_valid_table_both_times() {
        let criteria = criteria();
        let mut repo = MemoryTableRepository::new();

        run_draft(&mut repo, &pool(), &criteria, draft_rng(Some(1))).unwrap();
        assert_table_is_valid(&repo.load().unwrap());

        run_draft(&mut repo, &pool(), &criteria, draft_rng(Some(2))).unwrap();
        assert_table_is_valid(&repo.load().unwrap());
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let mut repo = MemoryTableRepository::new();
        let result = run_draft(&mut repo, &[], &criteria(), draft_rng(Some(1)));
        assert!(result.is_err());
    }

    #[test]
    fn test_paired_columns_draw_from_the_center_back_pool() {
        let criteria = criteria();
        let mut repo = MemoryTableRepository::new();
        run_draft(&mut repo, &pool(), &criteria, draft_rng(Some(8))).unwrap();

        let table = repo.load().unwrap();
        for column in ["CB1", "CB2"] {
            for row in 0..table.row_count() {
                let cell = table.cell(row, column).unwrap();
                if !cell.is_empty() {
                    assert!(
                        PlayerRecord::name_from_cell(cell).starts_with("CB"),
                        "{} holds a non-center-back: {}",
                        column,
                        cell
                    );
                }
            }
        }
    }
}
