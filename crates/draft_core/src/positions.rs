//! Position catalog: which role columns the draft table carries, and in
//! what order.

use std::collections::HashSet;

use crate::error::{DraftError, Result};
use crate::player::PlayerRecord;

/// Canonical draft order: goalkeeper, fullbacks, center-back, defensive mid,
/// central mid, wide mids, attacking mid, wide forwards, center forward,
/// striker. Positions absent from the pool are skipped.
pub const POSITION_PRIORITY: [&str; 13] = [
    "GK", "LB", "RB", "CB", "CDM", "CM", "LM", "RM", "CAM", "LW", "RW", "CF", "ST",
];

/// Center-backs are drafted in pairs, so the single CB position reserves two
/// parallel columns fed from the same candidate pool.
pub const CENTER_BACK: &str = "CB";
pub const CENTER_BACK_COLUMNS: (&str, &str) = ("CB1", "CB2");

/// Ordered role columns for the draft table, derived from the positions
/// actually present in the pool.
pub fn role_columns(pool: &[PlayerRecord]) -> Result<Vec<String>> {
    if pool.is_empty() {
        return Err(DraftError::Configuration(
            "player pool is empty".to_string(),
        ));
    }

    let present: HashSet<&str> = pool.iter().map(|p| p.position.as_str()).collect();

    let mut columns = Vec::new();
    for role in POSITION_PRIORITY {
        if !present.contains(role) {
            continue;
        }
        if role == CENTER_BACK {
            columns.push(CENTER_BACK_COLUMNS.0.to_string());
            columns.push(CENTER_BACK_COLUMNS.1.to_string());
        } else {
            columns.push(role.to_string());
        }
    }

    if columns.is_empty() {
        return Err(DraftError::Configuration(
            "no recognized positions in player pool".to_string(),
        ));
    }

    Ok(columns)
}
