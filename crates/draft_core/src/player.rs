use serde::{Deserialize, Serialize};

/// One candidate row from the players dataset.
///
/// Field names map onto the edited dataset columns
/// (`Name, Nation, Club, Position, Age, Overall`). Records are read-only
/// inputs to the draft: the allocator only selects and serializes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Nation")]
    pub nation: String,
    #[serde(rename = "Club")]
    pub club: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "Overall")]
    pub overall: u8,
}

impl PlayerRecord {
    pub fn new(
        name: impl Into<String>,
        nation: impl Into<String>,
        club: impl Into<String>,
        position: impl Into<String>,
        age: u8,
        overall: u8,
    ) -> Self {
        Self {
            name: name.into(),
            nation: nation.into(),
            club: club.into(),
            position: position.into(),
            age,
            overall,
        }
    }

    /// Serialize the full record into a single draft-table cell.
    pub fn to_cell(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}, {}",
            self.name, self.nation, self.club, self.position, self.age, self.overall
        )
    }

    /// Player name back out of a serialized cell. The name is always the
    /// first comma-separated field.
    pub fn name_from_cell(cell: &str) -> &str {
        cell.split(',').next().unwrap_or(cell).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_round_trip_keeps_the_name() {
        let player = PlayerRecord::new("Jan Oblak", "Slovenia", "Atletico Madrid", "GK", 31, 89);
        let cell = player.to_cell();
        assert_eq!(cell, "Jan Oblak, Slovenia, Atletico Madrid, GK, 31, 89");
        assert_eq!(PlayerRecord::name_from_cell(&cell), "Jan Oblak");
    }
}
