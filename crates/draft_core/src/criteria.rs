use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, Result};

/// One of the three league tiers of the draft table, in band order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Top,
    Middle,
    Bottom,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Top, Tier::Middle, Tier::Bottom];

    /// Row label prefix used in the draft table's Name column.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Top => "Top",
            Tier::Middle => "Middle",
            Tier::Bottom => "Bottom",
        }
    }
}

/// Slot counts for the league tiers. Fixed once per run; the draft table is
/// sized from these and never resized afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub leagues: usize,
    pub top_slots: usize,
    pub middle_slots: usize,
    pub bottom_slots: usize,
}

impl Default for Criteria {
    /// English league pyramid: Premier League / Championship / League One.
    fn default() -> Self {
        Self {
            leagues: 3,
            top_slots: 20,
            middle_slots: 20,
            bottom_slots: 24,
        }
    }
}

impl Criteria {
    pub fn total_slots(&self) -> usize {
        self.top_slots + self.middle_slots + self.bottom_slots
    }

    /// Contiguous row band of one tier within the draft table.
    pub fn tier_rows(&self, tier: Tier) -> Range<usize> {
        match tier {
            Tier::Top => 0..self.top_slots,
            Tier::Middle => self.top_slots..self.top_slots + self.middle_slots,
            Tier::Bottom => self.top_slots + self.middle_slots..self.total_slots(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_slots() == 0 {
            return Err(DraftError::Configuration(
                "criteria defines zero team slots".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = Criteria::default();
        assert_eq!(criteria.leagues, 3);
        assert_eq!(criteria.total_slots(), 64);
    }

    #[test]
    fn test_tier_bands_are_contiguous() {
        let criteria = Criteria {
            leagues: 3,
            top_slots: 2,
            middle_slots: 3,
            bottom_slots: 4,
        };
        assert_eq!(criteria.tier_rows(Tier::Top), 0..2);
        assert_eq!(criteria.tier_rows(Tier::Middle), 2..5);
        assert_eq!(criteria.tier_rows(Tier::Bottom), 5..9);
    }

    #[test]
    fn test_zero_slots_is_a_configuration_error() {
        let criteria = Criteria {
            leagues: 3,
            top_slots: 0,
            middle_slots: 0,
            bottom_slots: 0,
        };
        assert!(criteria.validate().is_err());
    }
}
