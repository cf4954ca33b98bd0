//! # draft_core - Super-League Draft Allocation Engine
//!
//! Stratifies a rated player pool by position into three league tiers and
//! fills a shared draft table with randomized, duplicate-free selections.
//!
//! ## Features
//! - Tier-bounded selection with a fixed over-selection buffer
//! - Randomized slot placement for overflow and backfill picks
//! - Graceful partial fills when the candidate pool runs short
//! - Injectable seedable RNG (same seed = same draft)
//! - Storage-agnostic table repository, testable fully in memory

pub mod allocator;
pub mod criteria;
pub mod draft;
pub mod error;
pub mod player;
pub mod positions;
pub mod table;

pub use allocator::{TierAllocator, OVERSELECT};
pub use criteria::{Criteria, Tier};
pub use draft::{draft_rng, run_draft, ColumnSummary, DraftSummary};
pub use error::{DraftError, Result};
pub use player::PlayerRecord;
pub use positions::{role_columns, CENTER_BACK, CENTER_BACK_COLUMNS, POSITION_PRIORITY};
pub use table::{DraftTable, MemoryTableRepository, TableRepository, NAME_COLUMN};
