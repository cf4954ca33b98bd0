//! Tier allocation: the randomized league draft core.
//!
//! Candidates are ranked by overall rating, over-selected past each tier cut
//! by a fixed buffer, shuffled, and written into the tier bands of the draft
//! table. Overflow and backfill picks land on distinct random rows, so
//! repeated runs produce different-looking leagues from the same dataset.

use rand::seq::index;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::criteria::{Criteria, Tier};
use crate::error::Result;
use crate::player::PlayerRecord;
use crate::table::{DraftTable, TableRepository};

/// Over-selection buffer: how many extra candidates are pulled past a tier
/// cut before shuffling, so equally strong players rotate between runs.
pub const OVERSELECT: usize = 10;

/// Fills one role column per invocation, persisting the table after every
/// band pass. Candidate shortages degrade to partial fills, never errors.
pub struct TierAllocator<'c, R: Rng> {
    criteria: &'c Criteria,
    rng: R,
}

impl<'c, R: Rng> TierAllocator<'c, R> {
    pub fn new(criteria: &'c Criteria, rng: R) -> Self {
        Self { criteria, rng }
    }

    /// Fill a single role column from its candidate pool.
    ///
    /// Top pass: rank by overall (stable, so rating ties keep dataset
    /// order), cut at `top_slots + OVERSELECT`, shuffle the cut, write the
    /// first `top_slots` into the top band in order and scatter the rest
    /// over random middle-band rows. The backfill pass then fills the middle
    /// and bottom bands from the ranked remainder.
    ///
    /// Returns the candidates that were never selected.
    pub fn allocate_role<S: TableRepository>(
        &mut self,
        store: &mut S,
        pool: Vec<PlayerRecord>,
        role: &str,
    ) -> Result<Vec<PlayerRecord>> {
        let ranked = rank_by_overall(pool);
        let top_n = self.criteria.top_slots + OVERSELECT;
        let (mut top_pool, residual) = split_at_clamped(ranked, top_n);

        top_pool.shuffle(&mut self.rng);
        let cut = self.criteria.top_slots.min(top_pool.len());
        let overflow = top_pool.split_off(cut);
        let top_selection = top_pool;

        let mut table = store.load()?;
        self.write_top_band(&mut table, role, &top_selection)?;
        self.write_random_rows(&mut table, role, Tier::Middle, &overflow)?;
        table.dedup_column(role);
        store.save(&table)?;

        debug!(
            role,
            top = top_selection.len(),
            overflow = overflow.len(),
            "top tier allocated"
        );

        self.backfill_role(store, residual, role)
    }

    /// Middle/bottom backfill from the residual pool left by the top pass.
    ///
    /// The bottom cut keeps consuming the over-selected margin when the
    /// straight `middle..middle+bottom` slice undershoots, so the bottom
    /// band fills whenever the residual pool is large enough overall.
    fn backfill_role<S: TableRepository>(
        &mut self,
        store: &mut S,
        residual: Vec<PlayerRecord>,
        role: &str,
    ) -> Result<Vec<PlayerRecord>> {
        let needed = self.criteria.middle_slots + self.criteria.bottom_slots;
        let (mut slice, leftover) = split_at_clamped(residual, needed + OVERSELECT);
        slice.shuffle(&mut self.rng);

        let middle_cut = self.criteria.middle_slots.min(slice.len());
        let rest = slice.split_off(middle_cut);
        let middle_selection = slice;
        let (bottom_selection, margin) =
            split_at_clamped(rest, self.criteria.bottom_slots);

        let mut table = store.load()?;
        self.write_random_rows(&mut table, role, Tier::Middle, &middle_selection)?;
        self.write_random_rows(&mut table, role, Tier::Bottom, &bottom_selection)?;
        table.dedup_column(role);
        store.save(&table)?;

        debug!(
            role,
            middle = middle_selection.len(),
            bottom = bottom_selection.len(),
            "backfill allocated"
        );

        let mut unselected = margin;
        unselected.extend(leftover);
        Ok(unselected)
    }

    /// Fill the paired center-back columns from one shared pool.
    ///
    /// Ranking happens once; every shuffled cut is split in half so the two
    /// columns draw from disjoint candidate sets, then each half goes
    /// through the same band placement as a single-column role.
    pub fn allocate_paired<S: TableRepository>(
        &mut self,
        store: &mut S,
        pool: Vec<PlayerRecord>,
        roles: (&str, &str),
    ) -> Result<()> {
        let ranked = rank_by_overall(pool);
        let top_n = 2 * self.criteria.top_slots + OVERSELECT;
        let (mut top_pool, residual) = split_at_clamped(ranked, top_n);

        top_pool.shuffle(&mut self.rng);
        let second = top_pool.split_off(top_pool.len() / 2);
        let halves = [top_pool, second];

        let mut table = store.load()?;
        for (role, half) in [roles.0, roles.1].into_iter().zip(halves.iter()) {
            let cut = self.criteria.top_slots.min(half.len());
            let (top_selection, overflow) = half.split_at(cut);
            self.write_top_band(&mut table, role, top_selection)?;
            self.write_random_rows(&mut table, role, Tier::Middle, overflow)?;
        }
        table.dedup_column(roles.0);
        table.dedup_column(roles.1);
        store.save(&table)?;

        let needed = 2 * (self.criteria.middle_slots + self.criteria.bottom_slots);
        let (mut slice, _leftover) = split_at_clamped(residual, needed + OVERSELECT);
        slice.shuffle(&mut self.rng);
        let second = slice.split_off(slice.len() / 2);
        let halves = [slice, second];

        let mut table = store.load()?;
        for (role, half) in [roles.0, roles.1].into_iter().zip(halves.iter()) {
            let middle_cut = self.criteria.middle_slots.min(half.len());
            let (middle_selection, rest) = half.split_at(middle_cut);
            let bottom_cut = self.criteria.bottom_slots.min(rest.len());
            let (bottom_selection, _margin) = rest.split_at(bottom_cut);
            self.write_random_rows(&mut table, role, Tier::Middle, middle_selection)?;
            self.write_random_rows(&mut table, role, Tier::Bottom, bottom_selection)?;
        }
        table.dedup_column(roles.0);
        table.dedup_column(roles.1);
        store.save(&table)?;

        debug!(
            first = roles.0,
            second = roles.1,
            "paired columns allocated"
        );

        Ok(())
    }

    /// Write picks into the top band positionally, row 0 downward.
    fn write_top_band(
        &mut self,
        table: &mut DraftTable,
        role: &str,
        picks: &[PlayerRecord],
    ) -> Result<()> {
        for (row, player) in self.criteria.tier_rows(Tier::Top).zip(picks.iter()) {
            table.set_cell(row, role, player.to_cell())?;
        }
        Ok(())
    }

    /// Scatter picks onto distinct random rows of one tier band. The sample
    /// size is clamped to the band width, so a draw can never ask for more
    /// distinct rows than the band holds.
    fn write_random_rows(
        &mut self,
        table: &mut DraftTable,
        role: &str,
        tier: Tier,
        picks: &[PlayerRecord],
    ) -> Result<()> {
        let band = self.criteria.tier_rows(tier);
        let width = band.end.saturating_sub(band.start);
        if width == 0 || picks.is_empty() {
            return Ok(());
        }

        let amount = picks.len().min(width);
        let rows = index::sample(&mut self.rng, width, amount);
        for (player, offset) in picks.iter().zip(rows.into_iter()) {
            table.set_cell(band.start + offset, role, player.to_cell())?;
        }
        Ok(())
    }
}

/// Stable descending sort by overall rating; ties keep dataset order.
fn rank_by_overall(mut pool: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    pool.sort_by(|a, b| b.overall.cmp(&a.overall));
    pool
}

fn split_at_clamped(
    mut pool: Vec<PlayerRecord>,
    n: usize,
) -> (Vec<PlayerRecord>, Vec<PlayerRecord>) {
    let rest = pool.split_off(n.min(pool.len()));
    (pool, rest)
}
