//! Ordered, invariant-preserving collection of slots.
//!
//! An [`IntervalSet`] keeps its slots ascending by start with no
//! overlap between neighbours. The single mutating operation is
//! [`insert`](IntervalSet::insert), whose behaviour on conflict is
//! chosen by an explicit [`InsertPolicy`] rather than baked into the
//! type: merging fuses overlapping or touching slots into one, strict
//! rejects overlap and reports which boundary crossed in.

use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};
use crate::slot::Slot;

/// Conflict handling for [`IntervalSet::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InsertPolicy {
    /// Reject any overlap with a stored slot. Touching slots are legal
    /// and stay separate.
    #[default]
    Strict,
    /// Fuse the new slot with every stored slot it overlaps or abuts,
    /// so no two stored slots ever touch.
    Merging,
}

impl InsertPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Merging => "merging",
        }
    }
}

/// An ordered sequence of non-overlapping [`Slot`]s, ascending by
/// start.
///
/// Holds after every operation: `slots[i].till() <= slots[i+1].from()`
/// for all adjacent pairs. Under [`InsertPolicy::Merging`] the
/// inequality is strict, since abutting slots are fused away on
/// insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntervalSet {
    pub(crate) slots: Vec<Slot>,
}

impl IntervalSet {
    /// The empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build by inserting each slot in the order given.
    pub fn from_slots(
        slots: impl IntoIterator<Item = Slot>,
        policy: InsertPolicy,
    ) -> Result<Self> {
        let mut set = Self::new();
        for slot in slots {
            set.insert(slot, policy)?;
        }
        Ok(set)
    }

    /// Insert a slot under the given policy.
    ///
    /// Never shrinks the covered time and never introduces overlap.
    /// Merging insertion is idempotent: a slot already fully covered
    /// leaves the set unchanged.
    pub fn insert(&mut self, slot: Slot, policy: InsertPolicy) -> Result<()> {
        match policy {
            InsertPolicy::Merging => self.insert_merging(slot),
            InsertPolicy::Strict => Ok(self.insert_strict(slot)?),
        }
    }

    /// Replace the contiguous run of slots the new one overlaps or
    /// abuts with a single spanning slot, rebuilding the list fresh so
    /// the ordering invariant is re-established wholesale instead of
    /// patched.
    fn insert_merging(&mut self, slot: Slot) -> Result<()> {
        let mut from = slot.from();
        let mut till = slot.till();
        let mut rebuilt = Vec::with_capacity(self.slots.len() + 1);
        let mut placed = false;

        for &existing in &self.slots {
            if existing.till() < from {
                // Strictly before the new slot, not even touching.
                rebuilt.push(existing);
            } else if till < existing.from() {
                if !placed {
                    rebuilt.push(Slot::new(from, till)?);
                    placed = true;
                }
                rebuilt.push(existing);
            } else {
                // Overlapping or abutting: widen the slot under
                // construction to swallow it.
                from = from.min(existing.from());
                till = till.max(existing.till());
            }
        }
        if !placed {
            rebuilt.push(Slot::new(from, till)?);
        }
        self.slots = rebuilt;
        Ok(())
    }

    fn insert_strict(&mut self, slot: Slot) -> Result<(), OverlapError> {
        for &existing in &self.slots {
            if slot.overlaps(&existing) {
                return Err(if slot.from() < existing.from() {
                    OverlapError::TailIntoHead {
                        new_from: slot.from(),
                        new_till: slot.till(),
                        existing_from: existing.from(),
                        existing_till: existing.till(),
                    }
                } else {
                    OverlapError::HeadIntoTail {
                        new_from: slot.from(),
                        new_till: slot.till(),
                        existing_from: existing.from(),
                        existing_till: existing.till(),
                    }
                });
            }
        }
        let pos = self
            .slots
            .iter()
            .position(|s| slot.from() < s.from())
            .unwrap_or(self.slots.len());
        self.slots.insert(pos, slot);
        Ok(())
    }

    /// The stored slots, ascending by start.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total covered time across all slots, in seconds.
    pub fn covered_secs(&self) -> i64 {
        self.slots.iter().map(|s| s.duration_secs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OverlapKind, ScheduleError};

    fn slot(from: i64, till: i64) -> Slot {
        Slot::new(from, till).unwrap()
    }

    fn set(slots: &[(i64, i64)], policy: InsertPolicy) -> IntervalSet {
        IntervalSet::from_slots(slots.iter().map(|&(f, t)| slot(f, t)), policy).unwrap()
    }

    #[test]
    fn from_slots_orders_by_start() {
        let s = set(&[(30, 40), (10, 20)], InsertPolicy::Merging);
        assert_eq!(s.slots(), &[slot(10, 20), slot(30, 40)]);
    }

    #[test]
    fn merging_fuses_overlap_into_one_slot() {
        let mut s = set(&[(10, 20), (30, 40)], InsertPolicy::Merging);
        s.insert(slot(15, 25), InsertPolicy::Merging).unwrap();
        assert_eq!(s.slots(), &[slot(10, 25), slot(30, 40)]);
    }

    #[test]
    fn merging_fuses_abutting_slots() {
        let mut s = set(&[(10, 20)], InsertPolicy::Merging);
        s.insert(slot(20, 30), InsertPolicy::Merging).unwrap();
        assert_eq!(s.slots(), &[slot(10, 30)]);
    }

    #[test]
    fn merging_spans_multiple_existing_slots() {
        let mut s = set(&[(10, 20), (30, 40), (50, 60)], InsertPolicy::Merging);
        s.insert(slot(15, 55), InsertPolicy::Merging).unwrap();
        assert_eq!(s.slots(), &[slot(10, 60)]);
    }

    #[test]
    fn merging_covered_insert_is_a_noop() {
        let mut s = set(&[(10, 40)], InsertPolicy::Merging);
        s.insert(slot(15, 25), InsertPolicy::Merging).unwrap();
        assert_eq!(s.slots(), &[slot(10, 40)]);
    }

    #[test]
    fn strict_rejects_head_into_tail() {
        let mut s = set(&[(10, 20)], InsertPolicy::Strict);
        let err = s.insert(slot(15, 20), InsertPolicy::Strict).unwrap_err();
        match err {
            ScheduleError::Overlap(overlap) => {
                assert_eq!(overlap.kind(), OverlapKind::HeadIntoTail)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Rejected insert leaves the set untouched.
        assert_eq!(s.slots(), &[slot(10, 20)]);
    }

    #[test]
    fn strict_rejects_tail_into_head() {
        let mut s = set(&[(10, 20)], InsertPolicy::Strict);
        let err = s.insert(slot(5, 15), InsertPolicy::Strict).unwrap_err();
        match err {
            ScheduleError::Overlap(overlap) => {
                assert_eq!(overlap.kind(), OverlapKind::TailIntoHead)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn strict_keeps_touching_slots_separate() {
        let mut s = set(&[(10, 20)], InsertPolicy::Strict);
        s.insert(slot(20, 30), InsertPolicy::Strict).unwrap();
        assert_eq!(s.slots(), &[slot(10, 20), slot(20, 30)]);
    }

    #[test]
    fn strict_insert_keeps_ascending_order() {
        let s = set(&[(50, 60), (10, 20), (30, 40)], InsertPolicy::Strict);
        assert_eq!(s.slots(), &[slot(10, 20), slot(30, 40), slot(50, 60)]);
    }

    #[test]
    fn covered_secs_sums_slot_durations() {
        let s = set(&[(10, 20), (30, 45)], InsertPolicy::Strict);
        assert_eq!(s.covered_secs(), 25);
    }
}
