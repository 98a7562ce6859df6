//! Temporal lookups over an [`IntervalSet`].
//!
//! Two read-only questions the delivery layer asks before each send
//! attempt: "from this moment, when may a message next go out?" and
//! "until when does the currently usable window stay open?". Both are
//! pure functions over the ordered slot list.

use chrono::{DateTime, Utc};

use crate::schedule::IntervalSet;
use crate::slot::instant;

impl IntervalSet {
    /// Earliest eligible second at or after `earliest`.
    ///
    /// Slots ending at or before `earliest` are spent and skipped; the
    /// first remaining slot answers with `max(slot.from, earliest)`.
    /// `None` once `earliest` is at or past the end of the last slot.
    pub fn first_available(&self, earliest: i64) -> Option<i64> {
        self.slots
            .iter()
            .find(|s| s.till() > earliest)
            .map(|s| s.from().max(earliest))
    }

    /// [`first_available`](Self::first_available) over instants,
    /// truncated to whole seconds.
    pub fn first_available_at(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.first_available(from.timestamp()).map(instant)
    }

    /// First eligible instant at or after the current wall clock.
    pub fn first_available_now(&self) -> Option<DateTime<Utc>> {
        self.first_available_at(Utc::now())
    }

    /// End of the slot [`first_available`](Self::first_available) would
    /// select for `earliest`.
    pub fn deadline_after(&self, earliest: i64) -> Option<i64> {
        self.slots
            .iter()
            .find(|s| s.till() > earliest)
            .map(|s| s.till())
    }

    /// [`deadline_after`](Self::deadline_after) over instants.
    pub fn deadline_at(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.deadline_after(from.timestamp()).map(instant)
    }
}
