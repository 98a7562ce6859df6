//! # Sendwindow Core Library
//!
//! This library answers one question for a message-delivery layer:
//! *when* may a timed outbound message go out, given a caller-supplied
//! set of permitted time windows. The CLI binary and any workflow
//! engine sitting on top are thin layers over this crate; the schedule
//! itself travels between them as opaque text.
//!
//! ## Architecture
//!
//! - **Slot**: an immutable half-open interval `[from, till)` in whole
//!   epoch seconds
//! - **IntervalSet**: an ordered, non-overlapping collection of slots
//!   with a policy-driven insertion algorithm (merge-or-reject)
//! - **Codec**: compact pair, `;`-delimited and JSON wire forms that
//!   round-trip exactly
//! - **Query**: `first_available` and `deadline` lookups used to pick
//!   the next send attempt
//!
//! ## Key Components
//!
//! - [`Slot`]: atomic time window
//! - [`IntervalSet`]: the schedule value type
//! - [`InsertPolicy`]: merge-on-overlap vs reject-on-overlap
//! - [`ScheduleError`]: typed failures for construction, insertion and
//!   parsing

pub mod codec;
pub mod error;
pub mod query;
pub mod schedule;
pub mod slot;

pub use error::{InvalidInterval, OverlapError, OverlapKind, ParseError, Result, ScheduleError};
pub use schedule::{InsertPolicy, IntervalSet};
pub use slot::Slot;
