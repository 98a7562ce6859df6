//! Core error types for sendwindow-core.
//!
//! Each failure mode is a typed value the caller can match on, rather
//! than a message string to pattern-match. Overlap rejections carry the
//! boundary that was crossed together with both conflicting slots.

use thiserror::Error;

/// A slot construction was attempted with `from >= till`.
///
/// Slots are half-open `[from, till)` intervals in whole epoch seconds;
/// zero-length and inverted intervals are illegal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid slot: from ({from}) must be strictly before till ({till})")]
pub struct InvalidInterval {
    pub from: i64,
    pub till: i64,
}

/// Which boundary of the new slot crossed into an existing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapKind {
    /// The new slot starts before an existing slot and its end reaches
    /// past that slot's start.
    TailIntoHead,
    /// The new slot starts inside an existing slot, so its start falls
    /// before that slot's end.
    HeadIntoTail,
}

/// A strict-policy insertion was rejected because the new slot overlaps
/// a stored one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapError {
    /// End of the new slot overlaps the start of an existing slot.
    #[error("end of slot [{new_from}, {new_till}) overlaps start of existing slot [{existing_from}, {existing_till})")]
    TailIntoHead {
        new_from: i64,
        new_till: i64,
        existing_from: i64,
        existing_till: i64,
    },
    /// Start of the new slot overlaps the end of an existing slot.
    #[error("start of slot [{new_from}, {new_till}) overlaps end of existing slot [{existing_from}, {existing_till})")]
    HeadIntoTail {
        new_from: i64,
        new_till: i64,
        existing_from: i64,
        existing_till: i64,
    },
}

impl OverlapError {
    /// The boundary tag, independent of the recorded bounds.
    pub fn kind(&self) -> OverlapKind {
        match self {
            Self::TailIntoHead { .. } => OverlapKind::TailIntoHead,
            Self::HeadIntoTail { .. } => OverlapKind::HeadIntoTail,
        }
    }
}

/// Malformed textual or structured schedule input.
///
/// Parsing is all-or-nothing: no partial schedule is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Slot text matched neither `<from>-<till>` nor `<iso>/<iso>`.
    #[error("malformed slot '{0}': expected '<from>-<till>' or '<from>/<till>' in RFC 3339")]
    MalformedSlot(String),

    /// A bound that should be whole epoch seconds did not parse.
    #[error("invalid epoch seconds '{0}'")]
    BadEpochSeconds(String),

    /// An RFC 3339 bound did not parse (including a missing UTC offset).
    #[error("invalid timestamp '{value}': {message}")]
    BadTimestamp { value: String, message: String },

    /// The whitespace pair form held an odd number of values.
    #[error("pair form needs an even number of values, got {0}")]
    OddPairCount(usize),

    /// A structured slot object lacked a required field.
    #[error("slot object is missing field '{0}'")]
    MissingField(&'static str),

    /// A structured slot field was present but not an integer.
    #[error("slot field '{0}' must be an integer")]
    NonIntegralField(&'static str),

    /// The structured form was not an array of objects.
    #[error("expected a JSON array of slot objects")]
    NotAnArray,

    /// The parsed bounds violate the slot invariant.
    #[error(transparent)]
    InvalidInterval(#[from] InvalidInterval),
}

/// Top-level error for schedule construction and mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    InvalidInterval(#[from] InvalidInterval),

    #[error(transparent)]
    Overlap(#[from] OverlapError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type alias for ScheduleError
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
