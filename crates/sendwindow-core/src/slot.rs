//! Atomic time slot: a half-open interval in whole epoch seconds.
//!
//! A [`Slot`] is an immutable value created by construction, parsing or
//! merging; it is never edited in place. Two textual forms exist: the
//! compact numeric `"<from>-<till>"` and the RFC 3339
//! `"<from>/<till>"`, distinguished on parse by the `/` separator.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidInterval, ParseError};

/// A half-open time interval `[from, till)` in whole seconds since the
/// Unix epoch.
///
/// Invariant: `from < till`. Enforced at every construction path, so a
/// `Slot` value is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "SlotRepr")]
pub struct Slot {
    from: i64,
    till: i64,
}

/// Raw serde representation, validated on the way in.
#[derive(Deserialize)]
struct SlotRepr {
    from: i64,
    till: i64,
}

impl TryFrom<SlotRepr> for Slot {
    type Error = InvalidInterval;

    fn try_from(repr: SlotRepr) -> Result<Self, Self::Error> {
        Slot::new(repr.from, repr.till)
    }
}

impl Slot {
    /// Create a slot from epoch-second bounds.
    pub fn new(from: i64, till: i64) -> Result<Self, InvalidInterval> {
        if from >= till {
            return Err(InvalidInterval { from, till });
        }
        Ok(Self { from, till })
    }

    /// Create a slot from instants, truncated to whole seconds.
    pub fn from_instants(
        from: DateTime<Utc>,
        till: DateTime<Utc>,
    ) -> Result<Self, InvalidInterval> {
        Self::new(from.timestamp(), till.timestamp())
    }

    /// Inclusive start, in epoch seconds.
    pub fn from(&self) -> i64 {
        self.from
    }

    /// Exclusive end, in epoch seconds.
    pub fn till(&self) -> i64 {
        self.till
    }

    /// Inclusive start as an instant.
    pub fn from_instant(&self) -> DateTime<Utc> {
        instant(self.from)
    }

    /// Exclusive end as an instant.
    pub fn till_instant(&self) -> DateTime<Utc> {
        instant(self.till)
    }

    /// Covered duration in seconds. Always positive.
    pub fn duration_secs(&self) -> i64 {
        self.till - self.from
    }

    /// Whether `t` falls inside the slot (`from` inclusive, `till`
    /// exclusive).
    pub fn contains(&self, t: i64) -> bool {
        self.from <= t && t < self.till
    }

    /// Whether this slot shares at least one second with `other`.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.from < other.till && other.from < self.till
    }

    /// Whether this slot touches `other` without overlapping it.
    pub fn abuts(&self, other: &Slot) -> bool {
        self.till == other.from || other.till == self.from
    }

    /// RFC 3339 form, `"<from>/<till>"` rendered in UTC.
    pub fn to_iso_text(&self) -> String {
        format!(
            "{}/{}",
            self.from_instant().to_rfc3339_opts(SecondsFormat::Secs, true),
            self.till_instant().to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    /// Structured form, `{"from": <int>, "till": <int>}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "from": self.from, "till": self.till })
    }

    /// Parse the structured form, checking field presence and
    /// integrality explicitly.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ParseError> {
        let from = int_field(value, "from")?;
        let till = int_field(value, "till")?;
        Ok(Self::new(from, till)?)
    }
}

fn int_field(value: &serde_json::Value, name: &'static str) -> Result<i64, ParseError> {
    value
        .get(name)
        .ok_or(ParseError::MissingField(name))?
        .as_i64()
        .ok_or(ParseError::NonIntegralField(name))
}

/// Epoch seconds to instant; out-of-range values clamp to chrono's
/// representable bounds.
pub(crate) fn instant(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(if secs < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.till)
    }
}

impl FromStr for Slot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((from, till)) = s.split_once('/') {
            let from = parse_rfc3339(from)?;
            let till = parse_rfc3339(till)?;
            return Ok(Self::new(from, till)?);
        }
        let (from, till) =
            split_numeric(s).ok_or_else(|| ParseError::MalformedSlot(s.to_string()))?;
        let from = parse_epoch(from)?;
        let till = parse_epoch(till)?;
        Ok(Self::new(from, till)?)
    }
}

/// Split `"<from>-<till>"` at the separating dash, tolerating a leading
/// sign on either number.
fn split_numeric(s: &str) -> Option<(&str, &str)> {
    let start = usize::from(s.starts_with('-'));
    let idx = s[start..].find('-')? + start;
    Some((&s[..idx], &s[idx + 1..]))
}

/// No whitespace tolerated inside a bound: the slot text as a whole is
/// trimmed before splitting, so anything left here is a malformation.
fn parse_epoch(s: &str) -> Result<i64, ParseError> {
    s.parse()
        .map_err(|_| ParseError::BadEpochSeconds(s.to_string()))
}

/// RFC 3339 with a mandatory offset; offset-less timestamps are
/// rejected by chrono and surface as `BadTimestamp`.
fn parse_rfc3339(s: &str) -> Result<i64, ParseError> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp())
        .map_err(|e| ParseError::BadTimestamp {
            value: s.to_string(),
            message: e.to_string(),
        })
}
