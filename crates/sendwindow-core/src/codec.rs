//! Text and structured wire forms for [`IntervalSet`].
//!
//! Three forms round-trip exactly:
//! - compact pair form: whitespace-separated `from till from till ...`
//! - delimited form: `;`-joined slot texts, numeric or RFC 3339
//! - structured form: JSON array of `{"from", "till"}` objects
//!
//! The surrounding workflow layer stores these as opaque process
//! variables and re-parses them later, so parsing is strict and
//! all-or-nothing.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result, ScheduleError};
use crate::schedule::{InsertPolicy, IntervalSet};
use crate::slot::Slot;

impl IntervalSet {
    /// Parse either textual form under the given policy.
    ///
    /// Input made up of two or more whitespace-separated bare integers
    /// is the pair form; anything else is the `;`-delimited slot form.
    /// Blank input is the empty set.
    pub fn parse(text: &str, policy: InsertPolicy) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::new());
        }
        if is_pair_form(text) {
            Self::parse_pairs(text, policy)
        } else {
            Self::parse_delimited(text, policy)
        }
    }

    /// Parse the `;`-joined slot form. Each segment may independently
    /// use the numeric or the RFC 3339 slot text.
    pub fn parse_delimited(text: &str, policy: InsertPolicy) -> Result<Self> {
        let mut set = Self::new();
        for segment in text.trim().split(';') {
            set.insert(segment.parse()?, policy)?;
        }
        Ok(set)
    }

    /// Parse the legacy whitespace pair form, `from till from till ...`
    /// in epoch seconds.
    pub fn parse_pairs(text: &str, policy: InsertPolicy) -> Result<Self> {
        let values: Vec<i64> = text
            .split_whitespace()
            .map(|v| {
                v.parse()
                    .map_err(|_| ParseError::BadEpochSeconds(v.to_string()))
            })
            .collect::<Result<_, _>>()?;
        if values.len() % 2 != 0 {
            return Err(ParseError::OddPairCount(values.len()).into());
        }
        let mut set = Self::new();
        for pair in values.chunks_exact(2) {
            let slot = Slot::new(pair[0], pair[1]).map_err(ParseError::from)?;
            set.insert(slot, policy)?;
        }
        Ok(set)
    }

    /// Parse the structured form under the given policy.
    pub fn from_json(value: &serde_json::Value, policy: InsertPolicy) -> Result<Self> {
        let entries = value.as_array().ok_or(ParseError::NotAnArray)?;
        let mut set = Self::new();
        for entry in entries {
            set.insert(Slot::from_json(entry)?, policy)?;
        }
        Ok(set)
    }

    /// Numeric delimited form, `"<from>-<till>;..."` in stored order.
    pub fn to_text(&self) -> String {
        self.slots
            .iter()
            .map(Slot::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// RFC 3339 delimited form, `"<from>/<till>;..."`.
    pub fn to_iso_text(&self) -> String {
        self.slots
            .iter()
            .map(Slot::to_iso_text)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Compact pair form, `"<from> <till> <from> <till> ..."`.
    pub fn to_pair_text(&self) -> String {
        self.slots
            .iter()
            .map(|s| format!("{} {}", s.from(), s.till()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Structured form: an order-preserving JSON array of slot objects.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.slots.iter().map(Slot::to_json).collect())
    }
}

/// Two or more whitespace-separated bare integers make the pair form.
/// A single token or any non-integer token means the delimited form,
/// so `"-100 -50"` is a pair and `"-100--50"` a slot text.
fn is_pair_form(text: &str) -> bool {
    let mut count = 0;
    for token in text.split_whitespace() {
        if token.parse::<i64>().is_err() {
            return false;
        }
        count += 1;
    }
    count >= 2
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Parses with the default (strict) policy; use
/// [`IntervalSet::parse`] to choose one.
impl FromStr for IntervalSet {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, InsertPolicy::default())
    }
}
