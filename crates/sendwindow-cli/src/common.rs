//! Shared helpers for CLI commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use sendwindow_core::{InsertPolicy, IntervalSet};

use crate::config::Config;

/// `--policy` flag values, mapped onto the core policy enum.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Strict,
    Merging,
}

impl From<PolicyArg> for InsertPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => InsertPolicy::Strict,
            PolicyArg::Merging => InsertPolicy::Merging,
        }
    }
}

/// Effective policy: the flag when given, the configured default
/// otherwise.
pub fn effective_policy(flag: Option<PolicyArg>) -> InsertPolicy {
    flag.map(Into::into)
        .unwrap_or_else(|| Config::load_or_default().default_policy)
}

/// Parse a point in time given as RFC 3339 or plain epoch seconds.
pub fn parse_at(text: &str) -> Result<DateTime<Utc>, String> {
    let text = text.trim();
    if let Ok(secs) = text.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| format!("epoch seconds out of range: {secs}"));
    }
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid time '{text}': {e}"))
}

/// Render a schedule in the requested output form.
pub fn render(set: &IntervalSet, json: bool, iso: bool) -> String {
    if json {
        set.to_json().to_string()
    } else if iso {
        set.to_iso_text()
    } else {
        set.to_text()
    }
}
