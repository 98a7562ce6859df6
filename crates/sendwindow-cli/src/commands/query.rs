use chrono::{SecondsFormat, Utc};
use clap::Subcommand;
use sendwindow_core::IntervalSet;

use crate::common::{effective_policy, parse_at, PolicyArg};

#[derive(Subcommand)]
pub enum QueryAction {
    /// First instant at or after a point in time when sending is allowed
    Next {
        /// Schedule text
        text: String,
        /// Point in time, RFC 3339 or epoch seconds (defaults to now)
        #[arg(long)]
        at: Option<String>,
        #[arg(long)]
        policy: Option<PolicyArg>,
    },
    /// End of the window the next send attempt would fall into
    Deadline {
        /// Schedule text
        text: String,
        #[arg(long)]
        at: Option<String>,
        #[arg(long)]
        policy: Option<PolicyArg>,
    },
}

pub fn run(action: QueryAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QueryAction::Next { text, at, policy } => {
            let set = IntervalSet::parse(&text, effective_policy(policy))?;
            let at = at.as_deref().map(parse_at).transpose()?.unwrap_or_else(Utc::now);
            print_instant(set.first_available_at(at));
        }
        QueryAction::Deadline { text, at, policy } => {
            let set = IntervalSet::parse(&text, effective_policy(policy))?;
            let at = at.as_deref().map(parse_at).transpose()?.unwrap_or_else(Utc::now);
            print_instant(set.deadline_at(at));
        }
    }
    Ok(())
}

fn print_instant(instant: Option<chrono::DateTime<Utc>>) {
    match instant {
        Some(t) => println!(
            "{} ({})",
            t.to_rfc3339_opts(SecondsFormat::Secs, true),
            t.timestamp()
        ),
        None => println!("none"),
    }
}
