use clap::Subcommand;
use sendwindow_core::{IntervalSet, Slot};

use crate::common::{render, PolicyArg};
use crate::config::Config;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Parse a schedule and print its normalized form
    Parse {
        /// Schedule text: "from-till;..." pairs, RFC 3339 "from/till"
        /// segments, or the whitespace "from till ..." form
        text: String,
        /// Insertion policy (defaults to the configured one)
        #[arg(long)]
        policy: Option<PolicyArg>,
        /// Print as a JSON array of slot objects
        #[arg(long)]
        json: bool,
        /// Print RFC 3339 bounds instead of epoch seconds
        #[arg(long)]
        iso: bool,
    },
    /// Insert a slot into a schedule and print the result
    Insert {
        /// Existing schedule text (may be empty)
        text: String,
        /// Slot to insert, "from-till" or RFC 3339 "from/till"
        slot: String,
        #[arg(long)]
        policy: Option<PolicyArg>,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        iso: bool,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    match action {
        ScheduleAction::Parse {
            text,
            policy,
            json,
            iso,
        } => {
            let policy = policy.map(Into::into).unwrap_or(config.default_policy);
            let set = IntervalSet::parse(&text, policy)?;
            println!("{}", render(&set, json, iso || config.iso_output));
        }
        ScheduleAction::Insert {
            text,
            slot,
            policy,
            json,
            iso,
        } => {
            let policy = policy.map(Into::into).unwrap_or(config.default_policy);
            let mut set = IntervalSet::parse(&text, policy)?;
            let slot: Slot = slot.parse()?;
            set.insert(slot, policy)?;
            println!("{}", render(&set, json, iso || config.iso_output));
        }
    }
    Ok(())
}
