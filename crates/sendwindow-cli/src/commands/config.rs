use clap::Subcommand;

use crate::common::PolicyArg;
use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Set the default insertion policy
    SetPolicy {
        #[arg(value_enum)]
        policy: PolicyArg,
    },
    /// Toggle RFC 3339 output as the default form
    SetIso { enabled: bool },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::SetPolicy { policy } => {
            let mut config = Config::load_or_default();
            config.default_policy = policy.into();
            config.save()?;
            println!("default policy set to {}", config.default_policy.as_str());
        }
        ConfigAction::SetIso { enabled } => {
            let mut config = Config::load_or_default();
            config.iso_output = enabled;
            config.save()?;
            println!("iso output {}", if enabled { "enabled" } else { "disabled" });
        }
    }
    Ok(())
}
