use clap::Subcommand;
use selah_core::EngineConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// One of: timezone_offset_minutes, activity_retention
        key: String,
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = EngineConfig::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = EngineConfig::load()?;
            match key.as_str() {
                "timezone_offset_minutes" => {
                    config.timezone_offset_minutes = value.parse()?;
                }
                "activity_retention" => {
                    config.activity_retention = value.parse()?;
                }
                other => return Err(format!("unknown config key '{other}'").into()),
            }
            config.save()?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
