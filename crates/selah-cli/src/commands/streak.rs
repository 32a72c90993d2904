use clap::Subcommand;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Count today as engaged
    Record,
    /// Show current streak state
    Show,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::open_facade()?;

    match action {
        StreakAction::Record => {
            let summary = facade.record_engagement_today()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StreakAction::Show => {
            let summary = facade.current_streak_summary()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
