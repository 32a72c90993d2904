use clap::Subcommand;
use selah_core::CalendarDate;

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Log minutes of activity under today's date
    Log {
        /// Duration in minutes
        minutes: u32,
        /// Activity tag
        #[arg(long, default_value = "prayer")]
        tag: String,
    },
    /// Weekly Sun..Sat minute totals
    Week {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::open_facade()?;

    match action {
        ActivityAction::Log { minutes, tag } => {
            facade.log_activity(minutes, &tag)?;
            println!("logged {minutes} min ({tag})");
        }
        ActivityAction::Week { date } => {
            let reference = match date {
                Some(raw) => Some(
                    CalendarDate::parse_key(&raw)
                        .ok_or_else(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?,
                ),
                None => None,
            };
            let summary = facade.weekly_summary(reference)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
