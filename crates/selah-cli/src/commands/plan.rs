use clap::Subcommand;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Start a new N-day plan
    Start {
        /// Plan identifier (e.g. "lent-2025")
        plan_id: String,
        /// Number of days in the plan
        total_days: u32,
    },
    /// Mark a plan day complete
    Complete {
        plan_id: String,
        /// Day number, 1-based
        day: u32,
    },
    /// Show one plan's progress
    Show { plan_id: String },
    /// List all plans
    List,
    /// Show the devotional content for a plan day
    Content { plan_id: String, day: u32 },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::open_facade()?;

    match action {
        PlanAction::Start { plan_id, total_days } => {
            let summary = facade.start_plan(&plan_id, total_days)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        PlanAction::Complete { plan_id, day } => {
            let summary = facade.complete_day(&plan_id, day)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        PlanAction::Show { plan_id } => {
            let summary = facade.plan_summary(&plan_id)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        PlanAction::List => {
            let summaries = facade.list_plans()?;
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        PlanAction::Content { plan_id, day } => {
            let content = facade.plan_day_content(&plan_id, day);
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
    }
    Ok(())
}
