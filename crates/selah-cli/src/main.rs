use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "selah", version, about = "Selah engagement tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily engagement streak
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Multi-day plan progress
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Sealed letters to your future self
    Letter {
        #[command(subcommand)]
        action: commands::letter::LetterAction,
    },
    /// Activity log and weekly stats
    Activity {
        #[command(subcommand)]
        action: commands::activity::ActivityAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Letter { action } => commands::letter::run(action),
        Commands::Activity { action } => commands::activity::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
