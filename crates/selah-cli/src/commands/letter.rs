use clap::Subcommand;
use selah_core::EngineError;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum LetterAction {
    /// Seal a letter to be opened after a delay
    Seal {
        /// Letter text
        text: String,
        /// Days until the letter can be opened
        #[arg(long, default_value_t = 30)]
        delay_days: i64,
    },
    /// Try to open a sealed letter
    Open { id: Uuid },
    /// List sealed letters and their unlock status
    List,
}

pub fn run(action: LetterAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::open_facade()?;

    match action {
        LetterAction::Seal { text, delay_days } => {
            let id = facade.seal_content(text, delay_days)?;
            println!("sealed: {id}");
        }
        LetterAction::Open { id } => match facade.try_open_sealed(&id) {
            Ok(text) => println!("{text}"),
            // Locked is an expected outcome, not a failure.
            Err(EngineError::Locked { unlocks_at }) => {
                println!("still sealed -- opens at {unlocks_at}");
            }
            Err(e) => return Err(e.into()),
        },
        LetterAction::List => {
            let letters = facade.list_sealed()?;
            println!("{}", serde_json::to_string_pretty(&letters)?);
        }
    }
    Ok(())
}
