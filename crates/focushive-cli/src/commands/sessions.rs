use clap::Subcommand;

use focushive_core::storage::Config;

#[derive(Subcommand)]
pub enum SessionsAction {
    /// List the session history for the configured user
    List {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SessionsAction) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_action(action))
}

async fn run_action(action: SessionsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        SessionsAction::List { json } => {
            let client = config.session_client()?;
            let sessions = client.list_sessions().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else if sessions.is_empty() {
                println!("no sessions recorded yet");
            } else {
                for session in &sessions {
                    println!(
                        "#{:<5} {}  {:>4} min  {}  {}",
                        session.session_id,
                        session.started_at.format("%Y-%m-%d %H:%M"),
                        session.duration_minutes,
                        if session.completed { "completed" } else { "abandoned" },
                        session.description.as_deref().unwrap_or("-")
                    );
                }
            }
        }
    }

    Ok(())
}
