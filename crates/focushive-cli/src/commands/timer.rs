use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use clap::Subcommand;

use focushive_core::controller::SessionController;
use focushive_core::events::Event;
use focushive_core::storage::Config;
use focushive_core::sync::SessionSync;
use focushive_core::timer::CycleEngine;

use crate::state;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the countdown (opens the remote session on first start)
    Start {
        /// Session name sent to the backend when the record is opened
        #[arg(long)]
        label: Option<String>,
    },
    /// Pause the countdown
    Pause,
    /// Reset the current phase to its full duration (paused only)
    Reset,
    /// Print the current timer state as JSON
    Status,
    /// Tick in the foreground until the current phase completes
    Watch,
    /// Close the remote session with the accumulated metrics
    Finish {
        /// Closing description stored on the session record
        #[arg(long)]
        description: Option<String>,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_action(action))
}

fn load_controller(
    config: &Config,
    label: Option<String>,
) -> Result<(SessionController, Option<Event>), Box<dyn std::error::Error>> {
    let client = config.session_client()?;
    let (engine, remote, saved_label, replayed) = match state::load()? {
        Some(saved) => {
            let mut engine = saved.engine;
            let replayed = state::replay_elapsed(&mut engine, saved.saved_at, Utc::now());
            (engine, saved.remote, saved.label, replayed)
        }
        None => (
            CycleEngine::new(config.phase_plan()?),
            None,
            config.session.default_label.clone(),
            None,
        ),
    };
    let label = label.unwrap_or(saved_label);
    let sync = SessionSync::with_session(client, remote);
    Ok((SessionController::new(engine, sync, label), replayed))
}

fn save_controller(controller: SessionController) -> Result<(), Box<dyn std::error::Error>> {
    let (engine, remote, label) = controller.into_parts();
    state::save(&state::ShellState {
        engine,
        remote,
        label,
        saved_at: Utc::now(),
    })
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

fn print_snapshot(controller: &SessionController) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
    Ok(())
}

async fn run_action(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        TimerAction::Start { label } => {
            let (mut controller, replayed) = load_controller(&config, label)?;
            if let Some(event) = replayed {
                print_event(&event)?;
            }
            let events = controller.start().await?;
            if events.is_empty() {
                print_snapshot(&controller)?; // already running
            }
            for event in &events {
                print_event(event)?;
            }
            save_controller(controller)?;
        }
        TimerAction::Pause => {
            let (mut controller, replayed) = load_controller(&config, None)?;
            if let Some(event) = replayed {
                print_event(&event)?;
            }
            match controller.pause() {
                Some(event) => print_event(&event)?,
                None => print_snapshot(&controller)?,
            }
            save_controller(controller)?;
        }
        TimerAction::Reset => {
            let (mut controller, replayed) = load_controller(&config, None)?;
            if let Some(event) = replayed {
                print_event(&event)?;
            }
            match controller.reset_current_phase() {
                Some(event) => print_event(&event)?,
                None => eprintln!("reset is only permitted while paused"),
            }
            save_controller(controller)?;
        }
        TimerAction::Status => {
            let (controller, replayed) = load_controller(&config, None)?;
            if let Some(event) = replayed {
                print_event(&event)?;
            }
            print_snapshot(&controller)?;
            save_controller(controller)?;
        }
        TimerAction::Watch => {
            let (mut controller, replayed) = load_controller(&config, None)?;
            if let Some(event) = replayed {
                print_event(&event)?;
            }
            if !controller.engine().is_running() {
                print_snapshot(&controller)?;
                save_controller(controller)?;
                return Ok(());
            }
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await; // the first tick fires immediately
            loop {
                interval.tick().await;
                match controller.tick() {
                    Some(event) => {
                        println!();
                        print_event(&event)?;
                        break;
                    }
                    None => {
                        let snapshot = controller.snapshot();
                        print!("\r{} {}  ", snapshot.phase_label, snapshot.remaining);
                        std::io::stdout().flush()?;
                    }
                }
            }
            save_controller(controller)?;
        }
        TimerAction::Finish { description } => {
            let (mut controller, replayed) = load_controller(&config, None)?;
            if let Some(event) = replayed {
                print_event(&event)?;
            }
            let before = controller.snapshot();
            let event = controller.finish(description.as_deref()).await?;
            print_event(&event)?;
            println!(
                "Completed {} focus cycles over {}.",
                before.completed_focus, before.accumulated
            );
            controller.reset_session()?;
            save_controller(controller)?;
        }
    }

    Ok(())
}
