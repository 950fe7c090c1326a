//! CLI for chatlog
//!
//! Subcommands:
//! - `chat` (default): run the scripted senders, then the interactive menu
//! - `simulate`: run the scripted senders and print the resulting history

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use chatlog::config::{Settings, load_config};
use chatlog::console::{Menu, format_message};
use chatlog::sender::Roster;
use chatlog::simulation::{self, DEFAULT_PARTICIPANTS, default_scripts};
use chatlog::store::MessageStore;
use chatlog::utils::error::Result;
use chatlog::utils::logging;
use clap::{Parser, Subcommand};
use tracing::error;

#[derive(Parser)]
#[command(name = "chatlog", version, about = "In-process concurrent message log")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation, then open the interactive menu
    Chat {
        /// Skip the scripted senders and start with an empty history
        #[arg(long)]
        no_simulation: bool,
    },
    /// Run the simulation and print the final history
    Simulate {
        /// Print one JSON object per message instead of formatted lines
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&config.log.level);

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Chat {
        no_simulation: false,
    });

    let result = match command {
        Command::Chat { no_simulation } => run_chat(&config, no_simulation).await,
        Command::Simulate { json } => run_simulate(&config, json).await,
    };

    if let Err(e) = result {
        error!("chatlog failed: {}", e);
        std::process::exit(1);
    }
}

async fn run_chat(config: &Settings, no_simulation: bool) -> Result<()> {
    let store = Arc::new(MessageStore::new());
    let roster = Roster::new(&store, DEFAULT_PARTICIPANTS);

    if config.simulation.enabled && !no_simulation {
        simulate(config, &roster).await?;
    }

    // The menu blocks on stdin; keep it off the async workers.
    tokio::task::block_in_place(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(store, &roster, stdin.lock(), stdout.lock()).run()
    })
}

async fn run_simulate(config: &Settings, json: bool) -> Result<()> {
    let store = Arc::new(MessageStore::new());
    let roster = Roster::new(&store, DEFAULT_PARTICIPANTS);

    simulate(config, &roster).await?;

    let mut out = io::stdout().lock();
    for msg in store.all_messages() {
        if json {
            writeln!(out, "{}", serde_json::to_string(&msg)?)?;
        } else {
            writeln!(out, "{}", format_message(&msg))?;
        }
    }
    Ok(())
}

async fn simulate(config: &Settings, roster: &Roster) -> Result<usize> {
    let interval = Duration::from_millis(config.simulation.interval_ms);
    simulation::run(roster, default_scripts(), interval).await
}
