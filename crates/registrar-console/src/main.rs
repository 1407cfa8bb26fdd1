use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::{Mutex, mpsc};

use registrar_console::app::{AssistantReply, Console, Outcome, fetch_reply};
use registrar_console::helper::CliHelper;
use registrar_console::{command, render};
use registrar_core::config::RegistrarConfig;
use registrar_core::live_feed::NoCaptureDevice;
use registrar_interaction::{AssistantBridge, GeminiApiAgent, TextGenerator, UnconfiguredGenerator};

const ASSISTANT_TIMEOUT: Duration = Duration::from_secs(30);

/// Registrar Hub voter check-in console.
#[derive(Parser, Debug)]
#[command(name = "registrar", version, about)]
struct Args {
    /// Path to config.toml (defaults to ~/.config/registrar/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text-generation model used by the assistant
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ===== Backend Initialization =====
    let loaded = match &args.config {
        Some(path) => RegistrarConfig::load_from(path),
        None => RegistrarConfig::load(),
    };
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err}");
        RegistrarConfig::default()
    });
    let model = args.model.unwrap_or_else(|| config.model.clone());

    let generator: Arc<dyn TextGenerator> = match GeminiApiAgent::try_from_env() {
        Ok(agent) => Arc::new(agent),
        Err(err) => {
            tracing::warn!("Assistant unavailable: {err}");
            Arc::new(UnconfiguredGenerator::new(err.to_string()))
        }
    };
    let bridge = AssistantBridge::new(generator, model, config.election_date.clone());
    let console = Arc::new(Mutex::new(Console::new(
        &config.election_date,
        Box::new(NoCaptureDevice),
    )));

    // Channel for assistant replies coming back from background tasks
    let (reply_tx, mut reply_rx) = mpsc::channel::<AssistantReply>(8);

    let handler_console = Arc::clone(&console);
    let reply_handler = tokio::spawn(async move {
        while let Some(AssistantReply { pending, text }) = reply_rx.recv().await {
            let mut console = handler_console.lock().await;
            match console.settle_reply(pending, text) {
                Ok(message) => {
                    for line in render::message(message) {
                        println!("{line}");
                    }
                }
                Err(err) => tracing::debug!("Dropping assistant reply: {err}"),
            }
        }
    });

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    for line in render::banner(&config.election_date, &config.station) {
        println!("{line}");
    }
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let mut guard = console.lock().await;
                let command = match command::parse(trimmed, guard.router().is_assistant_open()) {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{}", err.to_string().yellow());
                        continue;
                    }
                };

                let outcome = match guard.execute(command, &mut rand::thread_rng()) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        println!("{}", err.to_string().red());
                        continue;
                    }
                };
                drop(guard);

                for line in render::outcome(&outcome) {
                    println!("{line}");
                }

                match outcome {
                    Outcome::Quit => break,
                    Outcome::Ask { pending, records } => {
                        println!("{}", "...".bright_black());
                        let tx = reply_tx.clone();
                        let bridge = bridge.clone();

                        // Spawn background task for the assistant call
                        tokio::spawn(async move {
                            let reply =
                                fetch_reply(&bridge, pending, records, ASSISTANT_TIMEOUT).await;
                            let _ = tx.send(reply).await;
                        });
                    }
                    _ => {}
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Drop the sender to signal shutdown; in-flight replies are abandoned.
    drop(reply_tx);
    reply_handler.abort();
    let _ = reply_handler.await;

    Ok(())
}
