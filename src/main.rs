// src/main.rs
// Consult - ask an AI expert from the browser or the command line

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so the readiness check sees OPENAI_API_KEY
    consult::config::load_dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        match &cli.command {
            None | Some(Commands::Serve) => Level::INFO,
            Some(Commands::Ask { .. }) | Some(Commands::Personas) | Some(Commands::Check) => {
                Level::WARN
            }
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            cli::run_web_server(cli.serve).await?;
        }
        Some(Commands::Ask { persona, question }) => {
            cli::run_ask(&persona, &question).await?;
        }
        Some(Commands::Personas) => {
            cli::run_personas();
        }
        Some(Commands::Check) => {
            cli::run_check()?;
        }
    }

    Ok(())
}
