// src/cli/mod.rs
// CLI module for Consult commands

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use consult::config::{EnvConfig, OpenAiSettings};
use consult::error::ConsultError;
use consult::http::create_shared_client;
use consult::llm::OpenAiClient;
use consult::service::ResponseService;
use std::sync::Arc;
use tracing::error;

pub mod ask;
pub mod serve;

pub use ask::{run_ask, run_check, run_personas};
pub use serve::run_web_server;

/// Message shown when the credential is missing; nothing else runs after it
pub const MISSING_KEY_MESSAGE: &str = "❌ OpenAI API key is not set. Check your .env file.";

#[derive(Parser)]
#[command(name = "consult")]
#[command(about = "Ask an AI expert: doctor, lawyer, software engineer or culinary expert")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve: ServeArgs,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind the web form on
    #[arg(long, env = "CONSULT_HOST", default_value = "127.0.0.1", global = true)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CONSULT_PORT", default_value_t = 8501, global = true)]
    pub port: u16,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web form (default)
    Serve,

    /// Ask one question and print the answer
    Ask {
        /// Expert to ask (doctor, lawyer, software_engineer, culinary_expert)
        #[arg(short = 'e', long, default_value = "doctor")]
        persona: String,

        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// List the available experts
    Personas,

    /// Run the readiness check and report configuration status
    Check,
}

/// Readiness check shared by every command that talks to the model.
/// Refuses to continue without a credential.
pub fn ready_settings(env: &EnvConfig) -> Result<OpenAiSettings> {
    match env.readiness_check() {
        Ok(settings) => Ok(settings),
        Err(e @ ConsultError::CredentialMissing { .. }) => {
            error!(error = %e, "Readiness check failed");
            anyhow::bail!(MISSING_KEY_MESSAGE)
        }
        Err(e) => {
            error!(error = %e, "Readiness check failed");
            Err(e.into())
        }
    }
}

/// Build the response service from readiness-checked settings
pub fn build_service(settings: OpenAiSettings) -> ResponseService {
    let client = OpenAiClient::new(settings, create_shared_client());
    ResponseService::new(Arc::new(client))
}
