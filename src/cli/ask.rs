// src/cli/ask.rs
// One-shot question, persona listing, and configuration check

use super::{build_service, ready_settings};
use anyhow::Result;
use consult::config::EnvConfig;
use consult::persona::Persona;
use consult::query::{EMPTY_QUESTION_WARNING, Query};

pub async fn run_ask(persona: &str, question: &[String]) -> Result<()> {
    // Unknown persona is a usage error, reported before anything else
    let persona: Persona = persona.parse()?;

    let env_config = EnvConfig::load();
    let settings = ready_settings(&env_config)?;

    let query = query_from_args(question, persona)?;

    let service = build_service(settings);
    eprintln!("The {} is preparing an answer...", persona);

    let answer = service.get_response(query.text(), query.persona()).await;
    println!("💬 Answer from the {}\n\n{}", persona, answer);

    Ok(())
}

/// Join the question words; a blank question fails the command
fn query_from_args(question: &[String], persona: Persona) -> Result<Query> {
    Query::new(question.join(" "), persona).map_err(|_| anyhow::anyhow!(EMPTY_QUESTION_WARNING))
}

pub fn run_personas() {
    for p in Persona::all() {
        println!("{:<18} {:<18} {}", p.key(), p.name(), p.description());
    }
}

pub fn run_check() -> Result<()> {
    let env_config = EnvConfig::load();
    println!("{}", env_config.validate().report());

    let settings = ready_settings(&env_config)?;
    println!(
        "Ready: model {} at {} (temperature {})",
        settings.model,
        settings.chat_completions_url(),
        settings.temperature
    );
    Ok(())
}
