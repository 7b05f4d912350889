// src/cli/serve.rs
// Web form server startup

use super::{ServeArgs, build_service, ready_settings};
use anyhow::Result;
use consult::config::EnvConfig;
use consult::web;
use tracing::info;

pub async fn run_web_server(args: ServeArgs) -> Result<()> {
    // Readiness first: nothing is bound until the credential is known good
    let env_config = EnvConfig::load();
    let settings = ready_settings(&env_config)?;

    info!(model = %settings.model, temperature = settings.temperature, "Model configured");

    let service = build_service(settings);
    let state = web::state::AppState::new(service)?;
    let app = web::create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Consult running on http://{}", addr);
    println!("Consult running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
