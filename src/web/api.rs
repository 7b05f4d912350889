// src/web/api.rs
// REST API handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConsultError, ErrorKind};
use crate::persona::{Persona, PersonaInfo};
use crate::query::Query;
use crate::web::state::AppState;

// ═══════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════

impl IntoResponse for ConsultError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::InvalidInput if matches!(self, ConsultError::UnknownPersona(_)) => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::CredentialMissing => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Network | ErrorKind::ProviderRejected | ErrorKind::MalformedResponse => {
                StatusCode::BAD_GATEWAY
            }
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind().as_str(),
        }));
        (status, body).into_response()
    }
}

// ═══════════════════════════════════════
// HEALTH
// ═══════════════════════════════════════

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ═══════════════════════════════════════
// PERSONAS
// ═══════════════════════════════════════

pub async fn list_personas() -> impl IntoResponse {
    let personas: Vec<PersonaInfo> = Persona::all().iter().copied().map(Into::into).collect();
    Json(personas)
}

// ═══════════════════════════════════════
// ASK
// ═══════════════════════════════════════

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub persona: String,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub persona: &'static str,
    /// Model text, or the rendered "An error occurred: ..." string
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
}

/// Provider failures still answer 200: the rendered error string is the answer,
/// with `error_kind` set. Only request-shape problems get an error status.
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ConsultError> {
    let persona: Persona = req.persona.parse()?;
    let query = Query::new(req.question, persona)?;

    let response = match state.service.answer(&query).await {
        Ok(answer) => AskResponse {
            persona: persona.name(),
            answer,
            error_kind: None,
        },
        Err(e) => AskResponse {
            persona: persona.name(),
            answer: e.to_user_string(),
            error_kind: Some(e.kind().as_str()),
        },
    };

    Ok(Json(response))
}
