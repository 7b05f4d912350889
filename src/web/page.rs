// src/web/page.rs
// The consultation form: render, submit, re-render

use axum::{
    Form,
    extract::State,
    response::Html,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConsultError, Result};
use crate::persona::Persona;
use crate::query::{EMPTY_QUESTION_WARNING, Query};
use crate::web::state::AppState;

/// Fields posted by the form
#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub persona: String,
    #[serde(default)]
    pub question: String,
    /// Answer currently on screen, so a rejected submit can keep showing it
    #[serde(default)]
    pub previous_answer: Option<String>,
    #[serde(default)]
    pub previous_persona: Option<String>,
    #[serde(default)]
    pub previous_is_error: bool,
}

#[derive(Debug, Serialize)]
struct PersonaOption {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct SelectedPersona {
    name: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct AnswerView {
    persona_key: &'static str,
    persona_name: &'static str,
    text: String,
    is_error: bool,
}

#[derive(Debug, Serialize)]
struct PageView {
    personas: Vec<PersonaOption>,
    selected: SelectedPersona,
    question: String,
    warning: Option<&'static str>,
    answer: Option<AnswerView>,
    model: String,
}

fn render(
    state: &AppState,
    selected: Persona,
    question: String,
    warning: Option<&'static str>,
    answer: Option<AnswerView>,
) -> Result<Html<String>> {
    let view = PageView {
        personas: Persona::all()
            .iter()
            .map(|p| PersonaOption {
                key: p.key(),
                name: p.name(),
                description: p.description(),
                selected: *p == selected,
            })
            .collect(),
        selected: SelectedPersona {
            name: selected.name(),
            description: selected.description(),
        },
        question,
        warning,
        answer,
        model: state.service.model_name(),
    };

    let html = state.templates.get_template("index.html")?.render(&view)?;
    Ok(Html(html))
}

/// Answer carried over from the previous render, if it names a real persona
fn carried_answer(form: &AskForm) -> Option<AnswerView> {
    let text = form.previous_answer.clone().filter(|t| !t.is_empty())?;
    let persona: Persona = form.previous_persona.as_deref()?.parse().ok()?;
    Some(AnswerView {
        persona_key: persona.key(),
        persona_name: persona.name(),
        is_error: form.previous_is_error,
        text,
    })
}

/// GET / - empty form with the default persona selected
pub async fn index(State(state): State<AppState>) -> std::result::Result<Html<String>, ConsultError> {
    render(&state, Persona::default(), String::new(), None, None)
}

/// POST / - validate, consult, render the answer
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<AskForm>,
) -> std::result::Result<Html<String>, ConsultError> {
    let persona: Persona = form.persona.parse()?;

    let query = match Query::new(form.question.clone(), persona) {
        Ok(query) => query,
        Err(_) => {
            debug!(persona = %persona, "Blank question rejected");
            return render(
                &state,
                persona,
                form.question.clone(),
                Some(EMPTY_QUESTION_WARNING),
                carried_answer(&form),
            );
        }
    };

    let (text, is_error) = match state.service.answer(&query).await {
        Ok(text) => (text, false),
        Err(e) => (e.to_user_string(), true),
    };

    render(
        &state,
        persona,
        form.question,
        None,
        Some(AnswerView {
            persona_key: persona.key(),
            persona_name: persona.name(),
            text,
            is_error,
        }),
    )
}
