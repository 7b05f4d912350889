// src/query.rs
// A user question bound to the persona it is addressed to

use crate::error::{ConsultError, Result};
use crate::persona::Persona;

/// Warning shown when the trigger is pressed with nothing to ask
pub const EMPTY_QUESTION_WARNING: &str =
    "⚠️ Please enter a question before clicking \"Get answer\".";

/// Validated question. Construction guarantees the text is not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    persona: Persona,
}

impl Query {
    /// Build a query, rejecting empty or whitespace-only text.
    /// The text is kept as typed; only the emptiness check trims.
    pub fn new(text: impl Into<String>, persona: Persona) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ConsultError::InvalidInput(EMPTY_QUESTION_WARNING.to_string()));
        }
        Ok(Self { text, persona })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }
}
