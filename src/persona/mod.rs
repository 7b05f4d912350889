// src/persona/mod.rs
// Persona registry: the closed set of experts a question can be put to.

mod prompts;

use crate::error::ConsultError;
use prompts::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Expert personas available for consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Persona {
    #[default]
    Doctor,
    Lawyer,
    SoftwareEngineer,
    CulinaryExpert,
}

impl Persona {
    /// System instruction sent ahead of the user's question
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Persona::Doctor => DOCTOR_PROMPT,
            Persona::Lawyer => LAWYER_PROMPT,
            Persona::SoftwareEngineer => SOFTWARE_ENGINEER_PROMPT,
            Persona::CulinaryExpert => CULINARY_EXPERT_PROMPT,
        }
    }

    /// One-line description shown next to the selector
    pub fn description(&self) -> &'static str {
        match self {
            Persona::Doctor => DOCTOR_DESCRIPTION,
            Persona::Lawyer => LAWYER_DESCRIPTION,
            Persona::SoftwareEngineer => SOFTWARE_ENGINEER_DESCRIPTION,
            Persona::CulinaryExpert => CULINARY_EXPERT_DESCRIPTION,
        }
    }

    /// Display name for this persona
    pub fn name(&self) -> &'static str {
        match self {
            Persona::Doctor => "Doctor",
            Persona::Lawyer => "Lawyer",
            Persona::SoftwareEngineer => "Software Engineer",
            Persona::CulinaryExpert => "Culinary Expert",
        }
    }

    /// Stable key used by forms, the JSON API and the CLI
    pub fn key(&self) -> &'static str {
        match self {
            Persona::Doctor => "doctor",
            Persona::Lawyer => "lawyer",
            Persona::SoftwareEngineer => "software_engineer",
            Persona::CulinaryExpert => "culinary_expert",
        }
    }

    /// All personas, in selector order
    pub fn all() -> &'static [Persona] {
        static PERSONAS: &[Persona] = &[
            Persona::Doctor,
            Persona::Lawyer,
            Persona::SoftwareEngineer,
            Persona::CulinaryExpert,
        ];
        PERSONAS
    }

    /// Resolve an identifier that came from the registry itself.
    ///
    /// Panics on anything outside the closed set: such an identifier can only
    /// come from a bug, never from a user. Use `str::parse` for untrusted input.
    pub fn lookup(id: &str) -> Persona {
        match id.parse() {
            Ok(persona) => persona,
            Err(e) => panic!("persona registry lookup failed: {e}"),
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Persona {
    type Err = ConsultError;

    /// Accepts either the display name or the key, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Persona::all()
            .iter()
            .copied()
            .find(|p| p.key().eq_ignore_ascii_case(needle) || p.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConsultError::UnknownPersona(s.to_string()))
    }
}

/// Registry entry as exposed over the JSON API
#[derive(Debug, Clone, Serialize)]
pub struct PersonaInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<Persona> for PersonaInfo {
    fn from(p: Persona) -> Self {
        Self {
            key: p.key(),
            name: p.name(),
            description: p.description(),
        }
    }
}
