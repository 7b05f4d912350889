// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use crate::error::{ConsultError, Result};
use tracing::{debug, info, warn};

/// Credential for the hosted chat model
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Optional override for the chat-completions endpoint root
pub const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Model every consultation is sent to
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Sampling temperature used for every consultation
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// API keys loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// OpenAI API key (OPENAI_API_KEY)
    pub openai: Option<String>,
}

impl ApiKeys {
    pub fn from_env() -> Self {
        let keys = Self {
            openai: Self::read_key(OPENAI_API_KEY_ENV),
        };
        keys.log_status();
        keys
    }

    /// Read a single API key from environment, filtering empty values
    fn read_key(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|k| !k.trim().is_empty())
    }

    fn log_status(&self) {
        if self.openai.is_some() {
            debug!(keys = ?["OpenAI"], "API keys loaded");
        } else {
            warn!("{} is not set - consultations are unavailable", OPENAI_API_KEY_ENV);
        }
    }

    pub fn has_llm_provider(&self) -> bool {
        self.openai.is_some()
    }
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Everything the OpenAI client needs. Only obtainable through the readiness
/// check, so holding one means the credential is present.
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

impl OpenAiSettings {
    /// Settings with the fixed model and temperature
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub api_keys: ApiKeys,
    /// Chat-completions endpoint root (OPENAI_BASE_URL)
    pub openai_base_url: String,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        info!("Loading environment configuration");

        Self {
            api_keys: ApiKeys::from_env(),
            openai_base_url: std::env::var(OPENAI_BASE_URL_ENV)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if !self.api_keys.has_llm_provider() {
            validation.add_error(format!(
                "{} is not set. Add it to your environment or .env file.",
                OPENAI_API_KEY_ENV
            ));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            validation.add_error(format!(
                "{} must be an http(s) URL, got '{}'",
                OPENAI_BASE_URL_ENV, self.openai_base_url
            ));
        } else if self.openai_base_url != DEFAULT_OPENAI_BASE_URL {
            validation.add_warning(format!(
                "Using non-default endpoint {}",
                self.openai_base_url
            ));
        }

        validation
    }

    /// Readiness check: run once before any query is accepted.
    /// Refuses to hand out settings unless the credential is present.
    pub fn readiness_check(&self) -> Result<OpenAiSettings> {
        let api_key = self
            .api_keys
            .openai
            .clone()
            .ok_or(ConsultError::CredentialMissing {
                env_var: OPENAI_API_KEY_ENV,
            })?;

        let validation = self.validate();
        if !validation.is_valid() {
            return Err(ConsultError::Config(validation.errors.join("; ")));
        }

        Ok(OpenAiSettings::new(api_key, self.openai_base_url.clone()))
    }
}
