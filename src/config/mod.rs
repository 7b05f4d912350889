// src/config/mod.rs
// Configuration and shared constants

pub mod env;

pub use env::{
    ApiKeys, ConfigValidation, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_TEMPERATURE,
    EnvConfig, OPENAI_API_KEY_ENV, OpenAiSettings,
};

/// Load `.env` from the working directory, if any. Already-set variables win.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
