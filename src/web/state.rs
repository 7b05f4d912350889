// src/web/state.rs
// Web server state management

use std::sync::Arc;

use minijinja::Environment;

use crate::error::Result;
use crate::service::ResponseService;

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// Shared application state. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ResponseService>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(service: ResponseService) -> Result<Self> {
        let mut templates = Environment::new();
        templates.add_template("index.html", INDEX_TEMPLATE)?;

        Ok(Self {
            service: Arc::new(service),
            templates: Arc::new(templates),
        })
    }
}
