// src/lib.rs
// Consult - persona-driven expert consultation over a hosted chat model

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod persona;
pub mod query;
pub mod service;
pub mod web;

pub use error::{ConsultError, Result};
