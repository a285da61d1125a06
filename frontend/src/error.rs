//! Error types for the dashboard.
//!
//! Components are the boundary: they log these and fall back to a safe UI state.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// A browser API (window, history, timers) was missing or threw.
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Seed data error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timer error: {0}")]
    Timer(String),
}

impl AppError {
    pub(crate) fn from_js(context: &str, value: wasm_bindgen::JsValue) -> Self {
        AppError::Browser(format!("{}: {:?}", context, value))
    }
}
