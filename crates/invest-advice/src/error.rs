//! Error Types for the Advice Service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdviceError>;

#[derive(Error, Debug)]
pub enum AdviceError {
    /// Prompt was empty or whitespace-only; nothing to send upstream.
    #[error("Prompt must not be empty")]
    EmptyPrompt,

    /// No API key configured; the service cannot be constructed.
    #[error("Missing API key: set {0}")]
    MissingApiKey(&'static str),

    /// Upstream accepted the request but failed to produce advice.
    #[error("Advice service error: {0}")]
    Service(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
