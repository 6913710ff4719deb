//! # invest-advice
//!
//! Advice collaborator for the investment dashboard: an [`AdviceService`]
//! trait that turns a free-text prompt into generated advice text, with an
//! OpenAI chat-completion backend and a mock.
//!
//! The service is a pass-through; it never influences the growth simulator.

pub mod error;
pub mod mock;
pub mod openai;
pub mod service;

pub use error::{AdviceError, Result};
pub use mock::MockAdviceService;
pub use openai::{OpenAiClient, OpenAiConfig};
pub use service::AdviceService;
