//! Mock Advice Service
//!
//! For testing and offline demo. Echoes a canned reply.

use async_trait::async_trait;

use crate::error::{AdviceError, Result};
use crate::service::AdviceService;

/// Mock advice service with a fixed reply.
pub struct MockAdviceService {
    reply: String,
}

impl Default for MockAdviceService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdviceService {
    pub fn new() -> Self {
        Self {
            reply: "Diversify across asset classes, invest a fixed amount monthly, \
                    and hold through volatility."
                .into(),
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl AdviceService for MockAdviceService {
    async fn advise(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(AdviceError::EmptyPrompt);
        }
        Ok(self.reply.clone())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "MockAdvice"
    }
}
