//! Advice Service Trait

use async_trait::async_trait;

use crate::error::Result;

/// Free-text advice provider (Strategy pattern)
///
/// Implement this for each backend: OpenAI, a local model, a mock, etc.
#[async_trait]
pub trait AdviceService: Send + Sync {
    /// Generate advice for a free-text prompt describing the user's
    /// portfolio or strategy.
    async fn advise(&self, prompt: &str) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Backend name
    fn name(&self) -> &str;
}
