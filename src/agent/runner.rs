use anyhow::Result;
use async_trait::async_trait;

/// Boundary to whatever executes a prompt against a language model.
///
/// Implementations may suspend on network I/O and may fail with opaque
/// execution errors. Callers surface failures unchanged and add no retry,
/// timeout, or backoff policy of their own.
#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Runs the agent once over `prompt` and returns the final output text.
    async fn run(&self, prompt: &str) -> Result<String>;
}
