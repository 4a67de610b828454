use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

use super::definition::AgentDefinition;
use super::runner::AgentRunner;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Runs an agent as a single non-streaming chat-completion call against an
/// OpenAI-compatible endpoint.
pub struct ChatCompletionRunner {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    agent: AgentDefinition,
}

impl ChatCompletionRunner {
    pub fn new(endpoint: String, api_key: Option<String>, agent: AgentDefinition) -> Self {
        debug!(
            "Initialized agent runner: agent={}, model={}, endpoint={}",
            agent.name, agent.model, endpoint
        );
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            agent,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl AgentRunner for ChatCompletionRunner {
    async fn run(&self, prompt: &str) -> Result<String> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.agent.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&self.agent.instructions),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(prompt),
                },
            ],
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if an API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .context("Completion contained no content")
    }
}
