use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::{ChatMessage, CompletionBackend};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4.1-mini";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 900;

/// Chat-completion client for the OpenAI API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            url: COMPLETIONS_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first returned choice; later choices are ignored.
    fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
    }
}

#[async_trait::async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>> {
        let body = ChatCompletionRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            messages: &messages,
        };

        let response = self
            .client
            .post(&self.url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("openai_error: {} {}", status, text));
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        Ok(parsed.first_content())
    }
}
