use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::batch::Translator;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const MODEL: &str = "anthropic/claude-3.5-sonnet";
pub const TEMPERATURE: f32 = 0.2;
pub const MAX_TOKENS: u32 = 2048;

// OpenRouter attributes requests to the calling app through these headers.
const APP_REFERER: &str = "https://github.com/rosetta-translate/rosetta-translate";
const APP_TITLE: &str = "Rosetta Translate";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
    // OpenRouter reports upstream provider failures as a 200 with this field
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<serde_json::Value>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Trimmed content of the first choice, or an empty string when the
    /// choice list is empty or the content is null.
    ///
    /// A body carrying an `error` object, or no `choices` at all, is an error.
    fn into_content(self) -> Result<String> {
        if let Some(error) = self.error {
            let code = error
                .code
                .map_or_else(|| "unknown".to_string(), |code| code.to_string());
            let message = error.message.unwrap_or_default();
            anyhow::bail!("API returned an error (code {code}): {message}");
        }

        let choices = self
            .choices
            .ok_or_else(|| anyhow::anyhow!("API response contains no choices"))?;

        Ok(choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default())
    }
}

/// Client for an OpenAI-compatible chat-completion endpoint.
///
/// Sends one non-streaming request per call with the fixed system prompt
/// and decoding parameters.
pub struct TranslationClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: String,
}

impl TranslationClient {
    pub fn new(base_url: String, api_key: String, model: String, system_prompt: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
            system_prompt,
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, text: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&self.system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Translates `text`, returning the trimmed content of the first choice.
    pub async fn complete(&self, text: &str) -> Result<String> {
        let url = self.chat_url();
        let chat_request = self.build_request(text);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&chat_request)
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
            .context("Failed to parse API response")?;

        completion.into_content()
    }
}

impl Translator for TranslationClient {
    async fn translate(&self, text: &str) -> Result<String> {
        self.complete(text).await
    }
}
