use crate::models::*;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// A text-in, text-out language model. The API key travels with every call
/// because it is supplied per request by the client.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String>;
}

pub struct GeminiService {
    client: Client,
    model: String,
    api_base: String,
}

impl GeminiService {
    pub fn new(model: impl Into<String>, api_base: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            model: model.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Reads `GEMINI_MODEL`, `GEMINI_API_BASE` and `GEMINI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base = env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let timeout = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("GEMINI_TIMEOUT_SECS must be a whole number of seconds, got {:?}", secs))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Self::new(model, api_base, timeout)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    // The key goes in a header so it never shows up in URL-bearing reqwest errors.
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait]
impl LlmClient for GeminiService {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request = build_request(prompt);

        let response = self.client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Gemini API error ({}): {}", status, error_text));
        }

        let gemini_response: GeminiResponse = response.json().await?;
        response_text(gemini_response)
    }
}

fn build_request(prompt: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: Some(prompt.to_string()),
            }],
        }],
    }
}

/// Joins the text parts of the first candidate. A response with no candidate
/// or no text (e.g. blocked by safety filters) is an error.
fn response_text(response: GeminiResponse) -> Result<String> {
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| anyhow::anyhow!("Gemini returned no candidates"))?;

    let text: String = content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        return Err(anyhow::anyhow!("Gemini response contained no text"));
    }

    Ok(text)
}
