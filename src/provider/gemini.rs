use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::errors::GenerateError;
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// Gemini `generateContent` over REST. No retries and no timeout beyond
/// what the transport defaults to.
pub struct GeminiProvider {
    model: String,
    api_base: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(model: String, api_base: String) -> Self {
        Self {
            model,
            api_base,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl super::Provider for GeminiProvider {
    async fn generate_content(
        &self,
        api_key: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, GenerateError> {
        let body = GenerateContentRequest::new(prompt, schema.clone());
        let url = self.endpoint();
        tracing::debug!(%url, model = %self.model, "POST generateContent");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(%status, bytes = text.len(), "generateContent responded");

        if !status.is_success() {
            return Err(GenerateError::Api { status: status.as_u16(), body: text });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| GenerateError::Api {
            status: status.as_u16(),
            body: format!("failed to decode response envelope: {e}"),
        })?;

        parsed.text().ok_or_else(|| empty_reply(status.as_u16(), &text))
    }
}

/// A 2xx envelope with no candidate text.
fn empty_reply(status: u16, body: &str) -> GenerateError {
    GenerateError::Api { status, body: format!("response contained no text: {body}") }
}
