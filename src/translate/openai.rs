use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error, info};

use super::interface::{TranslateError, TranslatorInterface};

const SYSTEM_PROMPT: &str = "You are a professional translator. Reply with the translation only.";

/// Translator backed by an OpenAI-compatible chat-completions endpoint.
/// Useful where no dedicated MT sidecar is deployed; the contract is the
/// same as the Marian client's: one call per request, first result only.
pub struct OpenAiCompatibleTranslator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    source_lang: String,
    target_lang: String,
}

impl OpenAiCompatibleTranslator {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        source_lang: String,
        target_lang: String,
    ) -> Self {
        info!(
            "Initialized OpenAiCompatibleTranslator: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
            source_lang,
            target_lang,
        }
    }
}

#[async_trait]
impl TranslatorInterface for OpenAiCompatibleTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(&self.source_lang, &self.target_lang, text) }
            ],
            "temperature": 0.3
        });

        debug!("Sending chat-completion translate request: {} chars", text.len());
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Chat-completion endpoint returned HTTP {}", status.as_u16());
            return Err(TranslateError::Upstream(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let payload: serde_json::Value = response.json().await?;
        extract_content(&payload)
    }

    async fn health_check(&self) -> Result<bool, TranslateError> {
        let url = format!("{}/v1/models", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}

fn build_prompt(source_lang: &str, target_lang: &str, text: &str) -> String {
    format!("Translate from {} to {}.\nText:\n{}", source_lang, target_lang, text)
}

/// Pull the assistant text out of a chat-completion payload.
fn extract_content(payload: &serde_json::Value) -> Result<String, TranslateError> {
    payload
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.trim().to_string())
        .ok_or_else(|| {
            TranslateError::Upstream("missing choices[0].message.content".to_string())
        })
}
