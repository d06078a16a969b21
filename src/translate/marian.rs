use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

use super::interface::{TranslateError, TranslateRequest, TranslateResponse, TranslatorInterface};

/// Client for the sidecar service hosting the pretrained Marian MT model
/// (opus-mt style). The model loads once in the sidecar at its own startup;
/// this client holds no state beyond the connection pool.
pub struct MarianServiceTranslator {
    client: Client,
    base_url: String,
    source_lang: String,
    target_lang: String,
}

impl MarianServiceTranslator {
    pub fn new(base_url: String, source_lang: String, target_lang: String) -> Self {
        info!(
            "Initialized MarianServiceTranslator: base_url={}, langs={}->{}",
            base_url, source_lang, target_lang
        );
        Self {
            client: Client::new(),
            base_url,
            source_lang,
            target_lang,
        }
    }
}

#[async_trait]
impl TranslatorInterface for MarianServiceTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let url = endpoint(&self.base_url, "translate");
        let request = TranslateRequest {
            text: text.to_string(),
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
        };

        debug!("Sending translate request: {} chars", text.len());
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Translation service returned HTTP {}", status.as_u16());
            return Err(TranslateError::Upstream(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let result: TranslateResponse = response.json().await?;
        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "unknown service error".to_string());
            error!("Translation failed upstream: {}", message);
            return Err(TranslateError::Upstream(message));
        }

        first_candidate(result.translations)
    }

    async fn health_check(&self) -> Result<bool, TranslateError> {
        let url = endpoint(&self.base_url, "health");
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

/// Join the base URL and a path segment, tolerating a trailing slash on
/// the base.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Keep the top-ranked candidate, drop the rest.
fn first_candidate(translations: Vec<String>) -> Result<String, TranslateError> {
    translations
        .into_iter()
        .next()
        .ok_or(TranslateError::NoCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash_on_base() {
        assert_eq!(
            endpoint("http://localhost:8001/", "translate"),
            "http://localhost:8001/translate"
        );
        assert_eq!(
            endpoint("http://localhost:8001", "health"),
            "http://localhost:8001/health"
        );
    }

    #[test]
    fn first_candidate_takes_the_head() {
        let result = first_candidate(vec![
            "Ich liebe Hunde.".to_string(),
            "Ich mag Hunde.".to_string(),
        ]);
        assert_eq!(result.unwrap(), "Ich liebe Hunde.");
    }

    #[test]
    fn empty_candidate_list_is_an_error() {
        let result = first_candidate(Vec::new());
        assert!(matches!(result, Err(TranslateError::NoCandidates)));
    }
}
