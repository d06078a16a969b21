//! Translation boundary - the model itself runs in an external service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request sent to the translation sidecar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Response from the translation sidecar. `translations` is ranked
/// best-first; everything past the first candidate is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translations: Vec<String>,
    pub success: bool,
    pub error: Option<String>,
}

/// Failures crossing the translation boundary. The adapter makes exactly
/// one upstream call per request; none of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("translation service error: {0}")]
    Upstream(String),

    #[error("translation service returned no candidates")]
    NoCandidates,
}

/// Interface over the external machine-translation capability.
/// Implementations are initialized once at startup and shared read-only
/// across requests.
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate `text`, returning the backend's top-ranked candidate only.
    /// The input passes through unvalidated and unmodified.
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;

    /// Whether the backing service is currently reachable.
    async fn health_check(&self) -> Result<bool, TranslateError>;
}
