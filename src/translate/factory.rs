use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::TranslatorConfig;

use super::interface::TranslatorInterface;
use super::marian::MarianServiceTranslator;
use super::openai::OpenAiCompatibleTranslator;

/// Factory for creating the translator singleton at bootstrap
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator based on the configured provider.
    ///
    /// # Arguments
    /// * `config` - Translator section of the application config
    pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn TranslatorInterface>> {
        info!("Initializing translator: {}", config.provider);

        match config.provider.as_str() {
            "marian_service" | "opus_mt_service" => Ok(Arc::new(MarianServiceTranslator::new(
                config.base_url.clone(),
                config.source_lang.clone(),
                config.target_lang.clone(),
            ))),
            "openai_compatible" | "openai" | "deepseek" => {
                Ok(Arc::new(OpenAiCompatibleTranslator::new(
                    config.base_url.clone(),
                    config.api_key.clone().unwrap_or_default(),
                    config.model.clone(),
                    config.source_lang.clone(),
                    config.target_lang.clone(),
                )))
            }
            other => Err(anyhow::anyhow!(
                "Unsupported translator provider: {}",
                other
            )),
        }
    }
}
