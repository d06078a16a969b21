use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::insights::InsightGenerator;
use crate::translate::{TranslatorFactory, TranslatorInterface};

/// Shared application state. Everything here is built once at startup and
/// read-only afterwards; requests share it through cheap clones.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslatorInterface>,
    pub insights: Arc<InsightGenerator>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let mut translator_config = config.translator_config.clone();
        if let Ok(url) = std::env::var("TRANSLATOR_SERVICE_URL") {
            translator_config.base_url = url;
        }

        let translator = TranslatorFactory::create_translator(&translator_config)?;

        Ok(Self {
            config,
            translator,
            insights: Arc::new(InsightGenerator::default()),
            started_at: Utc::now(),
        })
    }
}
