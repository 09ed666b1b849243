use std::sync::Arc;
use std::time::Duration;

use duo_config::Config;
use duo_core::{LanguageSettings, UnsupportedLanguage};
use duo_llm::{GeminiModel, LanguageModel};

use crate::service::LanguageService;

pub struct AppState {
    pub config: Config,
    pub service: LanguageService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = GeminiModel::new(
            config.llm.api_key.clone(),
            config.llm.model.clone(),
            config.llm.base_url.clone(),
            Duration::from_secs(config.llm.timeout_seconds),
        );
        tracing::info!("Using Gemini model {}", config.llm.model);

        Self::with_model(config, Arc::new(model))
    }

    pub fn with_model(config: Config, model: Arc<dyn LanguageModel>) -> Self {
        Self {
            config,
            service: LanguageService::new(model),
        }
    }

    /// Fresh per-session language settings from the configured defaults
    pub fn language_settings(&self) -> Result<LanguageSettings, UnsupportedLanguage> {
        let language = &self.config.language;
        LanguageSettings::new(
            &language.source_language,
            &language.target_language,
            language.supported_languages.clone(),
        )
    }
}
