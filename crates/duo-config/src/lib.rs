use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::language::{LanguageConfig, parse_language_list};
use self::llm::LlmConfig;

pub mod language;
pub mod llm;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is required. Please set it in your .env file.")]
    MissingApiKey,

    #[error("Source language must not be empty")]
    MissingSourceLanguage,

    #[error("Supported language list is empty")]
    NoSupportedLanguages,

    #[error("Target language {target} is not supported. Supported languages: {supported}")]
    UnsupportedTarget { target: String, supported: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub language: LanguageConfig,
}

impl Config {
    /// Load config from an optional JSON file, apply environment overrides
    /// and validate. Any error here is fatal for startup.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_vars(|key| env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Override fields from variables resolved by `lookup`
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("GEMINI_API_KEY") {
            self.llm.api_key = api_key.trim().to_string();
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.llm.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECONDS") {
            self.llm.timeout_seconds = timeout.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECONDS",
                value: timeout.clone(),
            })?;
        }
        if let Some(source) = lookup("SOURCE_LANGUAGE") {
            self.language.source_language = source.trim().to_string();
        }
        if let Some(target) = lookup("TARGET_LANGUAGE") {
            self.language.target_language = target.trim().to_string();
        }
        if let Some(supported) = lookup("SUPPORTED_LANGUAGES") {
            self.language.supported_languages = parse_language_list(&supported);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.llm.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECONDS",
                value: "0".to_string(),
            });
        }
        if self.language.source_language.is_empty() {
            return Err(ConfigError::MissingSourceLanguage);
        }
        if self.language.supported_languages.is_empty() {
            return Err(ConfigError::NoSupportedLanguages);
        }
        if !self.language.supports(&self.language.target_language) {
            return Err(ConfigError::UnsupportedTarget {
                target: self.language.target_language.clone(),
                supported: self.language.supported_languages.join(", "),
            });
        }

        Ok(())
    }
}
