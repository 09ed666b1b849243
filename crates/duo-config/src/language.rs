use serde::{Deserialize, Serialize};

fn default_source_language() -> String {
    "English".to_string()
}

fn default_target_language() -> String {
    "German".to_string()
}

fn default_supported_languages() -> Vec<String> {
    ["German", "French", "Spanish", "Italian"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LanguageConfig {
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    /// Languages the target may be switched to
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            supported_languages: default_supported_languages(),
        }
    }
}

impl LanguageConfig {
    pub fn supports(&self, language: &str) -> bool {
        let language = language.trim().to_lowercase();
        self.supported_languages
            .iter()
            .any(|l| l.to_lowercase() == language)
    }
}

/// Split a comma separated list, dropping blanks
pub(crate) fn parse_language_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
