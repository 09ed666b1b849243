use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    /// Gemini API key, required before any request is accepted
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for a single model call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
