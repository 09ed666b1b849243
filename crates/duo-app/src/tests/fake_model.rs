use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use duo_config::Config;
use duo_llm::{CallFailure, LanguageModel, ModelMetadata};

use crate::state::AppState;

/// Replays canned replies in order and records every prompt it saw
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, CallFailure>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, failure: CallFailure) -> Self {
        self.replies.lock().unwrap().push_back(Err(failure));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LanguageModel for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String, CallFailure> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CallFailure::EmptyResponse))
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            provider: "scripted".to_string(),
            model: "scripted-test".to_string(),
        }
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.llm.api_key = "test-key".to_string();
    config
}

pub fn test_state(model: Arc<ScriptedModel>) -> Arc<AppState> {
    Arc::new(AppState::with_model(test_config(), model))
}
