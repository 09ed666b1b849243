use std::sync::Arc;

use duo_core::normalize::{normalize_correction, normalize_lookup, normalize_text};
use duo_core::prompt::build_prompt;
use duo_core::{
    CorrectionResult, Direction, ErrorResult, GrammarAnswer, GrammarMode, GrammarRequest,
    LanguagePair, LookupRequest, LookupResult, Request,
};
use duo_llm::LanguageModel;

/// Request builder, model call and normalizer behind the four user
/// operations. Every path ends in a typed value or an `ErrorResult`.
pub struct LanguageService {
    model: Arc<dyn LanguageModel>,
}

impl LanguageService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn word_lookup(
        &self,
        pair: &LanguagePair,
        word: &str,
        direction: Direction,
    ) -> Result<LookupResult, ErrorResult> {
        let request = Request::Lookup(LookupRequest::new(word, direction)?);
        let raw = self.invoke(&request, pair).await?;
        normalize_lookup(&raw)
    }

    pub async fn grammar_explanation(
        &self,
        pair: &LanguagePair,
        text: &str,
    ) -> Result<GrammarAnswer, ErrorResult> {
        let request = Request::Grammar(GrammarRequest::new(text, GrammarMode::Question)?);
        let raw = self.invoke(&request, pair).await?;
        Ok(normalize_text(&raw))
    }

    pub async fn sentence_correction(
        &self,
        pair: &LanguagePair,
        text: &str,
    ) -> Result<CorrectionResult, ErrorResult> {
        let request = Request::Grammar(GrammarRequest::new(text, GrammarMode::Correction)?);
        let raw = self.invoke(&request, pair).await?;
        normalize_correction(&raw)
    }

    pub async fn sentence_analysis(
        &self,
        pair: &LanguagePair,
        text: &str,
    ) -> Result<GrammarAnswer, ErrorResult> {
        let request = Request::Analysis(GrammarRequest::new(text, GrammarMode::Correction)?);
        let raw = self.invoke(&request, pair).await?;
        Ok(normalize_text(&raw))
    }

    /// One model call. Call failures are reported separately from
    /// decode failures.
    async fn invoke(&self, request: &Request, pair: &LanguagePair) -> Result<String, ErrorResult> {
        let operation = request.operation();
        let prompt = build_prompt(request, pair);

        tracing::debug!(
            "Invoking {} for {} ({} → {})",
            self.model.metadata().model,
            operation,
            pair.source,
            pair.target
        );

        self.model.generate(&prompt).await.map_err(|e| {
            tracing::error!("Model call failed during {}: {}", operation, e);
            ErrorResult::call_failed(operation, e)
        })
    }
}
