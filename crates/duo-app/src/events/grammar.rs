use duo_core::LanguageSettings;
use duo_types::{CorrectionDisplay, TextDisplay};

use crate::display::{correction_display, text_display};
use crate::service::LanguageService;

pub async fn handle_grammar_question(
    service: &LanguageService,
    settings: &LanguageSettings,
    text: &str,
) -> TextDisplay {
    text_display(service.grammar_explanation(settings.pair(), text).await)
}

pub async fn handle_sentence_check(
    service: &LanguageService,
    settings: &LanguageSettings,
    text: &str,
) -> CorrectionDisplay {
    correction_display(service.sentence_correction(settings.pair(), text).await)
}

pub async fn handle_sentence_analysis(
    service: &LanguageService,
    settings: &LanguageSettings,
    text: &str,
) -> TextDisplay {
    text_display(service.sentence_analysis(settings.pair(), text).await)
}
