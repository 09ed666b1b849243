use std::fmt::Write;

use duo_core::{CorrectionResult, ErrorResult, GrammarAnswer, LanguageSettings, LookupResult};
use duo_types::{CorrectionDisplay, LanguageDisplay, LookupDisplay, TextDisplay};

pub fn lookup_display(result: Result<LookupResult, ErrorResult>) -> LookupDisplay {
    match result {
        Ok(result) => LookupDisplay {
            translation: result.translation,
            gender: result.gender,
            plural: result.plural,
            examples: result.examples.join("\n"),
            error: None,
        },
        Err(err) => LookupDisplay {
            error: Some(err.message),
            ..Default::default()
        },
    }
}

pub fn text_display(result: Result<GrammarAnswer, ErrorResult>) -> TextDisplay {
    match result {
        Ok(answer) => TextDisplay {
            text: answer.0,
            error: None,
        },
        Err(err) => TextDisplay {
            text: String::new(),
            error: Some(err.message),
        },
    }
}

pub fn correction_display(result: Result<CorrectionResult, ErrorResult>) -> CorrectionDisplay {
    match result {
        Ok(result) => CorrectionDisplay {
            is_correct: result.is_correct,
            corrected: result.corrected_text,
            explanation: result.explanation,
            error: None,
        },
        Err(err) => CorrectionDisplay {
            error: Some(err.message),
            ..Default::default()
        },
    }
}

pub fn language_display(settings: &LanguageSettings, error: Option<String>) -> LanguageDisplay {
    LanguageDisplay {
        source: settings.pair().source.clone(),
        target: settings.target_language().to_string(),
        supported: settings.supported_languages().to_vec(),
        direction_labels: settings.direction_labels().to_vec(),
        error,
    }
}

pub fn render_lookup(display: &LookupDisplay) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Translation: {}", display.translation);
    let _ = writeln!(out, "Gender:      {}", display.gender);
    let _ = writeln!(out, "Plural:      {}", display.plural);
    let _ = writeln!(out, "Examples:");
    for example in display.examples.lines() {
        let _ = writeln!(out, "  {example}");
    }
    push_error(&mut out, &display.error);
    out
}

pub fn render_text(display: &TextDisplay) -> String {
    match &display.error {
        Some(error) => format!("Error: {error}\n"),
        None => format!("{}\n", display.text),
    }
}

pub fn render_correction(display: &CorrectionDisplay) -> String {
    let mut out = String::new();
    if display.error.is_none() {
        let verdict = if display.is_correct {
            "correct"
        } else {
            "needs correction"
        };
        let _ = writeln!(out, "Grammar:     {verdict}");
    }
    let _ = writeln!(out, "Corrected:   {}", display.corrected);
    let _ = writeln!(out, "Explanation:\n{}", display.explanation);
    push_error(&mut out, &display.error);
    out
}

pub fn render_languages(display: &LanguageDisplay) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current:     {} → {}", display.source, display.target);
    let _ = writeln!(out, "Directions:  {}", display.direction_labels.join(" | "));
    let _ = writeln!(out, "Supported:   {}", display.supported.join(", "));
    push_error(&mut out, &display.error);
    out
}

fn push_error(out: &mut String, error: &Option<String>) {
    if let Some(error) = error {
        let _ = writeln!(out, "Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use duo_core::ErrorKind;

    use super::*;

    #[test]
    fn test_lookup_failure_renders_defaults() {
        let display = lookup_display(Err(ErrorResult::new(
            ErrorKind::DecodeFailure,
            "Invalid JSON response: no JSON object found in response",
        )));
        assert_eq!(display.translation, "");
        assert_eq!(display.gender, "");
        assert_eq!(display.plural, "");
        assert_eq!(display.examples, "");
        assert!(display.error.as_deref().unwrap().starts_with("Invalid JSON"));

        let rendered = render_lookup(&display);
        assert!(rendered.contains("Translation: \n"));
        assert!(rendered.contains("Error: Invalid JSON response"));
    }

    #[test]
    fn test_lookup_examples_one_per_line() {
        let display = lookup_display(Ok(LookupResult {
            translation: "Katze".to_string(),
            gender: "die".to_string(),
            plural: "Katzen".to_string(),
            examples: vec!["Die Katze schläft.".to_string(), "Ich habe eine Katze.".to_string()],
        }));
        assert_eq!(display.examples, "Die Katze schläft.\nIch habe eine Katze.");
        assert!(display.error.is_none());
    }

    #[test]
    fn test_correction_failure_has_no_verdict() {
        let display = correction_display(Err(ErrorResult::call_failed(
            duo_core::Operation::SentenceCorrection,
            "Rate limit exceeded",
        )));
        let rendered = render_correction(&display);
        assert!(!rendered.contains("Grammar:"));
        assert!(rendered.contains("Could not process sentence correction"));
    }
}
