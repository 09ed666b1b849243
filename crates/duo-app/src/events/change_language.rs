use duo_core::{ErrorResult, LanguageSettings};
use duo_types::LanguageDisplay;

use crate::display::language_display;

/// Apply a target-language change. A rejected change is reported on the
/// display and leaves `settings` untouched.
pub fn handle_language_change(settings: &mut LanguageSettings, language: &str) -> LanguageDisplay {
    let error = match settings.set_target_language(language) {
        Ok(pair) => {
            tracing::info!("Session language pair: {} → {}", pair.source, pair.target);
            None
        }
        Err(e) => Some(ErrorResult::from(e).message),
    };

    language_display(settings, error)
}
