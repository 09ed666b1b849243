use duo_core::{Direction, LanguageSettings};
use duo_types::LookupDisplay;

use crate::display::lookup_display;
use crate::service::LanguageService;

/// `direction` is one of the session's direction labels. Anything else
/// reads as source-to-target.
pub async fn handle_word_lookup(
    service: &LanguageService,
    settings: &LanguageSettings,
    word: &str,
    direction: &str,
) -> LookupDisplay {
    let direction = Direction::from_label(direction, settings.pair());
    tracing::debug!("Lookup '{}' ({})", word, settings.pair().label(direction));

    let result = service.word_lookup(settings.pair(), word, direction).await;
    if let Err(e) = &result {
        tracing::debug!("Lookup failed: {:?}", e.kind);
    }

    lookup_display(result)
}
