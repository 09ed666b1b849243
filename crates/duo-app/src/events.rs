use std::sync::Arc;

use duo_core::LanguageSettings;
use duo_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::display::language_display;
use crate::state::AppState;

pub mod change_language;
pub mod grammar;
pub mod word_lookup;

use change_language::handle_language_change;
use grammar::{handle_grammar_question, handle_sentence_analysis, handle_sentence_check};
use word_lookup::handle_word_lookup;

/// App's main loop. Owns the session's language settings and handles one
/// request at a time.
pub async fn event_loop(
    state: Arc<AppState>,
    mut settings: LanguageSettings,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            break;
        }

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event.id());

        // Dropping the handler future aborts an in-flight model call
        let reply = tokio::select! {
            reply = handle_events(&state, &mut settings, event) => reply,
            _ = cancel.cancelled() => break,
        };

        if let Some(reply) = reply {
            app_to_ui_tx.send(reply).await?;
        }
    }

    Ok(())
}

pub async fn handle_events(
    state: &AppState,
    settings: &mut LanguageSettings,
    event: AppEvent,
) -> Option<AppEvent> {
    let service = &state.service;

    match event {
        AppEvent::LookupWord {
            id,
            word,
            direction,
        } => {
            let result = handle_word_lookup(service, settings, &word, &direction).await;
            Some(AppEvent::ShowLookup { id, result })
        }
        AppEvent::AskGrammar { id, text } => {
            let result = handle_grammar_question(service, settings, &text).await;
            Some(AppEvent::ShowText { id, result })
        }
        AppEvent::CheckSentence { id, text } => {
            let result = handle_sentence_check(service, settings, &text).await;
            Some(AppEvent::ShowCorrection { id, result })
        }
        AppEvent::AnalyzeSentence { id, text } => {
            let result = handle_sentence_analysis(service, settings, &text).await;
            Some(AppEvent::ShowText { id, result })
        }
        AppEvent::ChangeLanguage { id, language } => {
            let result = handle_language_change(settings, &language);
            Some(AppEvent::ShowLanguages { id, result })
        }
        AppEvent::ListLanguages { id } => Some(AppEvent::ShowLanguages {
            id,
            result: language_display(settings, None),
        }),
        AppEvent::ShowLookup { .. }
        | AppEvent::ShowText { .. }
        | AppEvent::ShowCorrection { .. }
        | AppEvent::ShowLanguages { .. }
        | AppEvent::Shutdown => {
            // UI-only events, ignore in backend
            None
        }
    }
}
