use std::io::{BufRead, Write};

use duo_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::display::{render_correction, render_languages, render_lookup, render_text};

const HELP: &str = "\
Type a word to look it up, or one of:
  :reverse <word>    look up a target-language word
  :ask <question>    ask a grammar question
  :check <sentence>  check and correct a sentence
  :analyze <text>    free-form sentence analysis
  :lang <language>   switch the target language
  :languages         show current and supported languages
  :help              show this help
  :quit              leave";

#[derive(Debug)]
pub enum UiCommand {
    Request(AppEvent),
    Help,
    Quit,
    Unknown(String),
}

/// Map one input line to a command. A line without a leading `:` is a
/// word lookup, blank lines included. `labels` are the session's current
/// direction labels, forward first.
pub fn parse_input(line: &str, labels: &[String]) -> UiCommand {
    let line = line.trim();
    let id = Uuid::new_v4();
    let label = |i: usize| labels.get(i).cloned().unwrap_or_default();

    let Some(rest) = line.strip_prefix(':') else {
        return UiCommand::Request(AppEvent::LookupWord {
            id,
            word: line.to_string(),
            direction: label(0),
        });
    };

    let (command, arg) = match rest.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim().to_string()),
        None => (rest, String::new()),
    };

    match command.to_lowercase().as_str() {
        "reverse" | "r" => UiCommand::Request(AppEvent::LookupWord {
            id,
            word: arg,
            direction: label(1),
        }),
        "ask" | "a" => UiCommand::Request(AppEvent::AskGrammar { id, text: arg }),
        "check" | "c" => UiCommand::Request(AppEvent::CheckSentence { id, text: arg }),
        "analyze" | "analyse" => UiCommand::Request(AppEvent::AnalyzeSentence { id, text: arg }),
        "lang" | "l" => UiCommand::Request(AppEvent::ChangeLanguage { id, language: arg }),
        "languages" => UiCommand::Request(AppEvent::ListLanguages { id }),
        "help" | "h" | "?" => UiCommand::Help,
        "quit" | "q" | "exit" => UiCommand::Quit,
        _ => UiCommand::Unknown(command.to_string()),
    }
}

pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowLookup { result, .. } => Some(render_lookup(result)),
        AppEvent::ShowText { result, .. } => Some(render_text(result)),
        AppEvent::ShowCorrection { result, .. } => Some(render_correction(result)),
        AppEvent::ShowLanguages { result, .. } => Some(render_languages(result)),
        _ => None,
    }
}

/// Terminal front end. Sends one request, waits for its reply, renders it.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader();

    println!("{HELP}\n");
    let languages = request(
        &ui_to_app_tx,
        &app_to_ui_rx,
        AppEvent::ListLanguages { id: Uuid::new_v4() },
    )
    .await?;
    let mut labels = Vec::new();
    track_labels(&mut labels, &languages);
    print_reply(&languages);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.recv() => line,
            _ = cancel.cancelled() => break,
        };
        // Reader closed on EOF
        let Ok(line) = line else { break };

        match parse_input(&line, &labels) {
            UiCommand::Request(event) => {
                let reply = tokio::select! {
                    reply = request(&ui_to_app_tx, &app_to_ui_rx, event) => reply?,
                    _ = cancel.cancelled() => break,
                };
                track_labels(&mut labels, &reply);
                print_reply(&reply);
            }
            UiCommand::Help => println!("{HELP}"),
            UiCommand::Quit => break,
            UiCommand::Unknown(command) => {
                println!("Unknown command :{command}. Type :help for commands.")
            }
        }
    }

    tracing::info!("UI loop stopping");
    let _ = ui_to_app_tx.send(AppEvent::Shutdown).await;
    cancel.cancel();

    Ok(())
}

async fn request(
    tx: &AsyncSender<AppEvent>,
    rx: &AsyncReceiver<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<AppEvent> {
    let id = event.id();
    tx.send(event).await?;

    loop {
        let reply = rx.recv().await?;
        if reply.id() == id {
            return Ok(reply);
        }
        tracing::warn!("Dropping reply for stale request {:?}", reply.id());
    }
}

/// Language replies carry the labels lookups must use from now on
pub fn track_labels(labels: &mut Vec<String>, reply: &AppEvent) {
    if let AppEvent::ShowLanguages { result, .. } = reply {
        labels.clone_from(&result.direction_labels);
    }
}

fn print_reply(reply: &AppEvent) {
    if let Some(rendered) = render(reply) {
        println!("{rendered}");
    }
}

/// Blocking stdin reads live on their own thread so they never hold up
/// runtime shutdown.
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded::<String>(1);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    rx.to_async()
}
