use duo_types::AppEvent;

use duo_types::LanguageDisplay;
use uuid::Uuid;

use crate::ui::{UiCommand, parse_input, track_labels};

fn labels() -> Vec<String> {
    vec!["English → German".to_string(), "German → English".to_string()]
}

#[test]
fn test_plain_line_is_lookup() {
    match parse_input("  Katze ", &labels()) {
        UiCommand::Request(AppEvent::LookupWord {
            word, direction, ..
        }) => {
            assert_eq!(word, "Katze");
            assert_eq!(direction, "English → German");
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_blank_line_still_reaches_lookup() {
    // Validation happens in the service, which answers with the empty-input message
    match parse_input("   ", &labels()) {
        UiCommand::Request(AppEvent::LookupWord { word, .. }) => assert!(word.is_empty()),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_commands() {
    assert!(matches!(
        parse_input(":reverse Haus", &labels()),
        UiCommand::Request(AppEvent::LookupWord { direction, .. }) if direction == "German → English"
    ));
    assert!(matches!(
        parse_input(":ask Why dative?", &labels()),
        UiCommand::Request(AppEvent::AskGrammar { text, .. }) if text == "Why dative?"
    ));
    assert!(matches!(
        parse_input(":check  Ich gehe zu der Schule.", &labels()),
        UiCommand::Request(AppEvent::CheckSentence { text, .. }) if text == "Ich gehe zu der Schule."
    ));
    assert!(matches!(
        parse_input(":analyze Ich gehe.", &labels()),
        UiCommand::Request(AppEvent::AnalyzeSentence { .. })
    ));
    assert!(matches!(
        parse_input(":LANG Spanish", &labels()),
        UiCommand::Request(AppEvent::ChangeLanguage { language, .. }) if language == "Spanish"
    ));
    assert!(matches!(
        parse_input(":languages", &labels()),
        UiCommand::Request(AppEvent::ListLanguages { .. })
    ));
    assert!(matches!(parse_input(":help", &labels()), UiCommand::Help));
    assert!(matches!(parse_input(":q", &labels()), UiCommand::Quit));
    assert!(matches!(parse_input(":dance", &labels()), UiCommand::Unknown(c) if c == "dance"));
}

#[test]
fn test_each_request_gets_fresh_id() {
    let a = parse_input("cat", &labels());
    let b = parse_input("cat", &labels());
    let (UiCommand::Request(a), UiCommand::Request(b)) = (a, b) else {
        panic!("expected requests");
    };
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_language_reply_updates_labels() {
    let mut current = labels();
    let reply = AppEvent::ShowLanguages {
        id: Uuid::new_v4(),
        result: LanguageDisplay {
            source: "English".to_string(),
            target: "French".to_string(),
            supported: vec!["German".to_string(), "French".to_string()],
            direction_labels: vec![
                "English → French".to_string(),
                "French → English".to_string(),
            ],
            error: None,
        },
    };
    track_labels(&mut current, &reply);

    match parse_input(":r chat", &current) {
        UiCommand::Request(AppEvent::LookupWord { direction, .. }) => {
            assert_eq!(direction, "French → English")
        }
        other => panic!("unexpected: {:?}", other),
    }
}
