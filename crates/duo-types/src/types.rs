use serde::Serialize;
use uuid::Uuid;

/// Correlates a UI request with the display event answering it
pub type RequestId = Uuid;

#[derive(Debug, Clone)]
pub enum AppEvent {
    LookupWord {
        id: RequestId,
        word: String,
        /// Direction label as shown to the user, e.g. "German → English"
        direction: String,
    },
    AskGrammar {
        id: RequestId,
        text: String,
    },
    CheckSentence {
        id: RequestId,
        text: String,
    },
    AnalyzeSentence {
        id: RequestId,
        text: String,
    },
    ChangeLanguage {
        id: RequestId,
        language: String,
    },
    ListLanguages {
        id: RequestId,
    },
    ShowLookup {
        id: RequestId,
        result: LookupDisplay,
    },
    ShowText {
        id: RequestId,
        result: TextDisplay,
    },
    ShowCorrection {
        id: RequestId,
        result: CorrectionDisplay,
    },
    ShowLanguages {
        id: RequestId,
        result: LanguageDisplay,
    },
    Shutdown,
}

impl AppEvent {
    pub fn id(&self) -> Option<RequestId> {
        match self {
            AppEvent::LookupWord { id, .. }
            | AppEvent::AskGrammar { id, .. }
            | AppEvent::CheckSentence { id, .. }
            | AppEvent::AnalyzeSentence { id, .. }
            | AppEvent::ChangeLanguage { id, .. }
            | AppEvent::ListLanguages { id }
            | AppEvent::ShowLookup { id, .. }
            | AppEvent::ShowText { id, .. }
            | AppEvent::ShowCorrection { id, .. }
            | AppEvent::ShowLanguages { id, .. } => Some(*id),
            AppEvent::Shutdown => None,
        }
    }
}

/// Word lookup as shown to the user. On failure every field is empty
/// and `error` holds the message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupDisplay {
    pub translation: String,
    pub gender: String,
    pub plural: String,
    /// One example per line
    pub examples: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextDisplay {
    pub text: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorrectionDisplay {
    pub is_correct: bool,
    pub corrected: String,
    pub explanation: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageDisplay {
    pub source: String,
    pub target: String,
    pub supported: Vec<String>,
    pub direction_labels: Vec<String>,
    pub error: Option<String>,
}
