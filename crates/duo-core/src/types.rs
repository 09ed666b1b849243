use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ErrorResult;
use crate::normalize::de;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

pub const EMPTY_WORD_MESSAGE: &str = "Please enter a word to look up.";
pub const EMPTY_GRAMMAR_MESSAGE: &str = "Please enter text for grammar explanation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    SourceToTarget,
    TargetToSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrammarMode {
    #[default]
    Question,
    Correction,
}

/// What the user asked for, used in logs and call-failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    WordLookup,
    GrammarExplanation,
    SentenceCorrection,
    SentenceAnalysis,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::WordLookup => "word lookup",
            Operation::GrammarExplanation => "grammar explanation",
            Operation::SentenceCorrection => "sentence correction",
            Operation::SentenceAnalysis => "sentence analysis",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    word: String,
    pub direction: Direction,
}

impl LookupRequest {
    /// Fails with the user-facing empty-input message when `word` is blank.
    /// The stored word is already preprocessed, so it is exactly what the
    /// prompt quotes.
    pub fn new(word: &str, direction: Direction) -> Result<Self, ErrorResult> {
        let word = DefaultPreprocessor.process(word);
        if word.is_empty() {
            return Err(ErrorResult::empty_input(EMPTY_WORD_MESSAGE));
        }

        Ok(Self { word, direction })
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRequest {
    text: String,
    pub mode: GrammarMode,
}

impl GrammarRequest {
    pub fn new(text: &str, mode: GrammarMode) -> Result<Self, ErrorResult> {
        let text = DefaultPreprocessor.process(text);
        if text.is_empty() {
            return Err(ErrorResult::empty_input(EMPTY_GRAMMAR_MESSAGE));
        }

        Ok(Self { text, mode })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A request the prompt builder knows how to phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Lookup(LookupRequest),
    Grammar(GrammarRequest),
    /// Free-text analysis of a sentence
    Analysis(GrammarRequest),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Lookup(_) => Operation::WordLookup,
            Request::Grammar(req) => match req.mode {
                GrammarMode::Question => Operation::GrammarExplanation,
                GrammarMode::Correction => Operation::SentenceCorrection,
            },
            Request::Analysis(_) => Operation::SentenceAnalysis,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(default, deserialize_with = "de::nullable")]
    pub translation: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub gender: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub plural: String,
    #[serde(default, deserialize_with = "de::string_list")]
    pub examples: Vec<String>,
}

/// Markdown returned by the model, passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarAnswer(pub String);

impl GrammarAnswer {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    #[serde(
        rename = "grammar check",
        alias = "is_correct",
        default,
        deserialize_with = "de::lenient_bool"
    )]
    pub is_correct: bool,
    #[serde(
        rename = "corrected version",
        alias = "corrected_text",
        default,
        deserialize_with = "de::nullable"
    )]
    pub corrected_text: String,
    #[serde(
        rename = "Applicable grammar explained",
        alias = "explanation",
        default,
        deserialize_with = "de::nullable"
    )]
    pub explanation: String,
}
