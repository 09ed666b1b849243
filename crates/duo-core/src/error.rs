use std::fmt;

use serde::Serialize;

use crate::language::UnsupportedLanguage;
use crate::types::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Configuration,
    EmptyInput,
    CallFailure,
    DecodeFailure,
    UnsupportedLanguage,
}

/// Why a model reply could not be turned into a typed result
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("unterminated JSON object")]
    Unterminated,

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Failure value handed to the UI layer. Carries no partial payload;
/// callers render default field values next to `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorResult {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyInput, message)
    }

    pub fn configuration(err: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Configuration, format!("Configuration error: {err}"))
    }

    /// The model call itself failed (network, auth, quota, timeout)
    pub fn call_failed(operation: Operation, err: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::CallFailure,
            format!("Could not process {operation}: {err}"),
        )
    }

    pub fn decode_failed(err: &DecodeError) -> Self {
        Self::new(
            ErrorKind::DecodeFailure,
            format!("Invalid JSON response: {err}"),
        )
    }
}

impl fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorResult {}

impl From<DecodeError> for ErrorResult {
    fn from(err: DecodeError) -> Self {
        Self::decode_failed(&err)
    }
}

impl From<UnsupportedLanguage> for ErrorResult {
    fn from(err: UnsupportedLanguage) -> Self {
        Self::new(ErrorKind::UnsupportedLanguage, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_failure_names_operation() {
        let err = ErrorResult::call_failed(Operation::WordLookup, "timed out");
        assert_eq!(err.kind, ErrorKind::CallFailure);
        assert_eq!(err.message, "Could not process word lookup: timed out");
    }

    #[test]
    fn test_decode_failure_message() {
        let err: ErrorResult = DecodeError::NoJsonObject.into();
        assert_eq!(err.kind, ErrorKind::DecodeFailure);
        assert!(err.message.starts_with("Invalid JSON response"));
    }

    #[test]
    fn test_unsupported_language_conversion() {
        let err: ErrorResult = UnsupportedLanguage {
            language: "Klingon".to_string(),
            supported: vec!["German".to_string(), "French".to_string()],
        }
        .into();
        assert_eq!(err.kind, ErrorKind::UnsupportedLanguage);
        assert_eq!(
            err.message,
            "Unsupported language: Klingon. Supported languages: German, French"
        );
    }
}
