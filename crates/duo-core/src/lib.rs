pub mod error;
pub mod extract;
pub mod language;
pub mod normalize;
pub mod preprocess;
pub mod prompt;
pub mod types;

pub use error::{DecodeError, ErrorKind, ErrorResult};
pub use language::{LanguagePair, LanguageSettings, UnsupportedLanguage};
pub use types::{
    CorrectionResult, Direction, GrammarAnswer, GrammarMode, GrammarRequest, LookupRequest,
    LookupResult, Operation, Request,
};
