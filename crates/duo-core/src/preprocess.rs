use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default: trim, NFC, fold line breaks and whitespace runs into single spaces
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfc().collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
