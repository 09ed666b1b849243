use crate::types::Direction;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Unsupported language: {language}. Supported languages: {}", .supported.join(", "))]
pub struct UnsupportedLanguage {
    pub language: String,
    pub supported: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// (from, to) as seen from `direction`
    pub fn oriented(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::SourceToTarget => (&self.source, &self.target),
            Direction::TargetToSource => (&self.target, &self.source),
        }
    }

    pub fn label(&self, direction: Direction) -> String {
        let (from, to) = self.oriented(direction);
        format!("{from} → {to}")
    }
}

impl Direction {
    /// Map a UI label back to a direction. Unknown labels read as
    /// source-to-target.
    pub fn from_label(label: &str, pair: &LanguagePair) -> Self {
        if label.trim() == pair.label(Direction::TargetToSource) {
            Direction::TargetToSource
        } else {
            Direction::SourceToTarget
        }
    }
}

/// Article set used as a hint for the gender field, if the language
/// marks grammatical gender on nouns
pub fn gender_markers(language: &str) -> Option<&'static str> {
    match language.trim().to_lowercase().as_str() {
        "german" => Some("der/die/das"),
        "french" => Some("le/la"),
        "spanish" => Some("el/la"),
        "italian" => Some("il/lo/la"),
        "portuguese" => Some("o/a"),
        "dutch" => Some("de/het"),
        "swedish" => Some("en/ett"),
        _ => None,
    }
}

/// Current language pair plus the set the target may be switched to.
/// Owned by one session; the only writer of the pair.
#[derive(Debug, Clone)]
pub struct LanguageSettings {
    pair: LanguagePair,
    supported: Vec<String>,
    labels: [String; 2],
}

impl LanguageSettings {
    pub fn new(
        source: &str,
        target: &str,
        supported: Vec<String>,
    ) -> Result<Self, UnsupportedLanguage> {
        let canonical = find_supported(&supported, target).ok_or_else(|| UnsupportedLanguage {
            language: target.to_string(),
            supported: supported.clone(),
        })?;

        let pair = LanguagePair::new(source.trim(), canonical);
        let labels = labels_for(&pair);

        Ok(Self {
            pair,
            supported,
            labels,
        })
    }

    pub fn pair(&self) -> &LanguagePair {
        &self.pair
    }

    pub fn target_language(&self) -> &str {
        &self.pair.target
    }

    pub fn supported_languages(&self) -> &[String] {
        &self.supported
    }

    /// `["<source> → <target>", "<target> → <source>"]`
    pub fn direction_labels(&self) -> &[String; 2] {
        &self.labels
    }

    /// Switch the target language. On error the previous target is kept.
    pub fn set_target_language(
        &mut self,
        language: &str,
    ) -> Result<&LanguagePair, UnsupportedLanguage> {
        let Some(canonical) = find_supported(&self.supported, language) else {
            tracing::warn!("Rejected unsupported target language: {}", language);
            return Err(UnsupportedLanguage {
                language: language.to_string(),
                supported: self.supported.clone(),
            });
        };

        if canonical != self.pair.target {
            tracing::info!("Target language changed: {} -> {}", self.pair.target, canonical);
            self.pair.target = canonical;
            self.labels = labels_for(&self.pair);
        }

        Ok(&self.pair)
    }
}

fn find_supported(supported: &[String], language: &str) -> Option<String> {
    let language = language.trim().to_lowercase();
    supported
        .iter()
        .find(|l| l.to_lowercase() == language)
        .cloned()
}

fn labels_for(pair: &LanguagePair) -> [String; 2] {
    [
        pair.label(Direction::SourceToTarget),
        pair.label(Direction::TargetToSource),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> LanguageSettings {
        let supported = ["German", "French", "Spanish", "Italian"]
            .into_iter()
            .map(String::from)
            .collect();
        LanguageSettings::new("English", "German", supported).unwrap()
    }

    #[test]
    fn test_initial_labels() {
        let settings = settings();
        assert_eq!(
            settings.direction_labels(),
            &["English → German".to_string(), "German → English".to_string()]
        );
    }

    #[test]
    fn test_switch_target_updates_labels() {
        let mut settings = settings();
        let pair = settings.set_target_language("french").unwrap().clone();
        assert_eq!(pair, LanguagePair::new("English", "French"));
        assert_eq!(settings.target_language(), "French");
        assert_eq!(settings.direction_labels()[0], "English → French");
        assert_eq!(settings.direction_labels()[1], "French → English");
    }

    #[test]
    fn test_unsupported_target_keeps_previous() {
        let mut settings = settings();
        let err = settings.set_target_language("Klingon").unwrap_err();
        assert_eq!(err.language, "Klingon");
        assert_eq!(settings.target_language(), "German");
        assert_eq!(settings.direction_labels()[0], "English → German");
    }

    #[test]
    fn test_same_language_is_noop() {
        let mut settings = settings();
        let before = settings.pair().clone();
        let labels = settings.direction_labels().clone();

        let first = settings.set_target_language("German").unwrap().clone();
        let second = settings.set_target_language("German").unwrap().clone();

        assert_eq!(first, before);
        assert_eq!(second, before);
        assert_eq!(settings.direction_labels(), &labels);
    }

    #[test]
    fn test_non_ascii_names_match_case_insensitively() {
        let supported = vec!["Español".to_string(), "Ελληνικά".to_string()];
        let mut settings = LanguageSettings::new("English", "ESPAÑOL", supported).unwrap();
        assert_eq!(settings.target_language(), "Español");

        settings.set_target_language("ΕΛΛΗΝΙΚΆ").unwrap();
        assert_eq!(settings.target_language(), "Ελληνικά");
    }

    #[test]
    fn test_new_rejects_unsupported_target() {
        let err = LanguageSettings::new("English", "Latin", vec!["German".to_string()]);
        assert!(err.is_err());
    }

    #[test]
    fn test_direction_from_label() {
        let pair = LanguagePair::new("English", "German");
        assert_eq!(
            Direction::from_label("German → English", &pair),
            Direction::TargetToSource
        );
        assert_eq!(
            Direction::from_label("English → German", &pair),
            Direction::SourceToTarget
        );
        assert_eq!(Direction::from_label("???", &pair), Direction::SourceToTarget);
    }

    #[test]
    fn test_gender_markers() {
        assert_eq!(gender_markers("German"), Some("der/die/das"));
        assert_eq!(gender_markers("english"), None);
    }
}
