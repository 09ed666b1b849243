use serde::de::DeserializeOwned;

use crate::error::{DecodeError, ErrorResult};
use crate::extract::extract_json_object;
use crate::types::{CorrectionResult, GrammarAnswer, LookupResult};

/// Decode the JSON object embedded in a model reply
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let object = extract_json_object(raw.trim())?;
    Ok(serde_json::from_str(object)?)
}

pub fn normalize_lookup(raw: &str) -> Result<LookupResult, ErrorResult> {
    decode_json(raw).map_err(|e| {
        tracing::warn!("Word lookup reply rejected: {} ({} bytes)", e, raw.len());
        ErrorResult::decode_failed(&e)
    })
}

pub fn normalize_correction(raw: &str) -> Result<CorrectionResult, ErrorResult> {
    decode_json(raw).map_err(|e| {
        tracing::warn!("Correction reply rejected: {} ({} bytes)", e, raw.len());
        ErrorResult::decode_failed(&e)
    })
}

/// Free-text replies are passed through
pub fn normalize_text(raw: &str) -> GrammarAnswer {
    GrammarAnswer(raw.trim().to_string())
}

/// Lenient field decoders. Missing and `null` fields both become the
/// default value.
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    /// Accepts a list of strings or a single string
    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<StringOrList>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(StringOrList::One(s)) if s.trim().is_empty() => Vec::new(),
            Some(StringOrList::One(s)) => vec![s],
            Some(StringOrList::Many(list)) => list,
        })
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
    }

    /// Accepts `true`/`false` and their string spellings
    pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<BoolLike>::deserialize(deserializer)? {
            None => Ok(false),
            Some(BoolLike::Bool(b)) => Ok(b),
            Some(BoolLike::Text(s)) => match s.trim().to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(serde::de::Error::custom(format!(
                    "expected a boolean, got \"{other}\""
                ))),
            },
        }
    }
}
