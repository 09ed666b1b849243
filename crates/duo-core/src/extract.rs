//! Locating a JSON object inside free-form model output.
//!
//! Models wrap the requested object in prose or markdown fences often
//! enough that decoding the raw reply is not an option. Extraction starts
//! at the first `{` and scans forward, tracking nesting depth and skipping
//! braces inside string literals, until the brace that closes the opening
//! one. Anything before or after the object is discarded.

use crate::error::DecodeError;

/// Slice of `raw` holding the first complete JSON object
pub fn extract_json_object(raw: &str) -> Result<&str, DecodeError> {
    let start = raw.find('{').ok_or(DecodeError::NoJsonObject)?;
    let candidate = &raw[start..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in candidate.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' && in_string {
            escaped = true;
            continue;
        }
        if ch == '"' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&candidate[..=idx]);
                }
            }
            _ => {}
        }
    }

    Err(DecodeError::Unterminated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        let raw = r#"{"translation":"Katze"}"#;
        assert_eq!(extract_json_object(raw).unwrap(), raw);
    }

    #[test]
    fn test_leading_prose() {
        let raw = r#"Sure! {"translation":"Katze"}"#;
        assert_eq!(extract_json_object(raw).unwrap(), r#"{"translation":"Katze"}"#);
    }

    #[test]
    fn test_trailing_prose() {
        let raw = r#"{"translation":"Katze"} Hope this helps! {not json}"#;
        assert_eq!(extract_json_object(raw).unwrap(), r#"{"translation":"Katze"}"#);
    }

    #[test]
    fn test_code_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(raw).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_nested_object_kept_whole() {
        let raw = r#"Here: {"a": {"b": 1}, "c": 2} done"#;
        assert_eq!(
            extract_json_object(raw).unwrap(),
            r#"{"a": {"b": 1}, "c": 2}"#
        );
    }

    #[test]
    fn test_braces_inside_strings() {
        let raw = r#"{"explanation": "use } and { freely", "x": "\"}"}"#;
        assert_eq!(extract_json_object(raw).unwrap(), raw);
    }

    #[test]
    fn test_no_braces() {
        let err = extract_json_object("I cannot help with that.").unwrap_err();
        assert!(matches!(err, DecodeError::NoJsonObject));
    }

    #[test]
    fn test_truncated_object() {
        let err = extract_json_object(r#"{"translation": "Katze", "examples": ["Die"#).unwrap_err();
        assert!(matches!(err, DecodeError::Unterminated));
    }

    #[test]
    fn test_stray_closing_brace_before_object() {
        // A `}` before the first `{` is never reached by the scan
        let raw = r#"} oops {"a": 1}"#;
        assert_eq!(extract_json_object(raw).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn test_multibyte_text() {
        let raw = "Voilà : {\"translation\": \"chat\", \"examples\": [\"Le chat dort — déjà.\"]} ✓";
        assert_eq!(
            extract_json_object(raw).unwrap(),
            "{\"translation\": \"chat\", \"examples\": [\"Le chat dort — déjà.\"]}"
        );
    }
}
