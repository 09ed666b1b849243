use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
    status: Option<String>,
    code: Option<i64>,
}

/// Best-effort message from a Gemini error body, falling back to the body itself
pub fn extract_api_error(body: &str) -> String {
    if let Ok(ErrorEnvelope { error: Some(err) }) = serde_json::from_str::<ErrorEnvelope>(body) {
        let message = err.message.unwrap_or_else(|| "unknown error".to_string());
        let status = err.status.unwrap_or_else(|| "unknown".to_string());
        let code = err
            .code
            .map(|value| value.to_string())
            .unwrap_or_else(|| "none".to_string());
        return format!("{} (status={}, code={})", message, status, code);
    }

    let body = body.trim();
    if body.is_empty() {
        "empty error body".to_string()
    } else {
        body.to_string()
    }
}
