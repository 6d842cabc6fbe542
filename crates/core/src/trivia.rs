/// Base URL of the numbers trivia provider
pub const DEFAULT_TRIVIA_URL: &str = "http://numbersapi.com";

/// Build the trivia URL for `number` under `base`
///
/// Trailing slashes on `base` are dropped so `http://host/` and `http://host`
/// give the same result.
pub fn trivia_url(base: &str, number: i64) -> String {
    format!("{}/{number}/trivia", base.trim_end_matches('/'))
}

/// Turn a provider response body into the `fun_fact` value
///
/// JSON responses are decoded so they pass through as structured data; any
/// other body (or JSON that fails to decode) is kept as the raw string.
pub fn fun_fact_from_body(content_type: Option<&str>, body: String) -> serde_json::Value {
    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));
    if !is_json {
        return serde_json::Value::String(body);
    }

    serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
}
