//! API client for the Aria backend (search, modules, settings, restart)
//!
//! All calls use relative URLs against the hosting origin. Errors come back
//! as display-ready strings: the server's structured `error` field verbatim
//! when the body parses, the raw body when it doesn't, and a generic message
//! when there is no body at all.

use aria_ui::SearchResult;
use serde::Deserialize;
use serde_json::Value;

const GENERIC_ERROR: &str = "An error occurred";

/// Wire shape of one search result item.
#[derive(Debug, Deserialize)]
struct SearchItem {
    name: String,
    #[serde(default)]
    artists: Option<Vec<String>>,
    #[serde(default)]
    explicit: Option<bool>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    year: Option<TextOrNumber>,
    #[serde(default)]
    additional: Option<Vec<String>>,
}

/// Fields the server may send as either text or a number (year, mostly).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(i64),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

impl From<SearchItem> for SearchResult {
    fn from(item: SearchItem) -> Self {
        SearchResult {
            name: item.name,
            artists: item.artists.unwrap_or_default(),
            explicit: item.explicit.unwrap_or(false),
            duration: item.duration,
            year: item.year.map(TextOrNumber::into_text),
            additional: item.additional.unwrap_or_default(),
        }
    }
}

/// Response envelope for settings-save/restart style endpoints.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Error text for a failure body: the structured `error` field verbatim when
/// present, else the raw body, else a generic message.
fn failure_text(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<Envelope>(body) {
        if let Some(error) = envelope.error {
            return error;
        }
    }
    if body.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        body.to_string()
    }
}

fn parse_search_body(body: &str) -> Result<Vec<SearchResult>, String> {
    let items: Vec<SearchItem> =
        serde_json::from_str(body).map_err(|e| format!("parse error: {e}"))?;
    Ok(items.into_iter().map(SearchResult::from).collect())
}

/// Outcome of a `{success, error}` response body, whatever the status code.
fn parse_outcome(body: &str) -> Result<(), String> {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) if envelope.success => Ok(()),
        Ok(envelope) => Err(envelope.error.unwrap_or_else(|| failure_text(body))),
        Err(_) => Err(failure_text(body)),
    }
}

/// Search the selected module's catalog.
pub async fn search(
    module: &str,
    query_type: &str,
    query: &str,
) -> Result<Vec<SearchResult>, String> {
    let client = reqwest::Client::new();
    let resp = client
        .post("/search")
        .form(&[
            ("module", module),
            ("query_type", query_type),
            ("query", query),
        ])
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| format!("read error: {e}"))?;
    if status.is_success() {
        parse_search_body(&body)
    } else {
        Err(failure_text(&body))
    }
}

/// Installed module names for the search form.
pub async fn fetch_modules() -> Result<Vec<String>, String> {
    let resp = reqwest::get("/api/modules")
        .await
        .map_err(|e| format!("network error: {e}"))?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| format!("read error: {e}"))?;
    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| format!("parse error: {e}"))
    } else {
        Err(failure_text(&body))
    }
}

/// Current nested settings mapping.
pub async fn fetch_settings() -> Result<Value, String> {
    let resp = reqwest::get("/api/settings")
        .await
        .map_err(|e| format!("network error: {e}"))?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| format!("read error: {e}"))?;
    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| format!("parse error: {e}"))
    } else {
        Err(failure_text(&body))
    }
}

/// Save the nested settings mapping.
pub async fn save_settings(settings: &Value) -> Result<(), String> {
    let client = reqwest::Client::new();
    let resp = client
        .post("/api/settings")
        .json(settings)
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;

    let body = resp.text().await.map_err(|e| format!("read error: {e}"))?;
    parse_outcome(&body)
}

/// Restart the active module so saved settings take effect.
pub async fn restart() -> Result<(), String> {
    let client = reqwest::Client::new();
    let resp = client
        .post("/api/restart")
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;

    let body = resp.text().await.map_err(|e| format!("read error: {e}"))?;
    parse_outcome(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_maps_into_display_results() {
        let body = r#"[
            {"name": "Song", "artists": ["A", "B"], "explicit": true,
             "duration": "3:45", "year": 2019, "additional": ["Hi-Res"]},
            {"name": "Bare"}
        ]"#;
        let results = parse_search_body(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Song");
        assert_eq!(results[0].artists, vec!["A", "B"]);
        assert!(results[0].explicit);
        assert_eq!(results[0].year.as_deref(), Some("2019"));
        assert_eq!(results[0].additional, vec!["Hi-Res"]);

        assert_eq!(results[1].name, "Bare");
        assert!(results[1].artists.is_empty());
        assert!(!results[1].explicit);
        assert_eq!(results[1].year, None);
    }

    #[test]
    fn year_accepts_text_or_number() {
        let body = r#"[{"name": "A", "year": "1999"}, {"name": "B", "year": 2001}]"#;
        let results = parse_search_body(body).unwrap();
        assert_eq!(results[0].year.as_deref(), Some("1999"));
        assert_eq!(results[1].year.as_deref(), Some("2001"));
    }

    #[test]
    fn non_json_search_body_is_a_parse_error() {
        assert!(parse_search_body("<html>boom</html>").is_err());
    }

    #[test]
    fn failure_text_prefers_the_structured_error_field() {
        assert_eq!(failure_text(r#"{"error": "no such module"}"#), "no such module");
    }

    #[test]
    fn failure_text_falls_back_to_the_raw_body() {
        assert_eq!(failure_text("Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn failure_text_generic_when_body_is_empty() {
        assert_eq!(failure_text(""), GENERIC_ERROR);
    }

    #[test]
    fn outcome_success_envelope_is_ok() {
        assert_eq!(parse_outcome(r#"{"success": true}"#), Ok(()));
    }

    #[test]
    fn outcome_failure_carries_the_error_verbatim() {
        assert_eq!(
            parse_outcome(r#"{"success": false, "error": "settings file is read-only"}"#),
            Err("settings file is read-only".to_string())
        );
    }

    #[test]
    fn outcome_non_json_body_surfaces_raw_text() {
        assert_eq!(
            parse_outcome("502 Bad Gateway"),
            Err("502 Bad Gateway".to_string())
        );
    }
}
