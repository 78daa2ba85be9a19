// Aarya Engine — Google Gemini Client
// Implements the GenerativeService trait over the `generateContent` REST
// endpoint. One request per call: no retries, no streaming.
// The credential lives behind a lock so it can be swapped at runtime.

use crate::atoms::constants::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GEMINI_CONNECT_TIMEOUT_SECS,
    GEMINI_PROVIDER_NAME, GEMINI_REQUEST_TIMEOUT_SECS,
};
use crate::atoms::error::{EngineError, EngineResult};
use crate::atoms::traits::GenerativeService;
use crate::engine::config::GeminiConfig;
use async_trait::async_trait;
use log::{error, info, warn};
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

// ── Struct ────────────────────────────────────────────────────────────────────

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: RwLock<Option<String>>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        let model = config
            .model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        GeminiClient {
            client: Client::builder()
                .connect_timeout(Duration::from_secs(GEMINI_CONNECT_TIMEOUT_SECS))
                .timeout(Duration::from_secs(GEMINI_REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            base_url,
            model,
            api_key: RwLock::new(clean_key(config.api_key.clone())),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            api_key
        )
    }

    async fn generate(&self, body: Value) -> EngineResult<String> {
        let api_key = self
            .api_key
            .read()
            .clone()
            .ok_or_else(|| EngineError::Config("Gemini API key is not configured".into()))?;

        info!("[engine] Google request model={}", self.model);

        let response = self
            .client
            .post(self.endpoint(&api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors can embed the URL, which carries the key
                let e = e.without_url();
                error!("[engine] Google transport failure: {}", e);
                EngineError::provider(GEMINI_PROVIDER_NAME, format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| {
            EngineError::provider(GEMINI_PROVIDER_NAME, format!("Failed to read response: {}", e.without_url()))
        })?;

        if !status.is_success() {
            error!("[engine] Google error {}: {}", status.as_u16(), truncate_utf8(&body_text, 500));
            return Err(EngineError::provider(
                GEMINI_PROVIDER_NAME,
                format!("API error {}: {}", status.as_u16(), truncate_utf8(&body_text, 200)),
            ));
        }

        let parsed: Value = serde_json::from_str(&body_text)?;
        Ok(extract_text(&parsed))
    }
}

fn clean_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

// ── Wire format ───────────────────────────────────────────────────────────────

/// Request body for a text-only completion.
pub fn text_request(system: &str, prompt: &str) -> Value {
    json!({
        "systemInstruction": { "parts": [{ "text": system }] },
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
    })
}

/// Request body for an image-grounded completion. Gemini takes base64
/// images as `inlineData` parts.
pub fn image_request(system: &str, prompt: &str, jpeg_base64: &str) -> Value {
    json!({
        "systemInstruction": { "parts": [{ "text": system }] },
        "contents": [{
            "role": "user",
            "parts": [
                { "text": prompt },
                { "inlineData": { "mimeType": "image/jpeg", "data": jpeg_base64 } }
            ]
        }],
    })
}

/// Concatenate the text parts of the first candidate. Thought parts from
/// thinking models are skipped. Returns an empty string when the response
/// carries no text (e.g. blocked by a safety filter).
pub fn extract_text(response: &Value) -> String {
    let Some(candidate) = response["candidates"].as_array().and_then(|c| c.first()) else {
        if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
            warn!("[engine] Google: prompt blocked (blockReason={})", reason);
        } else {
            warn!("[engine] Google: response had no candidates");
        }
        return String::new();
    };

    let text: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter(|p| !p.get("thought").and_then(|v| v.as_bool()).unwrap_or(false))
                .filter_map(|p| p["text"].as_str())
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = candidate["finishReason"].as_str() {
            if reason != "STOP" {
                warn!("[engine] Google: empty response with finishReason={}", reason);
            }
        }
    }
    text
}

/// Truncate to at most `max` bytes without splitting a UTF-8 character.
fn truncate_utf8(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ── GenerativeService trait implementation ───────────────────────────────────

#[async_trait]
impl GenerativeService for GeminiClient {
    fn name(&self) -> &str {
        GEMINI_PROVIDER_NAME
    }

    fn is_configured(&self) -> bool {
        self.api_key.read().is_some()
    }

    fn reconfigure(&self, credential: Option<String>) {
        let key = clean_key(credential);
        info!("[engine] Google credential {}", if key.is_some() { "updated" } else { "cleared" });
        *self.api_key.write() = key;
    }

    async fn complete_text(&self, system: &str, prompt: &str) -> EngineResult<String> {
        self.generate(text_request(system, prompt)).await
    }

    async fn complete_image(&self, system: &str, prompt: &str, jpeg_base64: &str) -> EngineResult<String> {
        self.generate(image_request(system, prompt, jpeg_base64)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>) -> GeminiConfig {
        GeminiConfig { api_key: key.map(String::from), ..GeminiConfig::default() }
    }

    #[test]
    fn test_defaults_and_endpoint() {
        let c = GeminiClient::new(&config(Some("k")));
        assert_eq!(c.model(), DEFAULT_GEMINI_MODEL);
        assert_eq!(
            c.endpoint("k"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=k"
        );
    }

    #[test]
    fn test_blank_key_counts_as_unconfigured() {
        assert!(!GeminiClient::new(&config(Some("   "))).is_configured());
        assert!(!GeminiClient::new(&config(None)).is_configured());
        assert!(GeminiClient::new(&config(Some("abc"))).is_configured());
    }

    #[test]
    fn test_reconfigure_swaps_credential() {
        let c = GeminiClient::new(&config(None));
        c.reconfigure(Some("new-key".into()));
        assert!(c.is_configured());
        c.reconfigure(None);
        assert!(!c.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_call_is_config_error() {
        let c = GeminiClient::new(&config(None));
        let err = c.complete_text("sys", "hi").await.unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_text_request_shape() {
        let body = text_request("be nice", "hello");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be nice");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_image_request_uses_inline_jpeg() {
        let body = image_request("sys", "what is this", "QUJD");
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], "QUJD");
    }

    #[test]
    fn test_extract_text_joins_parts_and_skips_thoughts() {
        let resp = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "pondering", "thought": true },
                    { "text": "[HAPPY] Hello" },
                    { "text": " there!" }
                ]},
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&resp), "[HAPPY] Hello there!");
    }

    #[test]
    fn test_extract_text_empty_cases() {
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&json!({ "promptFeedback": { "blockReason": "SAFETY" } })), "");
        assert_eq!(extract_text(&json!({ "candidates": [{ "finishReason": "SAFETY" }] })), "");
    }

    #[test]
    fn test_truncate_utf8_respects_char_boundaries() {
        assert_eq!(truncate_utf8("héllo", 2), "h");
        assert_eq!(truncate_utf8("abc", 10), "abc");
    }
}
