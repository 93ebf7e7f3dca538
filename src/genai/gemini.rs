//! Blocking client for the Gemini `generateContent` endpoint.

use super::TextGenerator;
use crate::config::{API_KEY_ENV, GeminiConfig};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub struct GeminiClient {
    agent: ureq::Agent,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when there is none.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

impl GeminiClient {
    pub fn from_config(cfg: &GeminiConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(cfg.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_key: cfg.api_key.clone().filter(|k| !k.trim().is_empty()),
            model: cfg.model.clone(),
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "No Gemini API key: set gemini.api_key in the config file or {}",
                API_KEY_ENV
            ))
        })?;

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(model = %self.model, prompt_len = prompt.len(), "generate: sending request");
        let start = Instant::now();

        let mut resp = self
            .agent
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .send_json(&body)
            .map_err(|e| AppError::Generation(format!("request failed: {}", e)))?;

        let status = resp.status();
        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generate: response"
        );

        if !status.is_success() {
            let detail = resp.body_mut().read_to_string().unwrap_or_default();
            warn!(status = status.as_u16(), "generate: service returned an error");
            return Err(AppError::Generation(format!(
                "HTTP {}: {}",
                status.as_u16(),
                detail.trim()
            )));
        }

        let parsed: GenerateContentResponse = resp
            .body_mut()
            .read_json()
            .map_err(|e| AppError::Generation(format!("unreadable reply: {}", e)))?;

        Ok(parsed.into_text())
    }
}
