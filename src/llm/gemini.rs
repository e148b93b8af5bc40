// ABOUTME: Google Gemini plan composer sending meal-plan instructions to generateContent
// ABOUTME: Requests a JSON-only answer and maps every failure to a PlannerError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Planner
//!
//! Single-shot `generateContent` call carrying the instruction text as one
//! user message.
//!
//! ## Configuration
//!
//! Set `GEMINI_API_KEY` with a key from Google AI Studio. `GEMINI_MODEL`
//! selects the model (default `gemini-2.5-flash`) and `GEMINI_BASE_URL`
//! points the client at a proxy or a local stub.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use mealplan_core::errors::{AppError, ErrorCode, PlannerError};
use mealplan_intelligence::rehydrate::strip_code_fence;
use mealplan_intelligence::InstructionPayload;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::PlanComposer;
use crate::config::PlannerConfig;
use crate::constants::planner::CONNECT_TIMEOUT_SECS;

/// MIME type requested for the model answer
const JSON_MIME_TYPE: &str = "application/json";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Part of content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    /// Text content
    Text { text: String },
    /// Anything else the model returned (function calls, inline data)
    Other(serde_json::Value),
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    candidate_count: u32,
    response_mime_type: &'static str,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Planner Implementation
// ============================================================================

/// Google Gemini plan composer
pub struct GeminiPlanner {
    api_key: String,
    client: Client,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GeminiPlanner {
    /// Create a planner from the server's planner settings
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot
    /// be built.
    pub fn from_config(config: &PlannerConfig) -> Result<Self, AppError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::new(ErrorCode::ConfigMissing, "GEMINI_API_KEY environment variable not set")
            })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            client,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            temperature: config.temperature,
        })
    }

    /// Build the API URL for the configured model
    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Wrap the instruction text as a single user message
    fn build_gemini_request(&self, payload: &InstructionPayload) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart::Text {
                    text: payload.text.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                candidate_count: 1,
                response_mime_type: JSON_MIME_TYPE,
            },
        }
    }

    /// Extract the first text part of the first candidate
    fn extract_content(response: &GeminiResponse) -> Result<String, PlannerError> {
        let candidate = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .ok_or_else(|| PlannerError::external("No candidates in Gemini response"))?;

        candidate
            .content
            .as_ref()
            .and_then(|content| {
                content.parts.iter().find_map(|part| match part {
                    ContentPart::Text { text } => Some(text.clone()),
                    ContentPart::Other(_) => None,
                })
            })
            .ok_or_else(|| {
                PlannerError::external(format!(
                    "No text content in Gemini response (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ))
            })
    }

    /// Map a non-success status to a planner error
    fn map_api_error(status: u16, response_text: &str) -> PlannerError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => PlannerError::rate_limited(Self::extract_quota_message(&message)),
            _ => PlannerError::external(format!("Gemini API error ({status}): {message}")),
        }
    }

    /// Extract a readable quota message from a Gemini rate-limit error
    fn extract_quota_message(message: &str) -> String {
        // Example: "Please retry in 6.406453963s."
        const RETRY_PREFIX: &str = "Please retry in ";

        let seconds = message
            .find(RETRY_PREFIX)
            .map(|pos| &message[pos + RETRY_PREFIX.len()..])
            .and_then(|rest| rest.find('s').map(|end| &rest[..end]))
            .and_then(|value| value.parse::<f64>().ok());

        seconds.map_or_else(
            || "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
            |seconds| {
                format!(
                    "AI service quota exceeded. Please try again in {} seconds.",
                    seconds.ceil() as u64
                )
            },
        )
    }
}

#[async_trait]
impl PlanComposer for GeminiPlanner {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, payload), fields(model = %self.model, manifest_size = payload.manifest_lines.len()))]
    async fn invoke(&self, payload: &InstructionPayload) -> Result<String, PlannerError> {
        let request = self.build_gemini_request(payload);

        debug!("Sending meal-plan request to Gemini API");

        let response = self
            .client
            .post(self.build_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| PlannerError::external(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| PlannerError::external(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| PlannerError::external(format!("Failed to parse Gemini response: {e}")))?;

        if let Some(error) = gemini_response.error {
            return Err(PlannerError::external(format!(
                "Gemini API error: {}",
                error.message
            )));
        }

        let content = Self::extract_content(&gemini_response)?;
        debug!(chars = content.len(), "Received Gemini plan response");
        Ok(strip_code_fence(&content).to_owned())
    }
}

impl Debug for GeminiPlanner {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiPlanner")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
