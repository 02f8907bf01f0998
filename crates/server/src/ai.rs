use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{AiConfig, AppError, AssignmentIdea};

use crate::error_convert::reqwest_to_app_error;

/// Environment variable holding the generative-language API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// How much of an error body to keep in the upstream error message.
const ERROR_BODY_LIMIT: usize = 200;

// --- Environment helpers ---

fn api_key() -> Result<String, AppError> {
    let _ = dotenvy::dotenv();
    std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| AppError::not_configured(format!("{API_KEY_VAR} is not configured")))
}

// --- Request / response shapes ---

/// Prompt asking for `count` ideas about `topic`.
pub fn build_prompt(topic: &str, count: u8) -> String {
    format!(
        "Generate {count} creative and engaging assignment ideas for a school class \
         on the topic \"{topic}\". Each idea needs a short title, a one or two \
         sentence description of what students do, and an estimated completion time."
    )
}

/// JSON body for `models/{model}:generateContent` with a structured-output schema.
pub fn build_request_body(topic: &str, count: u8) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": build_prompt(topic, count) } ] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "estimatedTime": { "type": "STRING" }
                    },
                    "required": ["title", "description", "estimatedTime"]
                }
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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

/// Pull the idea list out of a `generateContent` response body.
///
/// The model's answer is itself a JSON string inside the first candidate's
/// first text part. Anything else is an upstream error.
pub fn parse_ideas(body: &str) -> Result<Vec<AssignmentIdea>, AppError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| AppError::upstream(format!("Malformed response from idea service: {e}")))?;

    let text = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .ok_or_else(|| AppError::upstream("The idea service returned no text."))?;

    let ideas: Vec<AssignmentIdea> = serde_json::from_str(text.trim())
        .map_err(|e| AppError::upstream(format!("Malformed ideas from idea service: {e}")))?;

    if ideas.is_empty() {
        return Err(AppError::upstream("The idea service returned no suggestions."));
    }
    Ok(ideas)
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

// --- Client ---

/// Thin client for the generative-language `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    config: AiConfig,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, config: AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Build a client with the key from `GEMINI_API_KEY`.
    pub fn from_env(config: &AiConfig) -> Result<Self, AppError> {
        Ok(Self::new(api_key()?, config.clone()))
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    #[tracing::instrument(skip(self), fields(model = %self.config.model))]
    pub async fn assignment_ideas(&self, topic: &str) -> Result<Vec<AssignmentIdea>, AppError> {
        let body = build_request_body(topic, self.config.idea_count);

        let response = self
            .http
            .post(self.endpoint_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(reqwest_to_app_error)?;

        let status = response.status();
        let text = response.text().await.map_err(reqwest_to_app_error)?;
        if !status.is_success() {
            tracing::error!(%status, body = truncate(&text), "Idea service returned an error");
            return Err(AppError::upstream(format!(
                "Idea service error ({status}): {}",
                truncate(&text)
            )));
        }

        let ideas = parse_ideas(&text)?;
        tracing::info!(count = ideas.len(), "Assignment ideas generated");
        Ok(ideas)
    }
}
