use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug)]
pub enum GeminiError {
    MissingApiKey,
    Transport,
    Upstream(u16),
}

/// Thin proxy client for the generative-text collaborator. The key is
/// read per call so the terminal can be started without one and gain
/// the feature when the environment provides it.
pub struct GeminiClient {
    client: Client,
}

impl GeminiClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        GeminiClient { client }
    }

    /// Single-turn generation. `response_mime_type` switches the model
    /// into JSON mode for scenario calls.
    pub async fn generate(
        &self,
        prompt: &str,
        response_mime_type: Option<&str>,
    ) -> Result<String, GeminiError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| GeminiError::MissingApiKey)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: response_mime_type.map(|mime| GenerationConfig {
                response_mime_type: mime.to_string(),
            }),
        };

        let response = self
            .client
            .post(format!("{}?key={}", GEMINI_ENDPOINT, api_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                warn!("gemini request error: {}", err);
                GeminiError::Transport
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("gemini request failed: {}", status);
            return Err(GeminiError::Upstream(status.as_u16()));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|err| {
            warn!("gemini response decode error: {}", err);
            GeminiError::Transport
        })?;

        Ok(body.text().unwrap_or_default())
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        GeminiClient::new()
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// First candidate text, the only part of the payload the terminal
    /// cares about.
    fn text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .clone()
    }
}
