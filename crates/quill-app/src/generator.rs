use std::time::Instant;

use chrono::Utc;
use log::{error, warn};
use serde::Deserialize;
use serde_json::json;

use quill_core::{GenerationParams, GenerationResult, Genre, Length, PieceType, ResultMetadata, Tone};

use crate::config::GeminiConfig;
use crate::error::GenerateError;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const TEMPERATURE: f64 = 0.8;
const TOP_P: f64 = 0.9;

/// Client for the Gemini `generateContent` endpoint. One request per
/// generation, no retry, no streaming.
#[derive(Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GenerationClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Builds the instruction from the parameter record, calls the service
    /// with the declared response schema, parses the typed reply, and
    /// stamps the generation metadata.
    pub async fn generate(
        &self,
        params: &GenerationParams,
    ) -> Result<GenerationResult, GenerateError> {
        let (piece_type, genre, tone, length) = required(params)?;
        let prompt = build_prompt(params)?;

        let api_key = self.config.api_key.clone().ok_or_else(|| {
            error!("generation requested without GEMINI_API_KEY");
            GenerateError::Failed
        })?;

        let started = Instant::now();
        let url = format!("{API_BASE}/models/{}:generateContent", self.config.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request_body(&prompt))
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {e}");
                GenerateError::Failed
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Gemini response could not be read: {e}");
            GenerateError::Failed
        })?;

        if !status.is_success() {
            warn!("Gemini returned HTTP {status}: {body}");
            return Err(classify_failure(status.as_u16(), &body));
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Gemini response envelope did not parse: {e}");
            GenerateError::MalformedResponse
        })?;
        let piece = extract_piece(&envelope)?;

        let generation_time = (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;

        Ok(GenerationResult {
            id: format!("gen-{}", Utc::now().timestamp_millis()),
            title: piece.title,
            content: piece.content,
            summary: piece.summary,
            metadata: ResultMetadata {
                params: params.clone(),
                piece_type,
                genre,
                tone,
                word_count: length,
                token_usage: envelope.usage_metadata.and_then(|u| u.total_token_count),
                generation_time,
            },
        })
    }
}

fn required(
    params: &GenerationParams,
) -> Result<(PieceType, Genre, Tone, Length), GenerateError> {
    match (params.piece_type, params.genre, params.tone, params.length) {
        (Some(piece_type), Some(genre), Some(tone), Some(length)) => {
            Ok((piece_type, genre, tone, length))
        }
        _ => Err(GenerateError::Failed),
    }
}

/// The natural-language instruction sent to the service. Every parameter
/// is embedded; the optional title and instructions lines appear only when
/// the user filled them in.
fn build_prompt(params: &GenerationParams) -> Result<String, GenerateError> {
    let (piece_type, genre, tone, length) = required(params)?;

    let mut prompt = format!(
        "Generate a creative piece based on the following parameters:\n\
         - Type: {}\n\
         - Genre: {}\n\
         - Tone: {}\n\
         - Desired Length: {} ({})\n",
        piece_type.id(),
        genre.id(),
        tone.id(),
        length.id(),
        length.gloss(),
    );

    let title = params.custom_title.trim();
    if !title.is_empty() {
        prompt.push_str(&format!(
            "- Provided Title: {title} (Use this title or be heavily inspired by it)\n"
        ));
    }
    let instructions = params.custom_prompt.trim();
    if !instructions.is_empty() {
        prompt.push_str(&format!("- Additional Instructions: {instructions}\n"));
    }

    prompt.push_str(&format!(
        "\nYour task is to generate a {} {}.\n\
         Your output MUST be a valid JSON object. Do not include any text before or after the JSON object.\n\
         The JSON object must conform to the provided schema, containing a 'title', 'content', and 'summary'.\n\
         The 'content' field should be a single string with appropriate formatting (like '\\n' for new lines).",
        genre.id(),
        piece_type.id(),
    ));

    Ok(prompt)
}

/// Request payload: the prompt plus the declared response contract and
/// sampling parameters.
fn request_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "temperature": TEMPERATURE,
            "topP": TOP_P,
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING", "description": "The title of the generated piece." },
                    "content": { "type": "STRING", "description": "The full story or poem. Use \\n for line breaks." },
                    "summary": { "type": "STRING", "description": "A 2-3 line summary of the main theme or idea." }
                },
                "required": ["title", "content", "summary"]
            }
        }
    })
}

/// Quota exhaustion gets its own user-facing error; everything else is the
/// generic failure.
fn classify_failure(status: u16, body: &str) -> GenerateError {
    if status == 429 || body.contains("quota") || body.contains("RESOURCE_EXHAUSTED") {
        GenerateError::QuotaExceeded
    } else {
        GenerateError::Failed
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    total_token_count: Option<u64>,
}

/// The declared response contract: exactly these three string fields.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct GeneratedPiece {
    title: String,
    content: String,
    summary: String,
}

/// Pulls the candidate text out of the envelope and validates it against
/// the declared shape. Any mismatch is a malformed response, never a raw
/// parse failure.
fn extract_piece(envelope: &GenerateContentResponse) -> Result<GeneratedPiece, GenerateError> {
    let text = envelope
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.as_deref())
        .ok_or(GenerateError::MalformedResponse)?;

    serde_json::from_str(text.trim()).map_err(|e| {
        error!("generated piece did not match the declared schema: {e}");
        GenerateError::MalformedResponse
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GenerationParams {
        GenerationParams {
            piece_type: Some(PieceType::Story),
            genre: Some(Genre::Fantasy),
            tone: Some(Tone::Humorous),
            length: Some(Length::Short),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_embeds_every_parameter() {
        let prompt = build_prompt(&params()).unwrap();
        assert!(prompt.contains("- Type: Story"));
        assert!(prompt.contains("- Genre: Fantasy"));
        assert!(prompt.contains("- Tone: humorous"));
        assert!(prompt.contains("- Desired Length: short (around 150 words)"));
        assert!(prompt.contains("Your task is to generate a Fantasy Story."));
    }

    #[test]
    fn test_prompt_omits_optional_lines_when_blank() {
        let prompt = build_prompt(&params()).unwrap();
        assert!(!prompt.contains("Provided Title"));
        assert!(!prompt.contains("Additional Instructions"));

        let mut with_extras = params();
        with_extras.custom_title = "The Last Dragon's Secret".into();
        with_extras.custom_prompt = "a dragon who loves to bake".into();
        let prompt = build_prompt(&with_extras).unwrap();
        assert!(prompt.contains(
            "- Provided Title: The Last Dragon's Secret (Use this title or be heavily inspired by it)"
        ));
        assert!(prompt.contains("- Additional Instructions: a dragon who loves to bake"));
    }

    #[test]
    fn test_prompt_requires_complete_params() {
        let mut incomplete = params();
        incomplete.length = None;
        assert_eq!(build_prompt(&incomplete), Err(GenerateError::Failed));
    }

    #[test]
    fn test_request_body_declares_schema_and_sampling() {
        let body = request_body("write me a story");
        let config = &body["generationConfig"];
        assert_eq!(config["temperature"], 0.8);
        assert_eq!(config["topP"], 0.9);
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(
            config["responseSchema"]["required"],
            serde_json::json!(["title", "content", "summary"])
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], "write me a story");
    }

    #[test]
    fn test_extract_piece_from_valid_envelope() {
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": { "parts": [{ "text": "{\"title\":\"T\",\"content\":\"C\",\"summary\":\"S\"}" }] }
                }],
                "usageMetadata": { "totalTokenCount": 321 }
            }"#,
        )
        .unwrap();

        let piece = extract_piece(&envelope).unwrap();
        assert_eq!(piece.title, "T");
        assert_eq!(piece.content, "C");
        assert_eq!(piece.summary, "S");
        assert_eq!(
            envelope.usage_metadata.and_then(|u| u.total_token_count),
            Some(321)
        );
    }

    #[test]
    fn test_schema_violating_reply_is_malformed() {
        // Valid JSON, but the summary field is missing.
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"title\":\"T\",\"content\":\"C\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_piece(&envelope), Err(GenerateError::MalformedResponse));
    }

    #[test]
    fn test_empty_envelope_is_malformed() {
        let envelope: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(extract_piece(&envelope), Err(GenerateError::MalformedResponse));
    }

    #[test]
    fn test_quota_classification() {
        assert_eq!(classify_failure(429, "slow down"), GenerateError::QuotaExceeded);
        assert_eq!(
            classify_failure(403, r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#),
            GenerateError::QuotaExceeded
        );
        assert_eq!(
            classify_failure(400, "You exceeded your current quota"),
            GenerateError::QuotaExceeded
        );
        assert_eq!(classify_failure(500, "internal error"), GenerateError::Failed);
    }

    #[test]
    fn test_quota_error_displays_literal_message() {
        assert_eq!(
            GenerateError::QuotaExceeded.to_string(),
            "API quota exceeded. Please try again later."
        );
    }
}
