use anyhow::{Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::consts::DEFAULT_MODEL;
use crate::prompt;

use super::{Analysis, Analyzer, TokenUsage};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Low temperature for strict adherence to the scoring rules.
const TEMPERATURE: f64 = 0.1;

/// The model variant: one `generateContent` call per submission, with the
/// fixed SafeScan system instruction pinning the reply to JSON.
pub struct GeminiAnalyzer {
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiAnalyzer {
    pub fn new(model: Option<String>, api_key: String) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(text: &str) -> GenerateRequest {
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt::system_instruction()),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(text.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                response_mime_type: "application/json".to_string(),
            },
        }
    }

    /// Concatenate the text parts of the first candidate.
    fn reply_text(resp: &GenerateResponse) -> Result<String> {
        let Some(candidate) = resp.candidates.first() else {
            bail!("Gemini returned no candidates");
        };
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            bail!("Gemini returned an empty reply");
        }
        Ok(text)
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Analysis> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&Self::request_body(text))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Gemini API error ({}): {}", status, body);
        }

        let api_resp: GenerateResponse = resp.json().await?;

        let usage = api_resp.usage_metadata.as_ref().map(|u| TokenUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        let reply = Self::reply_text(&api_resp)?;
        let assessment = Assessment::from_model_text(&reply)?;

        Ok(Analysis { assessment, usage })
    }
}

// --- API types ---

#[derive(Serialize)]
struct GenerateRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

// Request parts always carry text; the Option is for response parts that
// may hold non-text payloads we skip.
#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

// Safety-blocked candidates can arrive without content; that surfaces as
// an empty reply rather than a decode error.
#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: ReplyContent,
}

#[derive(Deserialize, Default)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u64,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u64,
}
