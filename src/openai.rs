//! Minimal OpenAI-compatible client (OpenRouter by default).
//!
//! We only call chat.completions: plain prompts for evaluation generation and
//! multimodal prompts (text + `image_url` data URLs) for OMR.
//! Calls are instrumented and log model names, latencies, and response sizes (not contents).
//!
//! NOTE: We never log the API key.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, instrument};

use crate::ai::{CompletionOptions, TextCompletion, VisionExtraction, VisionImage};
use crate::error::AiError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_VISION_MODEL: &str = "google/gemini-2.0-flash-exp:free";
const DEFAULT_APP_NAME: &str = "Evaluacion Backend";
const VISION_MAX_TOKENS: u32 = 4096;

/// Keys shorter than this are reported as inactive by `/ai/status`.
pub const MIN_ACTIVE_KEY_LEN: usize = 30;

#[derive(Clone)]
pub struct OpenAiClient {
  pub client: reqwest::Client,
  api_key: String,
  pub base_url: String,
  pub model: String,
  pub vision_model: String,
  pub site_url: String,
  pub app_name: String,
}

impl std::fmt::Debug for OpenAiClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OpenAiClient")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .field("vision_model", &self.vision_model)
      .finish_non_exhaustive()
  }
}

fn env_non_empty(key: &str) -> Option<String> {
  std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl OpenAiClient {
  /// Construct the client from OPENROUTER_* (or OPENAI_*) variables.
  /// A missing or blank key is a configuration error.
  pub fn from_env() -> Result<Self, AiError> {
    let api_key = env_non_empty("OPENROUTER_API_KEY")
      .or_else(|| env_non_empty("OPENAI_API_KEY"))
      .ok_or_else(|| AiError::Configuration("OPENROUTER_API_KEY / OPENAI_API_KEY not set".into()))?;
    let base_url = env_non_empty("OPENROUTER_BASE_URL")
      .or_else(|| env_non_empty("OPENAI_BASE_URL"))
      .unwrap_or_else(|| DEFAULT_BASE_URL.into());
    let model = env_non_empty("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
    let vision_model = env_non_empty("OPENROUTER_VISION_MODEL").unwrap_or_else(|| DEFAULT_VISION_MODEL.into());
    let site_url = env_non_empty("OPENROUTER_SITE_URL").unwrap_or_else(|| "http://localhost:3000".into());
    let app_name = env_non_empty("OPENROUTER_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.into());
    Self::new(api_key, base_url, model, vision_model, site_url, app_name)
  }

  pub fn new(
    api_key: String,
    base_url: String,
    model: String,
    vision_model: String,
    site_url: String,
    app_name: String,
  ) -> Result<Self, AiError> {
    if api_key.trim().is_empty() {
      return Err(AiError::Configuration("empty API key".into()));
    }
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(60))
      .build()
      .map_err(|e| AiError::Configuration(format!("HTTP client: {}", e)))?;
    Ok(Self {
      client,
      api_key,
      base_url: base_url.trim_end_matches('/').to_string(),
      model,
      vision_model,
      site_url,
      app_name,
    })
  }

  pub fn key_len(&self) -> usize {
    self.api_key.len()
  }

  async fn chat(&self, req: &ChatCompletionRequest) -> Result<String, AiError> {
    let url = format!("{}/chat/completions", self.base_url);
    let start = Instant::now();
    let res = self.client.post(&url)
      .header(USER_AGENT, "evaluacion-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .header("HTTP-Referer", &self.site_url)
      .header("X-Title", &self.app_name)
      .json(req).send().await?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let message = extract_openai_error(&body).unwrap_or(body);
      error!(target: "evaluacion_backend", model = %req.model, status = status.as_u16(), elapsed = ?start.elapsed(), "Chat completion failed");
      return Err(AiError::Http { status: status.as_u16(), message });
    }

    let body: ChatCompletionResponse = res.json().await?;
    if let Some(usage) = &body.usage {
      info!(target: "evaluacion_backend", prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "Chat completion usage");
    }
    let text = body.choices.into_iter().next()
      .and_then(|c| c.message.content)
      .unwrap_or_default().trim().to_string();
    info!(target: "evaluacion_backend", model = %req.model, elapsed = ?start.elapsed(), response_len = text.len(), "Chat completion received");

    if text.is_empty() { Err(AiError::EmptyResponse) } else { Ok(text) }
  }
}

#[async_trait]
impl TextCompletion for OpenAiClient {
  #[instrument(level = "info", skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len(), json = opts.json_mode))]
  async fn complete(&self, prompt: &str, opts: CompletionOptions) -> Result<String, AiError> {
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![ChatMessageReq { role: "user".into(), content: Value::String(prompt.into()) }],
      temperature: opts.temperature,
      response_format: opts.json_mode.then(|| ResponseFormat { r#type: "json_object".into() }),
      max_tokens: Some(opts.max_tokens),
    };
    self.chat(&req).await
  }

  fn model(&self) -> &str {
    &self.model
  }
}

#[async_trait]
impl VisionExtraction for OpenAiClient {
  #[instrument(level = "info", skip(self, prompt, images), fields(model = %self.vision_model, pages = images.len()))]
  async fn analyze(&self, prompt: &str, images: &[VisionImage]) -> Result<String, AiError> {
    let req = ChatCompletionRequest {
      model: self.vision_model.clone(),
      messages: vec![ChatMessageReq { role: "user".into(), content: vision_content(prompt, images) }],
      temperature: 0.0,
      response_format: None,
      max_tokens: Some(VISION_MAX_TOKENS),
    };
    self.chat(&req).await
  }

  fn model(&self) -> &str {
    &self.vision_model
  }
}

/// Multimodal `content` array: the prompt first, then one `image_url` part per page.
fn vision_content(prompt: &str, images: &[VisionImage]) -> Value {
  let mut parts = vec![json!({"type": "text", "text": prompt})];
  parts.extend(images.iter().map(|img| json!({"type": "image_url", "image_url": {"url": img.data_url()}})));
  Value::Array(parts)
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  response_format: Option<ResponseFormat>,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: Value }
#[derive(Serialize)]
struct ResponseFormat { #[serde(rename = "type")] r#type: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)] choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Try to extract a clean error message from an OpenAI-style error body.
fn extract_openai_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}
