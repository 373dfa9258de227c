//! Capability seams for text and vision models.
//!
//! The assembler and the OMR extractor only see these traits; `openai` provides
//! the HTTP implementation and tests provide in-memory fakes.

use async_trait::async_trait;

use crate::error::AiError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionOptions {
  pub temperature: f32,
  pub max_tokens: u32,
  pub json_mode: bool,
}

impl Default for CompletionOptions {
  fn default() -> Self {
    Self { temperature: 0.7, max_tokens: 4000, json_mode: true }
  }
}

/// Single-prompt text completion. The returned text may be fenced JSON.
#[async_trait]
pub trait TextCompletion: Send + Sync {
  async fn complete(&self, prompt: &str, opts: CompletionOptions) -> Result<String, AiError>;

  fn model(&self) -> &str;
}

/// One scanned page, already split from its data URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisionImage {
  pub page_num: u32,
  pub mime_type: String,
  pub base64: String,
}

impl VisionImage {
  pub fn data_url(&self) -> String {
    format!("data:{};base64,{}", self.mime_type, self.base64)
  }
}

/// Prompt + images in, raw model text out. Parsing lives in `omr`.
#[async_trait]
pub trait VisionExtraction: Send + Sync {
  async fn analyze(&self, prompt: &str, images: &[VisionImage]) -> Result<String, AiError>;

  fn model(&self) -> &str;
}
