//! Error types for the AI adapters, evaluation generation, OMR and the HTTP surface.
//!
//! Only `ApiError` ever reaches a client. `AiError` is always absorbed by the
//! assembler, which falls back to local synthesis.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiError {
  #[error("AI capability not configured: {0}")]
  Configuration(String),

  #[error("transport error: {0}")]
  Transport(String),

  #[error("upstream HTTP {status}: {message}")]
  Http { status: u16, message: String },

  #[error("AI call timed out after {0}s")]
  Timeout(u64),

  #[error("unparsable AI response: {reason}")]
  UpstreamParse { reason: String, raw: String },

  #[error("AI returned an empty response")]
  EmptyResponse,
}

impl From<reqwest::Error> for AiError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      AiError::Transport(format!("request timed out: {}", err))
    } else {
      AiError::Transport(err.to_string())
    }
  }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvaluationError {
  #[error("topic is empty")]
  EmptyTopic,
}

#[derive(Debug, Clone, Error)]
pub enum OmrError {
  #[error("at least one image is required")]
  NoImages,

  #[error("invalid image on page {page}: {reason}")]
  InvalidImage { page: u32, reason: String },

  #[error("vision capability not configured")]
  VisionUnavailable,

  #[error("vision call failed: {0}")]
  Upstream(#[from] AiError),

  #[error("could not parse the vision response: {0}")]
  UnparsableResponse(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Evaluation(#[from] EvaluationError),

  #[error(transparent)]
  Omr(#[from] OmrError),

  #[error("bad request: {0}")]
  BadRequest(String),
}

impl ApiError {
  fn error_code(&self) -> &'static str {
    match self {
      ApiError::Evaluation(EvaluationError::EmptyTopic) => "EMPTY_TOPIC",
      ApiError::Omr(OmrError::NoImages) => "NO_IMAGES",
      ApiError::Omr(OmrError::InvalidImage { .. }) => "INVALID_IMAGE",
      ApiError::Omr(OmrError::VisionUnavailable) => "VISION_UNAVAILABLE",
      ApiError::Omr(OmrError::Upstream(_)) => "UPSTREAM_ERROR",
      ApiError::Omr(OmrError::UnparsableResponse(_)) => "UNPARSABLE_RESPONSE",
      ApiError::BadRequest(_) => "BAD_REQUEST",
    }
  }

  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Evaluation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Omr(OmrError::NoImages) | ApiError::Omr(OmrError::InvalidImage { .. }) => StatusCode::BAD_REQUEST,
      ApiError::Omr(OmrError::VisionUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
      ApiError::Omr(OmrError::Upstream(_)) | ApiError::Omr(OmrError::UnparsableResponse(_)) => StatusCode::BAD_GATEWAY,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
    }
  }

  /// Set when the client should switch to manual grading.
  fn fallback(&self) -> bool {
    matches!(self, ApiError::Omr(OmrError::VisionUnavailable) | ApiError::Omr(OmrError::Upstream(_)))
  }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: String,
  pub code: &'static str,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub fallback: bool,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = ErrorBody { error: self.to_string(), code: self.error_code(), fallback: self.fallback() };
    (self.status_code(), Json(body)).into_response()
  }
}
