//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs basic request and result info.

use std::sync::Arc;
use axum::{extract::{rejection::JsonRejection, State}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::assembler::generate;
use crate::error::ApiError;
use crate::omr;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_ai_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let st = &state.ai_status;
  Json(AiStatusOut {
    provider: st.provider.clone(),
    model: st.model.clone(),
    vision_model: st.vision_model.clone(),
    is_active: st.is_active,
    text_configured: state.text.is_some(),
    vision_configured: state.vision.is_some(),
  })
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_evaluation(
  State(state): State<Arc<AppState>>,
  body: Result<Json<EvaluationIn>, JsonRejection>,
) -> Result<Json<EvaluationOut>, ApiError> {
  let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let req = body.into_request()?;
  let out = generate(&req, &state.settings, &state.prompts, state.text_ai()).await?;
  info!(target: "evaluation", topic = %req.topic, questions = out.evaluation.questions.len(), source = ?out.source, "HTTP evaluation served");
  Ok(Json(out.into()))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_omr_analyze(
  State(state): State<Arc<AppState>>,
  body: Result<Json<OmrAnalyzeIn>, JsonRejection>,
) -> Result<Json<OmrOut>, ApiError> {
  let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let req = body.into_request()?;
  let analysis = omr::analyze(state.vision_ai(), &state.prompts, &req).await?;
  info!(target: "omr", pages = req.images.len(), answers = analysis.answers.len(), "HTTP OMR analysis served");
  Ok(Json(OmrOut { success: true, analysis }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use axum::{body::Body, http::{Request, StatusCode}};
  use serde_json::{json, Value};
  use tower::ServiceExt;

  use crate::ai::{VisionExtraction, VisionImage};
  use crate::config::GenerationSettings;
  use crate::error::AiError;
  use crate::prompts::Prompts;
  use crate::routes::build_router;

  struct FixedVision(&'static str);

  #[async_trait]
  impl VisionExtraction for FixedVision {
    async fn analyze(&self, _prompt: &str, _images: &[VisionImage]) -> Result<String, AiError> {
      Ok(self.0.to_string())
    }
    fn model(&self) -> &str {
      "fixed-vision"
    }
  }

  fn local_state() -> Arc<AppState> {
    Arc::new(AppState::with_capabilities(GenerationSettings::default(), Prompts::default(), None, None))
  }

  async fn call(state: Arc<AppState>, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = Request::builder().method(method).uri(uri).header("content-type", "application/json");
    let req = match body {
      Some(b) => req.body(Body::from(b.to_string())).unwrap(),
      None => req.body(Body::empty()).unwrap(),
    };
    let res = build_router(state).oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
  }

  #[tokio::test]
  async fn health_is_ok() {
    let (status, body) = call(local_state(), "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
  }

  #[tokio::test]
  async fn ai_status_reports_unconfigured_capabilities() {
    let (status, body) = call(local_state(), "GET", "/api/v1/ai/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isActive"], false);
    assert_eq!(body["textConfigured"], false);
    assert_eq!(body["visionConfigured"], false);
  }

  #[tokio::test]
  async fn evaluation_endpoint_returns_the_local_evaluation_with_metadata() {
    let (status, body) = call(
      local_state(),
      "POST",
      "/api/v1/evaluations",
      Some(json!({"topic": "sistema respiratorio", "subject": "Ciencias Naturales", "course": "5to Básico",
        "language": "es", "counts": {"tf": 5, "mc": 5, "ms": 5}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluationTitle"], "EVALUACIÓN - SISTEMA RESPIRATORIO");
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(15));
    assert_eq!(body["questions"][0]["type"], "TRUE_FALSE");
    assert_eq!(body["classification"], json!({"level": 3, "domain": "SCIENCE"}));
    assert_eq!(body["source"], "local");
  }

  #[tokio::test]
  async fn empty_topic_is_unprocessable_and_bad_json_is_bad_request() {
    let (status, body) = call(local_state(), "POST", "/api/v1/evaluations", Some(json!({"topic": "  "}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "EMPTY_TOPIC");

    let (status, body) = call(local_state(), "POST", "/api/v1/evaluations", Some(json!({"topic": 7}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
  }

  #[tokio::test]
  async fn oversized_counts_are_rejected_before_generation() {
    let body = json!({"topic": "reciclaje", "counts": {"tf": 5, "ms": 20000}});
    let (status, body) = call(local_state(), "POST", "/api/v1/evaluations", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].as_str().unwrap().contains("ms count 20000"));

    let body = json!({"topic": "reciclaje", "counts": {"mc": 100}});
    let (status, body) = call(local_state(), "POST", "/api/v1/evaluations", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(100));
  }

  #[tokio::test]
  async fn omr_without_vision_signals_manual_fallback() {
    let body = json!({"images": [{"pageNum": 1, "imageBytesOrDataUrl": "data:image/png;base64,QUJD"}], "expectedQuestions": 5});
    let (status, body) = call(local_state(), "POST", "/api/v1/omr/analyze", Some(body)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "VISION_UNAVAILABLE");
    assert_eq!(body["fallback"], true);
  }

  #[tokio::test]
  async fn omr_without_images_is_bad_request() {
    let (status, body) = call(local_state(), "POST", "/api/v1/omr/analyze", Some(json!({"images": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NO_IMAGES");
  }

  #[tokio::test]
  async fn omr_focus_request_returns_exactly_the_requested_records() {
    let vision: Arc<dyn VisionExtraction> = Arc::new(FixedVision(
      r#"{"studentName": "Ana", "rut": "11.111.111-1", "confidence": "high", "answers": [
        {"questionNum": 2, "questionType": "mc", "evidence": "CIRCLE", "detected": "c"},
        {"questionNum": 5, "questionType": "tf", "evidence": "STRONG_X", "detected": "F"}]}"#,
    ));
    let state = Arc::new(AppState::with_capabilities(GenerationSettings::default(), Prompts::default(), None, Some(vision)));
    let body = json!({
      "images": [{"imageBytesOrDataUrl": "QUJD"}],
      "expectedQuestions": 5,
      "focusQuestionNums": [2, 3]
    });
    let (status, body) = call(state, "POST", "/api/v1/omr/analyze", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let answers = body["analysis"]["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0]["detected"], "C");
    assert_eq!(answers[1]["questionNum"], 3);
    assert_eq!(answers[1]["evidenceLabel"], "EMPTY");
    assert_eq!(answers[1]["detected"], Value::Null);
    assert_eq!(body["analysis"]["studentName"], "Ana");
  }
}
