//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assembler::{GeneratedEvaluation, GenerationRequest, Source};
use crate::classify::ClassificationResult;
use crate::domain::{Evaluation, Language, QuestionCounts, QuestionKind};
use crate::error::{ApiError, OmrError};
use crate::omr::{normalize_focus, prepare_image, OmrAnalysis, OmrQuestionType, OmrRequest};

pub const DEFAULT_QUESTION_COUNT: usize = 15;
/// Upper bound on any single per-type count in one request.
pub const MAX_PER_TYPE: usize = 100;

//
// Evaluation generation
//

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationIn {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub book_title: Option<String>,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub counts: Option<QuestionCounts>,
    #[serde(default)]
    pub question_count: Option<usize>,
    #[serde(default)]
    pub pdf_content: Option<String>,
}

impl EvaluationIn {
    /// `subject` wins over `bookTitle`; explicit `counts` win over `questionCount`.
    /// Rejects any per-type count above `MAX_PER_TYPE`.
    pub fn into_request(self) -> Result<GenerationRequest, ApiError> {
        let subject = self
            .subject
            .filter(|s| !s.trim().is_empty())
            .or(self.book_title)
            .unwrap_or_default();
        let counts = self
            .counts
            .unwrap_or_else(|| QuestionCounts::from_total(self.question_count.unwrap_or(DEFAULT_QUESTION_COUNT)));
        if let Some(kind) = QuestionKind::ALL.into_iter().find(|k| counts.get(*k) > MAX_PER_TYPE) {
            return Err(ApiError::BadRequest(format!(
                "{} count {} exceeds the limit of {} per type",
                kind.short(),
                counts.get(kind),
                MAX_PER_TYPE
            )));
        }
        Ok(GenerationRequest {
            topic: self.topic,
            subject,
            course: self.course,
            language: self.language.as_deref().map(Language::from_tag).unwrap_or_default(),
            counts,
            pdf_content: self.pdf_content,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationOut {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub classification: ClassificationResult,
    pub source: Source,
}

impl From<GeneratedEvaluation> for EvaluationOut {
    fn from(g: GeneratedEvaluation) -> Self {
        Self { evaluation: g.evaluation, classification: g.classification, source: g.source }
    }
}

//
// OMR
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmrImageIn {
    #[serde(default)]
    pub page_num: Option<u32>,
    pub image_bytes_or_data_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmrAnalyzeIn {
    #[serde(default)]
    pub images: Vec<OmrImageIn>,
    #[serde(default)]
    pub expected_questions: usize,
    #[serde(default)]
    pub focus_question_nums: Option<Vec<i64>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    /// `{"3": "ms"}`; unknown keys or tags are ignored.
    #[serde(default)]
    pub question_types: HashMap<String, String>,
}

impl OmrAnalyzeIn {
    pub fn into_request(self) -> Result<OmrRequest, OmrError> {
        let images = self
            .images
            .iter()
            .enumerate()
            .map(|(i, img)| prepare_image(img.page_num.unwrap_or(i as u32 + 1), &img.image_bytes_or_data_url))
            .collect::<Result<Vec<_>, _>>()?;
        let context = [&self.title, &self.subject, &self.topic]
            .into_iter()
            .filter_map(|s| s.as_deref().map(str::trim).filter(|s| !s.is_empty()))
            .collect::<Vec<_>>()
            .join(" | ");
        let question_types = self
            .question_types
            .iter()
            .filter_map(|(k, v)| Some((k.trim().parse::<u32>().ok()?, OmrQuestionType::from_tag(v)?)))
            .collect();
        Ok(OmrRequest {
            images,
            expected_questions: self.expected_questions,
            focus: normalize_focus(self.focus_question_nums.as_deref().unwrap_or(&[])),
            context,
            question_types,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct OmrOut {
    pub success: bool,
    pub analysis: OmrAnalysis,
}

//
// Status
//

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatusOut {
    pub provider: String,
    pub model: String,
    pub vision_model: String,
    pub is_active: bool,
    pub text_configured: bool,
    pub vision_configured: bool,
}
