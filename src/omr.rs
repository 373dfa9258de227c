//! OMR answer extraction over a vision model.
//!
//! The model gets a forensic-auditor prompt and returns loosely structured JSON.
//! Everything here turns that into strict `AnswerRecord`s:
//!
//! - `tf` detected is "V" / "F" / null
//! - `mc` detected is one letter A-D; several marks invalidate it (null)
//! - `ms` detected is the sorted, comma-joined set of marked letters, or null
//! - `EMPTY` and `WEAK_MARK` evidence always mean null
//!
//! Records are unique per question number and sorted. In focus (re-check) mode
//! the result holds exactly the requested numbers.

use std::collections::{BTreeMap, HashMap};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::ai::{VisionExtraction, VisionImage};
use crate::error::OmrError;
use crate::prompts::Prompts;
use crate::util::{outermost_json_object, strip_code_fences, trunc_for_log};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OmrQuestionType {
  Tf,
  Mc,
  Ms,
}

impl OmrQuestionType {
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag.trim().to_ascii_lowercase().as_str() {
      "tf" | "true_false" | "vf" => Some(Self::Tf),
      "mc" | "multiple_choice" => Some(Self::Mc),
      "ms" | "multiple_selection" => Some(Self::Ms),
      _ => None,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evidence {
  StrongX,
  Check,
  Circle,
  Fill,
  Empty,
  WeakMark,
}

impl Evidence {
  // WEAK_MARK and EMPTY first: "EMPTY - sin marca" style strings are common.
  const LABELS: [(&'static str, Evidence); 6] = [
    ("WEAK_MARK", Evidence::WeakMark),
    ("EMPTY", Evidence::Empty),
    ("STRONG_X", Evidence::StrongX),
    ("CHECK", Evidence::Check),
    ("CIRCLE", Evidence::Circle),
    ("FILL", Evidence::Fill),
  ];

  /// Finds a label anywhere in free text such as "STRONG_X en V".
  fn find_in(text: &str) -> Option<Self> {
    let upper = text.to_ascii_uppercase();
    Self::LABELS.iter().find(|(label, _)| upper.contains(label)).map(|(_, e)| *e)
  }

  fn voids_detection(self) -> bool {
    matches!(self, Evidence::Empty | Evidence::WeakMark)
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
  High,
  Medium,
  #[default]
  Low,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
  pub question_num: u32,
  pub question_type: OmrQuestionType,
  pub evidence_label: Evidence,
  pub detected: Option<String>,
  pub points: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmrAnalysis {
  pub student_name: Option<String>,
  pub rut: Option<String>,
  pub questions_found: usize,
  pub answers: Vec<AnswerRecord>,
  pub confidence: Confidence,
}

#[derive(Clone, Debug, Default)]
pub struct OmrRequest {
  pub images: Vec<VisionImage>,
  pub expected_questions: usize,
  /// Positive, unique and sorted (see `normalize_focus`).
  pub focus: Vec<u32>,
  /// "title | subject | topic" style label for the prompt.
  pub context: String,
  pub question_types: HashMap<u32, OmrQuestionType>,
}

/// Splits `data:<mime>;base64,<payload>`; bare payloads are taken as PNG.
pub fn split_data_url(s: &str) -> (String, String) {
  let s = s.trim();
  if let Some(rest) = s.strip_prefix("data:") {
    if let Some((meta, payload)) = rest.split_once(',') {
      if let Some(mime) = meta.strip_suffix(";base64") {
        let mime = if mime.is_empty() { "image/png" } else { mime };
        return (mime.to_string(), payload.to_string());
      }
    }
  }
  ("image/png".to_string(), s.to_string())
}

/// Builds vision images from raw page inputs, checking the base64 payload.
pub fn prepare_image(page_num: u32, bytes_or_data_url: &str) -> Result<VisionImage, OmrError> {
  let (mime_type, base64) = split_data_url(bytes_or_data_url);
  if base64.is_empty() {
    return Err(OmrError::InvalidImage { page: page_num, reason: "empty payload".into() });
  }
  if let Err(e) = STANDARD.decode(base64.as_bytes()) {
    return Err(OmrError::InvalidImage { page: page_num, reason: e.to_string() });
  }
  Ok(VisionImage { page_num, mime_type, base64 })
}

pub fn normalize_focus(nums: &[i64]) -> Vec<u32> {
  let mut out: Vec<u32> = nums.iter().filter(|n| **n > 0).filter_map(|n| u32::try_from(*n).ok()).collect();
  out.sort_unstable();
  out.dedup();
  out
}

fn letters(value: &str) -> Vec<char> {
  let mut out: Vec<char> = value
    .split(|c: char| c == ',' || c == ';' || c == '/' || c.is_whitespace())
    .map(str::trim)
    .filter_map(|t| {
      let mut chars = t.chars();
      match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
      }
    })
    .filter(|c| ('A'..='D').contains(c))
    .collect();
  out.sort_unstable();
  out.dedup();
  out
}

fn detected_text(v: &Value) -> Option<String> {
  match v {
    Value::String(s) => Some(s.clone()),
    Value::Bool(b) => Some(if *b { "V".into() } else { "F".into() }),
    Value::Array(items) => {
      let parts: Vec<String> = items.iter().filter_map(|i| i.as_str().map(str::to_string)).collect();
      Some(parts.join(","))
    }
    _ => None,
  }
}

pub fn normalize_detected(kind: OmrQuestionType, raw: &str) -> Option<String> {
  let t = raw.trim();
  if t.is_empty() || t.eq_ignore_ascii_case("null") {
    return None;
  }
  match kind {
    OmrQuestionType::Tf => match t.to_lowercase().as_str() {
      "v" | "t" | "true" | "verdadero" => Some("V".into()),
      "f" | "false" | "falso" => Some("F".into()),
      _ => None,
    },
    OmrQuestionType::Mc => match letters(t).as_slice() {
      [one] => Some(one.to_string()),
      _ => None,
    },
    OmrQuestionType::Ms => {
      let ls = letters(t);
      if ls.is_empty() {
        None
      } else {
        Some(ls.iter().map(char::to_string).collect::<Vec<_>>().join(","))
      }
    }
  }
}

fn infer_type(detected: Option<&str>) -> OmrQuestionType {
  match detected.map(|d| d.trim().to_ascii_uppercase()) {
    Some(d) if d == "V" || d == "F" => OmrQuestionType::Tf,
    Some(d) if d.contains(',') => OmrQuestionType::Ms,
    _ => OmrQuestionType::Mc,
  }
}

fn field<'a>(obj: &'a serde_json::Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
  names.iter().find_map(|n| obj.get(*n)).filter(|v| !v.is_null())
}

fn clean_str(v: Option<&Value>) -> Option<String> {
  v.and_then(Value::as_str)
    .map(str::trim)
    .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("null"))
    .map(str::to_string)
}

fn parse_record(raw: &Value, types: &HashMap<u32, OmrQuestionType>) -> Option<AnswerRecord> {
  let obj = raw.as_object()?;
  let num = field(obj, &["questionNum", "q", "question", "num"]).and_then(|v| match v {
    Value::Number(n) => n.as_u64(),
    Value::String(s) => s.trim().parse::<u64>().ok(),
    _ => None,
  })?;
  let question_num = u32::try_from(num).ok().filter(|n| *n > 0)?;

  let raw_detected = field(obj, &["detected", "val", "value", "answer"]).and_then(detected_text);
  let question_type = field(obj, &["questionType", "type"])
    .and_then(Value::as_str)
    .and_then(OmrQuestionType::from_tag)
    .or_else(|| types.get(&question_num).copied())
    .unwrap_or_else(|| infer_type(raw_detected.as_deref()));

  let mut detected = raw_detected.as_deref().and_then(|d| normalize_detected(question_type, d));
  let evidence_label = field(obj, &["evidenceLabel", "evidence"])
    .and_then(Value::as_str)
    .and_then(Evidence::find_in)
    .unwrap_or(if detected.is_some() { Evidence::StrongX } else { Evidence::Empty });
  if evidence_label.voids_detection() {
    detected = None;
  }
  let points = field(obj, &["points"]).and_then(Value::as_f64);

  Some(AnswerRecord { question_num, question_type, evidence_label, detected, points })
}

fn empty_record(question_num: u32, types: &HashMap<u32, OmrQuestionType>) -> AnswerRecord {
  AnswerRecord {
    question_num,
    question_type: types.get(&question_num).copied().unwrap_or(OmrQuestionType::Mc),
    evidence_label: Evidence::Empty,
    detected: None,
    points: None,
  }
}

fn parse_json_loose(raw: &str) -> Result<Value, OmrError> {
  let clean = strip_code_fences(raw);
  if let Ok(v) = serde_json::from_str::<Value>(&clean) {
    return Ok(v);
  }
  outermost_json_object(&clean)
    .and_then(|slice| serde_json::from_str::<Value>(slice).ok())
    .ok_or_else(|| OmrError::UnparsableResponse(trunc_for_log(raw, 200)))
}

/// Parses the raw vision text against `req` (types and focus numbers).
pub fn parse_analysis(raw: &str, req: &OmrRequest) -> Result<OmrAnalysis, OmrError> {
  let root = parse_json_loose(raw)?;
  let obj = root.as_object().ok_or_else(|| OmrError::UnparsableResponse("top level is not an object".into()))?;

  let mut raw_answers: Vec<&Value> = Vec::new();
  if let Some(Value::Array(items)) = obj.get("answers") {
    raw_answers.extend(items.iter());
  }
  let pages: &[Value] = obj.get("pages").and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[]);
  for page in pages {
    if let Some(items) = page.get("answers").and_then(Value::as_array) {
      raw_answers.extend(items.iter());
    }
  }

  let page_student = |key: &str| pages.iter().find_map(|p| clean_str(p.get("student").and_then(|s| s.get(key))));
  let student_name = clean_str(field(obj, &["studentName", "name"])).or_else(|| page_student("name"));
  let rut = clean_str(field(obj, &["rut", "studentRut"])).or_else(|| page_student("rut"));

  let mut by_num: BTreeMap<u32, AnswerRecord> = BTreeMap::new();
  for rec in raw_answers.into_iter().filter_map(|v| parse_record(v, &req.question_types)) {
    by_num.entry(rec.question_num).or_insert(rec);
  }

  let answers: Vec<AnswerRecord> = if req.focus.is_empty() {
    by_num.into_values().collect()
  } else {
    req.focus
      .iter()
      .map(|n| by_num.remove(n).unwrap_or_else(|| empty_record(*n, &req.question_types)))
      .collect()
  };

  let questions_found = field(obj, &["questionsFound", "questionsFoundInDocument"])
    .and_then(Value::as_u64)
    .map(|n| n as usize)
    .unwrap_or(answers.len());
  let confidence = match obj.get("confidence").and_then(Value::as_str).map(|s| s.trim().to_ascii_lowercase()) {
    Some(c) if c == "high" => Confidence::High,
    Some(c) if c == "medium" => Confidence::Medium,
    _ => Confidence::Low,
  };

  Ok(OmrAnalysis { student_name, rut, questions_found, answers, confidence })
}

/// Prompt, call and parse. `None` vision means the capability is unconfigured.
#[instrument(level = "info", skip_all, fields(pages = req.images.len(), expected = req.expected_questions, focus = req.focus.len()))]
pub async fn analyze(
  vision: Option<&dyn VisionExtraction>,
  prompts: &Prompts,
  req: &OmrRequest,
) -> Result<OmrAnalysis, OmrError> {
  if req.images.is_empty() {
    return Err(OmrError::NoImages);
  }
  let Some(vision) = vision else {
    warn!(target: "omr", "Vision capability not configured; caller should grade manually");
    return Err(OmrError::VisionUnavailable);
  };

  let prompt = prompts.render_omr(&req.context, req.expected_questions, &req.focus);
  let raw = vision.analyze(&prompt, &req.images).await.map_err(|e| {
    warn!(target: "omr", error = %e, model = %vision.model(), "Vision call failed");
    OmrError::Upstream(e)
  })?;

  match parse_analysis(&raw, req) {
    Ok(analysis) => {
      info!(
        target: "omr",
        answers = analysis.answers.len(),
        questions_found = analysis.questions_found,
        confidence = ?analysis.confidence,
        has_student = analysis.student_name.is_some(),
        "OMR analysis parsed"
      );
      Ok(analysis)
    }
    Err(e) => {
      warn!(target: "omr", error = %e, raw = %trunc_for_log(&raw, 500), "Unparsable vision response");
      Err(e)
    }
  }
}
