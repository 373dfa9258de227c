//! Evaluation assembly: classify, ask the AI (if any), splice, title.
//!
//! `generate` only fails on an empty topic. Every AI problem (unconfigured,
//! transport, timeout, unparsable JSON, wrong item count) is logged and the
//! evaluation is completed from the local template bank instead.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::ai::TextCompletion;
use crate::classify::{classify, ClassificationResult};
use crate::config::GenerationSettings;
use crate::domain::{Evaluation, Language, QuestionCounts, QuestionKind};
use crate::error::{AiError, EvaluationError};
use crate::prompts::{GenerationPromptInput, Prompts};
use crate::seeds::hard_fallback_evaluation;
use crate::splice::splice;
use crate::synth::Synthesizer;
use crate::util::{outermost_json_object, strip_code_fences, trunc_for_log};

#[derive(Clone, Debug, Default)]
pub struct GenerationRequest {
  pub topic: String,
  pub subject: String,
  pub course: String,
  pub language: Language,
  pub counts: QuestionCounts,
  pub pdf_content: Option<String>,
}

/// Where the questions of an evaluation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
  Ai,
  Mixed,
  Local,
  Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedEvaluation {
  pub evaluation: Evaluation,
  pub classification: ClassificationResult,
  pub source: Source,
}

fn new_run_id() -> String {
  Uuid::new_v4().simple().to_string()[..8].to_string()
}

fn unix_millis() -> i64 {
  SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as i64).unwrap_or_default()
}

/// Pulls the raw `questions` list out of a completion. Accepts fenced JSON,
/// leading/trailing prose around one object, or a bare array.
pub fn parse_ai_questions(raw: &str) -> Result<Vec<Value>, AiError> {
  let clean = strip_code_fences(raw);
  let root: Value = match serde_json::from_str(&clean) {
    Ok(v) => v,
    Err(first) => outermost_json_object(&clean)
      .and_then(|slice| serde_json::from_str(slice).ok())
      .ok_or_else(|| AiError::UpstreamParse { reason: first.to_string(), raw: raw.to_string() })?,
  };
  match root {
    Value::Array(items) => Ok(items),
    Value::Object(mut obj) => match obj.remove("questions") {
      Some(Value::Array(items)) => Ok(items),
      _ => Err(AiError::UpstreamParse { reason: "missing `questions` array".into(), raw: raw.to_string() }),
    },
    _ => Err(AiError::UpstreamParse { reason: "top level is neither object nor array".into(), raw: raw.to_string() }),
  }
}

async fn fetch_ai_items(
  ai: &dyn TextCompletion,
  prompt: &str,
  settings: &GenerationSettings,
  expected: usize,
) -> Result<Vec<Value>, AiError> {
  let secs = settings.ai_timeout_secs;
  let raw = tokio::time::timeout(Duration::from_secs(secs), ai.complete(prompt, settings.completion_options()))
    .await
    .map_err(|_| AiError::Timeout(secs))??;
  let items = parse_ai_questions(&raw)?;
  if settings.strict_ai_count && items.len() != expected {
    return Err(AiError::UpstreamParse {
      reason: format!("expected {} questions, got {}", expected, items.len()),
      raw,
    });
  }
  Ok(items)
}

#[instrument(level = "info", skip(req, settings, prompts, ai), fields(topic = %req.topic, course = %req.course, language = req.language.as_str(), total = req.counts.total(), ai = ai.is_some()))]
pub async fn generate(
  req: &GenerationRequest,
  settings: &GenerationSettings,
  prompts: &Prompts,
  ai: Option<&dyn TextCompletion>,
) -> Result<GeneratedEvaluation, EvaluationError> {
  let topic = req.topic.trim();
  if topic.is_empty() {
    return Err(EvaluationError::EmptyTopic);
  }
  let classification = classify(topic, &req.subject, &req.course);
  let run = new_run_id();

  if req.counts.total() == 0 {
    warn!(target: "evaluation", %run, "All requested counts are zero; serving fallback evaluation");
    return Ok(GeneratedEvaluation {
      evaluation: hard_fallback_evaluation(topic, &req.subject, req.language, &run),
      classification,
      source: Source::Fallback,
    });
  }

  let expected_ai = req.counts.ai_total();
  let ai_items = match ai {
    Some(ai) if expected_ai > 0 => {
      let prompt = prompts.render_generation(
        classification.domain,
        req.language,
        &GenerationPromptInput {
          topic,
          subject: &req.subject,
          course: &req.course,
          counts: req.counts,
          pdf_content: req.pdf_content.as_deref(),
          timestamp: unix_millis(),
          seed: rand::thread_rng().gen_range(0..1_000_000),
        },
      );
      match fetch_ai_items(ai, &prompt, settings, expected_ai).await {
        Ok(items) => {
          info!(target: "evaluation", model = %ai.model(), items = items.len(), "AI questions received");
          items
        }
        Err(AiError::UpstreamParse { reason, raw }) => {
          warn!(target: "evaluation", %reason, raw = %trunc_for_log(&raw, 500), "Discarding AI response; synthesizing locally");
          Vec::new()
        }
        Err(e) => {
          warn!(target: "evaluation", error = %e, model = %ai.model(), "AI generation failed; synthesizing locally");
          Vec::new()
        }
      }
    }
    _ => Vec::new(),
  };

  let synth = Synthesizer::new(classification, topic, req.language, run.clone());
  let outcome = splice(&ai_items, req.counts, &synth, &run);

  let requested = req.counts.total();
  if outcome.questions.len() != requested {
    error!(target: "evaluation", requested, produced = outcome.questions.len(), "Question count mismatch after splicing");
  }
  for kind in QuestionKind::ALL {
    let produced = outcome.questions.iter().filter(|q| q.kind() == kind).count();
    if produced != req.counts.get(kind) {
      error!(target: "evaluation", kind = ?kind, requested = req.counts.get(kind), produced, "Per-type count mismatch");
    }
  }

  let source = match (outcome.from_ai, outcome.synthesized) {
    (a, 0) if a > 0 => Source::Ai,
    (a, _) if a > 0 => Source::Mixed,
    _ => Source::Local,
  };
  info!(
    target: "evaluation",
    %run,
    domain = ?classification.domain,
    level = classification.level.get(),
    from_ai = outcome.from_ai,
    synthesized = outcome.synthesized,
    ?source,
    "Evaluation assembled"
  );

  Ok(GeneratedEvaluation {
    evaluation: Evaluation {
      evaluation_title: format!("{} - {}", req.language.title_prefix(), topic.to_uppercase()),
      questions: outcome.questions,
    },
    classification,
    source,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;
  use std::sync::Mutex;

  use async_trait::async_trait;
  use serde_json::json;

  use crate::ai::CompletionOptions;
  use crate::classify::{Domain, Level};
  use crate::dedup::signature;
  use crate::domain::Question;

  struct FakeText {
    reply: Result<String, AiError>,
    delay: Option<Duration>,
    last_prompt: Mutex<Option<String>>,
  }

  impl FakeText {
    fn replying(reply: Result<String, AiError>) -> Self {
      Self { reply, delay: None, last_prompt: Mutex::new(None) }
    }
  }

  #[async_trait]
  impl TextCompletion for FakeText {
    async fn complete(&self, prompt: &str, _opts: CompletionOptions) -> Result<String, AiError> {
      *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
      if let Some(d) = self.delay {
        tokio::time::sleep(d).await;
      }
      self.reply.clone()
    }
    fn model(&self) -> &str {
      "fake-text"
    }
  }

  fn request(topic: &str, subject: &str, counts: QuestionCounts) -> GenerationRequest {
    GenerationRequest {
      topic: topic.into(),
      subject: subject.into(),
      course: "5to Básico".into(),
      language: Language::Es,
      counts,
      pdf_content: None,
    }
  }

  fn respiratory_request() -> GenerationRequest {
    request("sistema respiratorio", "Ciencias Naturales", QuestionCounts::new(5, 5, 5, 0))
  }

  async fn run(req: &GenerationRequest, ai: Option<&dyn TextCompletion>) -> GeneratedEvaluation {
    generate(req, &GenerationSettings::default(), &Prompts::default(), ai).await.unwrap()
  }

  fn assert_invariants(ev: &Evaluation, counts: QuestionCounts) {
    assert_eq!(ev.questions.len(), counts.total());
    for kind in QuestionKind::ALL {
      assert_eq!(ev.questions.iter().filter(|q| q.kind() == kind).count(), counts.get(kind), "{:?}", kind);
    }
    let sigs: HashSet<_> = ev.questions.iter().map(signature).collect();
    assert_eq!(sigs.len(), ev.questions.len(), "duplicate signature in {:?}", ev.evaluation_title);
    for q in &ev.questions {
      assert!(q.check_structure().is_ok(), "{:?}", q);
      match q {
        Question::MultipleChoice(mc) => {
          let distinct: HashSet<_> = mc.options.iter().collect();
          assert_eq!(distinct.len(), 4);
          assert!(mc.correct_answer_index <= 3);
        }
        Question::MultipleSelection(ms) => {
          assert!((2..=3).contains(&ms.correct_answer_indices.len()));
          assert!(ms.correct_answer_indices.iter().all(|i| *i <= 3));
        }
        _ => {}
      }
    }
  }

  fn ai_payload(tf: usize, mc: usize, ms: usize) -> String {
    let mut qs = Vec::new();
    for i in 0..tf {
      qs.push(json!({"type": "TRUE_FALSE", "questionText": format!("El aire entra por la nariz (IA {})", i), "correctAnswer": true, "explanation": "Sí."}));
    }
    for i in 0..mc {
      qs.push(json!({"type": "MULTIPLE_CHOICE", "questionText": format!("¿Qué órgano intercambia gases? (IA {})", i),
        "options": ["Pulmón", "Estómago", "Hígado", "Riñón"], "correctAnswerIndex": 0, "explanation": "El pulmón."}));
    }
    for i in 0..ms {
      qs.push(json!({"type": "MULTIPLE_SELECTION", "questionText": format!("¿Cuáles son vías respiratorias? (IA {})", i),
        "options": ["Tráquea", "Bronquios", "Esófago", "Laringe"], "correctAnswerIndices": [0, 1, 3], "explanation": "Vías aéreas."}));
    }
    json!({"evaluationTitle": "Ignorado", "questions": qs}).to_string()
  }

  #[tokio::test]
  async fn counts_and_structure_hold_for_every_small_grid_without_ai() {
    let subjects = [
      ("fracciones", "Matemáticas"),
      ("sistema respiratorio", "Ciencias Naturales"),
      ("revolución francesa", "Historia"),
      ("sustantivos", "Lenguaje"),
      ("reciclaje", "Tecnología"),
    ];
    for (topic, subject) in subjects {
      for tf in 0..4 {
        for mc in 0..4 {
          for ms in 0..4 {
            let counts = QuestionCounts::new(tf, mc, ms, 0);
            if counts.total() == 0 {
              continue;
            }
            let out = run(&request(topic, subject, counts), None).await;
            assert_invariants(&out.evaluation, counts);
            assert_eq!(out.source, Source::Local);
          }
        }
      }
    }
  }

  #[tokio::test]
  async fn large_requests_stay_unique_even_past_the_pool_size() {
    let counts = QuestionCounts::new(30, 25, 15, 6);
    let out = run(&request("revolución francesa", "Historia", counts), None).await;
    assert_invariants(&out.evaluation, counts);
  }

  #[tokio::test]
  async fn always_failing_ai_still_yields_a_full_local_evaluation() {
    let fake = FakeText::replying(Err(AiError::Http { status: 503, message: "down".into() }));
    let out = run(&respiratory_request(), Some(&fake)).await;
    assert_invariants(&out.evaluation, QuestionCounts::new(5, 5, 5, 0));
    assert_eq!(out.source, Source::Local);
  }

  #[tokio::test]
  async fn respiratory_topic_without_ai_is_fifteen_science_questions() {
    let out = run(&respiratory_request(), None).await;
    assert_eq!(out.evaluation.questions.len(), 15);
    assert_eq!(out.evaluation.evaluation_title, "EVALUACIÓN - SISTEMA RESPIRATORIO");
    assert_eq!(out.classification, ClassificationResult { domain: Domain::Science, level: Level::new(3) });
    assert_invariants(&out.evaluation, QuestionCounts::new(5, 5, 5, 0));
  }

  #[tokio::test]
  async fn english_request_gets_english_local_content() {
    let counts = QuestionCounts::new(5, 5, 5, 3);
    let req = GenerationRequest { language: Language::En, ..request("the cell", "Science", counts) };
    let out = run(&req, None).await;
    assert_eq!(out.classification.domain, Domain::Science);
    assert_eq!(out.evaluation.evaluation_title, "EVALUATION - THE CELL");
    assert_invariants(&out.evaluation, counts);
    let body = serde_json::to_string(&out.evaluation.questions).unwrap();
    for marker in ["¿", "Selecciona", "El estudio de", "RESPUESTA", "RÚBRICA", "variante", "La respuesta correcta"] {
      assert!(!body.contains(marker), "found {:?} in {}", marker, body);
    }
    assert!(body.contains("EXPECTED ANSWER:"));
  }

  #[tokio::test]
  async fn fractions_produce_numeric_true_false_and_multiple_choice() {
    let counts = QuestionCounts::new(3, 3, 0, 0);
    let out = run(&request("fracciones", "Matemáticas", counts), None).await;
    assert_eq!(out.classification.domain, Domain::MathPhysics);
    assert_invariants(&out.evaluation, counts);
    for q in &out.evaluation.questions {
      assert!(q.text().chars().any(|c| c.is_ascii_digit()), "no digits in {:?}", q.text());
    }
  }

  #[tokio::test]
  async fn malformed_ai_json_falls_back_to_local_synthesis() {
    let fake = FakeText::replying(Ok("```json\n{\"questions\": [ {\"type\": \"TRUE_FALSE\", \n```".into()));
    let out = run(&respiratory_request(), Some(&fake)).await;
    assert_invariants(&out.evaluation, QuestionCounts::new(5, 5, 5, 0));
    assert_eq!(out.source, Source::Local);
  }

  #[tokio::test]
  async fn exact_ai_response_is_used_as_is() {
    let fake = FakeText::replying(Ok(format!("```json\n{}\n```", ai_payload(5, 5, 5))));
    let out = run(&respiratory_request(), Some(&fake)).await;
    assert_eq!(out.source, Source::Ai);
    assert_invariants(&out.evaluation, QuestionCounts::new(5, 5, 5, 0));
    assert_eq!(out.evaluation.evaluation_title, "EVALUACIÓN - SISTEMA RESPIRATORIO");
    assert!(out.evaluation.questions[0].text().contains("(IA 0)"));

    let prompt = fake.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("sistema respiratorio"));
  }

  #[tokio::test]
  async fn strict_count_discards_overproduction_but_lenient_mode_splices_it() {
    let counts = QuestionCounts::new(5, 5, 5, 0);
    let fake = FakeText::replying(Ok(ai_payload(8, 0, 0)));

    let strict = run(&respiratory_request(), Some(&fake)).await;
    assert_eq!(strict.source, Source::Local);
    assert_invariants(&strict.evaluation, counts);

    let lenient = GenerationSettings { strict_ai_count: false, ..Default::default() };
    let out = generate(&respiratory_request(), &lenient, &Prompts::default(), Some(&fake)).await.unwrap();
    assert_eq!(out.source, Source::Mixed);
    assert_invariants(&out.evaluation, counts);
    let tf_texts: Vec<&str> = out.evaluation.questions.iter().take(5).map(|q| q.text()).collect();
    for (i, t) in tf_texts.iter().enumerate() {
      assert!(t.ends_with(&format!("(IA {})", i)), "{}", t);
    }
  }

  #[tokio::test]
  async fn slow_ai_times_out_into_local_synthesis() {
    let fake = FakeText { reply: Ok(ai_payload(5, 5, 5)), delay: Some(Duration::from_millis(50)), last_prompt: Mutex::new(None) };
    let settings = GenerationSettings { ai_timeout_secs: 0, ..Default::default() };
    let out = generate(&respiratory_request(), &settings, &Prompts::default(), Some(&fake)).await.unwrap();
    assert_eq!(out.source, Source::Local);
    assert_invariants(&out.evaluation, QuestionCounts::new(5, 5, 5, 0));
  }

  #[tokio::test]
  async fn free_response_is_local_and_last_with_positional_ids() {
    let counts = QuestionCounts::new(1, 1, 1, 2);
    let out = run(&request("fracciones", "Matemáticas", counts), None).await;
    assert_invariants(&out.evaluation, counts);
    let qs = &out.evaluation.questions;
    assert_eq!(qs[3].kind(), QuestionKind::FreeResponse);
    assert_eq!(qs[4].kind(), QuestionKind::FreeResponse);
    let run_id = qs[0].id().split('_').nth(1).unwrap().to_string();
    assert_eq!(run_id.len(), 8);
    assert_eq!(qs[0].id(), format!("tf_{}_1", run_id));
    assert_eq!(qs[4].id(), format!("des_{}_5", run_id));
  }

  #[tokio::test]
  async fn empty_topic_is_the_only_error() {
    let err = generate(&request("   ", "Historia", QuestionCounts::new(1, 0, 0, 0)), &GenerationSettings::default(), &Prompts::default(), None)
      .await
      .unwrap_err();
    assert_eq!(err, EvaluationError::EmptyTopic);
  }

  #[tokio::test]
  async fn zero_counts_yield_the_single_question_fallback() {
    let out = run(&request("célula", "Ciencias", QuestionCounts::default()), None).await;
    assert_eq!(out.source, Source::Fallback);
    assert_eq!(out.evaluation.questions.len(), 1);
  }

  #[test]
  fn ai_questions_are_found_through_fences_prose_and_bare_arrays() {
    assert_eq!(parse_ai_questions("```json\n{\"questions\": [{\"a\": 1}]}\n```").unwrap().len(), 1);
    assert_eq!(parse_ai_questions("Claro: {\"questions\": [{}, {}]} ¡Éxito!").unwrap().len(), 2);
    assert_eq!(parse_ai_questions("[{}, {}, {}]").unwrap().len(), 3);
    assert!(matches!(parse_ai_questions("{\"title\": \"x\"}"), Err(AiError::UpstreamParse { .. })));
    assert!(matches!(parse_ai_questions("nada"), Err(AiError::UpstreamParse { .. })));
  }
}
