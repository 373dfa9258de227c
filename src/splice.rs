//! Merging AI-authored questions with local synthesis to hit exact per-type counts.

use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::dedup::{synthesize_unique, UsedSignatures};
use crate::domain::{Question, QuestionCounts, QuestionKind};
use crate::synth::Synthesizer;

/// Maps one raw AI item onto a typed question. `None` for unknown types or
/// items that fail the structural checks.
pub fn parse_ai_item(raw: &Value) -> Option<Question> {
  let obj = raw.as_object()?;
  let kind = obj.get("type").and_then(Value::as_str).and_then(QuestionKind::from_tag)?;

  let mut item: Map<String, Value> = obj.clone();
  item.insert("type".into(), Value::String(canonical_tag(kind).into()));
  // Final ids are assigned positionally; whatever the model sent is discarded.
  item.insert("id".into(), Value::String(String::new()));
  rename_if_absent(&mut item, "text", "questionText");
  rename_if_absent(&mut item, "choices", "options");
  if kind == QuestionKind::FreeResponse {
    rename_if_absent(&mut item, "questionText", "prompt");
  }
  if let Some(Value::Array(indices)) = item.get_mut("correctAnswerIndices") {
    let mut sorted: Vec<u64> = indices.iter().filter_map(Value::as_u64).collect();
    sorted.sort_unstable();
    sorted.dedup();
    *indices = sorted.into_iter().map(Value::from).collect();
  }

  let q: Question = match serde_json::from_value(Value::Object(item)) {
    Ok(q) => q,
    Err(e) => {
      debug!(target: "evaluation", error = %e, kind = ?kind, "Dropping AI item with unexpected shape");
      return None;
    }
  };
  match q.check_structure() {
    Ok(()) => Some(q),
    Err(reason) => {
      debug!(target: "evaluation", %reason, kind = ?kind, "Dropping structurally invalid AI item");
      None
    }
  }
}

fn canonical_tag(kind: QuestionKind) -> &'static str {
  match kind {
    QuestionKind::TrueFalse => "TRUE_FALSE",
    QuestionKind::MultipleChoice => "MULTIPLE_CHOICE",
    QuestionKind::MultipleSelection => "MULTIPLE_SELECTION",
    QuestionKind::FreeResponse => "FREE_RESPONSE",
  }
}

fn rename_if_absent(item: &mut Map<String, Value>, from: &str, to: &str) {
  if !item.contains_key(to) {
    if let Some(v) = item.remove(from) {
      item.insert(to.into(), v);
    }
  }
}

#[derive(Debug)]
pub struct SpliceOutcome {
  pub questions: Vec<Question>,
  pub from_ai: usize,
  pub synthesized: usize,
}

/// Keeps the first `counts[kind]` valid, non-duplicate AI items per type (in AI
/// order), fills every shortfall locally, and emits TF, MC, MS, FR in that
/// order with final ids `<kind>_<run>_<position>`.
#[instrument(level = "info", skip(ai_items, synth), fields(ai_items = ai_items.len(), requested = counts.total()))]
pub fn splice(ai_items: &[Value], counts: QuestionCounts, synth: &Synthesizer, run: &str) -> SpliceOutcome {
  let mut used = UsedSignatures::new();
  let mut buckets: [Vec<Question>; 4] = Default::default();

  for raw in ai_items {
    let Some(q) = parse_ai_item(raw) else { continue };
    let slot = kind_slot(q.kind());
    if buckets[slot].len() >= counts.get(q.kind()) {
      continue;
    }
    if !used.insert(&q) {
      debug!(target: "evaluation", text = %q.text(), "Dropping duplicate AI item");
      continue;
    }
    buckets[slot].push(q);
  }

  let from_ai: usize = buckets.iter().map(Vec::len).sum();
  let mut synthesized = 0;
  for kind in QuestionKind::ALL {
    let bucket = &mut buckets[kind_slot(kind)];
    let shortfall = counts.get(kind).saturating_sub(bucket.len());
    for i in 0..shortfall {
      bucket.push(synthesize_unique(synth, kind, i, &mut used));
    }
    synthesized += shortfall;
  }

  let mut questions: Vec<Question> = buckets.into_iter().flatten().collect();
  for (pos, q) in questions.iter_mut().enumerate() {
    let id = format!("{}_{}_{}", q.kind().short(), run, pos + 1);
    q.set_id(id);
  }

  info!(target: "evaluation", from_ai, synthesized, total = questions.len(), "Spliced evaluation questions");
  SpliceOutcome { questions, from_ai, synthesized }
}

fn kind_slot(kind: QuestionKind) -> usize {
  match kind {
    QuestionKind::TrueFalse => 0,
    QuestionKind::MultipleChoice => 1,
    QuestionKind::MultipleSelection => 2,
    QuestionKind::FreeResponse => 3,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::classify::{ClassificationResult, Domain, Level};
  use crate::domain::Language;
  use serde_json::json;

  fn synth() -> Synthesizer {
    Synthesizer::new(ClassificationResult { domain: Domain::Science, level: Level::new(3) }, "sistema respiratorio", Language::Es, "t")
  }

  fn ai_tf(n: usize) -> Vec<Value> {
    (0..n)
      .map(|i| json!({"type": "TRUE_FALSE", "questionText": format!("Afirmación IA número {}", i + 1), "correctAnswer": i % 2 == 0}))
      .collect()
  }

  #[test]
  fn over_production_keeps_first_five_in_ai_order() {
    let out = splice(&ai_tf(8), QuestionCounts::new(5, 0, 0, 0), &synth(), "run1");
    assert_eq!(out.questions.len(), 5);
    assert_eq!(out.from_ai, 5);
    assert_eq!(out.synthesized, 0);
    for (i, q) in out.questions.iter().enumerate() {
      assert_eq!(q.text(), format!("Afirmación IA número {}", i + 1));
    }
  }

  #[test]
  fn shortfall_is_filled_locally_without_duplicating_ai_items() {
    let counts = QuestionCounts::new(5, 2, 1, 0);
    let out = splice(&ai_tf(2), counts, &synth(), "run1");
    assert_eq!(out.questions.len(), 8);
    assert_eq!(out.from_ai, 2);
    assert_eq!(out.synthesized, 6);
    let kinds: Vec<QuestionKind> = out.questions.iter().map(Question::kind).collect();
    assert_eq!(kinds[..5], [QuestionKind::TrueFalse; 5]);
    assert_eq!(kinds[5..7], [QuestionKind::MultipleChoice; 2]);
    assert_eq!(kinds[7], QuestionKind::MultipleSelection);
  }

  #[test]
  fn output_is_ordered_by_type_with_positional_ids() {
    let ai = vec![
      json!({"type": "ms", "text": "¿Cuáles son gases?", "choices": ["Oxígeno", "Agua", "Nitrógeno", "Arena"], "correctAnswerIndices": [2, 0]}),
      json!({"type": "mc", "questionText": "¿Cuál es un gas?", "options": ["Oxígeno", "Agua", "Sal", "Arena"], "correctAnswerIndex": 0}),
      json!({"type": "tf", "questionText": "El aire es una mezcla.", "correctAnswer": true}),
    ];
    let out = splice(&ai, QuestionCounts::new(1, 1, 1, 1), &synth(), "abcd1234");
    let ids: Vec<&str> = out.questions.iter().map(Question::id).collect();
    assert_eq!(ids, ["tf_abcd1234_1", "mc_abcd1234_2", "ms_abcd1234_3", "des_abcd1234_4"]);
    match &out.questions[2] {
      Question::MultipleSelection(q) => assert_eq!(q.correct_answer_indices, vec![0, 2]),
      other => panic!("unexpected {:?}", other),
    }
    assert_eq!(out.from_ai, 3);
  }

  #[test]
  fn invalid_and_unknown_items_are_dropped() {
    let ai = vec![
      json!({"type": "ESSAY", "questionText": "x"}),
      json!({"questionText": "sin tipo", "correctAnswer": true}),
      json!({"type": "MULTIPLE_CHOICE", "questionText": "tres opciones", "options": ["a", "b", "c"], "correctAnswerIndex": 0}),
      json!({"type": "MULTIPLE_CHOICE", "questionText": "repetidas", "options": ["a", "a", "b", "c"], "correctAnswerIndex": 0}),
      json!({"type": "MULTIPLE_CHOICE", "questionText": "índice", "options": ["a", "b", "c", "d"], "correctAnswerIndex": 7}),
      json!({"type": "MULTIPLE_SELECTION", "questionText": "una sola", "options": ["a", "b", "c", "d"], "correctAnswerIndices": [1]}),
      json!("not an object"),
    ];
    let out = splice(&ai, QuestionCounts::new(0, 2, 1, 0), &synth(), "r");
    assert_eq!(out.from_ai, 0);
    assert_eq!(out.synthesized, 3);
  }

  #[test]
  fn numeric_and_null_ids_are_replaced() {
    let ai = vec![
      json!({"id": 1, "type": "TRUE_FALSE", "questionText": "El aire es una mezcla.", "correctAnswer": true}),
      json!({"id": null, "type": "MULTIPLE_CHOICE", "questionText": "¿Cuál es un gas?", "options": ["Oxígeno", "Agua", "Sal", "Arena"], "correctAnswerIndex": 0}),
      json!({"id": {"nested": true}, "type": "TRUE_FALSE", "questionText": "El agua hierve a 100 °C.", "correctAnswer": true}),
    ];
    assert!(ai.iter().all(|raw| parse_ai_item(raw).is_some()));
    let out = splice(&ai, QuestionCounts::new(2, 1, 0, 0), &synth(), "r");
    assert_eq!(out.from_ai, 3);
    let ids: Vec<&str> = out.questions.iter().map(Question::id).collect();
    assert_eq!(ids, ["tf_r_1", "tf_r_2", "mc_r_3"]);
  }

  #[test]
  fn ai_duplicates_of_each_other_are_dropped() {
    let ai = vec![
      json!({"type": "TRUE_FALSE", "questionText": "El aire es una mezcla.", "correctAnswer": true}),
      json!({"type": "TRUE_FALSE", "questionText": "  EL AIRE ES UNA MEZCLA. ", "correctAnswer": true}),
    ];
    let out = splice(&ai, QuestionCounts::new(2, 0, 0, 0), &synth(), "r");
    assert_eq!(out.from_ai, 1);
    assert_eq!(out.synthesized, 1);
    assert_ne!(crate::util::normalize(out.questions[0].text()), crate::util::normalize(out.questions[1].text()));
  }

  #[test]
  fn empty_ai_partition_is_fully_local() {
    let out = splice(&[], QuestionCounts::new(5, 5, 5, 2), &synth(), "r");
    assert_eq!(out.questions.len(), 17);
    assert_eq!(out.from_ai, 0);
    for q in &out.questions {
      q.check_structure().unwrap();
    }
  }
}
